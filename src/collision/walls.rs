#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::contact::{Wall, WallHits};
use crate::core::{body::Body, types::Bounds};

/// Keeps bodies inside the arena rectangle.
///
/// Each wall is tested on its own: a penetrating circle is moved back until it
/// is tangent to that wall and its velocity along the wall normal is reflected
/// and scaled by the restitution. A body in a corner is corrected against both
/// walls in the same pass.
#[derive(Debug, Clone)]
pub struct WallResolver {
    pub bounds: Bounds,
    pub restitution: f32,
    #[cfg_attr(not(feature = "parallel"), allow(dead_code))]
    parallel: bool,
}

impl WallResolver {
    pub fn new(bounds: Bounds, restitution: f32) -> Self {
        Self {
            bounds,
            restitution,
            parallel: false,
        }
    }

    /// Has no effect unless the `parallel` feature is compiled in.
    pub fn set_parallel(&mut self, enabled: bool) {
        self.parallel = enabled;
    }

    pub fn resolve_body(&self, body: &mut Body) -> WallHits {
        let radius = body.radius();
        let Bounds { width, height } = self.bounds;
        let mut hits = WallHits::default();

        if body.position.y + radius > height {
            body.position.y = height - radius;
            body.velocity.y *= -self.restitution;
            hits.mark(Wall::Bottom);
        }

        if body.position.y - radius < 0.0 {
            body.position.y = radius;
            body.velocity.y *= -self.restitution;
            hits.mark(Wall::Top);
        }

        if body.position.x + radius > width {
            body.position.x = width - radius;
            body.velocity.x *= -self.restitution;
            hits.mark(Wall::Right);
        }

        if body.position.x - radius < 0.0 {
            body.position.x = radius;
            body.velocity.x *= -self.restitution;
            hits.mark(Wall::Left);
        }

        hits
    }

    /// Runs [`Self::resolve_body`] over every body and returns the number of wall corrections.
    pub fn resolve(&self, bodies: &mut [Body]) -> usize {
        #[cfg(feature = "parallel")]
        if self.parallel {
            return bodies
                .par_iter_mut()
                .map(|body| self.resolve_body(body).count())
                .sum();
        }

        bodies
            .iter_mut()
            .map(|body| self.resolve_body(body).count())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{core::types::Color, utils::allocator::BodyHandle};
    use glam::Vec2;

    fn body(position: Vec2, velocity: Vec2) -> Body {
        let mut body = Body::new(BodyHandle::from_raw(0), position, 20.0, Color::GREEN);
        body.velocity = velocity;
        body
    }

    fn resolver() -> WallResolver {
        WallResolver::new(Bounds::new(800.0, 600.0), 0.5)
    }

    #[test]
    fn floor_contact_clamps_and_reflects() {
        let mut b = body(Vec2::new(400.0, 590.0), Vec2::new(3.0, 100.0));
        let hits = resolver().resolve_body(&mut b);

        assert!(hits.bottom);
        assert_eq!(hits.count(), 1);
        assert_eq!(b.position, Vec2::new(400.0, 580.0));
        assert_eq!(b.velocity, Vec2::new(3.0, -50.0));
    }

    #[test]
    fn corner_contact_corrects_both_axes() {
        let mut b = body(Vec2::new(-5.0, -5.0), Vec2::new(-40.0, -60.0));
        let hits = resolver().resolve_body(&mut b);

        assert!(hits.top && hits.left);
        assert_eq!(b.position, Vec2::new(20.0, 20.0));
        assert_eq!(b.velocity, Vec2::new(20.0, 30.0));
    }

    #[test]
    fn body_inside_is_untouched() {
        let mut b = body(Vec2::new(400.0, 300.0), Vec2::new(7.0, -7.0));
        let before = b.clone();
        assert!(!resolver().resolve_body(&mut b).any());
        assert_eq!(b, before);
    }

    #[test]
    fn tangent_body_is_not_a_contact() {
        let mut b = body(Vec2::new(780.0, 580.0), Vec2::new(1.0, 1.0));
        assert!(!resolver().resolve_body(&mut b).any());
        assert_eq!(b.velocity, Vec2::new(1.0, 1.0));
    }
}
