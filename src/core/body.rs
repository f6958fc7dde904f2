use std::f32::consts::PI;

use glam::Vec2;

use super::types::{BodyView, Color};
use crate::utils::allocator::BodyHandle;

/// Physical state of one circle in the arena.
///
/// Radius and mass are fixed at construction; only position and velocity change.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    handle: BodyHandle,
    pub position: Vec2,
    pub velocity: Vec2,
    radius: f32,
    mass: f32,
    inverse_mass: f32,
    color: Color,
}

impl Body {
    /// Builds a resting body. The caller guarantees `radius > 0`.
    pub(crate) fn new(handle: BodyHandle, position: Vec2, radius: f32, color: Color) -> Self {
        let mass = Self::mass_for_radius(radius);
        Self {
            handle,
            position,
            velocity: Vec2::ZERO,
            radius,
            mass,
            inverse_mass: 1.0 / mass,
            color,
        }
    }

    /// Area-proportional mass, `π r²`.
    pub fn mass_for_radius(radius: f32) -> f32 {
        PI * radius * radius
    }

    pub fn handle(&self) -> BodyHandle {
        self.handle
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    pub fn inverse_mass(&self) -> f32 {
        self.inverse_mass
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.mass * self.velocity.length_squared()
    }

    pub fn view(&self) -> BodyView {
        BodyView {
            handle: self.handle,
            position: self.position,
            radius: self.radius,
            color: self.color,
        }
    }

    /// Advances the body by `dt` seconds: gravity, then damping, then position.
    ///
    /// `friction` multiplies the velocity every call whether or not the body
    /// is in contact with anything.
    pub fn integrate(&mut self, dt: f32, gravity: Vec2, friction: f32) {
        self.velocity += gravity * dt;
        self.velocity *= friction;
        self.position += self.velocity * dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn body_at(x: f32, y: f32, radius: f32) -> Body {
        Body::new(BodyHandle::from_raw(0), Vec2::new(x, y), radius, Color::RED)
    }

    #[test]
    fn mass_is_area_of_the_circle() {
        for radius in [5.0_f32, 20.0, 50.0] {
            let body = body_at(0.0, 0.0, radius);
            assert_eq!(body.mass(), PI * radius * radius);
            assert_relative_eq!(body.inverse_mass() * body.mass(), 1.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn integrate_applies_gravity_then_friction_then_position() {
        let mut body = body_at(100.0, 100.0, 10.0);
        body.velocity = Vec2::new(10.0, 0.0);

        let dt = 0.5;
        body.integrate(dt, Vec2::new(0.0, 100.0), 0.5);

        // (10, 0) + (0, 50) = (10, 50), damped to (5, 25), moved by half of it.
        assert_eq!(body.velocity, Vec2::new(5.0, 25.0));
        assert_eq!(body.position, Vec2::new(102.5, 112.5));
    }

    #[test]
    fn spawned_body_is_at_rest() {
        let body = body_at(1.0, 2.0, 3.0);
        assert_eq!(body.velocity, Vec2::ZERO);
        assert_eq!(body.kinetic_energy(), 0.0);
        assert_eq!(body.view().position, Vec2::new(1.0, 2.0));
    }
}
