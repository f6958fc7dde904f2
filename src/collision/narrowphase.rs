use glam::Vec2;

use super::contact::CircleContact;
use crate::{core::body::Body, utils::math::normal_or_fallback};

/// Exact circle-circle overlap test.
#[derive(Debug, Clone, Copy)]
pub struct NarrowPhase {
    /// Center distances below this are treated as coincident.
    pub epsilon: f32,
    /// Normal used for coincident centers.
    pub fallback_normal: Vec2,
}

impl NarrowPhase {
    pub fn new(epsilon: f32, fallback_normal: Vec2) -> Self {
        Self {
            epsilon,
            fallback_normal,
        }
    }

    /// Returns a contact when the circles strictly overlap.
    ///
    /// Touching circles (`distance == r_a + r_b`) do not collide.
    pub fn collide(
        &self,
        index_a: usize,
        body_a: &Body,
        index_b: usize,
        body_b: &Body,
    ) -> Option<CircleContact> {
        let diff = body_a.position - body_b.position;
        let distance = diff.length();
        let reach = body_a.radius() + body_b.radius();

        if distance >= reach {
            return None;
        }

        let (normal, degenerate) =
            normal_or_fallback(diff, distance, self.epsilon, self.fallback_normal);

        Some(CircleContact {
            index_a,
            index_b,
            normal,
            distance,
            depth: reach - distance,
            degenerate,
        })
    }
}
