use log::debug;

use crate::{
    collision::{
        broadphase::{pair_mut, AllPairs, BroadPhase},
        contact::CircleContact,
        narrowphase::NarrowPhase,
    },
    core::body::Body,
    error::PhysicsError,
};

#[derive(Debug, Default, Clone, PartialEq)]
pub struct SolverStepMetrics {
    pub pairs_tested: usize,
    pub contacts_solved: usize,
    pub degenerate_contacts: usize,
    pub normal_impulse_sum: f32,
}

impl SolverStepMetrics {
    pub fn record_contact(&mut self, contact: &CircleContact, impulse: f32) {
        self.contacts_solved += 1;
        if contact.degenerate {
            self.degenerate_contacts += 1;
        }
        self.normal_impulse_sum += impulse.abs();
    }
}

/// Single-pass impulse solver for circle pairs.
///
/// Pairs are visited once per call in ascending index order. Each contact gets
/// a restitution impulse along the normal followed by a positional correction
/// that moves both bodies apart by half the penetration depth. A body touched
/// by several pairs accumulates those corrections in visiting order; there is
/// no iterative relaxation.
#[derive(Debug, Clone)]
pub struct ImpulseSolver {
    pub restitution: f32,
    pub narrowphase: NarrowPhase,
}

impl ImpulseSolver {
    pub fn new(restitution: f32, narrowphase: NarrowPhase) -> Self {
        Self {
            restitution,
            narrowphase,
        }
    }

    /// Normal impulse magnitude for the contact, `-(1 + e)(v_rel · n) / (1/m_a + 1/m_b)`.
    pub fn normal_impulse(&self, body_a: &Body, body_b: &Body, contact: &CircleContact) -> f32 {
        let relative_velocity = body_a.velocity - body_b.velocity;
        -(1.0 + self.restitution) * relative_velocity.dot(contact.normal)
            / (body_a.inverse_mass() + body_b.inverse_mass())
    }

    /// Applies impulse and positional correction, returning the impulse magnitude.
    pub fn resolve_contact(
        &self,
        body_a: &mut Body,
        body_b: &mut Body,
        contact: &CircleContact,
    ) -> f32 {
        let normal = contact.normal;
        let impulse = self.normal_impulse(body_a, body_b, contact);

        body_a.velocity += normal * (impulse / body_a.mass());
        body_b.velocity -= normal * (impulse / body_b.mass());

        // Equal split regardless of mass.
        let overlap = contact.half_depth();
        body_a.position += normal * overlap;
        body_b.position -= normal * overlap;

        impulse
    }

    /// Tests and resolves every pair once.
    pub fn solve(&self, bodies: &mut [Body]) -> SolverStepMetrics {
        let mut metrics = SolverStepMetrics::default();

        for (i, j) in AllPairs::new(bodies.len()) {
            let Some((body_a, body_b)) = pair_mut(bodies, i, j) else {
                continue;
            };
            metrics.pairs_tested += 1;

            if !BroadPhase::may_overlap(body_a, body_b) {
                continue;
            }
            let Some(contact) = self.narrowphase.collide(i, body_a, j, body_b) else {
                continue;
            };

            if contact.degenerate {
                debug!(
                    "{}; separating along {:?}",
                    PhysicsError::DegenerateGeometry { first: i, second: j },
                    contact.normal
                );
            }

            let impulse = self.resolve_contact(body_a, body_b, &contact);
            metrics.record_contact(&contact, impulse);
        }

        metrics
    }
}
