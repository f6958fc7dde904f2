use glam::Vec2;

use crate::collision::{narrowphase::NarrowPhase, walls::WallResolver};
use crate::config::{WorldConfig, DEGENERATE_EPSILON, FALLBACK_NORMAL};
use crate::dynamics::solver::ImpulseSolver;

pub struct CollisionManager {
    pub walls: WallResolver,
    pub solver: ImpulseSolver,
}

impl CollisionManager {
    pub fn new(config: &WorldConfig) -> Self {
        let narrowphase = NarrowPhase::new(DEGENERATE_EPSILON, Vec2::from_array(FALLBACK_NORMAL));
        Self {
            walls: WallResolver::new(config.bounds, config.restitution),
            solver: ImpulseSolver::new(config.restitution, narrowphase),
        }
    }

    /// The pair pass stays sequential; only the wall pass is per-body independent.
    pub fn set_parallel(&mut self, enabled: bool) {
        self.walls.set_parallel(enabled);
    }
}
