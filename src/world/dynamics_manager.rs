use crate::{config::WorldConfig, dynamics::integrator::Integrator};

pub struct DynamicsManager {
    pub integrator: Integrator,
}

impl DynamicsManager {
    pub fn new(config: &WorldConfig) -> Self {
        Self {
            integrator: Integrator::new(config.gravity, config.friction),
        }
    }

    pub fn set_parallel(&mut self, enabled: bool) {
        self.integrator.set_parallel(enabled);
    }
}
