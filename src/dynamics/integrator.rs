use glam::Vec2;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::core::body::Body;

/// Integrator responsible for stepping bodies forward in time.
#[derive(Debug, Clone)]
pub struct Integrator {
    pub gravity: Vec2,
    pub friction: f32,
    #[cfg_attr(not(feature = "parallel"), allow(dead_code))]
    parallel: bool,
}

impl Integrator {
    pub fn new(gravity: Vec2, friction: f32) -> Self {
        Self {
            gravity,
            friction,
            parallel: false,
        }
    }

    /// Has no effect unless the `parallel` feature is compiled in.
    pub fn set_parallel(&mut self, enabled: bool) {
        self.parallel = enabled;
    }

    pub fn integrate_body(&self, body: &mut Body, dt: f32) {
        body.integrate(dt, self.gravity, self.friction);
    }

    pub fn step(&self, bodies: &mut [Body], dt: f32) {
        #[cfg(feature = "parallel")]
        if self.parallel {
            bodies
                .par_iter_mut()
                .for_each(|body| self.integrate_body(body, dt));
            return;
        }

        for body in bodies.iter_mut() {
            self.integrate_body(body, dt);
        }
    }
}
