use glam::Vec2;
use log::debug;

use crate::{
    config::WorldConfig,
    core::{
        body::Body,
        types::{BodyView, Bounds, Color},
    },
    dynamics::solver::SolverStepMetrics,
    error::{PhysicsError, Result},
    utils::{
        allocator::{find_slot, BodyHandle, HandleAllocator},
        logging::ScopedTimer,
        math::clamp_time_step,
        profiling::StepStats,
    },
};

mod collision_manager;
mod dynamics_manager;

use collision_manager::CollisionManager;
use dynamics_manager::DynamicsManager;

/// The arena: owns every body and drives the per-frame step.
///
/// Bodies are kept in spawn order. A step integrates every body, then pushes
/// bodies back inside the walls, then resolves circle pairs; the order of the
/// three phases is fixed.
pub struct World {
    config: WorldConfig,
    bodies: Vec<Body>,
    handles: HandleAllocator,
    dynamics: DynamicsManager,
    collision: CollisionManager,
    parallel_enabled: bool,
    time_elapsed: f64,
    evicted: u64,
}

impl World {
    pub fn new(config: WorldConfig) -> Result<Self> {
        config.validate()?;
        debug!(
            "creating world {}x{} gravity={:?} friction={} restitution={}",
            config.bounds.width,
            config.bounds.height,
            config.gravity,
            config.friction,
            config.restitution
        );

        Ok(Self {
            dynamics: DynamicsManager::new(&config),
            collision: CollisionManager::new(&config),
            config,
            bodies: Vec::new(),
            handles: HandleAllocator::new(),
            parallel_enabled: false,
            time_elapsed: 0.0,
            evicted: 0,
        })
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    pub fn bounds(&self) -> Bounds {
        self.config.bounds
    }

    /// Runs integration and the wall pass on rayon's pool when the `parallel` feature is on.
    ///
    /// Results are identical either way.
    pub fn set_parallel_enabled(&mut self, enabled: bool) {
        self.parallel_enabled = enabled;
        self.dynamics.set_parallel(enabled);
        self.collision.set_parallel(enabled);
    }

    pub fn parallel_enabled(&self) -> bool {
        self.parallel_enabled
    }

    /// Adds a resting circle at `position` and returns its handle.
    ///
    /// Fails with [`PhysicsError::InvalidParameter`] unless `radius` is finite
    /// and positive and its mass and inverse mass are both representable. With
    /// `max_bodies` configured, the oldest bodies are evicted to make room.
    pub fn spawn(&mut self, position: Vec2, radius: f32, color: Color) -> Result<BodyHandle> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(PhysicsError::invalid("radius", radius, "must be finite and > 0"));
        }
        let mass = Body::mass_for_radius(radius);
        if !(mass.is_finite() && mass > 0.0 && mass.recip().is_finite()) {
            return Err(PhysicsError::invalid(
                "radius",
                radius,
                "mass must be finite and > 0 in f32",
            ));
        }

        if let Some(max_bodies) = self.config.max_bodies {
            if self.bodies.len() >= max_bodies {
                let excess = self.bodies.len() + 1 - max_bodies;
                for body in self.bodies.drain(..excess) {
                    debug!("evicting body {} to stay within {max_bodies}", body.handle());
                }
                self.evicted += excess as u64;
            }
        }

        let handle = self.handles.allocate();
        self.bodies.push(Body::new(handle, position, radius, color));
        debug!("spawned body {handle} at {position:?} r={radius}");
        Ok(handle)
    }

    /// Advances the simulation by `dt` seconds.
    ///
    /// Negative or non-finite deltas are rejected; deltas above
    /// `max_time_step` are clamped before integrating.
    pub fn step(&mut self, dt: f32) -> Result<StepStats> {
        if !(dt.is_finite() && dt >= 0.0) {
            return Err(PhysicsError::invalid("dt", dt, "must be finite and >= 0"));
        }

        let (dt, clamped) = clamp_time_step(dt, self.config.max_time_step);
        if clamped {
            debug!("frame delta clamped to {dt}");
        }

        let mut stats = StepStats {
            dt,
            body_count: self.bodies.len(),
            ..StepStats::default()
        };
        let mut total_time = std::time::Duration::ZERO;
        {
            let _total = ScopedTimer::new("step", &mut total_time);
            {
                let _timer = ScopedTimer::new("integrate", &mut stats.integrate_time);
                self.integrate(dt);
            }
            {
                let _timer = ScopedTimer::new("walls", &mut stats.wall_time);
                stats.wall_contacts = self.resolve_walls();
            }
            {
                let _timer = ScopedTimer::new("pairs", &mut stats.pair_time);
                let metrics = self.resolve_pairs();
                stats.pair_contacts = metrics.contacts_solved;
                stats.degenerate_contacts = metrics.degenerate_contacts;
            }
        }
        stats.total_frame_time = total_time;
        self.time_elapsed += f64::from(dt);

        Ok(stats)
    }

    /// Integration phase only. `dt` is used as given.
    pub fn integrate(&mut self, dt: f32) {
        self.dynamics.integrator.step(&mut self.bodies, dt);
    }

    /// Wall phase only. Returns the number of wall corrections made.
    pub fn resolve_walls(&mut self) -> usize {
        self.collision.walls.resolve(&mut self.bodies)
    }

    /// Pair phase only: one pass over all pairs in ascending index order.
    pub fn resolve_pairs(&mut self) -> SolverStepMetrics {
        self.collision.solver.solve(&mut self.bodies)
    }

    /// Bodies in spawn order.
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Render snapshot of every body, in spawn order.
    pub fn snapshot(&self) -> Vec<BodyView> {
        self.bodies.iter().map(Body::view).collect()
    }

    pub fn body(&self, handle: BodyHandle) -> Option<&Body> {
        let slot = find_slot(&self.bodies, handle, Body::handle)?;
        self.bodies.get(slot)
    }

    /// Mutable access for drivers that need to move or fling a body between steps.
    pub fn body_mut(&mut self, handle: BodyHandle) -> Option<&mut Body> {
        let slot = find_slot(&self.bodies, handle, Body::handle)?;
        self.bodies.get_mut(slot)
    }

    pub fn kinetic_energy(&self) -> f32 {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Simulated seconds integrated so far.
    pub fn time_elapsed(&self) -> f64 {
        self.time_elapsed
    }

    /// Bodies removed by the eviction policy so far.
    pub fn evicted_count(&self) -> u64 {
        self.evicted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet_world() -> World {
        World::new(WorldConfig::default().with_gravity(Vec2::ZERO)).expect("valid config")
    }

    #[test]
    fn spawn_rejects_non_positive_radius() {
        let mut world = quiet_world();
        for radius in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let err = world
                .spawn(Vec2::new(100.0, 100.0), radius, Color::RED)
                .expect_err("radius must be rejected");
            assert!(matches!(err, PhysicsError::InvalidParameter { name: "radius", .. }));
        }
        assert!(world.is_empty());
    }

    #[test]
    fn spawn_rejects_radius_with_unrepresentable_mass() {
        let mut world = quiet_world();

        let tiny = world.spawn(Vec2::new(100.0, 100.0), 1e-23, Color::RED);
        assert!(matches!(tiny, Err(PhysicsError::InvalidParameter { name: "radius", .. })));

        let huge = world.spawn(Vec2::new(100.0, 100.0), 3e19, Color::RED);
        assert!(matches!(huge, Err(PhysicsError::InvalidParameter { name: "radius", .. })));

        assert!(world.is_empty());
        assert_eq!(world.step(1.0 / 60.0).unwrap().body_count, 0);
    }

    #[test]
    fn smallest_accepted_radii_keep_velocities_finite() {
        let mut world = quiet_world();
        let a = world.spawn(Vec2::new(100.0, 100.0), 1e-15, Color::RED).unwrap();
        let b = world.spawn(Vec2::new(100.0, 100.0 + 1e-16), 1e-15, Color::BLUE).unwrap();
        world.body_mut(a).unwrap().velocity = Vec2::new(0.0, 5.0);

        world.resolve_pairs();
        for handle in [a, b] {
            let body = world.body(handle).unwrap();
            assert!(body.mass() > 0.0 && body.inverse_mass().is_finite());
            assert!(body.velocity.is_finite());
        }
    }

    #[test]
    fn step_rejects_negative_and_nan_dt() {
        let mut world = quiet_world();
        assert!(world.step(-0.01).is_err());
        assert!(world.step(f32::NAN).is_err());
        assert!(world.step(0.0).is_ok());
    }

    #[test]
    fn step_clamps_large_dt() {
        let mut world = quiet_world();
        let stats = world.step(1.0).expect("step succeeds");
        assert_eq!(stats.dt, crate::config::DEFAULT_MAX_TIME_STEP);
    }

    #[test]
    fn handles_resolve_to_their_bodies() {
        let mut world = quiet_world();
        let a = world.spawn(Vec2::new(100.0, 100.0), 10.0, Color::RED).unwrap();
        let b = world.spawn(Vec2::new(300.0, 100.0), 15.0, Color::BLUE).unwrap();

        assert_eq!(world.body(a).map(Body::radius), Some(10.0));
        assert_eq!(world.body(b).map(Body::color), Some(Color::BLUE));
        world.body_mut(b).unwrap().velocity = Vec2::new(1.0, 2.0);
        assert_eq!(world.bodies()[1].velocity, Vec2::new(1.0, 2.0));
    }

    #[test]
    fn eviction_drops_oldest_first() {
        let config = WorldConfig::default().with_max_bodies(Some(2));
        let mut world = World::new(config).unwrap();
        let first = world.spawn(Vec2::new(100.0, 100.0), 5.0, Color::RED).unwrap();
        let second = world.spawn(Vec2::new(200.0, 100.0), 5.0, Color::GREEN).unwrap();
        let third = world.spawn(Vec2::new(300.0, 100.0), 5.0, Color::BLUE).unwrap();

        assert_eq!(world.len(), 2);
        assert_eq!(world.evicted_count(), 1);
        assert!(world.body(first).is_none());
        assert!(world.body(second).is_some());
        assert!(world.body(third).is_some());
    }
}
