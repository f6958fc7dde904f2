//! Circle Arena – a 2D rigid-body core for bouncing circles.
//!
//! Circles are spawned into a bounded arena, fall under gravity, lose energy
//! to per-frame damping, and bounce off the walls and each other through a
//! single-pass impulse solver. Windowing and rendering live outside the crate:
//! a driver feeds spawn requests and frame deltas in and reads body snapshots
//! back out.

pub mod collision;
pub mod config;
pub mod controls;
pub mod core;
pub mod dynamics;
pub mod error;
pub mod utils;
pub mod world;

use std::time::Instant;

use error::Result;

pub use glam::Vec2;

pub use collision::{AllPairs, BroadPhase, CircleContact, NarrowPhase, WallResolver};
pub use config::WorldConfig;
pub use controls::{ClickOutcome, DragState, SpawnControls, SpawnRequest};
pub use crate::core::{Body, BodyView, Bounds, Color};
pub use dynamics::{ImpulseSolver, Integrator, SolverStepMetrics};
pub use error::PhysicsError;
pub use utils::{
    allocator::BodyHandle,
    logging::warn_if_frame_budget_exceeded,
    profiling::{PhysicsProfiler, StepStats},
};
pub use world::World;

/// High-level convenience wrapper that owns a [`World`] and profiles its steps.
pub struct PhysicsEngine {
    world: World,
    profiler: PhysicsProfiler,
}

impl PhysicsEngine {
    /// Creates an engine around a freshly validated world.
    pub fn new(config: WorldConfig) -> Result<Self> {
        Ok(Self {
            world: World::new(config)?,
            profiler: PhysicsProfiler::default(),
        })
    }

    /// Spawns a circle and returns its [`BodyHandle`].
    pub fn spawn(&mut self, position: Vec2, radius: f32, color: Color) -> Result<BodyHandle> {
        self.world.spawn(position, radius, color)
    }

    /// Advances the simulation.
    ///
    /// A step that overruns the frame budget is warned about and its phase
    /// breakdown is logged.
    pub fn step(&mut self, dt: f32) -> Result<StepStats> {
        let start = Instant::now();
        let stats = self.world.step(dt)?;
        let over_budget =
            warn_if_frame_budget_exceeded(start.elapsed(), self.world.config().frame_budget_ms);
        if over_budget {
            stats.report();
        }
        self.profiler.record(stats, over_budget);
        Ok(stats)
    }

    /// Enables or disables parallel integration and wall resolution.
    pub fn set_parallel_enabled(&mut self, enabled: bool) {
        self.world.set_parallel_enabled(enabled);
    }

    /// Returns whether the engine is currently using parallel execution.
    pub fn parallel_enabled(&self) -> bool {
        self.world.parallel_enabled()
    }

    /// Bodies in spawn order, for rendering.
    pub fn bodies(&self) -> &[Body] {
        self.world.bodies()
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn profiler(&self) -> &PhysicsProfiler {
        &self.profiler
    }
}
