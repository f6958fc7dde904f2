//! Configuration for the arena: default constants and the [`WorldConfig`] handed to
//! [`World::new`](crate::world::World::new).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::{
    core::types::Bounds,
    error::{PhysicsError, Result},
};

/// Default arena width in pixels.
pub const DEFAULT_ARENA_WIDTH: f32 = 800.0;

/// Default arena height in pixels.
pub const DEFAULT_ARENA_HEIGHT: f32 = 600.0;

/// Default gravity in pixels/s² (Y-down screen coordinates).
pub const DEFAULT_GRAVITY: [f32; 2] = [0.0, 981.0];

/// Fraction of normal velocity kept after a wall or body collision.
pub const DEFAULT_RESTITUTION: f32 = 0.7;

/// Per-frame velocity damping factor.
pub const DEFAULT_FRICTION: f32 = 0.99;

/// Frame rate the driver is expected to run at.
pub const DEFAULT_TARGET_FPS: u32 = 60;

/// Upper bound applied to the per-frame delta before integrating.
pub const DEFAULT_MAX_TIME_STEP: f32 = 1.0 / 30.0;

/// Below this center distance a pair is treated as coincident.
pub const DEGENERATE_EPSILON: f32 = 1e-6;

/// Normal used for coincident pairs; lifts the first body above the second.
pub const FALLBACK_NORMAL: [f32; 2] = [0.0, -1.0];

/// Smallest radius selectable on the spawn slider.
pub const MIN_SPAWN_RADIUS: f32 = 5.0;

/// Largest radius selectable on the spawn slider.
pub const MAX_SPAWN_RADIUS: f32 = 50.0;

/// Radius the spawn slider starts at.
pub const DEFAULT_SPAWN_RADIUS: f32 = 20.0;

/// Height of the control band at the top of the arena where clicks never spawn.
pub const UI_BAND_HEIGHT: f32 = 80.0;

/// Construction-time parameters of a [`World`](crate::world::World).
///
/// Every field is fixed for the lifetime of the world it builds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub bounds: Bounds,
    pub gravity: Vec2,
    /// Multiplier applied to velocity every frame, in `(0, 1]`.
    pub friction: f32,
    /// Coefficient of restitution, in `[0, 1]`.
    pub restitution: f32,
    /// Frame deltas above this are clamped. `None` integrates whatever the driver passes.
    pub max_time_step: Option<f32>,
    /// When set, spawning past this count evicts the oldest body first.
    pub max_bodies: Option<usize>,
    /// Frame budget in milliseconds used for slow-step warnings.
    pub frame_budget_ms: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            bounds: Bounds::new(DEFAULT_ARENA_WIDTH, DEFAULT_ARENA_HEIGHT),
            gravity: Vec2::from_array(DEFAULT_GRAVITY),
            friction: DEFAULT_FRICTION,
            restitution: DEFAULT_RESTITUTION,
            max_time_step: Some(DEFAULT_MAX_TIME_STEP),
            max_bodies: None,
            frame_budget_ms: 1000.0 / DEFAULT_TARGET_FPS as f32,
        }
    }
}

impl WorldConfig {
    pub fn with_bounds(mut self, width: f32, height: f32) -> Self {
        self.bounds = Bounds::new(width, height);
        self
    }

    pub fn with_gravity(mut self, gravity: Vec2) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_friction(mut self, friction: f32) -> Self {
        self.friction = friction;
        self
    }

    pub fn with_restitution(mut self, restitution: f32) -> Self {
        self.restitution = restitution;
        self
    }

    pub fn with_max_time_step(mut self, max_time_step: Option<f32>) -> Self {
        self.max_time_step = max_time_step;
        self
    }

    pub fn with_max_bodies(mut self, max_bodies: Option<usize>) -> Self {
        self.max_bodies = max_bodies;
        self
    }

    pub fn with_frame_budget_ms(mut self, frame_budget_ms: f32) -> Self {
        self.frame_budget_ms = frame_budget_ms;
        self
    }

    /// Checks every field against its allowed range.
    pub fn validate(&self) -> Result<()> {
        let Bounds { width, height } = self.bounds;
        if !(width.is_finite() && width > 0.0) {
            return Err(PhysicsError::invalid("bounds.width", width, "must be finite and > 0"));
        }
        if !(height.is_finite() && height > 0.0) {
            return Err(PhysicsError::invalid("bounds.height", height, "must be finite and > 0"));
        }
        if !self.gravity.is_finite() {
            return Err(PhysicsError::invalid(
                "gravity",
                self.gravity.length(),
                "must be finite",
            ));
        }
        if !(self.friction > 0.0 && self.friction <= 1.0) {
            return Err(PhysicsError::invalid("friction", self.friction, "must be in (0, 1]"));
        }
        if !(0.0..=1.0).contains(&self.restitution) {
            return Err(PhysicsError::invalid(
                "restitution",
                self.restitution,
                "must be in [0, 1]",
            ));
        }
        if let Some(max_dt) = self.max_time_step {
            if !(max_dt.is_finite() && max_dt > 0.0) {
                return Err(PhysicsError::invalid(
                    "max_time_step",
                    max_dt,
                    "must be finite and > 0",
                ));
            }
        }
        if self.max_bodies == Some(0) {
            return Err(PhysicsError::invalid("max_bodies", 0.0, "must be at least 1"));
        }
        if !(self.frame_budget_ms.is_finite() && self.frame_budget_ms > 0.0) {
            return Err(PhysicsError::invalid(
                "frame_budget_ms",
                self.frame_budget_ms,
                "must be finite and > 0",
            ));
        }
        Ok(())
    }
}
