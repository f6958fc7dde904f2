//! Error types for the arena core.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PhysicsError>;

/// Errors reported by the physics core.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PhysicsError {
    /// A caller-supplied value is outside its allowed range.
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f32,
        reason: &'static str,
    },

    /// Two circle centers coincide, so the contact normal is undefined.
    ///
    /// The pair solver recovers from this with a fixed fallback normal; the
    /// variant exists so the condition can be named and counted, it is never
    /// returned from [`World::step`](crate::world::World::step).
    #[error("degenerate contact between bodies {first} and {second}: centers coincide")]
    DegenerateGeometry { first: usize, second: usize },
}

impl PhysicsError {
    /// Create an invalid parameter error.
    pub fn invalid(name: &'static str, value: f32, reason: &'static str) -> Self {
        Self::InvalidParameter {
            name,
            value,
            reason,
        }
    }
}
