//! Core types describing the arena and the bodies in it.

pub mod body;
pub mod types;

pub use body::Body;
pub use types::{BodyView, Bounds, Color};
