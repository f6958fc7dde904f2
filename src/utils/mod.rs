//! Utility helpers: handles, math extensions, logging, and profiling.

pub mod allocator;
pub mod logging;
pub mod math;
pub mod profiling;

pub use allocator::{BodyHandle, HandleAllocator};
pub use math::*;
pub use profiling::{PhysicsProfiler, StepStats};
