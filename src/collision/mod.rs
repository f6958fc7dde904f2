//! Collision detection: all-pairs broad phase, circle narrow phase, arena walls.

pub mod broadphase;
pub mod contact;
pub mod narrowphase;
pub mod walls;

pub use broadphase::{AllPairs, BroadPhase};
pub use contact::{CircleContact, Wall, WallHits};
pub use narrowphase::NarrowPhase;
pub use walls::WallResolver;
