//! Simulation dynamics: integration and the pairwise impulse solver.

pub mod integrator;
pub mod solver;

pub use integrator::Integrator;
pub use solver::{ImpulseSolver, SolverStepMetrics};
