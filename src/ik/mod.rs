//! Inverse Kinematics module
//!
//! Planar chain type and the single-pass FABRIK solver that drives it.

pub mod chain;
pub mod solver;

pub use chain::{Chain, ChainBuilder};
pub use solver::{stretch_factor, FabrikSolver, SolveResult};
