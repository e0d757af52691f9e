//! Math utilities module
//!
//! Re-exports the glam types used across the crate plus the guarded
//! vector helpers the solver relies on.

mod geometry;

pub use geometry::{direction_or_up, set_length, EPSILON, UP};

// Re-export commonly used glam types
pub use glam::{Vec2, Vec4};
