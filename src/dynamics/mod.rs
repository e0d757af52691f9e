//! Target smoothing
//!
//! An impulse-driven spring that turns a raw pointer position into a
//! follower with inertia.

mod motion;

pub use motion::{MotionController, MotionParams, MotionState};
