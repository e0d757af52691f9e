//! # ik-bloom
//!
//! A planar flower stem that reaches for a draggable sun. The sun follows
//! the pointer through an impulse-driven spring, and a single-pass FABRIK
//! solve keeps the stem pinned to its anchor while stretching toward it.
//!
//! ## Features
//! - Single-iteration FABRIK with a hard-pinned base and uniform stretch
//! - Spring/damper target smoothing
//! - Adjustable gap between the last two joints
//! - GPU-free scene description plus a wgpu renderer
//! - Cross-platform: Native + WASM support
//!
//! ## Example
//! ```rust
//! use ik_bloom::{Config, Simulation};
//! use glam::Vec2;
//!
//! let mut sim = Simulation::new(Config::default(), Vec2::new(800.0, 600.0)).unwrap();
//! sim.set_gap(120.0);
//!
//! let frame = sim.tick(Vec2::new(400.0, 120.0));
//! assert_eq!(frame.joints[0], sim.anchor());
//! ```

pub mod config;
pub mod dynamics;
pub mod error;
pub mod ik;
pub mod input;
pub mod math;
pub mod render;
pub mod scene;
pub mod sim;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::{Config, GapSetting};
pub use dynamics::{MotionController, MotionParams, MotionState};
pub use error::{ConfigError, RenderError};
pub use ik::{stretch_factor, Chain, ChainBuilder, FabrikSolver, SolveResult};
pub use input::{FixedPointer, PointerSource, PointerState, TouchPhase};
pub use scene::{Scene, Shape};
pub use sim::{Frame, FrameLoop, Simulation};
