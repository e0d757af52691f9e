//! Per-frame simulation
//!
//! [`Simulation`] owns every piece of mutable state: the chain, the sun's
//! motion and the live gap. [`FrameLoop`] gates and counts ticks.

use crate::config::{Config, GapSetting};
use crate::dynamics::MotionController;
use crate::error::ConfigError;
use crate::ik::{stretch_factor, Chain, FabrikSolver, SolveResult};
use crate::input::PointerSource;
use glam::Vec2;

/// Read-only snapshot of one tick, handed to the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub joints: Vec<Vec2>,
    pub sun: Vec2,
    pub anchor: Vec2,
    pub canvas: Vec2,
    pub gap: f32,
    pub stretch_factor: f32,
    pub solve: SolveResult,
}

impl Frame {
    pub fn end_effector(&self) -> Option<Vec2> {
        self.joints.last().copied()
    }
}

#[derive(Debug, Clone)]
pub struct Simulation {
    config: Config,
    chain: Chain,
    motion: MotionController,
    gap: GapSetting,
    canvas: Vec2,
    anchor: Vec2,
    raw_target: Vec2,
    stretch: f32,
    last_solve: SolveResult,
}

impl Simulation {
    /// Lays the chain out along the canvas midline and parks the sun on its
    /// last joint.
    pub fn new(config: Config, canvas: Vec2) -> Result<Self, ConfigError> {
        config.validate()?;

        let canvas = canvas.max(Vec2::ZERO);
        let chain = Chain::builder()
            .segment_count(config.segment_count)
            .segment_length(config.base_segment_length)
            .origin(Vec2::new(0.0, canvas.y / 2.0))
            .build();
        let sun = chain.end_effector().unwrap_or(Vec2::ZERO);
        let motion = MotionController::new(config.motion_params(), sun);
        let gap = GapSetting::from_config(&config);
        let anchor = anchor_for(canvas, config.anchor_margin);
        let stretch = stretch_factor(anchor, sun, config.rest_length());
        let last_solve = SolveResult {
            segment_length: config.base_segment_length,
            gap_adjusted: false,
            end_gap: chain.segment_lengths().last().unwrap_or(0.0),
        };

        log::debug!(
            "simulation created: {} joints, canvas {}x{}, anchor {:?}",
            chain.joint_count(),
            canvas.x,
            canvas.y,
            anchor
        );

        Ok(Self {
            config,
            chain,
            motion,
            gap,
            canvas,
            anchor,
            raw_target: sun,
            stretch,
            last_solve,
        })
    }

    pub fn tick(&mut self, pointer: Vec2) -> Frame {
        if pointer.is_finite() {
            self.raw_target = pointer;
        } else {
            log::warn!("ignoring non-finite pointer position {pointer:?}");
        }

        let sun = self.motion.step(self.raw_target);
        let sun = sun.clamp(Vec2::ZERO, self.canvas);
        self.motion.set_position(sun);

        let stretch = stretch_factor(self.anchor, sun, self.config.rest_length());
        let gap = self.gap.get();
        let solve = FabrikSolver::solve_with_gap(&mut self.chain, self.anchor, sun, stretch, gap);
        self.stretch = stretch;
        self.last_solve = solve;

        log::trace!(
            "tick: sun {:?} stretch {:.3} end gap {:.1}",
            sun,
            stretch,
            solve.end_gap
        );

        self.snapshot()
    }

    /// The current state without advancing it.
    pub fn snapshot(&self) -> Frame {
        Frame {
            joints: self.chain.joints().to_vec(),
            sun: self.motion.position(),
            anchor: self.anchor,
            canvas: self.canvas,
            gap: self.gap.get(),
            stretch_factor: self.stretch,
            solve: self.last_solve,
        }
    }

    /// Updates the canvas bounds and recomputes the anchor.
    pub fn resize(&mut self, canvas: Vec2) {
        self.canvas = canvas.max(Vec2::ZERO);
        self.anchor = anchor_for(self.canvas, self.config.anchor_margin);
        log::debug!("canvas resized to {}x{}", self.canvas.x, self.canvas.y);
    }

    pub fn set_gap(&mut self, gap: f32) {
        self.gap.set(gap);
    }

    pub fn nudge_gap(&mut self, delta: f32) {
        self.gap.nudge(delta);
    }

    pub fn gap(&self) -> &GapSetting {
        &self.gap
    }

    pub fn anchor(&self) -> Vec2 {
        self.anchor
    }

    pub fn sun(&self) -> Vec2 {
        self.motion.position()
    }

    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    pub fn canvas_size(&self) -> Vec2 {
        self.canvas
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

fn anchor_for(canvas: Vec2, margin: f32) -> Vec2 {
    Vec2::new(canvas.x / 2.0, canvas.y - margin)
}

/// Start-gated driver: one tick per [`advance`](Self::advance) call, nothing
/// while stopped.
pub struct FrameLoop<P: PointerSource> {
    simulation: Simulation,
    input: P,
    running: bool,
    frames: u64,
}

impl<P: PointerSource> FrameLoop<P> {
    pub fn new(simulation: Simulation, input: P) -> Self {
        Self {
            simulation,
            input,
            running: false,
            frames: 0,
        }
    }

    pub fn start(&mut self) {
        if !self.running {
            log::debug!("frame loop started");
        }
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    pub fn advance(&mut self) -> Option<Frame> {
        if !self.running {
            return None;
        }
        let pointer = self.input.current_pointer_position();
        self.frames += 1;
        Some(self.simulation.tick(pointer))
    }

    pub fn input_mut(&mut self) -> &mut P {
        &mut self.input
    }

    pub fn simulation(&self) -> &Simulation {
        &self.simulation
    }

    pub fn simulation_mut(&mut self) -> &mut Simulation {
        &mut self.simulation
    }
}
