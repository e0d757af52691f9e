//! Session configuration
//!
//! Everything here is fixed for the lifetime of a [`Simulation`](crate::Simulation)
//! except the end gap, which lives in a [`GapSetting`].

use crate::dynamics::MotionParams;
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub segment_count: usize,
    pub base_segment_length: f32,
    pub stiffness: f32,
    pub damping: f32,
    pub min_gap: f32,
    pub max_gap: f32,
    pub initial_gap: f32,
    /// Distance of the anchor above the bottom edge of the canvas.
    pub anchor_margin: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            segment_count: 10,
            base_segment_length: 50.0,
            stiffness: 0.4,
            damping: 0.6,
            min_gap: 50.0,
            max_gap: 200.0,
            initial_gap: 50.0,
            anchor_margin: 50.0,
        }
    }
}

impl Config {
    pub fn with_segments(mut self, count: usize, length: f32) -> Self {
        self.segment_count = count;
        self.base_segment_length = length;
        self
    }

    pub fn with_motion(mut self, stiffness: f32, damping: f32) -> Self {
        self.stiffness = stiffness;
        self.damping = damping;
        self
    }

    pub fn with_gap_range(mut self, min: f32, max: f32, initial: f32) -> Self {
        self.min_gap = min;
        self.max_gap = max;
        self.initial_gap = initial;
        self
    }

    pub fn with_anchor_margin(mut self, margin: f32) -> Self {
        self.anchor_margin = margin;
        self
    }

    pub fn motion_params(&self) -> MotionParams {
        MotionParams::new(self.stiffness, self.damping)
    }

    pub fn rest_length(&self) -> f32 {
        self.segment_count as f32 * self.base_segment_length
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.segment_count < 2 {
            return Err(ConfigError::TooFewSegments(self.segment_count));
        }
        if !(self.base_segment_length.is_finite() && self.base_segment_length > 0.0) {
            return Err(ConfigError::InvalidSegmentLength(self.base_segment_length));
        }
        for (name, value) in [
            ("stiffness", self.stiffness),
            ("damping", self.damping),
            ("anchor_margin", self.anchor_margin),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { name, value });
            }
        }
        if !(self.min_gap.is_finite() && self.max_gap.is_finite())
            || self.min_gap < 0.0
            || self.min_gap > self.max_gap
        {
            return Err(ConfigError::InvalidGapRange {
                min: self.min_gap,
                max: self.max_gap,
            });
        }
        if !(self.min_gap..=self.max_gap).contains(&self.initial_gap) {
            return Err(ConfigError::GapOutOfRange {
                gap: self.initial_gap,
                min: self.min_gap,
                max: self.max_gap,
            });
        }
        Ok(())
    }
}

/// The user-adjustable distance between the last two joints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GapSetting {
    value: f32,
    min: f32,
    max: f32,
}

impl GapSetting {
    pub fn new(value: f32, min: f32, max: f32) -> Self {
        let mut gap = Self { value: min, min, max };
        gap.set(value);
        gap
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.initial_gap, config.min_gap, config.max_gap)
    }

    /// Stores `value` clamped into range. Non-finite values are ignored.
    pub fn set(&mut self, value: f32) {
        if value.is_finite() {
            self.value = value.max(self.min).min(self.max);
        }
    }

    /// Moves the gap by `delta`, staying inside the range.
    pub fn nudge(&mut self, delta: f32) {
        self.set(self.value + delta);
    }

    pub fn get(&self) -> f32 {
        self.value
    }

    pub fn range(&self) -> std::ops::RangeInclusive<f32> {
        self.min..=self.max
    }
}
