//! Step sizes and motion profiles
//!
//! A motion profile maps a step size to how long the jump takes. The host
//! usually backs this with its animation clips; `FixedDuration` is the
//! fallback when nothing is wired.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// A jump of one or two cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Step {
    One,
    Two,
}

impl Step {
    /// Number of cells this step advances
    #[inline]
    pub fn cells(self) -> usize {
        match self {
            Step::One => 1,
            Step::Two => 2,
        }
    }

    /// Name of the animation clip that drives this step
    pub fn clip_name(self) -> &'static str {
        match self {
            Step::One => "oneStep",
            Step::Two => "twoStep",
        }
    }
}

impl TryFrom<u8> for Step {
    type Error = GameError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Step::One),
            2 => Ok(Step::Two),
            other => Err(GameError::InvalidStep(other)),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-cell", self.cells())
    }
}

/// Resolves the duration (seconds) of a jump
pub trait MotionProfile {
    /// `None` when the step size has no usable duration
    fn duration_for(&self, step: Step) -> Option<f32>;
}

/// Same duration for every step size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedDuration(pub f32);

impl MotionProfile for FixedDuration {
    fn duration_for(&self, _step: Step) -> Option<f32> {
        Some(self.0)
    }
}

/// Durations looked up by animation clip name
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClipTable {
    clips: HashMap<String, f32>,
}

impl ClipTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) a clip
    pub fn with_clip(mut self, name: impl Into<String>, duration: f32) -> Self {
        self.clips.insert(name.into(), duration);
        self
    }

    /// Table with both step clips registered
    pub fn standard(one_step: f32, two_step: f32) -> Self {
        Self::new()
            .with_clip(Step::One.clip_name(), one_step)
            .with_clip(Step::Two.clip_name(), two_step)
    }
}

impl MotionProfile for ClipTable {
    fn duration_for(&self, step: Step) -> Option<f32> {
        self.clips.get(step.clip_name()).copied()
    }
}

/// Look up a duration, rejecting missing, zero, negative and non-finite values
pub fn resolve_duration(profile: &dyn MotionProfile, step: Step) -> Result<f32, GameError> {
    match profile.duration_for(step) {
        Some(d) if d.is_finite() && d > 0.0 => Ok(d),
        _ => Err(GameError::MissingMotionProfile { step }),
    }
}
