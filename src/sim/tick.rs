//! Per-frame driver
//!
//! The host calls `tick` once per frame with whatever input arrived since
//! the previous frame. Nothing in here blocks.

use super::motion::Step;
use super::state::{GameEvent, GameState};
use crate::error::GameError;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Start button pressed
    pub start: bool,
    /// Primary input (left click / left touch zone): 1-cell jump
    pub primary: bool,
    /// Secondary input (right click / right touch zone): 2-cell jump
    pub secondary: bool,
}

impl TickInput {
    /// Register a step request from the input layer
    pub fn press(&mut self, step: Step) {
        match step {
            Step::One => self.primary = true,
            Step::Two => self.secondary = true,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.start || self.primary || self.secondary)
    }
}

/// Advance the game by one frame of `dt` seconds
///
/// Order within a frame: start command, jump commands, then time. A jump
/// started this frame is advanced by this frame's `dt`. If both step inputs
/// are set the 1-cell jump wins and the other is dropped.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Result<Vec<GameEvent>, GameError> {
    if input.start {
        state.start();
    }
    if input.primary {
        state.request_jump(Step::One);
    }
    if input.secondary {
        state.request_jump(Step::Two);
    }

    state.advance(dt)?;
    Ok(state.take_events())
}
