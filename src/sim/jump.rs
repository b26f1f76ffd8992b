//! Jump kinematics
//!
//! Turns a discrete step command into constant-velocity motion along the
//! road axis. Completion is decided by elapsed time, not by position, so it
//! does not depend on how the host slices frame deltas. On completion the
//! position is snapped onto the target cell.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::motion::{MotionProfile, Step, resolve_duration};
use crate::cell_to_world;
use crate::error::GameError;

/// A jump in flight
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActiveJump {
    pub step: Step,
    pub target_index: usize,
    /// Position at takeoff
    pub origin: Vec2,
    /// Position of the target cell
    pub target: Vec2,
    /// Seconds since takeoff
    pub elapsed: f32,
    /// Seconds the jump lasts
    pub duration: f32,
    /// Units per second along x
    pub speed: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum JumpPhase {
    #[default]
    Idle,
    Jumping(ActiveJump),
}

/// Player position on the road
///
/// `index` is authoritative; `pos` is derived and only meaningful for
/// drawing while a jump is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PlayerState {
    pub index: usize,
    pub pos: Vec2,
    pub phase: JumpPhase,
}

impl PlayerState {
    #[inline]
    pub fn is_jumping(&self) -> bool {
        matches!(self.phase, JumpPhase::Jumping(_))
    }
}

/// Emitted exactly once when a jump lands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JumpCompleted {
    pub index: usize,
}

/// Outcome of a jump request
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JumpStart {
    Started { target_index: usize, duration: f32 },
    /// A jump was already in flight; the request is discarded
    Dropped,
}

/// Owns the player state and the timing of the jump in flight
#[derive(Debug, Clone)]
pub struct JumpEngine {
    player: PlayerState,
    cell_width: f32,
}

impl JumpEngine {
    pub fn new(cell_width: f32) -> Self {
        Self {
            player: PlayerState::default(),
            cell_width,
        }
    }

    /// Back to cell 0, at the origin, idle
    pub fn reset(&mut self) {
        self.player = PlayerState::default();
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.player.index
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.player.pos
    }

    #[inline]
    pub fn is_jumping(&self) -> bool {
        self.player.is_jumping()
    }

    /// Start a jump of `step` cells
    ///
    /// Requests made mid-jump are dropped, not queued. If the profile
    /// cannot resolve a duration the player state is left untouched.
    pub fn start_jump(
        &mut self,
        step: Step,
        profile: &dyn MotionProfile,
    ) -> Result<JumpStart, GameError> {
        if self.player.is_jumping() {
            log::debug!("Dropping {step} jump request: already jumping");
            return Ok(JumpStart::Dropped);
        }

        let duration = resolve_duration(profile, step)?;
        let target_index = self.player.index + step.cells();
        let speed = (step.cells() as f32 * self.cell_width) / duration;

        self.player.phase = JumpPhase::Jumping(ActiveJump {
            step,
            target_index,
            origin: self.player.pos,
            target: cell_to_world(target_index, self.cell_width),
            elapsed: 0.0,
            duration,
            speed,
        });
        log::debug!(
            "Jump {} -> {} ({step}, {duration:.3}s)",
            self.player.index,
            target_index
        );

        Ok(JumpStart::Started {
            target_index,
            duration,
        })
    }

    /// Advance the jump in flight by `dt` seconds
    ///
    /// Returns the landing once elapsed time exceeds the jump duration.
    pub fn tick(&mut self, dt: f32) -> Option<JumpCompleted> {
        let JumpPhase::Jumping(jump) = &mut self.player.phase else {
            return None;
        };

        // NaN and negative deltas count as no time passing
        let dt = dt.max(0.0);
        jump.elapsed += dt;

        if jump.elapsed > jump.duration {
            let index = jump.target_index;
            self.player.pos = jump.target;
            self.player.index = index;
            self.player.phase = JumpPhase::Idle;
            return Some(JumpCompleted { index });
        }

        self.player.pos = jump.origin + Vec2::X * (jump.speed * jump.elapsed);
        None
    }
}
