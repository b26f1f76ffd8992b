//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded or scripted randomness only
//! - Time advances only through `tick`
//! - No rendering or platform dependencies

pub mod evaluate;
pub mod jump;
pub mod motion;
pub mod road;
pub mod state;
pub mod tick;
pub mod timer;

pub use evaluate::{Verdict, evaluate};
pub use jump::{ActiveJump, JumpCompleted, JumpEngine, JumpPhase, JumpStart, PlayerState};
pub use motion::{ClipTable, FixedDuration, MotionProfile, Step};
pub use road::{BitSource, Cell, CellPlacement, Road, ScriptedBits};
pub use state::{DropReason, GameEvent, GamePhase, GameState, Hud};
pub use tick::{TickInput, tick};
pub use timer::{TimerAction, Timers};
