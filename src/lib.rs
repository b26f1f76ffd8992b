//! Stepping Road - a one-lane endless stepping game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (road generation, jump kinematics, game state)
//! - `platform`: Input device to step mapping
//! - `settings`: Configuration surface
//! - `error`: Error taxonomy shared by all of the above

pub mod error;
pub mod platform;
pub mod settings;
pub mod sim;

pub use error::GameError;
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep for the native runner (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Number of cells in a freshly generated road
    pub const DEFAULT_ROAD_LENGTH: usize = 50;
    /// Distance between neighbouring cell centers
    pub const CELL_WIDTH: f32 = 40.0;
    /// Jump duration (seconds) used when no clip table is wired
    pub const DEFAULT_JUMP_DURATION: f32 = 0.6;
    /// Delay (seconds) between the start command and input being accepted
    pub const INPUT_ENABLE_DELAY: f32 = 0.0001;
}

/// World-space position of the center of cell `index`
#[inline]
pub fn cell_to_x(index: usize, cell_width: f32) -> f32 {
    index as f32 * cell_width
}

/// World-space point for a cell on the road axis (y is always 0)
#[inline]
pub fn cell_to_world(index: usize, cell_width: f32) -> Vec2 {
    Vec2::new(cell_to_x(index, cell_width), 0.0)
}
