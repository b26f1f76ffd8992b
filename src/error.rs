//! Error taxonomy
//!
//! Configuration errors are reported to whoever assembles the game. Jump
//! errors are local: the attempt is dropped and the player stays put.

use thiserror::Error;

use crate::sim::Step;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("invalid configuration: {field} {reason}")]
    InvalidConfiguration { field: &'static str, reason: String },
    #[error("no motion profile resolves a {step} jump")]
    MissingMotionProfile { step: Step },
    #[error("step size must be 1 or 2 (got {0})")]
    InvalidStep(u8),
    #[error("failed to read settings: {0}")]
    ConfigIo(#[from] std::io::Error),
    #[error("failed to parse settings: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

impl GameError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        GameError::InvalidConfiguration {
            field,
            reason: reason.into(),
        }
    }
}
