//! Crate-wide error type.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors produced by reconstruction, chart building, and rendering.
#[derive(Error, Debug)]
pub enum ScheduleError {
    /// Input rejected before any timing record was computed.
    #[error(
        "invalid input ({} problem(s)): {}",
        .0.len(),
        .0.iter().map(|e| e.message.as_str()).collect::<Vec<_>>().join("; ")
    )]
    InvalidInput(Vec<ValidationError>),

    #[error("render failed: {0}")]
    Render(#[from] std::fmt::Error),

    #[error("configuration error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("logging setup failed: {0}")]
    Logging(String),
}

impl ScheduleError {
    /// Validation problems carried by an `InvalidInput` error.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::InvalidInput(errors) => errors,
            _ => &[],
        }
    }
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
