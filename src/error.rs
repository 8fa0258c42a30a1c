//! Error types for reading turns, deciding and simulating.

use thiserror::Error;

/// Failure to read a turn from the referee feed.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("input ended while reading {what}")]
    UnexpectedEof { what: &'static str },

    #[error("missing field {what}")]
    MissingField { what: &'static str },

    #[error("invalid number for {what}: {value:?}")]
    InvalidNumber { what: &'static str, value: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A turn for which no action can be decided.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecisionError {
    #[error("no enemies left to decide against")]
    NoEnemies,

    #[error("no data points left for enemies to target")]
    NoDataPoints,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimulationError {
    #[error("shot at unknown enemy {0}")]
    UnknownTarget(i32),

    #[error("game is already over")]
    GameOver,

    #[error(transparent)]
    Decision(#[from] DecisionError),
}
