use std::num::{ParseFloatError, ParseIntError};

use thiserror::Error;

/// Numeric helper errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UtilsError {
    #[error("invalid number: {0}")]
    InvalidNumber(String),

    #[error("invalid empty input")]
    EmptyInput,

    #[error("exponent too large: {0}")]
    ExponentTooLarge(u32),

    #[error("parse float error: {0}")]
    ParseFloat(#[from] ParseFloatError),

    #[error("parse int error: {0}")]
    ParseInt(#[from] ParseIntError),
}
