use crate::gateways;
use lw_entities::{date::DateParseError, geo::InvalidBoundsError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Bounding rectangle is invalid")]
    InvalidBounds,
    #[error("Revisit cycle must be a positive number of days (got {0})")]
    InvalidCycle(i64),
    #[error("Invalid anchor date '{0}'")]
    InvalidAnchorDate(String),
    #[error("Unknown field '{0}'")]
    UnknownField(String),
    #[error("Invalid value '{value}' for field '{name}'")]
    InvalidField { name: String, value: String },
    #[error("Cannot {action} while the workflow is {state}")]
    InvalidTransition {
        action: &'static str,
        state: &'static str,
    },
    #[error("The end date is before the start")]
    EndDateBeforeStart,
    #[error("Cloud cover must be a percentage (got {0})")]
    InvalidCloudCover(u8),
    #[error("The image is empty")]
    EmptyImage,
    #[error(transparent)]
    Gateway(#[from] gateways::Error),
}

impl From<InvalidBoundsError> for Error {
    fn from(_: InvalidBoundsError) -> Self {
        Self::InvalidBounds
    }
}

impl From<DateParseError> for Error {
    fn from(err: DateParseError) -> Self {
        Self::InvalidAnchorDate(err.0)
    }
}
