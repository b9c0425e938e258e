//! Errors raised while preparing trend details.

use thiserror::Error;

use crate::domain::foundation::{ErrorCode, ValidationError};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrendDetailsError {
    #[error("No place selected for comparison")]
    NoPlaceSelected,

    #[error("Year range {since}-{until} is empty")]
    InvalidYearRange { since: i32, until: i32 },

    #[error("Year selection '{0}' is not a number")]
    InvalidYear(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl TrendDetailsError {
    pub fn code(&self) -> ErrorCode {
        match self {
            TrendDetailsError::NoPlaceSelected => ErrorCode::NoPlaceSelected,
            TrendDetailsError::InvalidYearRange { .. } => ErrorCode::InvalidYearRange,
            TrendDetailsError::InvalidYear(_) => ErrorCode::InvalidYear,
            TrendDetailsError::Validation(err) => err.code(),
        }
    }
}
