use std::num::ParseFloatError;

use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid reading `{input}`: {source}")]
    UnparsableReading {
        input: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("serialization failed: {0}")]
    Serialization(String),

    #[error("render backend failure: {0}")]
    Backend(String),
}

impl ChartError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Returns `true` for every caller-side precondition violation.
    ///
    /// Parse failures of raw reading text belong to the same class as
    /// structural input errors: both mean the chart cannot be drawn from
    /// the supplied data.
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_) | Self::UnparsableReading { .. })
    }
}
