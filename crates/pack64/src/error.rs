//! Pack64 error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Pack64Error {
    #[error("Vector contains an invalid value (NaN or infinite)")]
    InvalidValue,

    #[error("Vector has an entry too large to encode: magnitude {magnitude}")]
    Overflow { magnitude: f64 },

    #[error("Cannot decode string: {reason}")]
    Format { reason: String },

    #[error("Quantized value {value} does not fit in 18-bit two's complement")]
    PackingInvariantViolation { value: i64 },
}

impl Pack64Error {
    pub(crate) fn format(reason: impl Into<String>) -> Self {
        Self::Format {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Pack64Error>;
