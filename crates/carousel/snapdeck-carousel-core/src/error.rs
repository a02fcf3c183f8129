//! Error types for carousel configuration.
//!
//! Runtime inputs never fail: out-of-range indices are clamped and calls made
//! before mount are ignored. Only building an engine from an invalid config
//! (or unparsable JSON) is reported as an error.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum CarouselError {
    #[error("item size must be finite and > 0, got {0}")]
    InvalidItemSize(f32),

    #[error("slider size must be finite and >= 0, got {0}")]
    InvalidSliderSize(f32),

    /// Opacity/scale thresholds are fractions of the active slide.
    #[error("{field} must lie in [0, 1], got {value}")]
    OutOfUnitRange { field: &'static str, value: f32 },

    #[error("{field} must be finite and >= 0, got {value}")]
    Negative { field: &'static str, value: f32 },

    #[error("carousel config parse error: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for CarouselError {
    fn from(e: serde_json::Error) -> Self {
        CarouselError::Parse(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CarouselError>;
