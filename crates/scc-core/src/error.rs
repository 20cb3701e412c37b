//! # Error Types
//!
//! Errors raised by the compass core. All errors use `thiserror` for
//! derive-based `Display` and `Error` implementations.
//!
//! The scoring path itself has no failure modes: every function over the
//! dataset is total. Errors only surface at parsing boundaries, where user
//! or storage input is turned into typed values.

use thiserror::Error;

/// Top-level error type for the compass core.
#[derive(Error, Debug)]
pub enum SccError {
    /// Input failed validation.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Validation failures for domain primitives.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Provider identifier is not lowercase-hyphenated.
    #[error("invalid provider ID: \"{0}\" (expected lowercase ASCII letters, digits and single hyphens)")]
    InvalidProviderId(String),

    /// Category tag is not one of the five known categories.
    #[error("unknown provider category: \"{0}\"")]
    UnknownCategory(String),

    /// SOV criterion key is not one of the eight known criteria.
    #[error("unknown SOV criterion: \"{0}\"")]
    UnknownCriterion(String),

    /// Slider value is outside 0..=100.
    #[error("slider value {0} is outside 0..=100")]
    SliderOutOfRange(i64),
}
