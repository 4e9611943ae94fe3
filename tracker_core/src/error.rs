//! Error types for the tracker_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Rejected input to one of the tracker's logging operations.
///
/// The display text is the message shown to the user on the error stream.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Calorie input cannot be negative.")]
    NegativeCalories(i64),

    #[error("Step count cannot be negative.")]
    NegativeSteps(i64),

    #[error("Water amount must be positive.")]
    NonPositiveWater(f64),

    #[error("Calorie total would exceed the supported range.")]
    CalorieTotalOverflow(u64),

    #[error("Step total would exceed the supported range.")]
    StepTotalOverflow(u64),

    #[error("Water total would exceed the supported range.")]
    WaterTotalOverflow(f64),
}

/// Core error type for tracker_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input rejected by a tracker operation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed session command
    #[error("Command error: {0}")]
    Command(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            ValidationError::NegativeCalories(-5).to_string(),
            "Calorie input cannot be negative."
        );
        assert_eq!(
            ValidationError::NegativeSteps(-1).to_string(),
            "Step count cannot be negative."
        );
        assert_eq!(
            ValidationError::NonPositiveWater(0.0).to_string(),
            "Water amount must be positive."
        );
    }

    #[test]
    fn test_validation_converts_transparently() {
        let err: Error = ValidationError::NegativeSteps(-3).into();
        assert!(matches!(err, Error::Validation(ValidationError::NegativeSteps(-3))));
        assert_eq!(err.to_string(), "Step count cannot be negative.");
    }
}
