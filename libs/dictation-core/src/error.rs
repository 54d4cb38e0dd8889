//! Error types for dictation-core.

use thiserror::Error;

/// Result type alias using SettingsError.
pub type Result<T> = std::result::Result<T, SettingsError>;

/// Errors that can occur when building scoring settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("fuzzy threshold {value} is outside [0.0, 1.0]")]
    ThresholdOutOfRange { value: f64 },
}
