//! Shared configuration types for the scoring pipeline.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SettingsError};
use crate::scoring::DEFAULT_FUZZY_THRESHOLD;

/// Settings for grading typed answers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringSettings {
    /// Similarity ratio a typed answer must reach to count as close
    /// enough in the fuzzy verdict.
    pub fuzzy_threshold: f64,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
        }
    }
}

impl ScoringSettings {
    /// Build settings with an explicit threshold, rejecting values
    /// outside `[0.0, 1.0]`.
    pub fn with_threshold(fuzzy_threshold: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&fuzzy_threshold) {
            return Err(SettingsError::ThresholdOutOfRange {
                value: fuzzy_threshold,
            });
        }
        Ok(Self { fuzzy_threshold })
    }
}
