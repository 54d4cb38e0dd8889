//! Scoring strategies for typed dictation answers.
//!
//! Two deliberately separate strategies: a positional percentage score
//! that rewards exact-order accuracy, and an edit-distance similarity
//! verdict that answers "close enough?". They are never combined into a
//! single number; `grade` returns both side by side.

use serde::{Deserialize, Serialize};

use crate::diff::{compare, DiffEntry};
use crate::distance::similarity_ratio;
use crate::normalize::normalize;
use crate::types::ScoringSettings;

/// Default threshold for the fuzzy similarity verdict.
pub const DEFAULT_FUZZY_THRESHOLD: f64 = 0.8;

/// Cost per character of length mismatch, applied before percentage
/// scaling. Kept at 0.5 for compatibility with existing stored scores.
const LENGTH_PENALTY_PER_CHAR: f64 = 0.5;

/// Score a typed answer against the reference as a percentage.
///
/// Counts positions where the normalized characters match exactly,
/// subtracts half a point per character of length mismatch, and scales
/// by the reference length. An empty normalized reference scores 0.
/// Purely positional: transposed characters score poorly on purpose,
/// since dictation grades exact-order accuracy.
pub fn score(user_input: &str, correct_answer: &str) -> u8 {
    let typed: Vec<char> = normalize(user_input).chars().collect();
    let correct: Vec<char> = normalize(correct_answer).chars().collect();

    if correct.is_empty() {
        return 0;
    }

    let correct_count = typed
        .iter()
        .zip(correct.iter())
        .filter(|(t, c)| t == c)
        .count();

    let length_penalty =
        LENGTH_PENALTY_PER_CHAR * (typed.len() as f64 - correct.len() as f64).abs();
    let adjusted = correct_count as f64 - length_penalty;

    let percent = (adjusted / correct.len() as f64 * 100.0).round();
    percent.clamp(0.0, 100.0) as u8
}

/// Judge whether a typed answer is close enough to the reference.
///
/// Normalizes both, then compares the Levenshtein similarity ratio
/// against `threshold`. Two empty answers are trivially similar,
/// whatever the threshold. Out-of-range thresholds are not rejected;
/// they produce the degenerate results the formula implies.
pub fn is_similar(user_input: &str, correct_answer: &str, threshold: f64) -> bool {
    let typed = normalize(user_input);
    let correct = normalize(correct_answer);

    if typed.is_empty() && correct.is_empty() {
        return true;
    }

    similarity_ratio(&typed, &correct) >= threshold
}

/// Result of grading a typed answer against the reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeResult {
    /// Positional percentage score, 0 to 100.
    pub score: u8,
    /// Levenshtein similarity ratio between the normalized forms.
    pub similarity: f64,
    /// Whether the similarity ratio met the configured threshold.
    pub is_similar: bool,
    /// Per-position character diff for rendering feedback.
    pub diff: Vec<DiffEntry>,
    /// Normalized typed answer (for display).
    pub typed_normalized: String,
    /// Normalized correct answer (for display).
    pub correct_normalized: String,
}

/// Grade a typed answer in one call.
///
/// Runs the whole pipeline for a submitted answer: percentage score,
/// similarity verdict, and character diff, plus both normalized forms
/// for display.
pub fn grade(typed: &str, correct: &str, settings: &ScoringSettings) -> GradeResult {
    let typed_normalized = normalize(typed);
    let correct_normalized = normalize(correct);

    GradeResult {
        score: score(typed, correct),
        similarity: similarity_ratio(&typed_normalized, &correct_normalized),
        is_similar: is_similar(typed, correct, settings.fuzzy_threshold),
        diff: compare(typed, correct),
        typed_normalized,
        correct_normalized,
    }
}
