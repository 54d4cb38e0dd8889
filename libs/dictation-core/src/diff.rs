//! Position-aligned character diff between a typed answer and the
//! reference sentence.

use serde::{Deserialize, Serialize};

use crate::normalize::normalize;

/// One position's comparison result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffEntry {
    /// The character rendered at this position: the typed character where
    /// one exists, otherwise the missing reference character.
    pub character: char,
    /// Whether the typed character matches the reference here.
    pub is_correct: bool,
    /// The reference character at this position. `None` when the position
    /// is correct or the typed answer overran the reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_character: Option<char>,
}

/// Compare a typed answer to the reference, character by character.
///
/// Both inputs are normalized first. The result has exactly
/// `max(typed_len, correct_len)` entries over the normalized forms, one
/// per position, so callers can render it directly as highlighted spans.
pub fn compare(user_input: &str, correct_answer: &str) -> Vec<DiffEntry> {
    let typed: Vec<char> = normalize(user_input).chars().collect();
    let correct: Vec<char> = normalize(correct_answer).chars().collect();

    let len = typed.len().max(correct.len());
    let mut entries = Vec::with_capacity(len);

    for i in 0..len {
        if i < typed.len() && i < correct.len() {
            if typed[i] == correct[i] {
                entries.push(DiffEntry {
                    character: typed[i],
                    is_correct: true,
                    expected_character: None,
                });
            } else {
                entries.push(DiffEntry {
                    character: typed[i],
                    is_correct: false,
                    expected_character: Some(correct[i]),
                });
            }
        } else if i < typed.len() {
            // Typed past the end of the reference.
            entries.push(DiffEntry {
                character: typed[i],
                is_correct: false,
                expected_character: None,
            });
        } else {
            // Typed answer ran short; surface the missing character.
            entries.push(DiffEntry {
                character: correct[i],
                is_correct: false,
                expected_character: Some(correct[i]),
            });
        }
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn single_substitution() {
        let entries = compare("こんにちは", "こんにちわ");
        assert_eq!(entries.len(), 5);
        for entry in &entries[..4] {
            assert!(entry.is_correct);
            assert_eq!(entry.expected_character, None);
        }
        assert_eq!(
            entries[4],
            DiffEntry {
                character: 'は',
                is_correct: false,
                expected_character: Some('わ'),
            }
        );
    }

    #[test]
    fn typed_answer_too_short() {
        let entries = compare("ねこ", "ねこだ");
        assert_eq!(entries.len(), 3);
        assert!(entries[0].is_correct);
        assert!(entries[1].is_correct);
        assert_eq!(
            entries[2],
            DiffEntry {
                character: 'だ',
                is_correct: false,
                expected_character: Some('だ'),
            }
        );
    }

    #[test]
    fn typed_answer_too_long() {
        let entries = compare("ねこだ", "ねこ");
        assert_eq!(entries.len(), 3);
        assert_eq!(
            entries[2],
            DiffEntry {
                character: 'だ',
                is_correct: false,
                expected_character: None,
            }
        );
    }

    #[test]
    fn length_matches_longer_normalized_input() {
        let cases = [
            ("こんにちは", "こんにちわ"),
            ("ねこ", "ねこだよ"),
            ("ねこだよ", "ねこ"),
            ("", "あいう"),
            ("あいう", ""),
        ];
        for (typed, correct) in cases {
            let expected = normalize(typed)
                .chars()
                .count()
                .max(normalize(correct).chars().count());
            assert_eq!(compare(typed, correct).len(), expected);
        }
    }

    #[test]
    fn both_empty_gives_empty_diff() {
        assert_eq!(compare("", ""), vec![]);
        assert_eq!(compare("   ", "　"), vec![]);
    }

    #[test]
    fn inputs_are_normalized_before_comparing() {
        let entries = compare("ＡＢＣ", "a b c");
        assert_eq!(entries.len(), 3);
        assert!(entries.iter().all(|e| e.is_correct));
    }

    #[test]
    fn serialized_shape_omits_expected_on_correct() {
        let entries = compare("ねこ", "ねこ");
        let value = serde_json::to_value(&entries).unwrap();
        assert_eq!(
            value,
            serde_json::json!([
                { "character": "ね", "is_correct": true },
                { "character": "こ", "is_correct": true },
            ])
        );
    }
}
