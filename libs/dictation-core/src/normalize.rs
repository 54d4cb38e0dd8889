//! Input normalization applied before any comparison.

/// Code point offset between full-width ASCII variants and their
/// half-width forms.
const WIDTH_OFFSET: u32 = 0xFEE0;

/// Canonicalize a raw answer string for comparison.
///
/// Removes every whitespace character (Japanese text has no meaningful
/// word spacing, so spacing differences must never count as errors),
/// folds full-width ASCII variants (`！` through `～`) to half-width,
/// and lowercases the result. Kana, kanji, and unmapped symbols pass
/// through unchanged.
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .map(fold_width)
        .flat_map(|c| c.to_lowercase())
        .collect()
}

/// Map a full-width ASCII variant to its half-width form.
///
/// The whole U+FF01..=U+FF5E block is shifted, with no per-symbol
/// exceptions. Half-width katakana (U+FF61 and up) sit outside the block
/// and are untouched.
fn fold_width(c: char) -> char {
    match c {
        '！'..='～' => char::from_u32(c as u32 - WIDTH_OFFSET).unwrap_or(c),
        _ => c,
    }
}
