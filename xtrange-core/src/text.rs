//! Text normalization shared by the knowledge-base lookup.
//!
//! Questions are compared after lowercasing, stripping diacritics,
//! deleting sentence punctuation (`.?!`) and trimming, so that
//! `"Você viu o Fab?"` and `"voce viu o fab"` are the same key.

use unicode_normalization::UnicodeNormalization;

/// Normalize a question or knowledge-base key for comparison.
///
/// Diacritics are stripped by NFD decomposition followed by removal of
/// the Combining Diacritical Marks block, so precomposed and decomposed
/// spellings of the same letter normalize identically.
#[must_use]
pub fn normalize(text: &str) -> String {
    let out: String = text
        .to_lowercase()
        .nfd()
        .filter(|&c| !is_combining_mark(c) && !matches!(c, '.' | '?' | '!'))
        .collect();
    out.trim().to_string()
}

/// Remove one pair of surrounding `'` or `"` quotes.
#[must_use]
pub fn strip_quotes(s: &str) -> &str {
    for quote in ['\'', '"'] {
        if let Some(inner) = s.strip_prefix(quote).and_then(|rest| rest.strip_suffix(quote)) {
            return inner;
        }
    }
    // A lone quote both starts and ends the string.
    if s == "'" || s == "\"" {
        return "";
    }
    s
}

/// Combining Diacritical Marks block.
fn is_combining_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&c)
}
