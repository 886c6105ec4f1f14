//! Knowledge-base parsing and canonical answer lookup.
//!
//! Each knowledge-base line scripts one question/answer pair:
//!
//! ```text
//! q: Onde você estava ontem? -> A: "Em casa, dormindo."
//! ```
//!
//! The format is loose. A line only needs a `->` to take part in
//! matching; the answer is read from after the exact `-> A: ` delimiter.
//! Lines that don't fit are skipped silently and the caller falls back
//! to a generic response.

use tracing::{debug, trace};

use crate::text::{normalize, strip_quotes};
use crate::types::CharacterData;

/// Separates the question from the answer for matching purposes.
pub const KEY_SEPARATOR: &str = "->";

/// Exact delimiter the answer is read after.
pub const ANSWER_DELIMITER: &str = "-> A: ";

/// One parsed knowledge-base line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnowledgeEntry<'a> {
    /// The question as written, `q:` prefix removed.
    pub question: &'a str,
    /// The canonical answer, if the line carries a well-formed one.
    pub answer: Option<&'a str>,
}

impl<'a> KnowledgeEntry<'a> {
    /// Parse a line. Returns `None` when the line has no `->` at all.
    #[must_use]
    pub fn parse(line: &'a str) -> Option<Self> {
        let (raw_key, _) = line.split_once(KEY_SEPARATOR)?;
        Some(Self {
            question: strip_question_prefix(raw_key),
            answer: extract_answer(line),
        })
    }

    /// Whether this entry answers `normalized_question`.
    #[must_use]
    pub fn matches(&self, normalized_question: &str) -> bool {
        normalize(self.question) == normalized_question
    }
}

/// A borrowed view over a character's knowledge base.
#[derive(Debug, Clone, Copy)]
pub struct KnowledgeBase<'a> {
    lines: &'a [String],
}

impl<'a> KnowledgeBase<'a> {
    /// Wrap raw lines.
    #[must_use]
    pub fn new(lines: &'a [String]) -> Self {
        Self { lines }
    }

    /// The character's knowledge base, if it has one.
    #[must_use]
    pub fn of(character: &'a CharacterData) -> Option<Self> {
        character.knowledge_base.as_deref().map(Self::new)
    }

    /// All parseable entries, in order.
    pub fn entries(self) -> impl Iterator<Item = KnowledgeEntry<'a>> + 'a {
        self.lines.iter().filter_map(|line| KnowledgeEntry::parse(line))
    }

    /// The scripted questions, as written.
    #[must_use]
    pub fn questions(&self) -> Vec<&'a str> {
        self.entries().map(|e| e.question.trim()).collect()
    }

    /// Find the canonical answer to `question`.
    ///
    /// Only the first entry whose normalized key equals the normalized
    /// question is consulted. If that entry has no usable answer the
    /// lookup yields `None` without trying later lines.
    #[must_use]
    pub fn lookup(&self, question: &str) -> Option<&'a str> {
        let wanted = normalize(question);
        trace!(normalized = %wanted, "Knowledge lookup");

        let entry = self.entries().find(|e| e.matches(&wanted))?;
        match entry.answer {
            Some(answer) => {
                debug!(question = entry.question.trim(), "Canonical answer found");
                Some(answer)
            }
            None => {
                debug!(
                    question = entry.question.trim(),
                    "Matched line has no usable answer"
                );
                None
            }
        }
    }
}

/// Look up the canonical answer a character gives to `question`.
#[must_use]
pub fn find_canonical_response<'a>(character: &'a CharacterData, question: &str) -> Option<&'a str> {
    KnowledgeBase::of(character)?.lookup(question)
}

/// Drop a leading `q:` (any case) and the whitespace after it.
fn strip_question_prefix(key: &str) -> &str {
    match key.get(..2) {
        Some(prefix) if prefix.eq_ignore_ascii_case("q:") => key[2..].trim_start(),
        _ => key,
    }
}

/// Text between the first and second answer delimiter, trimmed and
/// unquoted. Empty answers count as missing.
fn extract_answer(line: &str) -> Option<&str> {
    let mut parts = line.split(ANSWER_DELIMITER);
    parts.next();
    let answer = strip_quotes(parts.next()?.trim());
    (!answer.is_empty()).then_some(answer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn parses_prefix_and_quoted_answer() {
        let entry = KnowledgeEntry::parse("q: Quem é você? -> A: 'Sou o Fab.'").unwrap();
        assert_eq!(entry.question, "Quem é você? ");
        assert_eq!(entry.answer, Some("Sou o Fab."));
    }

    #[test]
    fn prefix_is_case_insensitive() {
        let entry = KnowledgeEntry::parse("Q:   oi -> A: olá").unwrap();
        assert_eq!(entry.question, "oi ");
    }

    #[test]
    fn line_without_separator_is_skipped() {
        assert!(KnowledgeEntry::parse("q: oi A: olá").is_none());
    }

    #[test]
    fn lowercase_answer_marker_has_no_answer() {
        let entry = KnowledgeEntry::parse("q: oi -> a: olá").unwrap();
        assert_eq!(entry.answer, None);
    }

    #[test]
    fn answer_stops_at_second_delimiter() {
        let entry = KnowledgeEntry::parse("q: oi -> A: um -> A: dois").unwrap();
        assert_eq!(entry.answer, Some("um"));
    }

    #[test]
    fn lookup_normalizes_both_sides() {
        let kb = lines(&["q: Você viu o Fab? -> A: \"Não vi ninguém.\""]);
        let base = KnowledgeBase::new(&kb);
        assert_eq!(base.lookup("voce viu o fab"), Some("Não vi ninguém."));
        assert_eq!(base.lookup("  VOCÊ VIU O FAB!!  "), Some("Não vi ninguém."));
        assert_eq!(base.lookup("você viu o carlos?"), None);
    }

    #[test]
    fn decomposed_question_matches_precomposed_key() {
        let kb = lines(&["q: \u{0219}tii? -> A: da"]);
        assert_eq!(KnowledgeBase::new(&kb).lookup("s\u{0326}tii?"), Some("da"));
    }

    #[test]
    fn first_match_wins_even_when_malformed() {
        let kb = lines(&["q: oi -> a: quebrado", "q: oi -> A: certo"]);
        assert_eq!(KnowledgeBase::new(&kb).lookup("oi"), None);
    }

    #[test]
    fn empty_quoted_answer_is_missing() {
        let kb = lines(&["q: oi -> A: ''"]);
        assert_eq!(KnowledgeBase::new(&kb).lookup("oi"), None);
    }

    #[test]
    fn questions_lists_scripted_keys() {
        let kb = lines(&["q: oi -> A: olá", "lixo", "q: tchau? -> A: falou"]);
        assert_eq!(KnowledgeBase::new(&kb).questions(), vec!["oi", "tchau?"]);
    }

    #[test]
    fn character_without_knowledge_has_no_answer() {
        let character = CharacterData::new("kouth", "Kouth");
        assert_eq!(find_canonical_response(&character, "oi"), None);
    }
}
