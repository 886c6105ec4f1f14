//! Xtrange speech corruption.
//!
//! When an impostor answers, the day's [`CorruptionMechanic`] mutates
//! the text so an attentive player can spot it. Only `repetition` uses
//! randomness (which word gets repeated); every other mechanic is a
//! fixed transform.

use rand::Rng;
use tracing::debug;

use crate::config::CorruptionConfig;
use crate::types::CorruptionMechanic;

/// Apply `mechanic` to `text`.
#[must_use]
pub fn corrupt<R: Rng + ?Sized>(
    text: &str,
    mechanic: &CorruptionMechanic,
    config: &CorruptionConfig,
    rng: &mut R,
) -> String {
    let corrupted = match mechanic {
        CorruptionMechanic::Repetition => repeat_random_word(text, config.repetition_count, rng),
        CorruptionMechanic::Grammar => garble_grammar(text, &config.grammar_rewrites),
        CorruptionMechanic::Aggression => format!("{text}{}", config.aggression_suffix),
        CorruptionMechanic::Nonsensical => format!("{text}{}", config.nonsensical_suffix),
        CorruptionMechanic::VisualDistortion => {
            format!("{text}{}", config.visual_distortion_suffix)
        }
        CorruptionMechanic::Unknown(_) => text.to_string(),
    };
    debug!(mechanic = %mechanic, "Applied Xtrange corruption");
    corrupted
}

/// Replace one uniformly chosen space-separated word with `count`
/// copies of itself.
///
/// Splits on single spaces, so runs of spaces yield empty "words" that
/// can be chosen too.
#[must_use]
pub fn repeat_random_word<R: Rng + ?Sized>(text: &str, count: usize, rng: &mut R) -> String {
    let mut words: Vec<String> = text.split(' ').map(str::to_string).collect();
    let target = rng.gen_range(0..words.len());
    words[target] = vec![words[target].as_str(); count].join(" ");
    words.join(" ")
}

/// Run each `(from, to)` replacement over the whole text, in order.
///
/// Later rewrites see the output of earlier ones, so with the stock
/// chain every `"o "` first becomes `"a "` and then `"o "` again.
#[must_use]
pub fn garble_grammar(text: &str, rewrites: &[(String, String)]) -> String {
    rewrites
        .iter()
        .fold(text.to_string(), |acc, (from, to)| acc.replace(from.as_str(), to))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn apply(text: &str, tag: &str) -> String {
        corrupt(text, &CorruptionMechanic::from(tag), &CorruptionConfig::default(), &mut rng())
    }

    #[test]
    fn aggression_appends_insult() {
        assert_eq!(apply("Oi.", "aggression"), "Oi. ...SEU VERME INÚTIL.");
    }

    #[test]
    fn nonsensical_appends_purple_walls() {
        assert_eq!(apply("Oi.", "nonsensical"), "Oi. As paredes têm gosto de roxo.");
    }

    #[test]
    fn visual_distortion_appends_stutter() {
        assert_eq!(apply("Oi.", "visual_distortion"), "Oi. (m-minha c-cara d-dói)");
    }

    #[test]
    fn unknown_mechanic_is_identity() {
        assert_eq!(apply("Nada mudou.", "whispering"), "Nada mudou.");
    }

    #[test]
    fn grammar_chain_is_sequential() {
        // "o " -> "a " -> "o ", "a " -> "o ", "os " -> "is ", "as " -> "us ".
        assert_eq!(apply("o gato e a casa", "grammar"), "o gato e o casa");
        assert_eq!(apply("os gatos e as casas", "grammar"), "is gatis e us casas");
    }

    #[test]
    fn repetition_repeats_exactly_one_word() {
        let text = "eu estava em casa";
        let out = apply(text, "repetition");
        let words: Vec<&str> = out.split(' ').collect();
        assert_eq!(words.len(), 6);

        // Some position of the original expanded to three copies.
        let original: Vec<&str> = text.split(' ').collect();
        let expanded = (0..original.len()).any(|i| {
            let mut expected: Vec<&str> = original[..i].to_vec();
            expected.extend([original[i]; 3]);
            expected.extend(&original[i + 1..]);
            expected == words
        });
        assert!(expanded);
    }

    #[test]
    fn repetition_on_empty_text_yields_spaces() {
        let mut r = rng();
        assert_eq!(repeat_random_word("", 3, &mut r), "  ");
    }

    #[test]
    fn repetition_count_is_configurable() {
        let mut r = rng();
        assert_eq!(repeat_random_word("sim", 5, &mut r), "sim sim sim sim sim");
    }
}
