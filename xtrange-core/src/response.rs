//! Response Resolver: what a character says back to the player.
//!
//! 1. Look the question up in the character's knowledge base.
//! 2. No scripted answer → pick a generic fallback line.
//! 3. Xtrange → corrupt the text with the day's mechanic.

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, warn};

use crate::config::{DEFAULT_FALLBACK_LINES, DialogueConfig, XtrangeConfig};
use crate::corruption;
use crate::knowledge::find_canonical_response;
use crate::types::{CharacterData, ChatRequest, DailyRule};

/// Resolve a character's reply to one question.
#[must_use]
pub fn character_response<R: Rng + ?Sized>(
    request: &ChatRequest<'_>,
    config: &XtrangeConfig,
    rng: &mut R,
) -> String {
    let response = match find_canonical_response(request.character, request.user_message) {
        Some(answer) => answer.to_string(),
        None => {
            debug!(
                character = %request.character.id,
                "No scripted answer, using fallback"
            );
            pick_fallback(&config.dialogue, rng).to_string()
        }
    };

    if request.is_xtrange {
        corruption::corrupt(
            &response,
            &request.daily_rule.mechanic,
            &config.corruption,
            rng,
        )
    } else {
        response
    }
}

/// Choose a generic reply uniformly at random.
///
/// An empty configured list falls back to the stock lines.
#[must_use]
pub fn pick_fallback<'a, R: Rng + ?Sized>(config: &'a DialogueConfig, rng: &mut R) -> &'a str {
    if let Some(line) = config.fallback_lines.choose(rng) {
        return line;
    }
    warn!("Fallback table is empty, using stock lines");
    DEFAULT_FALLBACK_LINES
        .choose(rng)
        .copied()
        .unwrap_or(DEFAULT_FALLBACK_LINES[0])
}

/// Reply with the stock tables and the thread RNG.
#[must_use]
pub fn get_character_response(
    character: &CharacterData,
    is_xtrange: bool,
    daily_rule: &DailyRule,
    user_message: &str,
) -> String {
    let request = ChatRequest {
        character,
        is_xtrange,
        daily_rule,
        user_message,
    };
    character_response(&request, &XtrangeConfig::default(), &mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn fab() -> CharacterData {
        CharacterData::new("fab", "Fab Godamn").with_knowledge([
            "q: Quem é você? -> A: 'Sou o Fab, e este é meu irmão.'",
            "q: O que é isso na sua mão? -> A: \"É o Machado. Ele é da família.\"",
        ])
    }

    fn ask(character: &CharacterData, is_xtrange: bool, mechanic: &str, message: &str) -> String {
        let rule = DailyRule::new(1, mechanic);
        let request = ChatRequest {
            character,
            is_xtrange,
            daily_rule: &rule,
            user_message: message,
        };
        character_response(&request, &XtrangeConfig::default(), &mut StdRng::seed_from_u64(1))
    }

    #[test]
    fn human_gets_canonical_answer() {
        assert_eq!(
            ask(&fab(), false, "aggression", "quem e voce"),
            "Sou o Fab, e este é meu irmão."
        );
    }

    #[test]
    fn xtrange_answer_is_corrupted() {
        assert_eq!(
            ask(&fab(), true, "aggression", "Quem é você?"),
            "Sou o Fab, e este é meu irmão. ...SEU VERME INÚTIL."
        );
    }

    #[test]
    fn unmatched_question_uses_fallback() {
        let reply = ask(&fab(), false, "aggression", "qual a senha do wifi?");
        assert!(DEFAULT_FALLBACK_LINES.contains(&reply.as_str()));
    }

    #[test]
    fn fallback_is_corrupted_too() {
        let reply = ask(&fab(), true, "nonsensical", "qual a senha do wifi?");
        let stripped = reply.strip_suffix(" As paredes têm gosto de roxo.").unwrap();
        assert!(DEFAULT_FALLBACK_LINES.contains(&stripped));
    }

    #[test]
    fn empty_fallback_table_uses_stock_lines() {
        let config = DialogueConfig {
            fallback_lines: Vec::new(),
        };
        let line = pick_fallback(&config, &mut StdRng::seed_from_u64(3));
        assert!(DEFAULT_FALLBACK_LINES.contains(&line));
    }

    #[test]
    fn thread_rng_entry_point_answers() {
        let rule = DailyRule::new(2, "grammar");
        assert_eq!(
            get_character_response(&fab(), false, &rule, "o que é isso na sua mão"),
            "É o Machado. Ele é da família."
        );
    }
}
