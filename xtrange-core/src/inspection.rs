//! Inspection Resolver: eyes, teeth and pocket searches.
//!
//! A branch table keyed by (tool, character, Xtrange flag). Eyes and
//! teeth return a fixed caption with an image that reveals the Xtrange
//! state. Pockets return a signature item for special-cased characters,
//! otherwise a contraband roll whose wording gives the impostor away,
//! otherwise a random mundane item.

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::config::{InspectionConfig, XtrangeConfig};
use crate::types::{CharacterData, InspectionResult, InspectionTool};

/// Inspect one character with one tool.
#[must_use]
pub fn inspection_result<R: Rng + ?Sized>(
    character: &CharacterData,
    tool: InspectionTool,
    is_xtrange: bool,
    config: &InspectionConfig,
    rng: &mut R,
) -> InspectionResult {
    match tool {
        InspectionTool::Pockets => search_pockets(character, is_xtrange, config, rng),
        InspectionTool::Eyes => {
            let image = if is_xtrange {
                if rng.gen_bool(0.5) {
                    &config.assets.eye_xtrange
                } else {
                    &config.assets.eye_xtrange_2
                }
            } else {
                &config.assets.eye_normal
            };
            InspectionResult::with_image(&config.texts.eyes, image)
        }
        InspectionTool::Teeth => {
            let image = if is_xtrange {
                &config.assets.teeth_xtrange
            } else {
                &config.assets.teeth_normal
            };
            InspectionResult::with_image(&config.texts.teeth, image)
        }
    }
}

/// Inspect with a tool named by the UI. Unknown names are inconclusive.
#[must_use]
pub fn inspect_by_name<R: Rng + ?Sized>(
    character: &CharacterData,
    tool_name: &str,
    is_xtrange: bool,
    config: &InspectionConfig,
    rng: &mut R,
) -> InspectionResult {
    match tool_name.parse::<InspectionTool>() {
        Ok(tool) => inspection_result(character, tool, is_xtrange, config, rng),
        Err(e) => {
            debug!(error = %e, "Inspection inconclusive");
            InspectionResult::text(&config.texts.inconclusive)
        }
    }
}

/// Whether this character's pockets hold contraband.
///
/// Carriers always do; anyone else rolls against `contraband_chance`.
#[must_use]
pub fn has_contraband<R: Rng + ?Sized>(
    character: &CharacterData,
    config: &InspectionConfig,
    rng: &mut R,
) -> bool {
    let id = character.id.as_str();
    config.contraband_carriers.iter().any(|c| c == id)
        || rng.gen_bool(roll_chance(config.contraband_chance))
}

/// A probability `gen_bool` accepts. NaN counts as never.
fn roll_chance(chance: f64) -> f64 {
    if chance.is_nan() {
        0.0
    } else {
        chance.clamp(0.0, 1.0)
    }
}

fn search_pockets<R: Rng + ?Sized>(
    character: &CharacterData,
    is_xtrange: bool,
    config: &InspectionConfig,
    rng: &mut R,
) -> InspectionResult {
    if let Some(item) = config.signature_items.get(character.id.as_str()) {
        return InspectionResult::text(item);
    }

    if has_contraband(character, config, rng) {
        debug!(character = %character.id, is_xtrange, "Contraband found");
        let text = if is_xtrange {
            &config.texts.contraband_xtrange
        } else {
            &config.texts.contraband_human
        };
        return InspectionResult::text(text);
    }

    match config.pocket_items.choose(rng) {
        Some(item) => InspectionResult::text(format!("{}{item}", config.texts.pocket_prefix)),
        None => InspectionResult::text(&config.texts.inconclusive),
    }
}

/// Inspect with the stock tables and the thread RNG.
#[must_use]
pub fn get_inspection_result(
    character: &CharacterData,
    tool: InspectionTool,
    is_xtrange: bool,
) -> InspectionResult {
    inspection_result(
        character,
        tool,
        is_xtrange,
        &XtrangeConfig::default().inspection,
        &mut rand::thread_rng(),
    )
}
