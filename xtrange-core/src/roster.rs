//! Well-known characters and loading of caller-owned character tables.

use crate::error::Result;
use crate::types::CharacterData;

/// Carries a psychiatric report.
pub const FAB: &str = "fab";
/// Carries the silver pendrive.
pub const CLERITON: &str = "cleriton";
/// Carries the pirate CD-ROM.
pub const CARLOS: &str = "carlos";
/// Carries the glowing mushroom.
pub const VINICIUS: &str = "vinicius";
/// Carries the mini electric guitar.
pub const KOUTH: &str = "kouth";
/// Always carries contraband.
pub const MATHEUS: &str = "matheus";

/// Every well-known character id.
pub const ALL: [&str; 6] = [FAB, CLERITON, CARLOS, VINICIUS, KOUTH, MATHEUS];

/// Load a JSON array of characters.
///
/// # Errors
/// Returns `XtrangeError::Serialization` if the JSON does not describe
/// a list of characters.
pub fn load_characters_json(json: &str) -> Result<Vec<CharacterData>> {
    let characters: Vec<CharacterData> = serde_json::from_str(json)?;
    tracing::debug!(count = characters.len(), "Loaded character table");
    Ok(characters)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::XtrangeError;

    #[test]
    fn loads_table_with_and_without_knowledge() {
        let json = r#"[
            {"id": "fab", "name": "Fab Godamn", "knowledgeBase": ["q: oi -> A: olá"]},
            {"id": "matheus", "name": "Matheus"}
        ]"#;
        let characters = load_characters_json(json).unwrap();
        assert_eq!(characters.len(), 2);
        assert_eq!(characters[0].id.as_str(), FAB);
        assert!(characters[1].knowledge_base.is_none());
    }

    #[test]
    fn malformed_table_is_a_serialization_error() {
        assert!(matches!(
            load_characters_json(r#"{"id": "fab"}"#),
            Err(XtrangeError::Serialization(_))
        ));
    }
}
