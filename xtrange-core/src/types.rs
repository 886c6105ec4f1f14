//! Core type definitions for Xtrange dialogue and inspection.
//!
//! Everything here is plain data supplied by the caller (the UI layer)
//! and serializable so character tables can be loaded from JSON.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::XtrangeError;

// ---------------------------------------------------------------------------
// Identity
// ---------------------------------------------------------------------------

/// Identity of a character, e.g. `"fab"` or `"matheus"`.
///
/// Well-known identities live in [`crate::roster`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacterId(pub String);

impl CharacterId {
    /// Create an identity from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identity string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CharacterId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// Characters
// ---------------------------------------------------------------------------

/// A character the player can interrogate and inspect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterData {
    /// Stable identity used by the inspection tables.
    pub id: CharacterId,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Scripted `q: <question> -> A: <answer>` lines, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub knowledge_base: Option<Vec<String>>,
}

impl CharacterData {
    /// Create a character with no knowledge base.
    #[must_use]
    pub fn new(id: impl Into<CharacterId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            knowledge_base: None,
        }
    }

    /// Attach knowledge-base lines.
    #[must_use]
    pub fn with_knowledge<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.knowledge_base = Some(lines.into_iter().map(Into::into).collect());
        self
    }
}

// ---------------------------------------------------------------------------
// Daily rule & corruption mechanic
// ---------------------------------------------------------------------------

/// How an Xtrange's speech is corrupted on a given day.
///
/// Serialized as its snake_case tag. Unknown tags are kept verbatim and
/// corrupt nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CorruptionMechanic {
    /// Repeat one random word.
    Repetition,
    /// Garble article/plural endings.
    Grammar,
    /// Append an insult.
    Aggression,
    /// Append a nonsense sentence.
    Nonsensical,
    /// Append a stuttered complaint.
    VisualDistortion,
    /// Any other tag. No-op.
    Unknown(String),
}

impl CorruptionMechanic {
    /// The tag string this mechanic is configured with.
    #[must_use]
    pub fn tag(&self) -> &str {
        match self {
            Self::Repetition => "repetition",
            Self::Grammar => "grammar",
            Self::Aggression => "aggression",
            Self::Nonsensical => "nonsensical",
            Self::VisualDistortion => "visual_distortion",
            Self::Unknown(tag) => tag,
        }
    }
}

impl From<&str> for CorruptionMechanic {
    fn from(tag: &str) -> Self {
        match tag {
            "repetition" => Self::Repetition,
            "grammar" => Self::Grammar,
            "aggression" => Self::Aggression,
            "nonsensical" => Self::Nonsensical,
            "visual_distortion" => Self::VisualDistortion,
            other => Self::Unknown(other.to_string()),
        }
    }
}

impl From<String> for CorruptionMechanic {
    fn from(tag: String) -> Self {
        Self::from(tag.as_str())
    }
}

impl From<CorruptionMechanic> for String {
    fn from(mechanic: CorruptionMechanic) -> Self {
        match mechanic {
            CorruptionMechanic::Unknown(tag) => tag,
            known => known.tag().to_string(),
        }
    }
}

impl fmt::Display for CorruptionMechanic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Per-session rule set for one in-game day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRule {
    /// In-game day number.
    #[serde(default)]
    pub day: u32,
    /// Hint shown to the player.
    #[serde(default)]
    pub description: String,
    /// Corruption applied to Xtrange answers today.
    pub mechanic: CorruptionMechanic,
}

impl DailyRule {
    /// Create a rule with the given mechanic and no description.
    #[must_use]
    pub fn new(day: u32, mechanic: impl Into<CorruptionMechanic>) -> Self {
        Self {
            day,
            description: String::new(),
            mechanic: mechanic.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Chat
// ---------------------------------------------------------------------------

/// One question put to a character.
#[derive(Debug, Clone, Copy)]
pub struct ChatRequest<'a> {
    /// Who is being asked.
    pub character: &'a CharacterData,
    /// Whether the character is secretly an Xtrange.
    pub is_xtrange: bool,
    /// Today's rule (selects the corruption mechanic).
    pub daily_rule: &'a DailyRule,
    /// The player's free-text question.
    pub user_message: &'a str,
}

// ---------------------------------------------------------------------------
// Inspection
// ---------------------------------------------------------------------------

/// What the player inspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InspectionTool {
    /// Biometric eye capture.
    Eyes,
    /// Dental capture.
    Teeth,
    /// Pocket search.
    Pockets,
}

impl FromStr for InspectionTool {
    type Err = XtrangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "eyes" => Ok(Self::Eyes),
            "teeth" => Ok(Self::Teeth),
            "pockets" => Ok(Self::Pockets),
            _ => Err(XtrangeError::UnknownTool(s.to_string())),
        }
    }
}

impl fmt::Display for InspectionTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Eyes => "eyes",
            Self::Teeth => "teeth",
            Self::Pockets => "pockets",
        })
    }
}

/// Flavor text plus an optional image asset reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InspectionResult {
    /// Text shown in the console.
    pub text: String,
    /// Asset identifier of the captured image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl InspectionResult {
    /// A text-only result.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            image: None,
        }
    }

    /// A result with an attached image.
    #[must_use]
    pub fn with_image(text: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            image: Some(image.into()),
        }
    }
}
