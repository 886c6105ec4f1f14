//! Engine facade owning the configuration.
//!
//! The UI layer keeps one [`XtrangeEngine`] for the session and calls it
//! for every chat message and inspection. It is immutable after
//! construction, so it can be shared behind an `Arc`.

use std::path::Path;

use rand::Rng;
use tracing::info;

use crate::config::XtrangeConfig;
use crate::error::Result;
use crate::inspection;
use crate::response;
use crate::types::{CharacterData, ChatRequest, InspectionResult, InspectionTool};

/// Resolves chat replies and inspections with one configuration.
#[derive(Debug, Clone, Default)]
pub struct XtrangeEngine {
    config: XtrangeConfig,
}

impl XtrangeEngine {
    /// Create an engine from an already-validated configuration.
    #[must_use]
    pub fn new(config: XtrangeConfig) -> Self {
        Self { config }
    }

    /// Create an engine from a TOML string.
    ///
    /// # Errors
    /// Returns `XtrangeError::Config` if the TOML is invalid.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        Ok(Self::new(XtrangeConfig::from_toml(toml_str)?))
    }

    /// Create an engine from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let config = XtrangeConfig::from_file(path)?;
        info!(path = %path.display(), "Loaded Xtrange configuration");
        Ok(Self::new(config))
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &XtrangeConfig {
        &self.config
    }

    /// Reply to a chat message.
    #[must_use]
    pub fn respond(&self, request: &ChatRequest<'_>) -> String {
        self.respond_with_rng(request, &mut rand::thread_rng())
    }

    /// Reply to a chat message drawing randomness from `rng`.
    #[must_use]
    pub fn respond_with_rng<R: Rng + ?Sized>(&self, request: &ChatRequest<'_>, rng: &mut R) -> String {
        response::character_response(request, &self.config, rng)
    }

    /// Inspect a character.
    #[must_use]
    pub fn inspect(
        &self,
        character: &CharacterData,
        tool: InspectionTool,
        is_xtrange: bool,
    ) -> InspectionResult {
        self.inspect_with_rng(character, tool, is_xtrange, &mut rand::thread_rng())
    }

    /// Inspect a character drawing randomness from `rng`.
    #[must_use]
    pub fn inspect_with_rng<R: Rng + ?Sized>(
        &self,
        character: &CharacterData,
        tool: InspectionTool,
        is_xtrange: bool,
        rng: &mut R,
    ) -> InspectionResult {
        inspection::inspection_result(character, tool, is_xtrange, &self.config.inspection, rng)
    }

    /// Inspect with a tool named by the UI.
    #[must_use]
    pub fn inspect_by_name(
        &self,
        character: &CharacterData,
        tool_name: &str,
        is_xtrange: bool,
    ) -> InspectionResult {
        self.inspect_by_name_with_rng(character, tool_name, is_xtrange, &mut rand::thread_rng())
    }

    /// Inspect with a tool named by the UI, drawing randomness from `rng`.
    #[must_use]
    pub fn inspect_by_name_with_rng<R: Rng + ?Sized>(
        &self,
        character: &CharacterData,
        tool_name: &str,
        is_xtrange: bool,
        rng: &mut R,
    ) -> InspectionResult {
        inspection::inspect_by_name(character, tool_name, is_xtrange, &self.config.inspection, rng)
    }
}
