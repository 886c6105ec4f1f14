//! Configuration for the Xtrange resolvers.
//!
//! Maps directly to `xtrange.toml`. Every field has a default, so an
//! empty file reproduces the stock game tables.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::XtrangeError;
use crate::roster;

/// Top-level configuration, loadable from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct XtrangeConfig {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Response Resolver settings.
    #[serde(default)]
    pub dialogue: DialogueConfig,
    /// Corruption mechanic tuning.
    #[serde(default)]
    pub corruption: CorruptionConfig,
    /// Inspection Resolver tables.
    #[serde(default)]
    pub inspection: InspectionConfig,
}

impl XtrangeConfig {
    /// Load configuration from a TOML string.
    ///
    /// # Errors
    /// Returns `XtrangeError::Config` if the TOML is invalid or fails
    /// [`validate`](Self::validate).
    pub fn from_toml(toml_str: &str) -> crate::error::Result<Self> {
        let config: Self =
            toml::from_str(toml_str).map_err(|e| XtrangeError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Render the configuration back to TOML.
    ///
    /// # Errors
    /// Returns `XtrangeError::Config` if serialization fails.
    pub fn to_toml(&self) -> crate::error::Result<String> {
        toml::to_string_pretty(self).map_err(|e| XtrangeError::Config(e.to_string()))
    }

    /// Check value ranges that serde cannot express.
    ///
    /// # Errors
    /// Returns `XtrangeError::Config` describing the first bad value.
    pub fn validate(&self) -> crate::error::Result<()> {
        let chance = self.inspection.contraband_chance;
        if !(0.0..=1.0).contains(&chance) {
            return Err(XtrangeError::Config(format!(
                "inspection.contraband_chance must be within [0, 1], got {chance}"
            )));
        }
        if self.corruption.repetition_count == 0 {
            return Err(XtrangeError::Config(
                "corruption.repetition_count must be at least 1".to_string(),
            ));
        }
        if self.inspection.pocket_items.is_empty() {
            return Err(XtrangeError::Config(
                "inspection.pocket_items must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Sub-configs
// ---------------------------------------------------------------------------

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Response Resolver settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialogueConfig {
    /// Generic replies used when no scripted answer matches.
    #[serde(default = "default_fallback_lines")]
    pub fallback_lines: Vec<String>,
}

impl Default for DialogueConfig {
    fn default() -> Self {
        Self {
            fallback_lines: default_fallback_lines(),
        }
    }
}

/// Corruption mechanic tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorruptionConfig {
    /// How many times `repetition` writes the chosen word.
    #[serde(default = "default_repetition_count")]
    pub repetition_count: usize,
    /// Appended by `aggression`.
    #[serde(default = "default_aggression_suffix")]
    pub aggression_suffix: String,
    /// Appended by `nonsensical`.
    #[serde(default = "default_nonsensical_suffix")]
    pub nonsensical_suffix: String,
    /// Appended by `visual_distortion`.
    #[serde(default = "default_visual_distortion_suffix")]
    pub visual_distortion_suffix: String,
    /// `(from, to)` replacements applied in order by `grammar`.
    #[serde(default = "default_grammar_rewrites")]
    pub grammar_rewrites: Vec<(String, String)>,
}

impl Default for CorruptionConfig {
    fn default() -> Self {
        Self {
            repetition_count: default_repetition_count(),
            aggression_suffix: default_aggression_suffix(),
            nonsensical_suffix: default_nonsensical_suffix(),
            visual_distortion_suffix: default_visual_distortion_suffix(),
            grammar_rewrites: default_grammar_rewrites(),
        }
    }
}

/// Inspection Resolver tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectionConfig {
    /// Chance that a character without a signature item carries contraband.
    #[serde(default = "default_contraband_chance")]
    pub contraband_chance: f64,
    /// Characters who always carry contraband.
    #[serde(default = "default_contraband_carriers")]
    pub contraband_carriers: Vec<String>,
    /// Mundane items found in ordinary pockets.
    #[serde(default = "default_pocket_items")]
    pub pocket_items: Vec<String>,
    /// Fixed pocket text per character id.
    #[serde(default = "default_signature_items")]
    pub signature_items: BTreeMap<String, String>,
    /// Canned inspection texts.
    #[serde(default)]
    pub texts: InspectionTexts,
    /// Image asset identifiers.
    #[serde(default)]
    pub assets: AssetTable,
}

impl Default for InspectionConfig {
    fn default() -> Self {
        Self {
            contraband_chance: default_contraband_chance(),
            contraband_carriers: default_contraband_carriers(),
            pocket_items: default_pocket_items(),
            signature_items: default_signature_items(),
            texts: InspectionTexts::default(),
            assets: AssetTable::default(),
        }
    }
}

/// Canned inspection texts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InspectionTexts {
    /// Shown with every eye capture.
    pub eyes: String,
    /// Shown with every teeth capture.
    pub teeth: String,
    /// Contraband found on an Xtrange.
    pub contraband_xtrange: String,
    /// Contraband found on a human.
    pub contraband_human: String,
    /// Prefix for an ordinary pocket item.
    pub pocket_prefix: String,
    /// Unrecognized tool.
    pub inconclusive: String,
}

impl Default for InspectionTexts {
    fn default() -> Self {
        Self {
            eyes: "SISTEMA: CAPTURANDO IMAGEM BIOMÉTRICA OCULAR... (Analise a imagem abaixo)"
                .to_string(),
            teeth: "SISTEMA: CAPTURANDO IMAGEM DENTÁRIA... (Analise a imagem abaixo)".to_string(),
            contraband_xtrange: "SISTEMA: INCRIMINADOR: Você encontrou um tijolo de MACONHA \
                PRENSADA (fedida, cheia de galhos e sementes). Típico de um impostor."
                .to_string(),
            contraband_human: "SISTEMA: ALÍVIO: Você encontrou um ziplock com MACONHA NATURAL \
                (SKANK/FLOR). O cheiro é doce e cítrico. É coisa boa (Humano)."
                .to_string(),
            pocket_prefix: "SISTEMA: Você revistou os bolsos e encontrou: ".to_string(),
            inconclusive: "SISTEMA: Inspeção inconclusiva.".to_string(),
        }
    }
}

/// Image asset identifiers for eye and teeth captures.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetTable {
    /// Human eye.
    pub eye_normal: String,
    /// First Xtrange eye variant.
    pub eye_xtrange: String,
    /// Second Xtrange eye variant.
    pub eye_xtrange_2: String,
    /// Human teeth.
    pub teeth_normal: String,
    /// Xtrange teeth.
    pub teeth_xtrange: String,
}

impl Default for AssetTable {
    fn default() -> Self {
        Self {
            eye_normal: "assets/eyes/normal.png".to_string(),
            eye_xtrange: "assets/eyes/xtrange.png".to_string(),
            eye_xtrange_2: "assets/eyes/xtrange_2.png".to_string(),
            teeth_normal: "assets/teeth/normal.png".to_string(),
            teeth_xtrange: "assets/teeth/xtrange.png".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions for serde
// ---------------------------------------------------------------------------

fn default_log_level() -> String {
    "info".to_string()
}

fn default_fallback_lines() -> Vec<String> {
    DEFAULT_FALLBACK_LINES.iter().map(ToString::to_string).collect()
}

/// Stock generic replies.
pub const DEFAULT_FALLBACK_LINES: [&str; 5] = [
    "Não sei do que você está falando.",
    "...",
    "Pode repetir?",
    "Só me deixa entrar.",
    "Eu já disse tudo o que tinha pra dizer.",
];

fn default_repetition_count() -> usize {
    3
}

fn default_aggression_suffix() -> String {
    " ...SEU VERME INÚTIL.".to_string()
}

fn default_nonsensical_suffix() -> String {
    " As paredes têm gosto de roxo.".to_string()
}

fn default_visual_distortion_suffix() -> String {
    " (m-minha c-cara d-dói)".to_string()
}

fn default_grammar_rewrites() -> Vec<(String, String)> {
    [("o ", "a "), ("a ", "o "), ("os ", "is "), ("as ", "us ")]
        .into_iter()
        .map(|(from, to)| (from.to_string(), to.to_string()))
        .collect()
}

fn default_contraband_chance() -> f64 {
    0.15
}

fn default_contraband_carriers() -> Vec<String> {
    vec![roster::MATHEUS.to_string()]
}

fn default_signature_items() -> BTreeMap<String, String> {
    [
        (
            roster::FAB,
            "SISTEMA: Você encontrou um papel timbrado com selo médico: 'LAUDO PSICOLÓGICO: \
             O paciente Fab Godamn sofre de delírios psicóticos. Acredita que objetos \
             inanimados (machado) são familiares. Não representa perigo se a ilusão for \
             respeitada.'",
        ),
        (
            roster::CLERITON,
            "SISTEMA: Você encontrou um PENDRIVE PRATEADO com a palavra 'TEMPO' escrita à mão. \
             (Item adicionado ao inventário)",
        ),
        (
            roster::CARLOS,
            "SISTEMA: Você encontrou um CD-ROM pirata escrito 'HITS DO JAPÃO'. \
             (Item adicionado ao inventário)",
        ),
        (
            roster::VINICIUS,
            "SISTEMA: Você encontrou um COGUMELO ESTRANHO que brilha com uma cor roxa pulsante. \
             Parece... comestível?",
        ),
        (
            roster::KOUTH,
            "SISTEMA: Você encontrou uma MINI GUITARRA ELÉTRICA. (Item adicionado). \
             OBS: Conecte a guitarra no NOTEBOOK do quarto para usar.",
        ),
    ]
    .into_iter()
    .map(|(id, text)| (id.to_string(), text.to_string()))
    .collect()
}

fn default_pocket_items() -> Vec<String> {
    [
        "um isqueiro sem gás",
        "três moedas de 25 centavos",
        "um bilhete de ônibus amassado",
        "uma bala de menta grudada no papel",
        "um chaveiro sem chaves",
        "um recibo de farmácia desbotado",
        "um fone de ouvido embolado",
        "uma foto 3x4 rasgada ao meio",
    ]
    .into_iter()
    .map(ToString::to_string)
    .collect()
}
