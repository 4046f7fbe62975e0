//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};

use crate::alignment::DEFAULT_TOLERANCE;
use crate::utterance::DEFAULT_SEPARATION;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub corpus: CorpusConfig,
    #[serde(default)]
    pub alignment: AlignmentConfig,
    #[serde(default)]
    pub utterance: UtteranceConfig,
}

/// Where the corpus lives and how it is read
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusConfig {
    /// Directory holding `s01.zip` … `s40.zip`
    #[serde(default = "default_directory")]
    pub directory: String,
    /// Decode `.wav` members when loading tracks
    #[serde(default)]
    pub load_audio: bool,
}

pub fn default_directory() -> String {
    "~/buckeye".to_string()
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            load_audio: false,
        }
    }
}

/// Word/phone alignment settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlignmentConfig {
    /// Slack in seconds when matching phone boundaries to word boundaries
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
}

pub fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}

impl Default for AlignmentConfig {
    fn default() -> Self {
        Self {
            tolerance: default_tolerance(),
        }
    }
}

/// Utterance grouping settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UtteranceConfig {
    /// Total pause length in seconds that ends an utterance
    #[serde(default = "default_separation")]
    pub separation: f64,
    /// Drop pauses at the edges of each utterance
    #[serde(default = "default_strip_pauses")]
    pub strip_pauses: bool,
}

pub fn default_separation() -> f64 {
    DEFAULT_SEPARATION
}

pub fn default_strip_pauses() -> bool {
    true
}

impl Default for UtteranceConfig {
    fn default() -> Self {
        Self {
            separation: default_separation(),
            strip_pauses: default_strip_pauses(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns `Ok(())` if all values are within acceptable bounds,
    /// or an error describing the first invalid value found.
    pub fn validate(&self) -> Result<(), String> {
        let tolerance = self.alignment.tolerance;
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(format!(
                "alignment.tolerance must be a non-negative number, got {}",
                tolerance
            ));
        }
        let separation = self.utterance.separation;
        if !separation.is_finite() || separation <= 0.0 {
            return Err(format!(
                "utterance.separation must be > 0, got {}",
                separation
            ));
        }
        Ok(())
    }
}
