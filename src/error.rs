//! Errors raised while loading or querying the corpus.

use crate::tier::TierKind;

/// Errors that can occur while reading corpus data or querying a track.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("Malformed {tier} entry on line {line}: {reason} ({content:?})")]
    MalformedEntry {
        tier: TierKind,
        line: usize,
        content: String,
        reason: String,
    },

    #[error("No header terminator ('#' line) found in {tier} file")]
    MissingHeader { tier: TierKind },

    #[error("Audio was not loaded for track {track}")]
    AudioNotLoaded { track: String },

    #[error("Invalid time range [{begin}, {end}): {reason}")]
    InvalidRange { begin: f64, end: f64, reason: String },

    #[error("Container {container} has no member {member}")]
    ContainerLayout { container: String, member: String },

    #[error("Malformed speaker metadata {record:?}: {reason}")]
    MalformedMetadata { record: String, reason: String },

    #[error("Invalid utterance: {0}")]
    InvalidUtterance(String),

    #[error("Audio error: {0}")]
    Audio(#[from] hound::Error),

    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CorpusError {
    pub(crate) fn invalid_range(begin: f64, end: f64, reason: impl Into<String>) -> Self {
        CorpusError::InvalidRange {
            begin,
            end,
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the library.
pub type Result<T, E = CorpusError> = std::result::Result<T, E>;
