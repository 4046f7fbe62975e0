//! Type definitions for Buckeye annotation entries.
//!
//! Every annotation tier in the corpus is a sequence of labelled time
//! intervals. The three tiers carry different payloads:
//!
//! - `.words`: orthographic label, dictionary and observed transcriptions,
//!   and a part-of-speech tag
//! - `.phones`: a single pseudo-ARPABET segment label
//! - `.log`: a free-text annotation such as `<VOICE=creaky>`
//!
//! All entries are immutable once parsed.

use serde::Serialize;

/// Sentinel stored in place of a label or tag that is absent from the source line.
pub const MISSING: &str = "<missing>";

// ============================================================================
// Interval
// ============================================================================

/// A labelled time interval, in seconds from the start of the track.
pub trait Interval {
    /// Timestamp where the interval begins.
    fn begin(&self) -> f64;

    /// Timestamp where the interval ends.
    fn end(&self) -> f64;

    /// Label of this interval.
    fn label(&self) -> &str;

    /// Duration in seconds. Negative when the source timestamps go backwards.
    fn duration(&self) -> f64 {
        self.end() - self.begin()
    }

    /// Whether `end` precedes `begin`.
    fn is_reversed(&self) -> bool {
        self.duration() < 0.0
    }
}

macro_rules! impl_interval {
    ($ty:ty) => {
        impl Interval for $ty {
            fn begin(&self) -> f64 {
                self.begin
            }

            fn end(&self) -> f64 {
                self.end
            }

            fn label(&self) -> &str {
                &self.label
            }
        }
    };
}

// ============================================================================
// Word tier
// ============================================================================

/// Whether a word-tier entry is a lexical item or a non-speech event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WordKind {
    /// An ordinary word.
    Lexical,

    /// Silence, noise, laughter, track boundaries and other entries written
    /// in `<...>` or `{...}` braces.
    Pause,
}

impl WordKind {
    /// Classify a word-tier label.
    pub fn from_label(label: &str) -> Self {
        if label.starts_with('<') || label.starts_with('{') {
            WordKind::Pause
        } else {
            WordKind::Lexical
        }
    }
}

/// One entry of a `.words` file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Word {
    /// Written form of the word, or the pause label (e.g. `<SIL>`).
    pub label: String,
    pub begin: f64,
    pub end: f64,
    pub kind: WordKind,
    /// Dictionary (citation form) transcription, `None` when the field is absent.
    pub phonemic: Option<Vec<String>>,
    /// Close phonetic transcription, `None` when the field is absent.
    pub phonetic: Option<Vec<String>>,
    /// Part of speech, or [`MISSING`].
    pub pos: String,
}

impl Word {
    /// Create a lexical word or a pause depending on the label.
    pub fn new(label: impl Into<String>, begin: f64, end: f64) -> Self {
        let label = label.into();
        Self {
            kind: WordKind::from_label(&label),
            label,
            begin,
            end,
            phonemic: None,
            phonetic: None,
            pos: MISSING.to_string(),
        }
    }

    /// Attach transcriptions and a part-of-speech tag.
    pub fn with_transcriptions(
        mut self,
        phonemic: Option<Vec<String>>,
        phonetic: Option<Vec<String>>,
        pos: impl Into<String>,
    ) -> Self {
        self.phonemic = phonemic;
        self.phonetic = phonetic;
        self.pos = pos.into();
        self
    }

    pub fn is_pause(&self) -> bool {
        self.kind == WordKind::Pause
    }

    /// Dictionary segments; empty when absent.
    pub fn phonemic(&self) -> &[String] {
        self.phonemic.as_deref().unwrap_or_default()
    }

    /// Observed segments; empty when absent.
    pub fn phonetic(&self) -> &[String] {
        self.phonetic.as_deref().unwrap_or_default()
    }

    /// Whether the part-of-speech tag was present in the source line.
    pub fn has_pos(&self) -> bool {
        self.pos != MISSING
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3}-{:.3}: {}", self.begin, self.end, self.label)
    }
}

// ============================================================================
// Phone tier
// ============================================================================

/// One entry of a `.phones` file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Phone {
    /// Segment label, or [`MISSING`].
    pub label: String,
    pub begin: f64,
    pub end: f64,
}

impl Phone {
    pub fn new(label: impl Into<String>, begin: f64, end: f64) -> Self {
        Self {
            label: label.into(),
            begin,
            end,
        }
    }
}

impl std::fmt::Display for Phone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {:.3}-{:.3}", self.label, self.begin, self.end)
    }
}

// ============================================================================
// Log tier
// ============================================================================

/// One entry of a `.log` file (transcriber notes, voice quality, noise).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogEntry {
    /// Annotation text, or [`MISSING`].
    pub label: String,
    pub begin: f64,
    pub end: f64,
}

impl LogEntry {
    pub fn new(label: impl Into<String>, begin: f64, end: f64) -> Self {
        Self {
            label: label.into(),
            begin,
            end,
        }
    }
}

impl std::fmt::Display for LogEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3}-{:.3}: {}", self.begin, self.end, self.label)
    }
}

impl_interval!(Word);
impl_interval!(Phone);
impl_interval!(LogEntry);
