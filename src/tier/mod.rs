//! Annotation tiers: ordered entry sequences parsed from one file each.
//!
//! A tier file starts with a free-form header terminated by a line beginning
//! with `#`, followed by one entry per line:
//!
//! ```text
//! signal s0101a
//! nfields 1
//! #
//!     0.150000  121 the; dh iy; dh ah; DT
//!     0.440000  121 cat; k ae t; k ae t; NN
//! ```
//!
//! Only the end of each interval is stored; the begin is the end of the
//! previous line (0.0 for the first).

mod diagnostic;
mod reader;

pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use reader::{decode_latin1, parse_log, parse_phones, parse_transcript, parse_words};

use serde::Serialize;

use crate::entry::Interval;

/// Which annotation stream a file belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TierKind {
    Words,
    Phones,
    Log,
}

impl TierKind {
    /// File extension used for this tier inside a track archive.
    pub fn extension(&self) -> &'static str {
        match self {
            TierKind::Words => "words",
            TierKind::Phones => "phones",
            TierKind::Log => "log",
        }
    }
}

impl std::fmt::Display for TierKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

/// Parsed entries of one tier, plus any tolerated anomalies.
#[derive(Debug, Clone)]
pub struct Tier<T> {
    kind: TierKind,
    entries: Vec<T>,
    diagnostics: Vec<Diagnostic>,
}

impl<T: Interval> Tier<T> {
    pub fn new(kind: TierKind, entries: Vec<T>, diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            kind,
            entries,
            diagnostics,
        }
    }

    pub fn kind(&self) -> TierKind {
        self.kind
    }

    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    /// Non-fatal issues found while parsing, in line order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.entries.get(index)
    }

    /// End of the last entry, or 0.0 for an empty tier.
    pub fn end(&self) -> f64 {
        self.entries.last().map(|e| e.end()).unwrap_or(0.0)
    }

    /// Whether begin times never decrease.
    pub fn is_sorted(&self) -> bool {
        self.entries.windows(2).all(|w| w[0].begin() <= w[1].begin())
    }
}

impl<T> std::ops::Index<usize> for Tier<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.entries[index]
    }
}

impl<'a, T> IntoIterator for &'a Tier<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
