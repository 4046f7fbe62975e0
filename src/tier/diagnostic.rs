//! Non-fatal findings recorded while parsing a tier.

use serde::Serialize;

use super::TierKind;

/// What was tolerated on a line.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// An optional field was absent or empty and was replaced by a sentinel.
    MissingAttribute { field: &'static str },

    /// The timestamp precedes the previous line's timestamp.
    ReversedTimestamp { previous: f64, end: f64 },
}

/// A single issue found on one line of a tier file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    pub tier: TierKind,
    /// 1-based line number in the file.
    pub line: usize,
    #[serde(flatten)]
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    pub(crate) fn missing(tier: TierKind, line: usize, field: &'static str) -> Self {
        Self {
            tier,
            line,
            kind: DiagnosticKind::MissingAttribute { field },
        }
    }

    pub fn is_missing_attribute(&self) -> bool {
        matches!(self.kind, DiagnosticKind::MissingAttribute { .. })
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DiagnosticKind::MissingAttribute { field } => {
                write!(f, "{} line {}: missing {}", self.tier, self.line, field)
            }
            DiagnosticKind::ReversedTimestamp { previous, end } => write!(
                f,
                "{} line {}: timestamp {} precedes previous {}",
                self.tier, self.line, end, previous
            ),
        }
    }
}
