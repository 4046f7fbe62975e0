//! Line grammar for the `.words`, `.phones` and `.log` files.
//!
//! Each body line has the shape
//!
//! ```text
//!     <end-time>  <marker> <label and attributes>
//! ```
//!
//! where the marker is the colour code written by the annotation tool
//! (always `121` in the released corpus). Word lines carry up to three extra
//! `;`-separated attributes after the label.
//!
//! # Error Handling
//!
//! A bad timestamp or a broken line structure aborts the whole tier with
//! [`CorpusError::MalformedEntry`], since alignment needs a complete,
//! order-consistent sequence. Absent labels and attributes are replaced by
//! [`MISSING`] (or `None` for a transcription) and reported as a
//! [`Diagnostic`].

use tracing::{debug, warn};

use super::{Diagnostic, DiagnosticKind, Tier, TierKind};
use crate::entry::{LogEntry, Phone, Word, MISSING};
use crate::error::{CorpusError, Result};

/// Decode corpus text. The files are Latin-1, so every byte is one char.
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

/// Split a transcript into its speaker-turn lines.
pub fn parse_transcript(text: &str) -> Vec<String> {
    text.lines().map(str::to_string).collect()
}

/// Parse a `.words` file.
pub fn parse_words(text: &str) -> Result<Tier<Word>> {
    let mut fold = Fold::new(TierKind::Words);

    for (line_no, line) in body_lines(text, TierKind::Words)? {
        let fields: Vec<&str> = line.trim().split(';').map(str::trim).collect();

        let (head, phonemic, phonetic, pos) = match fields.as_slice() {
            [head, phonemic, phonetic, pos] => (*head, Some(*phonemic), Some(*phonetic), Some(*pos)),
            [head, phonemic, pos] => (*head, Some(*phonemic), None, Some(*pos)),
            [head, pos] => (*head, None, None, Some(*pos)),
            [head] => (*head, None, None, None),
            _ => {
                return Err(malformed(
                    TierKind::Words,
                    line_no,
                    line,
                    format!("expected at most 4 ';'-separated fields, found {}", fields.len()),
                ))
            }
        };

        let timed = TimedLine::parse(TierKind::Words, line_no, line, head)?;
        let label = fold.label(line_no, timed.rest, "label");
        let phonemic = fold.transcription(line_no, phonemic, "phonemic");
        let phonetic = fold.transcription(line_no, phonetic, "phonetic");
        let pos = fold.label(line_no, pos, "pos");

        let begin = fold.advance(line_no, timed.end);
        fold.entries.push(
            Word::new(label, begin, timed.end).with_transcriptions(phonemic, phonetic, pos),
        );
    }

    Ok(fold.finish())
}

/// Parse a `.phones` file.
///
/// Stress marks (`+1`) and anything after a `;` are stripped from labels.
pub fn parse_phones(text: &str) -> Result<Tier<Phone>> {
    let mut fold = Fold::new(TierKind::Phones);

    for (line_no, line) in body_lines(text, TierKind::Phones)? {
        let timed = TimedLine::parse(TierKind::Phones, line_no, line, line)?;
        let cleaned = timed.rest.map(|rest| {
            let rest = rest.replace("+1", "");
            rest.split(';').next().unwrap_or_default().trim().to_string()
        });
        let label = fold.label(line_no, cleaned.as_deref(), "label");

        let begin = fold.advance(line_no, timed.end);
        fold.entries.push(Phone::new(label, begin, timed.end));
    }

    Ok(fold.finish())
}

/// Parse a `.log` file.
pub fn parse_log(text: &str) -> Result<Tier<LogEntry>> {
    let mut fold = Fold::new(TierKind::Log);

    for (line_no, line) in body_lines(text, TierKind::Log)? {
        let timed = TimedLine::parse(TierKind::Log, line_no, line, line)?;
        let label = fold.label(line_no, timed.rest, "label");

        let begin = fold.advance(line_no, timed.end);
        fold.entries.push(LogEntry::new(label, begin, timed.end));
    }

    Ok(fold.finish())
}

/// Skip the header and return the non-blank body lines with 1-based numbers.
fn body_lines(text: &str, tier: TierKind) -> Result<impl Iterator<Item = (usize, &str)>> {
    let mut lines = text.lines().enumerate();

    lines
        .by_ref()
        .find(|(_, line)| line.starts_with('#'))
        .ok_or(CorpusError::MissingHeader { tier })?;

    Ok(lines
        .map(|(idx, line)| (idx + 1, line))
        .filter(|(_, line)| !line.trim().is_empty()))
}

/// Forward pass state: the previous end time and the output so far.
struct Fold<T> {
    tier: TierKind,
    previous: f64,
    entries: Vec<T>,
    diagnostics: Vec<Diagnostic>,
}

impl<T: crate::entry::Interval> Fold<T> {
    fn new(tier: TierKind) -> Self {
        Self {
            tier,
            previous: 0.0,
            entries: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Return the begin time for an entry ending at `end`, and move on.
    fn advance(&mut self, line: usize, end: f64) -> f64 {
        let begin = self.previous;
        if end < begin {
            warn!(tier = %self.tier, line, begin, end, "timestamp goes backwards");
            self.diagnostics.push(Diagnostic {
                tier: self.tier,
                line,
                kind: DiagnosticKind::ReversedTimestamp {
                    previous: begin,
                    end,
                },
            });
        }
        self.previous = end;
        begin
    }

    /// A label-like field, or the sentinel when absent or empty.
    fn label(&mut self, line: usize, value: Option<&str>, field: &'static str) -> String {
        match value.map(str::trim) {
            Some(value) if !value.is_empty() => value.to_string(),
            _ => {
                self.missing(line, field);
                MISSING.to_string()
            }
        }
    }

    /// A whitespace-separated segment list. A present but blank field is an
    /// empty list; only an absent field is reported.
    fn transcription(
        &mut self,
        line: usize,
        value: Option<&str>,
        field: &'static str,
    ) -> Option<Vec<String>> {
        match value {
            Some(value) => Some(value.split_whitespace().map(str::to_string).collect()),
            None => {
                self.missing(line, field);
                None
            }
        }
    }

    fn missing(&mut self, line: usize, field: &'static str) {
        debug!(tier = %self.tier, line, field, "missing attribute");
        self.diagnostics.push(Diagnostic::missing(self.tier, line, field));
    }

    fn finish(self) -> Tier<T> {
        debug!(
            tier = %self.tier,
            entries = self.entries.len(),
            diagnostics = self.diagnostics.len(),
            "parsed tier"
        );
        Tier::new(self.tier, self.entries, self.diagnostics)
    }
}

/// The `<time> <marker> <rest>` prefix shared by all tiers.
struct TimedLine<'a> {
    end: f64,
    rest: Option<&'a str>,
}

impl<'a> TimedLine<'a> {
    /// Parse `head`, the portion of `line` that holds the timed prefix.
    fn parse(tier: TierKind, line_no: usize, line: &str, head: &'a str) -> Result<Self> {
        let (time, remainder) = next_token(head)
            .ok_or_else(|| malformed(tier, line_no, line, "missing timestamp"))?;

        let end: f64 = time
            .parse()
            .map_err(|_| malformed(tier, line_no, line, format!("invalid timestamp {:?}", time)))?;
        if !end.is_finite() || end < 0.0 {
            return Err(malformed(
                tier,
                line_no,
                line,
                format!("timestamp {} is not a non-negative number", time),
            ));
        }

        let (_marker, remainder) = next_token(remainder)
            .ok_or_else(|| malformed(tier, line_no, line, "missing tier marker column"))?;

        let rest = remainder.trim();
        Ok(Self {
            end,
            rest: (!rest.is_empty()).then_some(rest),
        })
    }
}

/// Split off the first whitespace-delimited token.
fn next_token(s: &str) -> Option<(&str, &str)> {
    let s = s.trim_start();
    if s.is_empty() {
        return None;
    }
    let split = s.find(char::is_whitespace).unwrap_or(s.len());
    Some((&s[..split], &s[split..]))
}

fn malformed(tier: TierKind, line: usize, content: &str, reason: impl Into<String>) -> CorpusError {
    CorpusError::MalformedEntry {
        tier,
        line,
        content: content.to_string(),
        reason: reason.into(),
    }
}
