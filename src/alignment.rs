//! Cross-tier alignment.
//!
//! The three tiers of a track come from separate annotation passes, so
//! their boundaries only roughly agree. Two relations are derived after
//! parsing:
//!
//! - [`PhoneAlignment`]: for each word, the phones that lie entirely
//!   inside it (within a small tolerance). Phones straddling a word boundary
//!   belong to neither word.
//! - [`LogIndex`]: begin/end times of the log tier, answering overlap
//!   queries with binary search when the tier is in order.
//!
//! Both hold indices into the tiers and never copy entries.

use tracing::debug;

use crate::entry::Interval;
use crate::error::{CorpusError, Result};

/// Default slack, in seconds, for comparing timestamps across tiers.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Word-to-phone containment, stored as one flat index list with per-word offsets.
#[derive(Debug, Clone, Default)]
pub struct PhoneAlignment {
    offsets: Vec<usize>,
    phones: Vec<usize>,
}

impl PhoneAlignment {
    /// Associate every word with the phones it fully contains.
    ///
    /// Runs in a single pass over both tiers: the phone cursor only moves
    /// forward while word begin times are non-decreasing. When a word begins
    /// before its predecessor (a known defect in a few source files), the
    /// cursor is repositioned by binary search instead of rescanning.
    pub fn build<W: Interval, P: Interval>(words: &[W], phones: &[P], tolerance: f64) -> Self {
        let mut offsets = Vec::with_capacity(words.len() + 1);
        let mut contained = Vec::with_capacity(phones.len());
        let mut cursor = 0;
        let mut last_begin = f64::NEG_INFINITY;

        offsets.push(0);
        for word in words {
            let lower = word.begin() - tolerance;
            let upper = word.end() + tolerance;

            if word.begin() < last_begin {
                cursor = phones.partition_point(|p| p.begin() < lower);
            } else {
                while cursor < phones.len() && phones[cursor].begin() < lower {
                    cursor += 1;
                }
            }
            last_begin = word.begin();

            let mut k = cursor;
            while k < phones.len() && phones[k].begin() <= upper {
                if phones[k].begin() >= lower && phones[k].end() <= upper {
                    contained.push(k);
                }
                k += 1;
            }
            offsets.push(contained.len());
        }

        debug!(
            words = words.len(),
            phones = phones.len(),
            attached = contained.len(),
            "aligned phones to words"
        );

        Self {
            offsets,
            phones: contained,
        }
    }

    /// Number of words covered.
    pub fn len(&self) -> usize {
        self.offsets.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Indices into the phone tier for word `word`, in phone order.
    ///
    /// Empty for an out-of-range word index.
    pub fn phones_of(&self, word: usize) -> &[usize] {
        match (self.offsets.get(word), self.offsets.get(word + 1)) {
            (Some(&start), Some(&end)) => &self.phones[start..end],
            _ => &[],
        }
    }
}

/// Boundaries of a log tier for repeated overlap queries.
///
/// Valid only for the tier it was built from; the tier must not change.
/// Queries binary-search while both begin and end times are non-decreasing.
/// A tier with a backwards timestamp is scanned instead.
#[derive(Debug, Clone, Default)]
pub struct LogIndex {
    begins: Vec<f64>,
    ends: Vec<f64>,
    sorted: bool,
}

impl LogIndex {
    pub fn build<L: Interval>(log: &[L]) -> Self {
        let begins: Vec<f64> = log.iter().map(Interval::begin).collect();
        let ends: Vec<f64> = log.iter().map(Interval::end).collect();
        let sorted = is_non_decreasing(&begins) && is_non_decreasing(&ends);
        if !sorted {
            debug!(entries = log.len(), "log tier out of order, queries will scan");
        }
        Self {
            begins,
            ends,
            sorted,
        }
    }

    /// Indices of the entries overlapping `[begin, end)`, in tier order.
    ///
    /// An entry overlaps when `entry.begin < end && entry.end > begin`.
    /// A zero-width query (`begin == end`) returns the entries containing
    /// that point (`entry.begin <= begin < entry.end`).
    pub fn query(&self, begin: f64, end: f64) -> Result<Vec<usize>> {
        if !begin.is_finite() || !end.is_finite() {
            return Err(CorpusError::invalid_range(begin, end, "bounds must be finite"));
        }
        if end < begin {
            return Err(CorpusError::invalid_range(begin, end, "end precedes begin"));
        }

        if !self.sorted {
            return Ok((0..self.len())
                .filter(|&i| overlaps(self.begins[i], self.ends[i], begin, end))
                .collect());
        }

        let left = self.ends.partition_point(|&e| e <= begin);
        let right = if begin == end {
            self.begins.partition_point(|&b| b <= begin)
        } else {
            self.begins.partition_point(|&b| b < end)
        };
        Ok((left..right.max(left)).collect())
    }

    /// Whether queries can use binary search.
    pub fn is_sorted(&self) -> bool {
        self.sorted
    }

    pub fn len(&self) -> usize {
        self.begins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.begins.is_empty()
    }
}

fn overlaps(entry_begin: f64, entry_end: f64, begin: f64, end: f64) -> bool {
    if begin == end {
        entry_begin <= begin && begin < entry_end
    } else {
        entry_begin < end && entry_end > begin
    }
}

fn is_non_decreasing(times: &[f64]) -> bool {
    times.windows(2).all(|pair| pair[0] <= pair[1])
}
