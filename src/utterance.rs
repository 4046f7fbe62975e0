//! Chunks of speech bounded by long pauses.
//!
//! [`Utterances`] walks a word tier and starts a new chunk whenever the
//! pauses between words add up to at least `sep` seconds. Optionally the
//! pauses at either edge of each chunk are dropped.

use crate::entry::{Interval, Word};
use crate::error::{CorpusError, Result};

/// Default pause length (seconds) that separates two utterances.
pub const DEFAULT_SEPARATION: f64 = 0.5;

/// A chronological run of words and pauses.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Utterance<'a> {
    words: Vec<&'a Word>,
}

impl<'a> Utterance<'a> {
    /// Build an utterance from items in any order.
    ///
    /// # Errors
    ///
    /// `InvalidUtterance` when an item ends before it begins or two items overlap.
    pub fn new(mut words: Vec<&'a Word>) -> Result<Self> {
        words.sort_by(|a, b| a.begin.total_cmp(&b.begin));

        if let Some(word) = words.iter().find(|w| w.is_reversed()) {
            return Err(CorpusError::InvalidUtterance(format!(
                "{:?} ends at {} before it begins at {}",
                word.label, word.end, word.begin
            )));
        }
        if let Some(pair) = words.windows(2).find(|pair| pair[0].end > pair[1].begin) {
            return Err(CorpusError::InvalidUtterance(format!(
                "{:?} overlaps {:?}",
                pair[0].label, pair[1].label
            )));
        }

        Ok(Self { words })
    }

    /// Insert an item, keeping the utterance in chronological order.
    pub fn push(&mut self, word: &'a Word) -> Result<()> {
        if word.is_reversed() {
            return Err(CorpusError::InvalidUtterance(format!(
                "{:?} ends at {} before it begins at {}",
                word.label, word.end, word.begin
            )));
        }
        if self
            .words
            .iter()
            .any(|w| w.begin > word.begin && w.begin <= word.end)
        {
            return Err(CorpusError::InvalidUtterance(format!(
                "{:?} overlaps existing items",
                word.label
            )));
        }

        let at = self.words.partition_point(|w| w.begin <= word.begin);
        self.words.insert(at, word);
        Ok(())
    }

    pub fn words(&self) -> &[&'a Word] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Begin of the first item, or `None` when empty.
    pub fn begin(&self) -> Option<f64> {
        self.words.first().map(|w| w.begin)
    }

    /// End of the last item, or `None` when empty.
    pub fn end(&self) -> Option<f64> {
        self.words.last().map(|w| w.end)
    }

    pub fn duration(&self) -> Option<f64> {
        Some(self.end()? - self.begin()?)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Word> + '_ {
        self.words.iter().copied()
    }
}

impl std::fmt::Display for Utterance<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let labels: Vec<&str> = self.words.iter().map(|w| w.label.as_str()).collect();
        f.write_str(&labels.join(" "))
    }
}

/// Lazily groups words into utterances.
pub struct Utterances<'a, I> {
    words: I,
    sep: f64,
    strip_pauses: bool,
    done: bool,
    _marker: std::marker::PhantomData<&'a Word>,
}

/// Group `words` into utterances separated by at least `sep` seconds of pauses.
pub fn words_to_utterances<'a, I>(words: I, sep: f64, strip_pauses: bool) -> Utterances<'a, I::IntoIter>
where
    I: IntoIterator<Item = &'a Word>,
{
    Utterances {
        words: words.into_iter(),
        sep,
        strip_pauses,
        done: false,
        _marker: std::marker::PhantomData,
    }
}

impl<'a, I: Iterator<Item = &'a Word>> Iterator for Utterances<'a, I> {
    type Item = Utterance<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut current: Vec<&'a Word> = Vec::new();
        let mut pause_duration = 0.0;
        let mut pause_count = 0usize;

        for word in self.words.by_ref() {
            if word.is_pause() {
                if self.strip_pauses && current.is_empty() {
                    continue;
                }
                if pause_count == 0 {
                    pause_duration = word.duration();
                } else {
                    pause_duration += word.duration();
                }
                pause_count += 1;
            } else {
                pause_count = 0;
            }

            current.push(word);

            if pause_duration >= self.sep {
                if self.strip_pauses && pause_count > 0 {
                    current.truncate(current.len() - pause_count);
                }
                if !current.is_empty() {
                    return Some(Utterance { words: current });
                }
                pause_duration = 0.0;
                pause_count = 0;
            }
        }

        self.done = true;
        if self.strip_pauses && pause_count > 0 {
            current.truncate(current.len() - pause_count);
        }
        (!current.is_empty()).then_some(Utterance { words: current })
    }
}
