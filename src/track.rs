//! One recording session: three aligned tiers, a transcript and optional audio.

use std::path::Path;

use serde::Serialize;
use tracing::{debug, info};

use crate::alignment::{LogIndex, PhoneAlignment, DEFAULT_TOLERANCE};
use crate::audio::{Audio, AudioClip};
use crate::container::{self, missing_member, Container};
use crate::entry::{Interval, LogEntry, Phone, Word};
use crate::error::{CorpusError, Result};
use crate::tier::{self, decode_latin1, Diagnostic, Tier};
use crate::utterance::{words_to_utterances, Utterances};

/// How tracks are read from their containers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadOptions {
    /// Decode the `.wav` member so clips can be cut.
    pub load_audio: bool,
    /// Slack in seconds when matching phones to words.
    pub tolerance: f64,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            load_audio: false,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl LoadOptions {
    pub fn with_audio(mut self, load_audio: bool) -> Self {
        self.load_audio = load_audio;
        self
    }
}

/// A fully parsed and aligned recording, e.g. `s0101a`.
#[derive(Debug)]
pub struct Track {
    name: String,
    words: Tier<Word>,
    phones: Tier<Phone>,
    log: Tier<LogEntry>,
    transcript: Vec<String>,
    audio: Option<Audio>,
    alignment: PhoneAlignment,
    log_index: LogIndex,
}

impl Track {
    /// Build a track from the decoded text of its four annotation files.
    pub fn parse(
        name: impl Into<String>,
        words: &str,
        phones: &str,
        log: &str,
        transcript: &str,
        tolerance: f64,
    ) -> Result<Self> {
        let words = tier::parse_words(words)?;
        let phones = tier::parse_phones(phones)?;
        let log = tier::parse_log(log)?;

        let alignment = PhoneAlignment::build(words.entries(), phones.entries(), tolerance);
        let log_index = LogIndex::build(log.entries());

        Ok(Self {
            name: name.into(),
            words,
            phones,
            log,
            transcript: tier::parse_transcript(transcript),
            audio: None,
            alignment,
            log_index,
        })
    }

    /// Attach decoded audio.
    pub fn with_audio(mut self, audio: Audio) -> Self {
        self.audio = Some(audio);
        self
    }

    /// Load a track from a `.zip` archive or an unpacked track directory.
    pub fn open<P: AsRef<Path>>(path: P, options: &LoadOptions) -> Result<Self> {
        let mut container = container::open(path)?;
        Self::from_container(container.as_mut(), options)
    }

    /// Load a track from an open container holding `<name>.words`,
    /// `<name>.phones`, `<name>.log`, `<name>.txt` and, when audio is
    /// requested, `<name>.wav`.
    pub fn from_container(container: &mut dyn Container, options: &LoadOptions) -> Result<Self> {
        let name = container.name().to_string();
        let members = container.members()?;

        let mut text = |ext: &str| -> Result<String> {
            let member = find_member(&members, &name, ext)?;
            Ok(decode_latin1(&container.read(member)?))
        };
        let words = text("words")?;
        let phones = text("phones")?;
        let log = text("log")?;
        let transcript = text("txt")?;

        let mut track = Self::parse(&name, &words, &phones, &log, &transcript, options.tolerance)?;

        if options.load_audio {
            let member = find_member(&members, &name, "wav")?;
            track.audio = Some(Audio::from_wav_bytes(&container.read(member)?)?);
        }

        info!(
            track = %track.name,
            words = track.words.len(),
            phones = track.phones.len(),
            log = track.log.len(),
            audio = track.audio.is_some(),
            "loaded track"
        );
        Ok(track)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn words(&self) -> &Tier<Word> {
        &self.words
    }

    pub fn phones(&self) -> &Tier<Phone> {
        &self.phones
    }

    pub fn log(&self) -> &Tier<LogEntry> {
        &self.log
    }

    /// Transcript lines, one per speaker turn.
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    pub fn audio(&self) -> Option<&Audio> {
        self.audio.as_ref()
    }

    pub fn has_audio(&self) -> bool {
        self.audio.is_some()
    }

    /// Indices into [`Track::phones`] for word `word`.
    pub fn phone_indices(&self, word: usize) -> &[usize] {
        self.alignment.phones_of(word)
    }

    /// Phones fully contained in word `word`, in order.
    pub fn word_phones(&self, word: usize) -> Vec<&Phone> {
        self.phone_indices(word)
            .iter()
            .map(|&i| &self.phones[i])
            .collect()
    }

    /// Every word together with its aligned phones.
    pub fn aligned_words(&self) -> impl Iterator<Item = AlignedWord<'_>> + '_ {
        self.words.iter().enumerate().map(move |(index, word)| AlignedWord {
            index,
            word,
            track: self,
        })
    }

    /// Log entries overlapping `[begin, end)`, in tier order.
    ///
    /// # Errors
    ///
    /// `InvalidRange` when `end < begin` or either bound is not finite.
    pub fn get_logs(&self, begin: f64, end: f64) -> Result<Vec<&LogEntry>> {
        let hits = self.log_index.query(begin, end)?;
        debug!(track = %self.name, begin, end, found = hits.len(), "log query");
        Ok(hits.into_iter().map(|i| &self.log[i]).collect())
    }

    /// Cut `[begin, end)` seconds out of the track's audio.
    ///
    /// # Errors
    ///
    /// `AudioNotLoaded` when the track was loaded without audio, and
    /// `InvalidRange` for empty, reversed or out-of-bounds ranges.
    pub fn clip_audio(&self, begin: f64, end: f64) -> Result<AudioClip> {
        let audio = self.audio.as_ref().ok_or_else(|| CorpusError::AudioNotLoaded {
            track: self.name.clone(),
        })?;
        audio.clip(begin, end)
    }

    /// Cut `[begin, end)` and write it as a WAV file.
    pub fn clip_wav<P: AsRef<Path>>(&self, path: P, begin: f64, end: f64) -> Result<AudioClip> {
        let clip = self.clip_audio(begin, end)?;
        clip.write(path)?;
        Ok(clip)
    }

    /// Length in seconds: the end of the word tier, or the audio if longer.
    pub fn duration(&self) -> f64 {
        let words = self.words.end();
        match &self.audio {
            Some(audio) => words.max(audio.duration()),
            None => words,
        }
    }

    /// Group the words into utterances separated by at least `sep` seconds of pauses.
    pub fn utterances(&self, sep: f64, strip_pauses: bool) -> Utterances<'_, std::slice::Iter<'_, Word>> {
        words_to_utterances(self.words.iter(), sep, strip_pauses)
    }

    /// Diagnostics from all three tiers.
    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> + '_ {
        self.words
            .diagnostics()
            .iter()
            .chain(self.phones.diagnostics())
            .chain(self.log.diagnostics())
    }
}

fn find_member<'a>(members: &'a [String], name: &str, ext: &str) -> Result<&'a String> {
    let wanted = format!("{}.{}", name, ext);
    members
        .iter()
        .find(|m| *m == &wanted || m.ends_with(&format!("/{}", wanted)))
        .ok_or_else(|| missing_member(name, &wanted))
}

/// A word viewed together with the phones aligned to it.
#[derive(Debug, Clone, Copy)]
pub struct AlignedWord<'a> {
    index: usize,
    word: &'a Word,
    track: &'a Track,
}

impl<'a> AlignedWord<'a> {
    /// Position of the word in the word tier.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn word(&self) -> &'a Word {
        self.word
    }

    pub fn phones(&self) -> Vec<&'a Phone> {
        self.track.word_phones(self.index)
    }

    pub fn phone_labels(&self) -> Vec<&'a str> {
        self.track
            .phone_indices(self.index)
            .iter()
            .map(|&i| self.track.phones[i].label.as_str())
            .collect()
    }

    /// Whether the word's timing or phones disagree with its annotation.
    ///
    /// A word is misaligned when it ends before it begins, or when it is a
    /// lexical word whose observed transcription is absent or differs from
    /// the labels of its aligned phones. A blank transcription matches a word
    /// with no phones.
    pub fn misaligned(&self) -> bool {
        if self.word.is_reversed() {
            return true;
        }
        if self.word.is_pause() {
            return false;
        }
        match &self.word.phonetic {
            Some(phonetic) => *phonetic != self.phone_labels(),
            None => true,
        }
    }

    /// Serializable snapshot for JSON output.
    pub fn to_record(&self) -> AlignedWordRecord<'a> {
        AlignedWordRecord {
            index: self.index,
            word: self.word,
            phones: self.phone_labels(),
            misaligned: self.misaligned(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AlignedWordRecord<'a> {
    pub index: usize,
    #[serde(flatten)]
    pub word: &'a Word,
    pub phones: Vec<&'a str>,
    pub misaligned: bool,
}
