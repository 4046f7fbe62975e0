//! Buckeye Corpus Reader Library
//!
//! Reads the Buckeye Corpus of Conversational Speech from its nested
//! archives: parses the word, phone and log tiers of every track, links
//! each word to the phones it contains, answers log overlap queries and
//! cuts audio clips.
//!
//! ```no_run
//! use buckeye::{Corpus, LoadOptions};
//!
//! # fn main() -> buckeye::Result<()> {
//! let corpus = Corpus::new("/data/buckeye", LoadOptions::default());
//! for speaker in corpus.speakers()? {
//!     let speaker = speaker?;
//!     for track in speaker.tracks() {
//!         for word in track.aligned_words() {
//!             println!("{} {:?}", word.word(), word.phone_labels());
//!         }
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod alignment;
pub mod audio;
pub mod config;
pub mod container;
pub mod corpus;
pub mod entry;
pub mod error;
pub mod speaker;
pub mod tier;
pub mod track;
pub mod utterance;

pub use alignment::{LogIndex, PhoneAlignment, DEFAULT_TOLERANCE};
pub use audio::{Audio, AudioClip};
pub use config::Config;
pub use container::{Container, DirContainer, ZipContainer};
pub use corpus::{Corpus, Speakers};
pub use entry::{Interval, LogEntry, Phone, Word, WordKind, MISSING};
pub use error::{CorpusError, Result};
pub use speaker::{AgeGroup, Sex, Speaker, SpeakerInfo};
pub use tier::{Diagnostic, DiagnosticKind, Tier, TierKind};
pub use track::{AlignedWord, AlignedWordRecord, LoadOptions, Track};
pub use utterance::{words_to_utterances, Utterance, Utterances, DEFAULT_SEPARATION};
