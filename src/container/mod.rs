//! Access to the corpus's nested archives.
//!
//! The corpus ships as one zip per speaker (`s01.zip`), each holding one zip
//! per track (`s01/s0101a.zip`), each holding the track's text and audio
//! files. The same layout unpacked onto disk is also accepted.
//!
//! Callers only see the [`Container`] trait; bytes are read fully into
//! memory and the underlying handle is released when the container drops.

mod archive;
mod directory;

pub use archive::ZipContainer;
pub use directory::DirContainer;

use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{CorpusError, Result};

/// A named collection of members that can be read or opened as sub-containers.
pub trait Container {
    /// Name of the container, without extension (e.g. `s01`, `s0101a`).
    fn name(&self) -> &str;

    /// Member names in the container's own enumeration order.
    fn members(&self) -> Result<Vec<String>>;

    /// Read a member fully.
    ///
    /// # Errors
    ///
    /// `ContainerLayout` when the member does not exist.
    fn read(&mut self, member: &str) -> Result<Vec<u8>>;

    /// Open a member that is itself a container.
    fn open_child(&mut self, member: &str) -> Result<Box<dyn Container>>;

    /// Whether a member with this exact name exists.
    fn contains(&self, member: &str) -> Result<bool> {
        Ok(self.members()?.iter().any(|m| m == member))
    }
}

/// Open a speaker or track container from disk: a `.zip` file or a directory.
pub fn open<P: AsRef<Path>>(path: P) -> Result<Box<dyn Container>> {
    let path = path.as_ref();
    if path.is_dir() {
        Ok(Box::new(DirContainer::open(path)?))
    } else {
        Ok(Box::new(ZipContainer::open(path)?))
    }
}

/// File stem of the last path component (`s01/s0101a.zip` -> `s0101a`).
pub fn member_stem(member: &str) -> &str {
    let last = member
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or(member);
    last.split_once('.').map(|(stem, _)| stem).unwrap_or(last)
}

/// Whether a member names a track container (`s01/s0101a.zip`, `s0101a`, ...).
pub fn is_track_member(member: &str) -> bool {
    static TRACK: OnceLock<Regex> = OnceLock::new();
    TRACK
        .get_or_init(|| {
            Regex::new(r"^(?:s[0-4][0-9]/)?s[0-4][0-9]0[0-6][ab](?:\.zip)?$")
                .expect("valid track pattern")
        })
        .is_match(member)
}

/// Whether a corpus directory entry names a speaker container (`s01.zip` or `s01`).
pub fn is_speaker_entry(name: &str) -> bool {
    static SPEAKER: OnceLock<Regex> = OnceLock::new();
    SPEAKER
        .get_or_init(|| Regex::new(r"^s[0-4][0-9](?:\.zip)?$").expect("valid speaker pattern"))
        .is_match(name)
}

pub(crate) fn missing_member(container: &str, member: &str) -> CorpusError {
    CorpusError::ContainerLayout {
        container: container.to_string(),
        member: member.to_string(),
    }
}
