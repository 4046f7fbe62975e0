//! The whole corpus as a lazy sequence of speakers.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::container::{is_speaker_entry, member_stem};
use crate::error::Result;
use crate::speaker::Speaker;
use crate::track::LoadOptions;

/// A directory holding `s01.zip` … `s40.zip` (or their unpacked equivalents).
#[derive(Debug, Clone)]
pub struct Corpus {
    root: PathBuf,
    options: LoadOptions,
}

impl Corpus {
    pub fn new<P: AsRef<Path>>(root: P, options: LoadOptions) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            options,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn options(&self) -> &LoadOptions {
        &self.options
    }

    /// Paths of the speaker containers, ordered by speaker id.
    ///
    /// When both `s01.zip` and an unpacked `s01` exist, only the archive is listed.
    pub fn speaker_paths(&self) -> Result<Vec<PathBuf>> {
        let mut paths: Vec<PathBuf> = fs::read_dir(&self.root)?
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_name().to_str().is_some_and(is_speaker_entry))
            .map(|entry| entry.path())
            .collect();
        paths.sort_by(|a, b| speaker_key(a).cmp(&speaker_key(b)));
        paths.dedup_by(|later, kept| speaker_key(later).0 == speaker_key(kept).0);
        debug!(root = %self.root.display(), speakers = paths.len(), "scanned corpus");
        Ok(paths)
    }

    /// Speaker ids in order, without loading anything.
    pub fn speaker_ids(&self) -> Result<Vec<String>> {
        Ok(self
            .speaker_paths()?
            .iter()
            .map(|p| speaker_key(p).0)
            .collect())
    }

    /// Iterate over the speakers in id order, loading each one on demand.
    ///
    /// Every call rescans the directory, so the sequence can be restarted.
    pub fn speakers(&self) -> Result<Speakers> {
        Ok(Speakers {
            paths: self.speaker_paths()?.into_iter(),
            options: self.options,
        })
    }

    /// Load one speaker by id.
    pub fn speaker(&self, id: &str) -> Result<Option<Speaker>> {
        self.speaker_paths()?
            .into_iter()
            .find(|p| speaker_key(p).0 == id)
            .map(|p| Speaker::open(p, &self.options))
            .transpose()
    }
}

/// Speaker id, then `false` for an archive so it sorts before a directory.
fn speaker_key(path: &Path) -> (String, bool) {
    let file = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();
    (member_stem(file).to_string(), !file.ends_with(".zip"))
}

/// Lazy iterator returned by [`Corpus::speakers`].
pub struct Speakers {
    paths: std::vec::IntoIter<PathBuf>,
    options: LoadOptions,
}

impl Iterator for Speakers {
    type Item = Result<Speaker>;

    fn next(&mut self) -> Option<Self::Item> {
        let path = self.paths.next()?;
        Some(Speaker::open(path, &self.options))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.paths.size_hint()
    }
}

impl ExactSizeIterator for Speakers {}
