//! Command handlers for the buckeye CLI.
//!
//! Each submodule handles a specific CLI command or command group.
//! The main dispatch logic remains in main.rs.

pub mod clip;
pub mod completions;
pub mod config;
pub mod logs;
pub mod speakers;
pub mod utterances;
pub mod words;

use anyhow::{bail, Context, Result};
use std::path::PathBuf;

use buckeye::container::{self, is_track_member, member_stem, Container};
use buckeye::{Config, LoadOptions, Track};

/// Resolve a speaker argument to a container path.
///
/// Supports two formats:
/// 1. A path to a speaker archive or directory that exists
/// 2. A speaker id (`s01`), looked up as `s01.zip` or `s01/` in the corpus directory
pub fn resolve_speaker_path(speaker: &str, config: &Config) -> Result<PathBuf> {
    let path = PathBuf::from(speaker);
    if path.exists() {
        return Ok(path);
    }

    let root = config.corpus_directory();
    let archive = root.join(format!("{}.zip", speaker));
    if archive.is_file() {
        return Ok(archive);
    }
    let dir = root.join(speaker);
    if dir.is_dir() {
        return Ok(dir);
    }

    bail!(
        "Speaker '{}' not found (looked for {:?} and {:?})",
        speaker,
        archive,
        dir
    )
}

/// Load a single track from a speaker without parsing the speaker's other tracks.
pub fn load_track(speaker: &str, track: &str, options: &LoadOptions) -> Result<Track> {
    let config = Config::load()?;
    let path = resolve_speaker_path(speaker, &config)?;
    load_track_from(&path, track, options)
}

pub(crate) fn load_track_from(
    path: &std::path::Path,
    track: &str,
    options: &LoadOptions,
) -> Result<Track> {
    let mut speaker = container::open(path)
        .with_context(|| format!("Failed to open speaker container: {:?}", path))?;
    let members = speaker.members()?;
    let Some(member) = members
        .iter()
        .find(|m| is_track_member(m) && member_stem(m) == track)
    else {
        bail!("Track '{}' not found in {:?}", track, path);
    };

    let mut child = speaker.open_child(member)?;
    Track::from_container(child.as_mut(), options)
        .with_context(|| format!("Failed to load track {}", track))
}
