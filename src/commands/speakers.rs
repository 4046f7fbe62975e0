//! Speakers command handler

use anyhow::{Context, Result};
use std::path::Path;

use buckeye::{Config, Corpus, Speaker};

/// List the speakers of a corpus directory, one per line.
#[cfg(not(tarpaulin_include))]
pub fn handle(dir: Option<&Path>) -> Result<()> {
    let config = Config::load()?;
    let root = match dir {
        Some(dir) => dir.to_path_buf(),
        None => config.corpus_directory(),
    };

    let corpus = Corpus::new(&root, config.load_options());
    let speakers = corpus
        .speakers()
        .with_context(|| format!("Failed to read corpus directory: {:?}", root))?;

    for speaker in speakers {
        let speaker = speaker?;
        println!("{}", format_speaker(&speaker));
    }
    Ok(())
}

/// `s01  f  y  f  2 tracks`
pub(crate) fn format_speaker(speaker: &Speaker) -> String {
    let count = speaker.tracks().len();
    format!(
        "{}  {}  {}  {}  {} {}",
        speaker.id(),
        speaker.sex().code(),
        speaker.age().code(),
        speaker.interviewer().code(),
        count,
        if count == 1 { "track" } else { "tracks" }
    )
}
