//! Clip command handler

use anyhow::{Context, Result};
use std::path::Path;

use buckeye::Config;

use super::load_track;

/// Write `[begin, end)` of a track's audio to `output`.
#[cfg(not(tarpaulin_include))]
pub fn handle(speaker: &str, track: &str, begin: f64, end: f64, output: &Path) -> Result<()> {
    let options = Config::load()?.load_options().with_audio(true);
    let track = load_track(speaker, track, &options)?;
    let clip = track
        .clip_wav(output, begin, end)
        .with_context(|| format!("Failed to write clip to {:?}", output))?;

    println!(
        "Wrote {} frames ({} Hz, {} ch) to {}",
        clip.frames(),
        clip.spec().sample_rate,
        clip.spec().channels,
        output.display()
    );
    Ok(())
}
