//! Utterances command handler

use anyhow::{bail, Result};

use buckeye::{Config, Utterance};

use super::load_track;

/// Print a track's utterances, one per line.
#[cfg(not(tarpaulin_include))]
pub fn handle(speaker: &str, track: &str, sep: Option<f64>, keep_pauses: bool) -> Result<()> {
    let config = Config::load()?;
    let sep = sep.unwrap_or(config.utterance.separation);
    if !sep.is_finite() || sep <= 0.0 {
        bail!("--sep must be a positive number of seconds, got {}", sep);
    }
    let strip = config.utterance.strip_pauses && !keep_pauses;

    let track = load_track(speaker, track, &config.load_options().with_audio(false))?;
    for utterance in track.utterances(sep, strip) {
        println!("{}", format_utterance(&utterance));
    }
    Ok(())
}

/// `0.150-1.000: the cat sat`
pub(crate) fn format_utterance(utterance: &Utterance<'_>) -> String {
    format!(
        "{:.3}-{:.3}: {}",
        utterance.begin().unwrap_or_default(),
        utterance.end().unwrap_or_default(),
        utterance
    )
}
