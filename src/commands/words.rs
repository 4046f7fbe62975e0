//! Words command handler

use anyhow::{Context, Result};

use buckeye::{AlignedWord, AlignedWordRecord, Config};

use super::load_track;

/// Print every word of a track with its aligned phones.
#[cfg(not(tarpaulin_include))]
pub fn handle(speaker: &str, track: &str, json: bool) -> Result<()> {
    let options = Config::load()?.load_options().with_audio(false);
    let track = load_track(speaker, track, &options)?;

    if json {
        let records: Vec<AlignedWordRecord> =
            track.aligned_words().map(|w| w.to_record()).collect();
        let out = serde_json::to_string_pretty(&records).context("Failed to serialize words")?;
        println!("{}", out);
    } else {
        for word in track.aligned_words() {
            println!("{}", format_word(&word));
        }
    }
    Ok(())
}

/// `0.150-0.440: the  [dh ah]`, with a trailing ` !` when misaligned.
pub(crate) fn format_word(word: &AlignedWord<'_>) -> String {
    format!(
        "{}  [{}]{}",
        word.word(),
        word.phone_labels().join(" "),
        if word.misaligned() { " !" } else { "" }
    )
}
