//! Logs command handler

use anyhow::{Context, Result};

use buckeye::Config;

use super::load_track;

/// Print the log entries overlapping `[begin, end)`.
#[cfg(not(tarpaulin_include))]
pub fn handle(speaker: &str, track: &str, begin: f64, end: f64, json: bool) -> Result<()> {
    let options = Config::load()?.load_options().with_audio(false);
    let track = load_track(speaker, track, &options)?;
    let entries = track.get_logs(begin, end)?;

    if json {
        let out = serde_json::to_string_pretty(&entries).context("Failed to serialize log entries")?;
        println!("{}", out);
    } else {
        for entry in entries {
            println!("{}", entry);
        }
    }
    Ok(())
}
