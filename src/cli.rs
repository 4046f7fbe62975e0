//! CLI definitions for buckeye
//!
//! This module contains the clap CLI structure definitions, separated from main.rs
//! so the command handlers and tests can share them.

use std::path::PathBuf;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};
use clap_complete::Shell as CompletionShell;

/// Build clap styles.
///
/// - Green: headers, usage, command names
/// - White: descriptions, placeholders (renders as light gray on dark terminals)
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser)]
#[command(name = "buckeye")]
#[command(about = "Read the Buckeye Corpus: aligned words and phones, log queries and audio clips")]
#[command(
    long_about = "buckeye - Reader for the Buckeye Corpus of Conversational Speech.

Reads the corpus straight from its distributed archives (s01.zip ... s40.zip,
each holding one archive per track) or from an unpacked copy.

QUICK START:
    buckeye speakers ~/buckeye               List speakers and their metadata
    buckeye words s01 s0101a                 Words with their aligned phones
    buckeye logs s01 s0101a 10 20            Log entries overlapping 10s-20s
    buckeye clip s01 s0101a 60 62 out.wav    Cut two seconds of audio

SPEAKER may be a path to a speaker archive or directory, or a speaker id
resolved against [corpus].directory in ~/.config/buckeye/config.toml.

Set BUCKEYE_LOG=debug to see parsing diagnostics."
)]
#[command(version)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List speakers in the corpus
    #[command(long_about = "List every speaker in a corpus directory.

Prints one line per speaker: id, sex, age group (y = under 40, o = 40 or
older), interviewer sex and number of tracks.

EXAMPLES:
    buckeye speakers                 Use [corpus].directory from the config
    buckeye speakers ~/buckeye       Scan an explicit directory")]
    Speakers {
        #[arg(help = "Corpus directory (defaults to [corpus].directory)")]
        dir: Option<PathBuf>,
    },

    /// Show the words of a track with their aligned phones
    #[command(long_about = "Show every word of a track with the phones it contains.

Words whose phones disagree with their phonetic transcription, or whose
timestamps run backwards, are marked with '!'.

EXAMPLES:
    buckeye words s01 s0101a
    buckeye words ~/buckeye/s01.zip s0101a --json")]
    Words {
        #[arg(help = "Speaker id or path to a speaker archive/directory")]
        speaker: String,
        #[arg(help = "Track code (e.g., s0101a)")]
        track: String,
        #[arg(long, help = "Print JSON instead of text")]
        json: bool,
    },

    /// Show log entries overlapping a time range
    #[command(long_about = "Show the log entries that overlap [BEGIN, END).

When BEGIN equals END, shows the entries containing that instant.

EXAMPLES:
    buckeye logs s01 s0101a 10 20
    buckeye logs s01 s0101a 12.5 12.5 --json")]
    Logs {
        #[arg(help = "Speaker id or path to a speaker archive/directory")]
        speaker: String,
        #[arg(help = "Track code (e.g., s0101a)")]
        track: String,
        #[arg(help = "Range start in seconds")]
        begin: f64,
        #[arg(help = "Range end in seconds")]
        end: f64,
        #[arg(long, help = "Print JSON instead of text")]
        json: bool,
    },

    /// Split a track into utterances at long pauses
    #[command(long_about = "Group the words of a track into utterances.

A new utterance starts whenever consecutive pauses add up to at least
--sep seconds. Pauses at the edges of each utterance are dropped unless
--keep-pauses is given.

EXAMPLES:
    buckeye utterances s01 s0101a
    buckeye utterances s01 s0101a --sep 1.0 --keep-pauses")]
    Utterances {
        #[arg(help = "Speaker id or path to a speaker archive/directory")]
        speaker: String,
        #[arg(help = "Track code (e.g., s0101a)")]
        track: String,
        #[arg(long, help = "Pause length in seconds that ends an utterance")]
        sep: Option<f64>,
        #[arg(long, help = "Keep pauses at utterance edges")]
        keep_pauses: bool,
    },

    /// Cut a time range of a track's audio into a WAV file
    #[command(long_about = "Write the audio between BEGIN and END seconds to a WAV file.

The clip keeps the source's sample rate, channel count and bit depth.

EXAMPLE:
    buckeye clip s01 s0101a 60 62 clip.wav")]
    Clip {
        #[arg(help = "Speaker id or path to a speaker archive/directory")]
        speaker: String,
        #[arg(help = "Track code (e.g., s0101a)")]
        track: String,
        #[arg(help = "Clip start in seconds")]
        begin: f64,
        #[arg(help = "Clip end in seconds")]
        end: f64,
        #[arg(help = "Output WAV file")]
        output: PathBuf,
    },

    /// Configuration management
    #[command(subcommand)]
    #[command(long_about = "View configuration.

Configuration is stored in ~/.config/buckeye/config.toml and holds the
corpus location, alignment tolerance and utterance settings.

EXAMPLE:
    buckeye config show")]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(long, value_enum)]
        shell: CompletionShell,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration as TOML
    #[command(long_about = "Display the current configuration in TOML format.

Config file location: ~/.config/buckeye/config.toml

EXAMPLE:
    buckeye config show")]
    Show,
}
