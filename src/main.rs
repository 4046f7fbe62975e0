//! buckeye - CLI entry point

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands, ConfigCommands};

/// Environment variable holding the log filter (e.g. `debug`, `buckeye=info`).
const LOG_ENV: &str = "BUCKEYE_LOG";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Speakers { dir } => commands::speakers::handle(dir.as_deref()),
        Commands::Words {
            speaker,
            track,
            json,
        } => commands::words::handle(&speaker, &track, json),
        Commands::Logs {
            speaker,
            track,
            begin,
            end,
            json,
        } => commands::logs::handle(&speaker, &track, begin, end, json),
        Commands::Utterances {
            speaker,
            track,
            sep,
            keep_pauses,
        } => commands::utterances::handle(&speaker, &track, sep, keep_pauses),
        Commands::Clip {
            speaker,
            track,
            begin,
            end,
            output,
        } => commands::clip::handle(&speaker, &track, begin, end, &output),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(),
        },
        Commands::Completions { shell } => commands::completions::handle::<Cli>(shell),
    }
}
