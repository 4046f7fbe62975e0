//! Config subcommands handler

use anyhow::Result;

use buckeye::Config;

/// Show current configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show() -> Result<()> {
    let config = Config::load()?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("# {}", Config::config_path()?.display());
    println!("{}", toml_str);
    Ok(())
}
