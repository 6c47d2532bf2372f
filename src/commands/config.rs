//! Config command implementation

use super::Result;
use crate::VitrineError;
use crate::cli::{ConfigCommands, parse_setting};
use crate::config::VitrineConfig;
use crate::output::OutputWriter;
use std::path::Path;

/// Execute a config subcommand against the default config file
///
/// # Errors
///
/// Returns `VitrineError` if the setting is malformed, the key is unknown,
/// or the config file cannot be written.
pub fn execute(
    command: &ConfigCommands,
    config: VitrineConfig,
    quiet: bool,
    output: &dyn OutputWriter,
) -> Result<()> {
    let path = VitrineConfig::config_path()?;
    execute_at(command, config, &path, quiet, output)
}

/// Execute a config subcommand, saving changes to `path`
///
/// # Errors
///
/// See [`execute`].
pub fn execute_at(
    command: &ConfigCommands,
    mut config: VitrineConfig,
    path: &Path,
    quiet: bool,
    output: &dyn OutputWriter,
) -> Result<()> {
    match command {
        ConfigCommands::Set { setting } => {
            let (key, value) = parse_setting(setting).ok_or_else(|| {
                VitrineError::InvalidInput(format!("Expected KEY=VALUE, got '{setting}'"))
            })?;
            config.set(key, value)?;
            config.save_to(path)?;
            if !quiet {
                output.success(&format!("Set {key} = {}", config.get(key)?));
            }
        }
        ConfigCommands::Get { key } => {
            output.write(&config.get(key)?);
        }
    }
    Ok(())
}
