//! Preset management command implementation
//!
//! - List all presets
//! - Show a preset's selection and usage
//! - Save the current filter options as a preset
//! - Delete and rename presets

use super::{Context, Result, apply_filter_args};
use crate::VitrineError;
use crate::catalog::CatalogScope;
use crate::cli::{FilterArgs, PresetCommands};
use crate::output::OutputWriter;
use crate::presets::{PresetManager, PresetSelection};

/// Execute a preset management command
///
/// # Errors
///
/// Returns `VitrineError` if the presets file cannot be accessed, the preset
/// does not exist (or already exists), or saving needs a catalog that cannot
/// be loaded.
pub fn execute(command: &PresetCommands, ctx: &Context, output: &dyn OutputWriter) -> Result<()> {
    let manager = ctx.presets()?;
    match command {
        PresetCommands::List => list_presets(&manager, ctx.quiet, output),
        PresetCommands::Show { name } => {
            let preset = manager.get(name)?;
            if ctx.quiet {
                output.write(&preset.name);
            } else {
                output.write(preset.to_string().trim_end());
            }
            Ok(())
        }
        PresetCommands::Save {
            name,
            description,
            scope,
            filters,
        } => save_preset(&manager, name, description.as_deref(), scope.scope(), filters, ctx, output),
        PresetCommands::Delete { name } => {
            manager.delete(name)?;
            if !ctx.quiet {
                output.success(&format!("Preset '{name}' deleted"));
            }
            Ok(())
        }
        PresetCommands::Rename { old_name, new_name } => {
            manager.rename(old_name, new_name.clone())?;
            if !ctx.quiet {
                output.success(&format!("Preset '{old_name}' renamed to '{new_name}'"));
            }
            Ok(())
        }
    }
}

fn list_presets(manager: &PresetManager, quiet: bool, output: &dyn OutputWriter) -> Result<()> {
    let presets = manager.list()?;

    if presets.is_empty() {
        if !quiet {
            output.info("No saved presets.");
            output.info("Create one with: vitrine preset save <name> [filters]");
        }
        return Ok(());
    }

    let max_name_len = presets.iter().map(|p| p.name.len()).max().unwrap_or(0).max(4);
    for preset in presets {
        if quiet {
            output.write(&preset.name);
            continue;
        }
        let desc = if preset.description.is_empty() {
            "(no description)"
        } else {
            preset.description.as_str()
        };
        output.write(&format!(
            "  {:<width$}  {}  (used {}x)",
            preset.name,
            desc,
            preset.use_count,
            width = max_name_len
        ));
    }
    Ok(())
}

/// Build a selection from the filter options against the catalog and store it
///
/// Going through the engine gives the saved selection the same shape an
/// interactive session would produce: a custom interval clears brackets and
/// an interval equal to the catalog range is not stored.
fn save_preset(
    manager: &PresetManager,
    name: &str,
    description: Option<&str>,
    scope: CatalogScope,
    filters: &FilterArgs,
    ctx: &Context,
    output: &dyn OutputWriter,
) -> Result<()> {
    if filters.is_empty() {
        return Err(VitrineError::InvalidInput(
            "A preset needs at least one filter or sort option".into(),
        ));
    }

    let mut engine = ctx.engine(scope)?;
    apply_filter_args(&mut engine, filters)?;
    let selection =
        PresetSelection::from_selection(engine.selection(), engine.price_info().full_interval());

    manager.create(name, description.unwrap_or_default().to_string(), selection)?;

    if !ctx.quiet {
        output.success(&format!("Preset '{name}' saved"));
    }
    Ok(())
}
