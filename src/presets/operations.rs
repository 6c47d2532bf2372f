//! Preset CRUD operations

use super::error::PresetError;
use super::types::{Preset, PresetSelection, PresetStorage, validate_preset_name};
use std::fs;
use std::path::{Path, PathBuf};

/// Manager for saved presets
///
/// Every operation loads the presets file, applies one change and writes it
/// back.
///
/// # Examples
///
/// ```no_run
/// use vitrine::presets::PresetManager;
/// use std::path::PathBuf;
///
/// let manager = PresetManager::new(PathBuf::from("presets.toml"));
/// let presets = manager.list().unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct PresetManager {
    path: PathBuf,
    auto_backup: bool,
}

impl PresetManager {
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self {
            path,
            auto_backup: true,
        }
    }

    /// Create a manager that never writes a `.toml.backup` copy
    #[must_use]
    pub const fn without_backup(path: PathBuf) -> Self {
        Self {
            path,
            auto_backup: false,
        }
    }

    pub const fn set_auto_backup(&mut self, enabled: bool) {
        self.auto_backup = enabled;
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns empty storage if the file doesn't exist.
    fn load(&self) -> Result<PresetStorage, PresetError> {
        if !self.path.exists() {
            return Ok(PresetStorage::new());
        }

        let contents = fs::read_to_string(&self.path)?;
        let storage: PresetStorage = toml::from_str(&contents)?;
        Ok(storage)
    }

    fn save(&self, storage: &PresetStorage) -> Result<(), PresetError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        if self.auto_backup && self.path.exists() {
            let backup_path = self.path.with_extension("toml.backup");
            fs::copy(&self.path, backup_path)?;
        }

        let toml = toml::to_string_pretty(storage)?;
        fs::write(&self.path, toml)?;
        log::debug!("saved {} preset(s) to {}", storage.presets.len(), self.path.display());

        Ok(())
    }

    /// Create a new preset
    ///
    /// # Errors
    ///
    /// Returns `PresetError` if:
    /// - The preset name is invalid
    /// - The selection is invalid
    /// - A preset with the same name already exists
    /// - The storage file cannot be loaded or saved
    pub fn create(
        &self,
        name: &str,
        description: String,
        selection: PresetSelection,
    ) -> Result<Preset, PresetError> {
        let mut storage = self.load()?;

        validate_preset_name(name).map_err(|e| PresetError::InvalidName(name.to_string(), e))?;
        selection.validate().map_err(PresetError::InvalidSelection)?;

        if storage.contains(name) {
            return Err(PresetError::AlreadyExists(name.to_string()));
        }

        let preset = Preset::new(name.to_string(), description, selection);
        storage
            .add(preset.clone())
            .map_err(PresetError::InvalidSelection)?;

        self.save(&storage)?;

        Ok(preset)
    }

    /// Get a preset by name
    ///
    /// # Errors
    ///
    /// Returns `PresetError` if the storage file cannot be loaded or the
    /// preset is not found.
    pub fn get(&self, name: &str) -> Result<Preset, PresetError> {
        let storage = self.load()?;
        storage
            .get(name)
            .cloned()
            .ok_or_else(|| PresetError::NotFound(name.to_string()))
    }

    /// Delete a preset by name, returning it
    ///
    /// # Errors
    ///
    /// Returns `PresetError` if the preset is not found or the storage file
    /// cannot be saved.
    pub fn delete(&self, name: &str) -> Result<Preset, PresetError> {
        let mut storage = self.load()?;

        let preset = storage
            .remove(name)
            .ok_or_else(|| PresetError::NotFound(name.to_string()))?;

        self.save(&storage)?;

        Ok(preset)
    }

    /// Rename a preset
    ///
    /// # Errors
    ///
    /// Returns `PresetError` if:
    /// - The old preset is not found
    /// - The new name is invalid
    /// - A preset with the new name already exists
    /// - The storage file cannot be saved
    pub fn rename(&self, old_name: &str, new_name: String) -> Result<(), PresetError> {
        let mut storage = self.load()?;

        validate_preset_name(&new_name).map_err(|e| PresetError::InvalidName(new_name.clone(), e))?;

        if storage.contains(&new_name) {
            return Err(PresetError::AlreadyExists(new_name));
        }

        let mut preset = storage
            .remove(old_name)
            .ok_or_else(|| PresetError::NotFound(old_name.to_string()))?;

        preset.name = new_name;
        storage.presets.push(preset);

        self.save(&storage)
    }

    /// List all presets in file order
    ///
    /// # Errors
    ///
    /// Returns `PresetError` if the storage file cannot be loaded.
    pub fn list(&self) -> Result<Vec<Preset>, PresetError> {
        Ok(self.load()?.presets)
    }

    /// Record that a preset was applied (increment use count, update `last_used`)
    ///
    /// # Errors
    ///
    /// Returns `PresetError` if the preset is not found or the storage file
    /// cannot be saved.
    pub fn record_use(&self, name: &str) -> Result<(), PresetError> {
        let mut storage = self.load()?;

        storage
            .get_mut(name)
            .ok_or_else(|| PresetError::NotFound(name.to_string()))?
            .record_use();

        self.save(&storage)
    }
}
