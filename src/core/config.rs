//! Settings management

use std::path::{Path, PathBuf};

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// User settings
///
/// A partial settings file is valid: any missing field keeps its default, so
/// persisted overrides are merged over the defaults on load.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Folder scanned for task notes, relative to the vault root
    pub tasks_root: String,
    /// Note whose content is replaced with the generated checklist,
    /// relative to the vault root
    pub output_note: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tasks_root: "ToDo".to_string(),
            output_note: "Task List.md".to_string(),
        }
    }
}

impl Settings {
    /// Get the default settings file path
    pub fn default_path() -> Result<PathBuf> {
        ProjectDirs::from("com", "tasklister", "Tasklister")
            .map(|dirs| dirs.config_dir().join("config.json"))
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
    }

    /// Load settings from disk, falling back to defaults if the file is missing
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let settings: Self = serde_json::from_str(&content)?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, path: &Path) -> Result<()> {
        // Ensure config directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        tracing::info!("Saved settings to: {}", path.display());
        Ok(())
    }

    /// Look up a setting by name
    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            "tasks_root" => Some(&self.tasks_root),
            "output_note" => Some(&self.output_note),
            _ => None,
        }
    }

    /// Update a setting by name. Values are not validated; a folder or note
    /// name that does not exist in the vault is accepted silently.
    pub fn set(&mut self, key: &str, value: String) -> Result<()> {
        match key {
            "tasks_root" => self.tasks_root = value,
            "output_note" => self.output_note = value,
            _ => anyhow::bail!("Unknown setting: {key}"),
        }
        Ok(())
    }

    /// All settings as (name, value) pairs
    pub fn entries(&self) -> [(&'static str, &str); 2] {
        [
            ("tasks_root", self.tasks_root.as_str()),
            ("output_note", self.output_note.as_str()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.tasks_root, "ToDo");
        assert_eq!(settings.output_note, "Task List.md");
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(&dir.path().join("config.json")).unwrap();
        assert_eq!(settings.tasks_root, "ToDo");
        assert_eq!(settings.output_note, "Task List.md");
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let mut settings = Settings::default();
        settings.set("tasks_root", "Projects".to_string()).unwrap();
        settings.save(&path).unwrap();

        let loaded = Settings::load(&path).unwrap();
        assert_eq!(loaded.tasks_root, "Projects");
        assert_eq!(loaded.output_note, "Task List.md");
    }

    #[test]
    fn test_partial_file_merges_over_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"output_note": "Agenda.md"}"#).unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.tasks_root, "ToDo");
        assert_eq!(settings.output_note, "Agenda.md");
    }

    #[test]
    fn test_unknown_key() {
        let mut settings = Settings::default();
        assert!(settings.set("font_size", "14".to_string()).is_err());
        assert!(settings.get("font_size").is_none());
    }
}
