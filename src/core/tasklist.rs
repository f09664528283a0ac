//! Task list regeneration

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use thiserror::Error;

use super::config::Settings;
use super::vault::{self, Vault};

/// Errors the regeneration can report
#[derive(Debug, Error)]
pub enum TaskListError {
    /// The configured tasks folder does not exist in the vault
    #[error("Tasks folder not found: {0}")]
    TasksFolderNotFound(PathBuf),
    /// The configured output note does not exist, so there is no write target
    #[error("Output note not found: {0}")]
    OutputNoteNotFound(PathBuf),
}

/// Render note titles as an unordered checklist of wiki links
pub fn checklist(titles: &[String]) -> String {
    titles
        .iter()
        .map(|title| format!("- [ ] [[{title}]]"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Regenerate the task list note from the notes in the tasks folder.
///
/// Lists the markdown files directly inside the configured tasks folder,
/// derives one checklist line per note title, and replaces the entire
/// content of the output note. Returns the path of the updated note.
pub fn update_task_list(vault: &Vault, settings: &Settings) -> Result<PathBuf> {
    let tasks_dir = vault.resolve(&settings.tasks_root);
    if !tasks_dir.is_dir() {
        return Err(TaskListError::TasksFolderNotFound(tasks_dir).into());
    }

    let mut titles: Vec<String> = vault
        .note_files(&tasks_dir)?
        .iter()
        .filter_map(|path| vault::note_title(path))
        .collect();
    titles.sort_by_key(|title| title.to_lowercase());
    tracing::debug!("Found {} task notes in {}", titles.len(), tasks_dir.display());

    let output_path = vault.resolve(&settings.output_note);
    if !output_path.is_file() {
        return Err(TaskListError::OutputNoteNotFound(output_path).into());
    }

    fs::write(&output_path, checklist(&titles))
        .with_context(|| format!("Failed to write note: {}", output_path.display()))?;

    tracing::info!("Updated task list: {}", output_path.display());
    Ok(output_path)
}
