//! Vault access and note file enumeration

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use walkdir::WalkDir;

/// A vault: the base directory holding the notes
#[derive(Debug, Clone)]
pub struct Vault {
    root: PathBuf,
}

impl Vault {
    /// Open a vault at the given root directory
    pub fn open(root: &Path) -> Result<Self> {
        let root = root
            .canonicalize()
            .with_context(|| format!("Vault root not found: {}", root.display()))?;
        anyhow::ensure!(
            root.is_dir(),
            "Vault root is not a directory: {}",
            root.display()
        );
        Ok(Self { root })
    }

    /// The vault root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a configured name against the vault root
    pub fn resolve(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Get all markdown note files directly inside a directory (non-recursive)
    pub fn note_files(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
            let entry =
                entry.with_context(|| format!("Failed to read folder: {}", dir.display()))?;
            if entry.file_type().is_file() && is_markdown(entry.path()) {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }
}

/// Check if a path points to a markdown file
pub fn is_markdown(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext == "md" || ext == "markdown")
        .unwrap_or(false)
}

/// Get the note title: the file name without its extension
pub fn note_title(path: &Path) -> Option<String> {
    path.file_stem().map(|s| s.to_string_lossy().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_markdown() {
        assert!(is_markdown(Path::new("Buy milk.md")));
        assert!(is_markdown(Path::new("notes.markdown")));
        assert!(!is_markdown(Path::new("notes.txt")));
        assert!(!is_markdown(Path::new("README")));
    }

    #[test]
    fn test_note_title() {
        assert_eq!(
            note_title(Path::new("ToDo/Buy milk.md")),
            Some("Buy milk".to_string())
        );
    }

    #[test]
    fn test_note_files_skips_non_markdown_and_subdirs() {
        let dir = tempfile::tempdir().unwrap();
        let tasks = dir.path().join("ToDo");
        std::fs::create_dir(&tasks).unwrap();
        std::fs::write(tasks.join("Buy milk.md"), "").unwrap();
        std::fs::write(tasks.join("notes.txt"), "").unwrap();
        std::fs::create_dir(tasks.join("archive")).unwrap();
        std::fs::write(tasks.join("archive").join("Old task.md"), "").unwrap();

        let vault = Vault::open(dir.path()).unwrap();
        let files = vault.note_files(&tasks).unwrap();
        let names: Vec<_> = files.iter().filter_map(|p| note_title(p)).collect();
        assert_eq!(names, vec!["Buy milk".to_string()]);
    }

    #[test]
    fn test_open_missing_root() {
        assert!(Vault::open(Path::new("/no/such/vault")).is_err());
    }
}
