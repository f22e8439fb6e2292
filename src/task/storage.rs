//! Task storage - line-oriented file persistence

use anyhow::{Context, Result};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

use super::model::Task;
use super::parser::TaskFile;

/// Load/save contract for the ordered task sequence
pub trait TaskStore {
    fn load(&self) -> Result<Vec<Task>>;
    fn save(&self, tasks: &[Task]) -> Result<()>;
}

/// Stores tasks in a plain text file, one record per line
pub struct FileStore {
    path: PathBuf,
    backup: bool,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            backup: true,
        }
    }

    /// Whether to copy the previous file to `<name>.bak` before overwriting
    pub fn with_backup(mut self, backup: bool) -> Self {
        self.backup = backup;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn backup_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".bak");
        self.path.with_file_name(name)
    }
}

impl TaskStore for FileStore {
    fn load(&self) -> Result<Vec<Task>> {
        if !self.path.exists() {
            debug!("No task file at {}, starting empty", self.path.display());
            return Ok(Vec::new());
        }

        let file = TaskFile::from_file(&self.path)?;
        for skipped in &file.skipped {
            warn!(
                "Skipping line {} of {}: {} ({:?})",
                skipped.line_number,
                self.path.display(),
                skipped.error,
                skipped.content
            );
        }

        debug!(
            "Loaded {} tasks from {}",
            file.tasks.len(),
            self.path.display()
        );
        Ok(file.tasks)
    }

    fn save(&self, tasks: &[Task]) -> Result<()> {
        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {:?}", dir))?;

        if self.backup && self.path.exists() {
            if let Err(e) = fs::copy(&self.path, self.backup_path()) {
                warn!("Failed to create backup: {}", e);
            }
        }

        // Write next to the target and rename over it, so an interrupted
        // save leaves the previous file intact.
        let mut file = NamedTempFile::new_in(dir)
            .with_context(|| format!("Failed to create temporary file in {:?}", dir))?;
        {
            let mut writer = BufWriter::new(&mut file);
            writer.write_all(TaskFile::render(tasks).as_bytes())?;
            writer.flush()?;
        }
        file.persist(&self.path)
            .with_context(|| format!("Failed to write tasks to {:?}", self.path))?;

        debug!("Saved {} tasks to {}", tasks.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_store_roundtrip() -> Result<()> {
        let temp = tempdir()?;
        let store = FileStore::new(temp.path().join("tasks.txt"));

        let mut done = Task::todo("read book");
        done.mark_done();
        let tasks = vec![
            done,
            Task::deadline("submit report", "2/12/2024 18:00")?,
            Task::event("meeting", "2024-12-02 14:00", "2024-12-02 16:30")?,
        ];

        store.save(&tasks)?;
        let loaded = store.load()?;

        assert_eq!(loaded, tasks);
        Ok(())
    }

    #[test]
    fn test_store_load_nonexistent_file() -> Result<()> {
        let temp = tempdir()?;
        let store = FileStore::new(temp.path().join("missing.txt"));

        assert!(store.load()?.is_empty());
        Ok(())
    }

    #[test]
    fn test_store_load_whitespace_only_file() -> Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("tasks.txt");
        fs::write(&path, "   \n  \t  ")?;

        assert!(FileStore::new(&path).load()?.is_empty());
        Ok(())
    }

    #[test]
    fn test_store_load_skips_malformed_lines() -> Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("tasks.txt");
        fs::write(&path, "T | 0 | first\ngarbage\nT | 1 | second\n")?;

        let loaded = FileStore::new(&path).load()?;
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[1].description(), "second");
        Ok(())
    }

    #[test]
    fn test_store_save_creates_parent_dirs() -> Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("nested").join("deeper").join("tasks.txt");
        let store = FileStore::new(&path);

        store.save(&[Task::todo("read book")])?;

        assert_eq!(fs::read_to_string(&path)?, "T | 0 | read book\n");
        Ok(())
    }

    #[test]
    fn test_store_save_creates_backup() -> Result<()> {
        let temp = tempdir()?;
        let store = FileStore::new(temp.path().join("tasks.txt"));

        store.save(&[Task::todo("first")])?;
        store.save(&[Task::todo("second")])?;

        let backup_path = temp.path().join("tasks.txt.bak");
        assert!(backup_path.exists());
        assert!(fs::read_to_string(&backup_path)?.contains("first"));
        Ok(())
    }

    #[test]
    fn test_store_save_without_backup() -> Result<()> {
        let temp = tempdir()?;
        let store = FileStore::new(temp.path().join("tasks.txt")).with_backup(false);

        store.save(&[Task::todo("first")])?;
        store.save(&[Task::todo("second")])?;

        assert!(!temp.path().join("tasks.txt.bak").exists());
        Ok(())
    }

    #[test]
    fn test_store_save_empty_list_truncates() -> Result<()> {
        let temp = tempdir()?;
        let store = FileStore::new(temp.path().join("tasks.txt"));

        store.save(&[Task::todo("first")])?;
        store.save(&[])?;

        assert_eq!(fs::read_to_string(store.path())?, "");
        assert!(store.load()?.is_empty());
        Ok(())
    }
}
