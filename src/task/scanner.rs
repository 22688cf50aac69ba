//! Category directory scanning

use std::path::{Component, Path, PathBuf};
use tracing::{debug, info, warn};

use super::locale::Labels;
use super::model::{Category, TaskRecord};
use super::parser::read_task;

/// Extension of task files
const TASK_EXTENSION: &str = "md";

/// Read-only view of a todos root with one subdirectory per category
#[derive(Debug, Clone)]
pub struct TaskRepository {
    root: PathBuf,
    labels: Labels,
}

impl TaskRepository {
    pub fn new(root: impl Into<PathBuf>, labels: Labels) -> Self {
        Self {
            root: root.into(),
            labels,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Log what the root looks like; returns false when it is missing
    pub fn check_root(&self) -> bool {
        if !self.root.is_dir() {
            warn!(
                "Todos root {} does not exist, every category will be empty",
                self.root.display()
            );
            return false;
        }

        for category in Category::ALL {
            info!(
                "Category '{}': {} task files",
                category,
                self.count_tasks(category.as_str())
            );
        }
        true
    }

    /// Parse every task file in a category, sorted by file name
    ///
    /// Unknown categories and missing directories give an empty list.
    /// Files that cannot be read are skipped.
    pub fn list_tasks(&self, category: &str) -> Vec<TaskRecord> {
        let files = self.task_files(category);
        let mut records = Vec::with_capacity(files.len());

        for path in &files {
            match read_task(path, &self.labels) {
                Ok(record) => {
                    debug!("Parsed task '{}' from {}", record.title, path.display());
                    records.push(record);
                }
                Err(e) => warn!("Skipping task file: {}", e),
            }
        }

        debug!(
            "Listed {} of {} task files in '{}'",
            records.len(),
            files.len(),
            category
        );
        records
    }

    /// Number of task files in a category, without parsing them
    pub fn count_tasks(&self, category: &str) -> usize {
        self.task_files(category).len()
    }

    fn task_files(&self, category: &str) -> Vec<PathBuf> {
        let Some(dir) = self.category_dir(category) else {
            debug!("Rejected category name {:?}", category);
            return Vec::new();
        };

        let entries = match std::fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) => {
                if !self.root.is_dir() {
                    warn!(
                        "Todos root {} is not accessible: {}",
                        self.root.display(),
                        e
                    );
                } else {
                    debug!("No directory for category '{}': {}", category, e);
                }
                return Vec::new();
            }
        };

        let mut files: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && is_task_file(path))
            .collect();
        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        files
    }

    /// Directory for a category, if the name is a single plain path component
    fn category_dir(&self, category: &str) -> Option<PathBuf> {
        let mut components = Path::new(category).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(name)), None) => Some(self.root.join(name)),
            _ => None,
        }
    }
}

fn is_task_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == TASK_EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::fs;
    use std::io::Write;
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;

    fn setup_repo() -> Result<(TempDir, TaskRepository)> {
        let dir = TempDir::new()?;
        let repo = TaskRepository::new(dir.path(), Labels::default());
        Ok((dir, repo))
    }

    #[test]
    fn test_missing_category_is_empty() -> Result<()> {
        let (_dir, repo) = setup_repo()?;
        assert!(repo.list_tasks("current").is_empty());
        assert!(repo.list_tasks("no-such-category").is_empty());
        assert_eq!(repo.count_tasks("completed"), 0);
        Ok(())
    }

    /// Run `f` and return everything it logged at debug level and above
    fn capture_logs(f: impl FnOnce()) -> String {
        let buf = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&buf);
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || LogSink(Arc::clone(&sink)))
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let bytes = buf.lock().unwrap().clone();
        String::from_utf8_lossy(&bytes).to_string()
    }

    struct LogSink(Arc<Mutex<Vec<u8>>>);

    impl Write for LogSink {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_missing_root_warns_but_missing_category_only_debugs() -> Result<()> {
        let repo = TaskRepository::new("/definitely/not/a/real/root", Labels::default());
        let logs = capture_logs(|| {
            assert!(!repo.check_root());
            assert!(repo.list_tasks("current").is_empty());
        });
        assert!(logs.contains("WARN"));
        assert!(logs.contains("does not exist"));
        assert!(logs.contains("is not accessible"));

        let (_dir, repo) = setup_repo()?;
        let logs = capture_logs(|| {
            assert!(repo.list_tasks("current").is_empty());
        });
        assert!(!logs.contains("WARN"));
        assert!(logs.contains("DEBUG"));
        assert!(logs.contains("No directory for category 'current'"));
        Ok(())
    }

    #[test]
    fn test_lists_sorted_by_filename() -> Result<()> {
        let (dir, repo) = setup_repo()?;
        let current = dir.path().join("current");
        fs::create_dir(&current)?;
        fs::write(current.join("b.md"), "# Second")?;
        fs::write(current.join("a.md"), "# First")?;
        fs::write(current.join("c.md"), "# Third")?;

        let titles: Vec<String> = repo
            .list_tasks("current")
            .into_iter()
            .map(|r| r.title)
            .collect();
        assert_eq!(titles, vec!["First", "Second", "Third"]);
        Ok(())
    }

    #[test]
    fn test_ignores_other_extensions_and_subdirectories() -> Result<()> {
        let (dir, repo) = setup_repo()?;
        let current = dir.path().join("current");
        fs::create_dir_all(current.join("nested"))?;
        fs::write(current.join("task.md"), "# Task")?;
        fs::write(current.join("notes.txt"), "# Not a task")?;
        fs::write(current.join("nested").join("deep.md"), "# Too deep")?;
        fs::create_dir(current.join("dir.md"))?;

        let records = repo.list_tasks("current");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].filename, "task.md");
        assert_eq!(repo.count_tasks("current"), 1);
        Ok(())
    }

    #[test]
    fn test_unreadable_file_is_skipped() -> Result<()> {
        let (dir, repo) = setup_repo()?;
        let current = dir.path().join("current");
        fs::create_dir(&current)?;
        fs::write(current.join("good.md"), "# Good")?;
        fs::write(current.join("bad.md"), [0xffu8, 0xfe, 0x80])?;

        let records = repo.list_tasks("current");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Good");
        // Counting does not parse, so the bad file still counts
        assert_eq!(repo.count_tasks("current"), 2);
        Ok(())
    }

    #[test]
    fn test_rejects_path_like_categories() -> Result<()> {
        let (dir, repo) = setup_repo()?;
        fs::write(dir.path().join("top.md"), "# Top level")?;
        let current = dir.path().join("current");
        fs::create_dir(&current)?;
        fs::write(current.join("task.md"), "# Task")?;

        assert!(repo.list_tasks("").is_empty());
        assert!(repo.list_tasks(".").is_empty());
        assert!(repo.list_tasks("..").is_empty());
        assert!(repo.list_tasks("current/..").is_empty());
        assert!(repo.list_tasks("/etc").is_empty());
        Ok(())
    }
}
