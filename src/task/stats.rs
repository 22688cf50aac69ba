//! Per-category task counts

use chrono::{Local, NaiveDate};
use serde::Serialize;

use super::model::Category;
use super::scanner::TaskRepository;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub current: usize,
    pub completed: usize,
    pub projects: usize,
    /// Day the counts were taken, serialized as YYYY-MM-DD
    pub date: NaiveDate,
}

/// Count task files per category as of today
pub fn compute_stats(repo: &TaskRepository) -> Stats {
    compute_stats_on(repo, Local::now().date_naive())
}

pub fn compute_stats_on(repo: &TaskRepository, date: NaiveDate) -> Stats {
    Stats {
        current: repo.count_tasks(Category::Current.as_str()),
        completed: repo.count_tasks(Category::Completed.as_str()),
        projects: repo.count_tasks(Category::Projects.as_str()),
        date,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::locale::Labels;
    use anyhow::Result;
    use std::fs;
    use tempfile::TempDir;

    fn write_tasks(root: &std::path::Path, category: &str, n: usize) -> Result<()> {
        let dir = root.join(category);
        fs::create_dir_all(&dir)?;
        for i in 0..n {
            fs::write(dir.join(format!("task{}.md", i)), format!("# Task {}", i))?;
        }
        Ok(())
    }

    #[test]
    fn test_compute_stats() -> Result<()> {
        let dir = TempDir::new()?;
        write_tasks(dir.path(), "current", 3)?;
        write_tasks(dir.path(), "completed", 5)?;

        let repo = TaskRepository::new(dir.path(), Labels::default());
        let date = NaiveDate::from_ymd_opt(2026, 2, 15).unwrap();
        let stats = compute_stats_on(&repo, date);

        assert_eq!(
            stats,
            Stats {
                current: 3,
                completed: 5,
                projects: 0,
                date,
            }
        );
        Ok(())
    }

    #[test]
    fn test_compute_stats_uses_today() -> Result<()> {
        let dir = TempDir::new()?;
        let repo = TaskRepository::new(dir.path(), Labels::default());
        let before = Local::now().date_naive();
        let stats = compute_stats(&repo);
        let after = Local::now().date_naive();
        assert!(stats.date == before || stats.date == after);
        Ok(())
    }

    #[test]
    fn test_stats_json_date_format() -> Result<()> {
        let stats = Stats {
            current: 1,
            completed: 2,
            projects: 3,
            date: NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
        };
        let json = serde_json::to_value(&stats)?;
        assert_eq!(json["date"], "2026-10-19");
        assert_eq!(json["projects"], 3);
        Ok(())
    }
}
