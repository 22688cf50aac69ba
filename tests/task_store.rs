//! Integration tests for the task store
//!
//! These tests build a todos root on disk and check listing, formatting and
//! statistics together, the way the bot uses them.

use anyhow::Result;
use chrono::NaiveDate;
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use todo_bot::task::format::FormatMode;
use todo_bot::task::stats::compute_stats_on;
use todo_bot::task::{format_category, Labels, Locale, Messages, TaskRepository};

fn write_task(root: &Path, category: &str, name: &str, content: &str) -> Result<()> {
    let dir = root.join(category);
    fs::create_dir_all(&dir)?;
    fs::write(dir.join(name), content)?;
    Ok(())
}

#[test]
fn test_grocery_example_end_to_end() -> Result<()> {
    let temp = TempDir::new()?;
    write_task(
        temp.path(),
        "current",
        "task1.md",
        "# Buy groceries\n**Status:** in progress\n**Priority:** high\n## Description\nMilk, eggs, bread\n",
    )?;

    let repo = TaskRepository::new(temp.path(), Labels::default());
    let records = repo.list_tasks("current");

    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.filename, "task1.md");
    assert_eq!(record.title, "Buy groceries");
    assert_eq!(record.status.as_deref(), Some("in progress"));
    assert_eq!(record.priority.as_deref(), Some("high"));
    assert_eq!(record.description.as_deref(), Some("Milk, eggs, bread"));

    let text = format_category("current", &records, FormatMode::Detailed, &Messages::default());
    assert!(text.contains("1. Buy groceries\n"));
    assert!(text.contains("Status: in progress"));
    assert!(text.contains("Priority: high"));
    Ok(())
}

#[test]
fn test_stats_counts_each_category() -> Result<()> {
    let temp = TempDir::new()?;
    for i in 0..3 {
        write_task(temp.path(), "current", &format!("c{}.md", i), "# Current")?;
    }
    for i in 0..5 {
        write_task(temp.path(), "completed", &format!("d{}.md", i), "# Done")?;
    }

    let repo = TaskRepository::new(temp.path(), Labels::default());
    let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
    let stats = compute_stats_on(&repo, date);

    assert_eq!(stats.current, 3);
    assert_eq!(stats.completed, 5);
    assert_eq!(stats.projects, 0);
    assert_eq!(stats.date, date);
    Ok(())
}

#[test]
fn test_unknown_categories_are_empty() -> Result<()> {
    let temp = TempDir::new()?;
    write_task(temp.path(), "current", "a.md", "# A")?;
    let repo = TaskRepository::new(temp.path(), Labels::default());

    for category in ["archive", "current/../current", ""] {
        assert!(repo.list_tasks(category).is_empty(), "category {:?}", category);
    }

    let text = format_category("archive", &[], FormatMode::Summary, &Messages::default());
    assert_eq!(text, "📭 No tasks in category 'archive'");
    Ok(())
}

#[test]
fn test_extra_directory_works_as_category() -> Result<()> {
    let temp = TempDir::new()?;
    write_task(temp.path(), "someday", "idea.md", "# Learn the cello")?;
    let repo = TaskRepository::new(temp.path(), Labels::default());

    let records = repo.list_tasks("someday");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].title, "Learn the cello");
    Ok(())
}

#[test]
fn test_russian_task_files() -> Result<()> {
    let temp = TempDir::new()?;
    write_task(
        temp.path(),
        "projects",
        "site.md",
        "# Сайт\n**Статус:** в работе\n**Приоритет:** высокий\n## Описание\nНовый дизайн главной страницы\n## Заметки\nпотом\n",
    )?;

    let repo = TaskRepository::new(temp.path(), Locale::Ru.labels());
    let records = repo.list_tasks("projects");
    assert_eq!(records[0].status.as_deref(), Some("в работе"));
    assert_eq!(
        records[0].description.as_deref(),
        Some("Новый дизайн главной страницы")
    );

    let text = format_category("projects", &records, FormatMode::Summary, &Locale::Ru.messages());
    assert!(text.starts_with("*📁 Проекты:*\n\n1. Сайт\n"));
    assert!(text.contains("   Новый дизайн главной страницы...\n"));
    Ok(())
}
