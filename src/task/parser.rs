//! Task file parser
//!
//! A task file looks like:
//!
//! ```text
//! # Buy groceries
//! **Status:** in progress
//! **Priority:** high
//! **Deadline:** 2026-02-15
//! ## Description
//! Milk, eggs, bread
//! ```

use std::path::Path;

use super::error::{Result, TaskError};
use super::locale::Labels;
use super::model::TaskRecord;

/// Parse task file contents into a record
pub fn parse_task(content: &str, filename: &str, labels: &Labels) -> TaskRecord {
    let title = content
        .lines()
        .next()
        .map(|first| first.trim().trim_start_matches('#').trim().to_string())
        .unwrap_or_else(|| labels.untitled.to_string());

    let mut record = TaskRecord::new(filename, title);

    // Later lines overwrite earlier ones
    for line in content.lines() {
        if let Some(value) = line.strip_prefix(labels.status) {
            record.status = Some(value.trim().to_string());
        } else if let Some(value) = line.strip_prefix(labels.priority) {
            record.priority = Some(value.trim().to_string());
        } else if let Some(value) = line.strip_prefix(labels.deadline) {
            record.deadline = Some(value.trim().to_string());
        }
    }

    record.description = extract_description(content, labels.description);
    record
}

/// Text between the description heading and the next `##`, trimmed
fn extract_description(content: &str, heading: &str) -> Option<String> {
    let start = content.find(heading)? + heading.len();
    let rest = &content[start..];
    let end = rest.find("##").unwrap_or(rest.len());
    Some(rest[..end].trim().to_string())
}

/// Read and parse a task file from disk
pub fn read_task(path: &Path, labels: &Labels) -> Result<TaskRecord> {
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let content = std::fs::read_to_string(path).map_err(|source| TaskError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(parse_task(&content, &filename, labels))
}
