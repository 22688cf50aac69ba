//! Task data model

use serde::Serialize;
use std::fmt;

/// One of the fixed task groupings, each backed by a directory under the root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Tasks in progress
    Current,
    /// Finished tasks
    Completed,
    /// Project notes
    Projects,
}

impl Category {
    pub const ALL: [Category; 3] = [Self::Current, Self::Completed, Self::Projects];

    /// Parse a category from its directory name
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "current" => Some(Self::Current),
            "completed" => Some(Self::Completed),
            "projects" => Some(Self::Projects),
            _ => None,
        }
    }

    /// Directory name under the todos root
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Current => "current",
            Self::Completed => "completed",
            Self::Projects => "projects",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed task file
///
/// Built fresh from file contents on every listing; nothing is cached or
/// written back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskRecord {
    /// Source file name, unique within its category
    pub filename: String,

    /// First line of the file without heading markers
    pub title: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,

    /// Body of the description section, trimmed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl TaskRecord {
    /// Create a record with only a title
    pub fn new(filename: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            title: title.into(),
            status: None,
            priority: None,
            deadline: None,
            description: None,
        }
    }
}
