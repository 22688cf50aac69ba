//! Label markers and user-facing strings for the supported languages

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

use super::model::Category;

/// Language of the task files and of the bot's replies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ru,
}

impl Locale {
    pub fn labels(&self) -> Labels {
        match self {
            Self::En => Labels {
                status: "**Status:**",
                priority: "**Priority:**",
                deadline: "**Deadline:**",
                description: "## Description",
                untitled: "Untitled",
            },
            Self::Ru => Labels {
                status: "**Статус:**",
                priority: "**Приоритет:**",
                deadline: "**Дедлайн:**",
                description: "## Описание",
                untitled: "Без названия",
            },
        }
    }

    pub fn messages(&self) -> Messages {
        match self {
            Self::En => Messages {
                current_title: "📋 Current tasks",
                completed_title: "✅ Completed tasks",
                projects_title: "📁 Projects",
                status: "Status",
                priority: "Priority",
                no_tasks: "📭 No tasks in category",
                welcome: "Hi! I'll help you manage your tasks.\nChoose a category:",
                stats_title: "📊 *Statistics:*",
                stats_current: "📋 Current tasks",
                stats_completed: "✅ Completed",
                stats_projects: "📁 Projects",
                stats_date: "📅 Date",
            },
            Self::Ru => Messages {
                current_title: "📋 Текущие задачи",
                completed_title: "✅ Выполненные задачи",
                projects_title: "📁 Проекты",
                status: "Статус",
                priority: "Приоритет",
                no_tasks: "📭 Нет задач в категории",
                welcome: "Привет! Я помогу управлять вашими задачами.\nВыберите категорию:",
                stats_title: "📊 *Статистика:*",
                stats_current: "📋 Текущих задач",
                stats_completed: "✅ Выполнено",
                stats_projects: "📁 Проектов",
                stats_date: "📅 Дата",
            },
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::En => write!(f, "en"),
            Self::Ru => write!(f, "ru"),
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Self::En),
            "ru" | "russian" => Ok(Self::Ru),
            other => Err(format!("unknown locale '{}' (expected 'en' or 'ru')", other)),
        }
    }
}

/// Markers the parser looks for in a task file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    pub status: &'static str,
    pub priority: &'static str,
    pub deadline: &'static str,
    /// Heading that opens the description section
    pub description: &'static str,
    /// Title used when the file has no lines
    pub untitled: &'static str,
}

impl Default for Labels {
    fn default() -> Self {
        Locale::default().labels()
    }
}

/// Reply strings used by the formatter
#[derive(Debug, Clone, Copy)]
pub struct Messages {
    pub current_title: &'static str,
    pub completed_title: &'static str,
    pub projects_title: &'static str,
    pub status: &'static str,
    pub priority: &'static str,
    pub no_tasks: &'static str,
    pub welcome: &'static str,
    pub stats_title: &'static str,
    pub stats_current: &'static str,
    pub stats_completed: &'static str,
    pub stats_projects: &'static str,
    pub stats_date: &'static str,
}

impl Messages {
    /// Display title for a category, falling back to the raw name
    pub fn category_title<'a>(&self, category: &'a str) -> &'a str {
        match Category::parse(category) {
            Some(Category::Current) => self.current_title,
            Some(Category::Completed) => self.completed_title,
            Some(Category::Projects) => self.projects_title,
            None => category,
        }
    }
}

impl Default for Messages {
    fn default() -> Self {
        Locale::default().messages()
    }
}
