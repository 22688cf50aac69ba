//! Bot request dispatch
//!
//! Maps commands and button presses to reply text. Nothing here touches the
//! network; the runner sends the [`Reply`] through Telegram.

pub mod runner;

use crate::task::format::{empty_message, format_category, format_stats, FormatMode};
use crate::task::{compute_stats, Category, Messages, TaskRepository};
use crate::telegram::{InlineKeyboardButton, InlineKeyboardMarkup};

/// Something the user asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// `/start`: welcome text and the category menu
    Start,
    /// `/list`: detailed listing of current tasks
    List,
    /// `/stats`: per-category counts
    Stats,
    /// Category button pressed
    Category(String),
}

impl Request {
    /// Parse a command message like `/list` or `/stats@my_bot extra`
    pub fn from_command(text: &str) -> Option<Self> {
        let word = text.split_whitespace().next()?;
        let command = word.strip_prefix('/')?;
        let command = command.split('@').next().unwrap_or(command);

        match command {
            "start" => Some(Self::Start),
            "list" => Some(Self::List),
            "stats" => Some(Self::Stats),
            _ => None,
        }
    }

    /// Button data is the category name as-is
    pub fn from_callback(data: &str) -> Self {
        Self::Category(data.to_string())
    }
}

/// A selectable category shown under the welcome message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: String,
    pub data: String,
}

/// Text to send back, with optional markup and buttons
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    /// Whether `text` uses Markdown markup
    pub markdown: bool,
    pub keyboard: Option<Vec<Button>>,
}

impl Reply {
    fn plain(text: String) -> Self {
        Self {
            text,
            markdown: false,
            keyboard: None,
        }
    }

    fn markdown(text: String) -> Self {
        Self {
            text,
            markdown: true,
            keyboard: None,
        }
    }

    /// Keyboard with one button per row
    pub fn inline_keyboard(&self) -> Option<InlineKeyboardMarkup> {
        self.keyboard.as_ref().map(|buttons| InlineKeyboardMarkup {
            inline_keyboard: buttons
                .iter()
                .map(|b| {
                    vec![InlineKeyboardButton {
                        text: b.label.clone(),
                        callback_data: b.data.clone(),
                    }]
                })
                .collect(),
        })
    }
}

/// Answers requests from the task store
#[derive(Debug, Clone)]
pub struct Bot {
    repo: TaskRepository,
    messages: Messages,
}

impl Bot {
    pub fn new(repo: TaskRepository, messages: Messages) -> Self {
        Self { repo, messages }
    }

    /// Build the reply for a request; reads the task store synchronously
    pub fn handle(&self, request: &Request) -> Reply {
        match request {
            Request::Start => self.welcome(),
            Request::List => self.listing(Category::Current.as_str(), FormatMode::Detailed),
            Request::Stats => {
                Reply::markdown(format_stats(&compute_stats(&self.repo), &self.messages))
            }
            Request::Category(category) => self.listing(category, FormatMode::Summary),
        }
    }

    fn welcome(&self) -> Reply {
        let buttons = Category::ALL
            .iter()
            .map(|c| Button {
                label: self.messages.category_title(c.as_str()).to_string(),
                data: c.as_str().to_string(),
            })
            .collect();

        Reply {
            text: self.messages.welcome.to_string(),
            markdown: false,
            keyboard: Some(buttons),
        }
    }

    fn listing(&self, category: &str, mode: FormatMode) -> Reply {
        let records = self.repo.list_tasks(category);
        if records.is_empty() {
            return Reply::plain(empty_message(category, &self.messages));
        }
        Reply::markdown(format_category(category, &records, mode, &self.messages))
    }
}
