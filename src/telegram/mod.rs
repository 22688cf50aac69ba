//! Telegram Bot API transport
//!
//! Just enough of the Bot API for a polling bot:
//! - Long-poll `getUpdates`
//! - Send and edit text messages with inline keyboards
//! - Acknowledge button presses

pub mod client;
pub mod error;
pub mod types;

pub use client::{TelegramClient, DEFAULT_API_URL, PARSE_MODE_MARKDOWN};
pub use error::TelegramError;
pub use types::{CallbackQuery, InlineKeyboardButton, InlineKeyboardMarkup, Message, Update};
