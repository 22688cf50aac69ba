//! todo-bot library - Browse a markdown task store from Telegram

pub mod bot;
pub mod cli;
pub mod config;
pub mod task;
pub mod telegram;
