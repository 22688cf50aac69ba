//! Command-line definition

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use super::list::ListArgs;
use super::stats::StatsArgs;
use crate::task::Locale;

#[derive(Parser)]
#[command(name = "todo-bot")]
#[command(about = "Telegram bot for browsing a markdown task store", version)]
pub struct Cli {
    /// Config file (TOML, or JSON when the name ends in .json)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Todos root directory holding current/, completed/ and projects/
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Language of task labels and replies (en, ru)
    #[arg(long, global = true)]
    pub locale: Option<Locale>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the Telegram bot (default)
    Run,

    /// Print the tasks of a category
    List(ListArgs),

    /// Print task counts per category
    Stats(StatsArgs),

    /// Generate shell completions
    Completion {
        #[arg(value_enum)]
        shell: Shell,
    },
}
