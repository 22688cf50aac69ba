//! `todo-bot list` command implementation

use anyhow::Result;
use clap::Args;

use crate::task::{format_category, FormatMode, Messages, TaskRepository};

#[derive(Args)]
pub struct ListArgs {
    /// Category to list (current, completed, projects)
    #[arg(default_value = "current")]
    category: String,

    /// Show the start of each description instead of status and priority
    #[arg(long)]
    summary: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(repo: &TaskRepository, messages: &Messages, args: ListArgs) -> Result<()> {
    let records = repo.list_tasks(&args.category);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    let mode = if args.summary {
        FormatMode::Summary
    } else {
        FormatMode::Detailed
    };
    println!("{}", format_category(&args.category, &records, mode, messages).trim_end());

    Ok(())
}
