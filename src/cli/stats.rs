//! `todo-bot stats` command implementation

use anyhow::Result;
use clap::Args;

use crate::task::{compute_stats, format_stats, Messages, TaskRepository};

#[derive(Args)]
pub struct StatsArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(repo: &TaskRepository, messages: &Messages, args: StatsArgs) -> Result<()> {
    let stats = compute_stats(repo);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("{}", format_stats(&stats, messages));
    }

    Ok(())
}
