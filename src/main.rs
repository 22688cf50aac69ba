//! todo-bot - Telegram bot for a markdown task store

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use todo_bot::cli::{self, Cli, Commands};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let filter = if std::env::var("TODO_BOT_DEBUG").is_ok() {
        EnvFilter::new("todo_bot=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("todo_bot=info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Some(Commands::Completion { shell }) = cli.command {
        generate(shell, &mut Cli::command(), "todo-bot", &mut std::io::stdout());
        return Ok(());
    }

    let config = cli::load_config(cli.config, cli.root, cli.locale)?;
    let messages = config.todos.locale.messages();

    match cli.command {
        Some(Commands::List(args)) => cli::list::run(&cli::repository(&config)?, &messages, args),
        Some(Commands::Stats(args)) => cli::stats::run(&cli::repository(&config)?, &messages, args),
        Some(Commands::Run) | None => cli::run::run(&config).await,
        Some(Commands::Completion { .. }) => unreachable!(),
    }
}
