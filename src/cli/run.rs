//! `todo-bot run` command implementation

use anyhow::Result;
use tracing::info;

use crate::bot::{runner, Bot};
use crate::config::Config;
use crate::telegram::TelegramClient;

pub async fn run(config: &Config) -> Result<()> {
    let token = config.require_token()?;
    let repo = super::repository(config)?;

    info!(
        "Serving todos from {} (locale: {})",
        repo.root().display(),
        config.todos.locale
    );
    repo.check_root();

    let client = TelegramClient::new(token, &config.telegram.api_url)?;
    let bot = Bot::new(repo, config.todos.locale.messages());

    runner::run(client, bot, config.telegram.poll_timeout_secs).await
}
