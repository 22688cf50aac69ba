//! Long-polling loop connecting Telegram updates to the bot

use anyhow::{Context, Result};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};

use super::{Bot, Reply, Request};
use crate::telegram::{CallbackQuery, Message, TelegramClient, Update, PARSE_MODE_MARKDOWN};

/// Pause after a failed poll before trying again
const POLL_ERROR_PAUSE: Duration = Duration::from_secs(5);

/// Poll for updates until Ctrl-C
pub async fn run(client: TelegramClient, bot: Bot, poll_timeout_secs: u64) -> Result<()> {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };
    run_until(client, bot, poll_timeout_secs, ctrl_c).await
}

/// Poll for updates until `shutdown` completes
///
/// `shutdown` is created once and watched while polling and while pausing
/// after a failed poll, so a signal that arrives during either is not lost.
/// An update already being handled is finished first.
pub async fn run_until<F>(
    client: TelegramClient,
    bot: Bot,
    poll_timeout_secs: u64,
    shutdown: F,
) -> Result<()>
where
    F: Future<Output = ()>,
{
    tokio::pin!(shutdown);
    let bot = Arc::new(bot);
    let mut offset: Option<i64> = None;

    info!("Polling for updates");

    loop {
        let updates = tokio::select! {
            result = client.get_updates(offset, poll_timeout_secs) => result,
            _ = &mut shutdown => break,
        };

        let updates = match updates {
            Ok(updates) => updates,
            Err(e) => {
                warn!("Failed to poll updates: {}", e);
                let stop = tokio::select! {
                    _ = tokio::time::sleep(POLL_ERROR_PAUSE) => false,
                    _ = &mut shutdown => true,
                };
                if stop {
                    break;
                }
                continue;
            }
        };

        for update in updates {
            offset = Some(update.update_id + 1);
            if let Err(e) = handle_update(&client, &bot, update).await {
                error!("Failed to handle update: {:#}", e);
            }
        }
    }

    info!("Shutting down");
    Ok(())
}

async fn handle_update(client: &TelegramClient, bot: &Arc<Bot>, update: Update) -> Result<()> {
    if let Some(query) = update.callback_query {
        return handle_callback(client, bot, query).await;
    }
    if let Some(message) = update.message {
        return handle_message(client, bot, message).await;
    }
    debug!("Ignoring update {}", update.update_id);
    Ok(())
}

async fn handle_message(client: &TelegramClient, bot: &Arc<Bot>, message: Message) -> Result<()> {
    let Some(request) = message.text.as_deref().and_then(Request::from_command) else {
        return Ok(());
    };
    debug!("Command {:?} from chat {}", request, message.chat.id);

    let reply = build_reply(bot, request).await?;
    client
        .send_message(
            message.chat.id,
            &reply.text,
            parse_mode(&reply),
            reply.inline_keyboard().as_ref(),
        )
        .await
        .context("sendMessage failed")?;
    Ok(())
}

async fn handle_callback(
    client: &TelegramClient,
    bot: &Arc<Bot>,
    query: CallbackQuery,
) -> Result<()> {
    client
        .answer_callback_query(&query.id)
        .await
        .context("answerCallbackQuery failed")?;

    let (Some(data), Some(message)) = (query.data, query.message) else {
        return Ok(());
    };
    info!("Button pressed: {}", data);

    let reply = build_reply(bot, Request::from_callback(&data)).await?;
    client
        .edit_message_text(
            message.chat.id,
            message.message_id,
            &reply.text,
            parse_mode(&reply),
            reply.inline_keyboard().as_ref(),
        )
        .await
        .context("editMessageText failed")?;
    Ok(())
}

/// Scanning reads the filesystem, so it runs on the blocking pool
async fn build_reply(bot: &Arc<Bot>, request: Request) -> Result<Reply> {
    let bot = Arc::clone(bot);
    tokio::task::spawn_blocking(move || bot.handle(&request))
        .await
        .context("Reply task panicked")
}

fn parse_mode(reply: &Reply) -> Option<&'static str> {
    reply.markdown.then_some(PARSE_MODE_MARKDOWN)
}
