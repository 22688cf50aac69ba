//! Bot API client over HTTPS

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

use super::error::{Result, TelegramError};
use super::types::{
    AnswerCallbackQueryParams, ApiResponse, EditMessageTextParams, GetUpdatesParams,
    InlineKeyboardMarkup, Message, SendMessageParams, Update,
};

pub const DEFAULT_API_URL: &str = "https://api.telegram.org";

/// Parse mode for replies using `*bold*` markup
pub const PARSE_MODE_MARKDOWN: &str = "Markdown";

/// Extra time allowed on top of the long-poll timeout before giving up on a request
const POLL_GRACE: Duration = Duration::from_secs(10);

const ALLOWED_UPDATES: &[&str] = &["message", "callback_query"];

/// Client for the Telegram Bot API
pub struct TelegramClient {
    http: reqwest::Client,
    base_url: String,
}

impl TelegramClient {
    /// Create a client for `token` against `api_url` (normally [`DEFAULT_API_URL`])
    pub fn new(token: &str, api_url: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("todo-bot/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: format!("{}/bot{}", api_url.trim_end_matches('/'), token),
        })
    }

    async fn call<P, R>(
        &self,
        method: &'static str,
        params: &P,
        timeout: Option<Duration>,
    ) -> Result<R>
    where
        P: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        debug!("Calling Telegram method {}", method);

        let mut request = self
            .http
            .post(format!("{}/{}", self.base_url, method))
            .json(params);
        if let Some(timeout) = timeout {
            request = request.timeout(timeout);
        }

        // Error responses still carry the JSON envelope, so the status is not checked here
        let response: ApiResponse<R> = request.send().await?.json().await?;

        if !response.ok {
            return Err(TelegramError::Api {
                code: response.error_code.unwrap_or_default(),
                description: response
                    .description
                    .unwrap_or_else(|| "no description".to_string()),
            });
        }

        response.result.ok_or(TelegramError::MissingResult(method))
    }

    /// Long-poll for updates after `offset`, waiting up to `timeout_secs`
    pub async fn get_updates(
        &self,
        offset: Option<i64>,
        timeout_secs: u64,
    ) -> Result<Vec<Update>> {
        let params = GetUpdatesParams {
            offset,
            timeout: timeout_secs,
            allowed_updates: ALLOWED_UPDATES,
        };
        self.call(
            "getUpdates",
            &params,
            Some(Duration::from_secs(timeout_secs) + POLL_GRACE),
        )
        .await
    }

    pub async fn send_message(
        &self,
        chat_id: i64,
        text: &str,
        parse_mode: Option<&str>,
        reply_markup: Option<&InlineKeyboardMarkup>,
    ) -> Result<Message> {
        let params = SendMessageParams {
            chat_id,
            text,
            parse_mode,
            reply_markup,
        };
        self.call("sendMessage", &params, None).await
    }

    /// Replace the text of a message the bot sent earlier
    pub async fn edit_message_text(
        &self,
        chat_id: i64,
        message_id: i64,
        text: &str,
        parse_mode: Option<&str>,
        reply_markup: Option<&InlineKeyboardMarkup>,
    ) -> Result<()> {
        let params = EditMessageTextParams {
            chat_id,
            message_id,
            text,
            parse_mode,
            reply_markup,
        };
        // Result is the edited Message, or `true` for inline messages
        let _: serde_json::Value = self.call("editMessageText", &params, None).await?;
        Ok(())
    }

    /// Stop the loading indicator on a pressed button
    pub async fn answer_callback_query(&self, callback_query_id: &str) -> Result<()> {
        let params = AnswerCallbackQueryParams { callback_query_id };
        let _: bool = self.call("answerCallbackQuery", &params, None).await?;
        Ok(())
    }
}
