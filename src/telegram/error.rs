use thiserror::Error;

#[derive(Debug, Error)]
pub enum TelegramError {
    /// Transport failure; the request URL (which carries the token) is stripped
    #[error("Telegram request failed: {0}")]
    Http(reqwest::Error),

    #[error("Telegram API error {code}: {description}")]
    Api { code: i64, description: String },

    #[error("Telegram API returned no result for {0}")]
    MissingResult(&'static str),
}

impl From<reqwest::Error> for TelegramError {
    fn from(err: reqwest::Error) -> Self {
        TelegramError::Http(err.without_url())
    }
}

pub type Result<T> = std::result::Result<T, TelegramError>;
