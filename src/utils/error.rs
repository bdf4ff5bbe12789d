use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuoteError {
    #[error("{key} not found in environment")]
    MissingConfiguration { key: String },

    #[error("failed to load environment file: {0}")]
    EnvironmentLoadError(#[from] dotenvy::Error),

    #[error("discord token rejected: {reason}")]
    AuthError { reason: String },

    #[error("cannot open a direct message channel for user {user_id}: {reason}")]
    ChannelResolutionError { user_id: String, reason: String },

    #[error("quote request failed: {0}")]
    FetchError(#[source] reqwest::Error),

    #[error("quote payload is not valid JSON: {0}")]
    DecodeError(#[from] serde_json::Error),

    #[error("failed to send message: {reason}")]
    SendError { reason: String },
}

impl QuoteError {
    pub fn missing(key: &str) -> Self {
        QuoteError::MissingConfiguration {
            key: key.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            QuoteError::MissingConfiguration { .. } => {
                "pass the value as a flag or export it (a .env file works too)"
            }
            QuoteError::EnvironmentLoadError(_) => {
                "create the environment file or point --env-file at a readable KEY=VALUE file"
            }
            QuoteError::AuthError { .. } => "copy the bot token again from the developer portal",
            QuoteError::ChannelResolutionError { .. } => {
                "check the user id and that the user shares a server with the bot"
            }
            QuoteError::FetchError(_) => "check that the quote source URL is reachable",
            QuoteError::DecodeError(_) => "the quote source must answer with a JSON object",
            QuoteError::SendError { .. } => "check that the user accepts direct messages",
        }
    }
}

pub type Result<T> = std::result::Result<T, QuoteError>;
