use crate::config::DiscordToken;
use crate::domain::model::DmChannel;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Builds an authenticated session from a bot token.
pub trait Connector {
    type Session: DirectMessenger;

    fn connect(&self, token: &DiscordToken) -> Result<Self::Session>;
}

/// An open Discord session able to deliver direct messages.
#[async_trait]
pub trait DirectMessenger: Send + Sync {
    async fn open_dm_channel(&self, user_id: &str) -> Result<DmChannel>;

    async fn send_message(&self, channel: DmChannel, content: &str) -> Result<()>;

    /// Releases the session. Called exactly once, from `SessionGuard`.
    fn close(&mut self);
}
