use crate::config::DiscordToken;
use crate::domain::model::DmChannel;
use crate::domain::ports::{Connector, DirectMessenger};
use crate::utils::error::{QuoteError, Result};
use async_trait::async_trait;
use serenity::http::Http;
use serenity::model::gateway::GatewayIntents;
use serenity::model::id::{ChannelId, UserId};

/// Opens REST sessions against the Discord API.
#[derive(Debug, Clone, Copy, Default)]
pub struct SerenityConnector;

impl Connector for SerenityConnector {
    type Session = SerenitySession;

    fn connect(&self, token: &DiscordToken) -> Result<SerenitySession> {
        serenity::utils::validate_token(token.secret()).map_err(|e| QuoteError::AuthError {
            reason: e.to_string(),
        })?;

        Ok(SerenitySession {
            http: Some(Http::new(token.as_header())),
            intents: GatewayIntents::DIRECT_MESSAGES,
        })
    }
}

pub struct SerenitySession {
    http: Option<Http>,
    intents: GatewayIntents,
}

impl SerenitySession {
    pub fn intents(&self) -> GatewayIntents {
        self.intents
    }

    pub fn is_open(&self) -> bool {
        self.http.is_some()
    }

    fn http(&self) -> Option<&Http> {
        self.http.as_ref()
    }
}

fn parse_user_id(raw: &str) -> Option<UserId> {
    raw.trim()
        .parse::<u64>()
        .ok()
        .filter(|id| *id != 0)
        .map(UserId::new)
}

#[async_trait]
impl DirectMessenger for SerenitySession {
    async fn open_dm_channel(&self, user_id: &str) -> Result<DmChannel> {
        let resolution_error = |reason: String| QuoteError::ChannelResolutionError {
            user_id: user_id.to_string(),
            reason,
        };

        let user = parse_user_id(user_id)
            .ok_or_else(|| resolution_error("not a valid Discord user id".to_string()))?;
        let http = self
            .http()
            .ok_or_else(|| resolution_error("session is closed".to_string()))?;

        let channel = user
            .create_dm_channel(http)
            .await
            .map_err(|e| resolution_error(e.to_string()))?;

        tracing::debug!("Opened DM channel {} for user {}", channel.id, user);
        Ok(DmChannel(channel.id.get()))
    }

    async fn send_message(&self, channel: DmChannel, content: &str) -> Result<()> {
        let http = self.http().ok_or_else(|| QuoteError::SendError {
            reason: "session is closed".to_string(),
        })?;

        let message = ChannelId::new(channel.0)
            .say(http, content)
            .await
            .map_err(|e| QuoteError::SendError {
                reason: e.to_string(),
            })?;

        tracing::debug!("Message {} delivered to channel {}", message.id, channel);
        Ok(())
    }

    fn close(&mut self) {
        if self.http.take().is_some() {
            tracing::debug!("Discord session closed");
        }
    }
}
