use crate::adapters::http::QuoteFetcher;
use crate::config::Settings;
use crate::core::session::SessionGuard;
use crate::domain::model::Delivery;
use crate::domain::ports::{Connector, DirectMessenger};
use crate::utils::error::Result;
use std::fmt;

/// Progress of a single run. Any error moves the run straight to `Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Init,
    ConfigResolved,
    SessionOpened,
    ChannelResolved,
    QuoteFetched,
    MessageSent,
    Done,
    Failed,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Init => "init",
            Stage::ConfigResolved => "config resolved",
            Stage::SessionOpened => "session opened",
            Stage::ChannelResolved => "channel resolved",
            Stage::QuoteFetched => "quote fetched",
            Stage::MessageSent => "message sent",
            Stage::Done => "done",
            Stage::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Drives one delivery: open a session, resolve the DM channel, fetch the
/// quote and send it. The first failure ends the run.
pub struct Courier<C: Connector> {
    connector: C,
    fetcher: QuoteFetcher,
}

impl<C: Connector> Courier<C> {
    pub fn new(connector: C, fetcher: QuoteFetcher) -> Self {
        Self { connector, fetcher }
    }

    pub async fn deliver(&self, settings: &Settings) -> Result<Delivery> {
        self.deliver_tracked(settings).await.1
    }

    /// Like `deliver`, also returning the stage the run ended in.
    pub async fn deliver_tracked(&self, settings: &Settings) -> (Stage, Result<Delivery>) {
        let mut stage = Stage::ConfigResolved;
        let outcome = self.advance(settings, &mut stage).await;

        if let Err(e) = &outcome {
            tracing::debug!("Run failed after stage '{}': {}", stage, e);
            enter(&mut stage, Stage::Failed);
        }
        (stage, outcome)
    }

    async fn advance(&self, settings: &Settings, stage: &mut Stage) -> Result<Delivery> {
        let session = SessionGuard::new(self.connector.connect(&settings.discord_token)?);
        enter(stage, Stage::SessionOpened);

        let channel = session.open_dm_channel(&settings.user_id).await?;
        enter(stage, Stage::ChannelResolved);

        let content = self.fetcher.fetch(&settings.source_url).await?.into_text();
        enter(stage, Stage::QuoteFetched);

        session.send_message(channel, &content).await?;
        enter(stage, Stage::MessageSent);

        drop(session);
        enter(stage, Stage::Done);

        Ok(Delivery { channel, content })
    }
}

fn enter(stage: &mut Stage, next: Stage) {
    tracing::debug!("{} -> {}", stage, next);
    *stage = next;
}
