use crate::adapters::discord::SerenityConnector;
use crate::adapters::http::QuoteFetcher;
use crate::config::{env_file, CliArgs, Settings};
use crate::core::courier::{Courier, Stage};
use crate::domain::model::Delivery;
use crate::domain::ports::Connector;
use crate::utils::error::Result;

/// Full run against the real environment, the real quote source and Discord.
/// The environment file is loaded first and its failure ends the run.
pub async fn run(args: &CliArgs) -> Result<Delivery> {
    env_file::load(args.env_file.as_deref())?;

    run_with(
        args,
        |key| std::env::var(key).ok(),
        SerenityConnector,
        QuoteFetcher::new(),
    )
    .await
}

/// Resolves settings through `lookup` and delivers one quote. Nothing touches
/// the network until every setting is present.
pub async fn run_with<F, C>(
    args: &CliArgs,
    lookup: F,
    connector: C,
    fetcher: QuoteFetcher,
) -> Result<Delivery>
where
    F: Fn(&str) -> Option<String>,
    C: Connector,
{
    tracing::debug!("{}", Stage::Init);
    let settings = Settings::resolve(args, lookup)?;
    tracing::debug!(
        "{} (user {}, source {})",
        Stage::ConfigResolved,
        settings.user_id,
        settings.source_url
    );

    Courier::new(connector, fetcher).deliver(&settings).await
}
