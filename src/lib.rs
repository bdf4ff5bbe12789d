pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::{discord::SerenityConnector, http::QuoteFetcher};
pub use crate::config::{CliArgs, DiscordToken, Settings};
pub use crate::core::courier::Courier;
pub use crate::domain::model::{Delivery, DmChannel, QuoteResponse};
pub use crate::utils::error::{QuoteError, Result};
