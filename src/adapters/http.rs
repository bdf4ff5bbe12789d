use crate::domain::model::QuoteResponse;
use crate::utils::error::{QuoteError, Result};
use reqwest::Client;

/// Plain GET against the quote source: no custom headers, timeout or retry.
#[derive(Debug, Clone, Default)]
pub struct QuoteFetcher {
    client: Client,
}

impl QuoteFetcher {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    pub async fn fetch(&self, url: &str) -> Result<QuoteResponse> {
        tracing::debug!("Requesting quote from: {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(QuoteError::FetchError)?;

        let status = response.status();
        tracing::debug!("Quote source response status: {}", status);
        if !status.is_success() {
            tracing::debug!("Quote source answered {}, decoding body anyway", status);
        }

        let body = response.bytes().await.map_err(QuoteError::FetchError)?;
        let quote = serde_json::from_slice(&body)?;
        Ok(quote)
    }
}
