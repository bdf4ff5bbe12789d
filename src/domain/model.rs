use serde::{Deserialize, Serialize};
use std::fmt;

/// Payload served by the quote source. Only `quote` is read; `null` or a
/// missing field both become an empty message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteResponse {
    #[serde(default)]
    pub quote: Option<String>,
}

impl QuoteResponse {
    pub fn into_text(self) -> String {
        self.quote.unwrap_or_default()
    }
}

/// A direct message channel, opened fresh for every run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DmChannel(pub u64);

impl fmt::Display for DmChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    pub channel: DmChannel,
    pub content: String,
}
