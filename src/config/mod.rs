pub mod cli;
pub mod env_file;

pub use cli::CliArgs;

use crate::utils::error::{QuoteError, Result};
use std::fmt;

pub const DISCORD_TOKEN_KEY: &str = "DISCORD_TOKEN";
pub const USER_ID_KEY: &str = "USER_ID";
pub const QUOTES_URL_KEY: &str = "QUOTES_URL";

/// Prefix Discord expects in the `Authorization` header of bot requests.
pub const BOT_PREFIX: &str = "Bot ";

/// A bot token that always carries the `Bot ` prefix.
#[derive(Clone, PartialEq, Eq)]
pub struct DiscordToken(String);

impl DiscordToken {
    pub fn normalize(raw: &str) -> Self {
        if raw.starts_with(BOT_PREFIX) {
            Self(raw.to_string())
        } else {
            Self(format!("{}{}", BOT_PREFIX, raw))
        }
    }

    pub fn as_header(&self) -> &str {
        &self.0
    }

    /// The token without its prefix.
    pub fn secret(&self) -> &str {
        &self.0[BOT_PREFIX.len()..]
    }
}

impl fmt::Debug for DiscordToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DiscordToken(Bot ***)")
    }
}

/// Everything a run needs, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    pub discord_token: DiscordToken,
    pub user_id: String,
    pub source_url: String,
}

impl Settings {
    /// Merges explicit flags with the environment. A non-empty flag wins;
    /// otherwise `lookup` is asked for the matching variable. Empty values
    /// count as absent.
    pub fn resolve<F>(args: &CliArgs, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = fallback_env(args.discord_token.as_deref(), DISCORD_TOKEN_KEY, &lookup)?;
        let user_id = fallback_env(args.user_id.as_deref(), USER_ID_KEY, &lookup)?;
        let source_url = fallback_env(args.source_url.as_deref(), QUOTES_URL_KEY, &lookup)?;

        Ok(Self {
            discord_token: DiscordToken::normalize(&token),
            user_id,
            source_url,
        })
    }
}

fn fallback_env<F>(explicit: Option<&str>, key: &str, lookup: &F) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(value) = explicit.filter(|v| !v.is_empty()) {
        tracing::debug!("{} taken from command line", key);
        return Ok(value.to_string());
    }

    lookup(key)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| QuoteError::missing(key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn args(token: Option<&str>, user: Option<&str>, url: Option<&str>) -> CliArgs {
        CliArgs {
            discord_token: token.map(str::to_string),
            user_id: user.map(str::to_string),
            source_url: url.map(str::to_string),
            ..CliArgs::default()
        }
    }

    #[test]
    fn test_flags_take_precedence_over_environment() {
        let vars = env(&[
            (DISCORD_TOKEN_KEY, "env-token"),
            (USER_ID_KEY, "111"),
            (QUOTES_URL_KEY, "http://env.example/quote"),
        ]);
        let cli = args(Some("flag-token"), Some("222"), Some("http://flag.example/quote"));

        let settings = Settings::resolve(&cli, |k| vars.get(k).cloned()).unwrap();

        assert_eq!(settings.discord_token.as_header(), "Bot flag-token");
        assert_eq!(settings.user_id, "222");
        assert_eq!(settings.source_url, "http://flag.example/quote");
    }

    #[test]
    fn test_environment_fills_missing_and_empty_flags() {
        let vars = env(&[
            (DISCORD_TOKEN_KEY, "env-token"),
            (USER_ID_KEY, "111"),
            (QUOTES_URL_KEY, "http://env.example/quote"),
        ]);
        let cli = args(Some(""), None, Some("http://flag.example/quote"));

        let settings = Settings::resolve(&cli, |k| vars.get(k).cloned()).unwrap();

        assert_eq!(settings.discord_token.as_header(), "Bot env-token");
        assert_eq!(settings.user_id, "111");
        assert_eq!(settings.source_url, "http://flag.example/quote");
    }

    #[test]
    fn test_missing_value_names_the_key() {
        let vars = env(&[(DISCORD_TOKEN_KEY, "env-token"), (USER_ID_KEY, "")]);
        let cli = args(None, None, Some("http://flag.example/quote"));

        let err = Settings::resolve(&cli, |k| vars.get(k).cloned()).unwrap_err();

        match err {
            QuoteError::MissingConfiguration { key } => assert_eq!(key, USER_ID_KEY),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_token_normalization_is_idempotent() {
        let once = DiscordToken::normalize("abc.def.ghi");
        let twice = DiscordToken::normalize(once.as_header());

        assert_eq!(once.as_header(), "Bot abc.def.ghi");
        assert_eq!(twice, once);
        assert_eq!(twice.secret(), "abc.def.ghi");
    }

    #[test]
    fn test_token_debug_is_redacted() {
        let token = DiscordToken::normalize("super-secret");
        assert!(!format!("{:?}", token).contains("super-secret"));
    }
}
