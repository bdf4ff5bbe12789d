use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// Long flags that may also be written with a single dash (`-userId 42`).
const SINGLE_DASH_FLAGS: [&str; 3] = ["sourceUrl", "userId", "discordToken"];

#[derive(Clone, Default, Parser)]
#[command(name = "discord-quotes")]
#[command(about = "Fetch a quote and send it to a Discord user as a direct message")]
pub struct CliArgs {
    /// URL to get quotes from (falls back to QUOTES_URL)
    #[arg(long = "sourceUrl", value_name = "URL")]
    pub source_url: Option<String>,

    /// User ID to send the message to (falls back to USER_ID)
    #[arg(long = "userId", value_name = "ID")]
    pub user_id: Option<String>,

    /// Discord bot token (falls back to DISCORD_TOKEN)
    #[arg(long = "discordToken", value_name = "TOKEN")]
    pub discord_token: Option<String>,

    /// Environment file to load; defaults to .env found from the working directory upward
    #[arg(long, value_name = "PATH")]
    pub env_file: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliArgs {
    pub fn parse_args() -> Self {
        Self::parse_from(normalize_flags(std::env::args_os()))
    }
}

/// Rewrites `-userId` and `-userId=42` into their `--` form so clap does not
/// read them as bundles of short flags.
pub fn normalize_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| match arg.to_str() {
            Some(text) if is_single_dash_flag(text) => OsString::from(format!("-{}", text)),
            _ => arg,
        })
        .collect()
}

fn is_single_dash_flag(arg: &str) -> bool {
    let Some(rest) = arg.strip_prefix('-') else {
        return false;
    };
    if rest.starts_with('-') {
        return false;
    }
    let name = rest.split_once('=').map_or(rest, |(name, _)| name);
    SINGLE_DASH_FLAGS.contains(&name)
}
