//! Process-wide configuration, read once from the environment at startup and
//! never mutated afterwards.

use serenity::model::id::ChannelId;
use std::env;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid AI_CHANNEL_ID '{0}': expected an integer channel id")]
    InvalidChannelId(String),
}

/// Read-only runtime configuration for the relay.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Discord bot token. Required; startup fails without it.
    pub discord_token: String,
    /// Gemini API key. Optional; when absent the relay runs but answers
    /// every message with a fixed client-unavailable reply.
    pub gemini_api_key: Option<String>,
    /// The single channel the relay is restricted to, if any.
    pub target_channel: Option<ChannelId>,
}

impl RelayConfig {
    /// Loads configuration from `DISCORD_TOKEN`, `GEMINI_API_KEY` and
    /// `AI_CHANNEL_ID`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let discord_token =
            env::var("DISCORD_TOKEN").map_err(|_| ConfigError::MissingVar("DISCORD_TOKEN"))?;
        let gemini_api_key = env::var("GEMINI_API_KEY").ok();
        let target_channel = match env::var("AI_CHANNEL_ID") {
            Ok(raw) => parse_target_channel(&raw)?,
            Err(_) => None,
        };

        Ok(Self {
            discord_token,
            gemini_api_key,
            target_channel,
        })
    }
}

/// Parses the target channel id. `0` means "accept all channels", matching
/// the unset case; anything that is not an integer is a fatal config error.
fn parse_target_channel(raw: &str) -> Result<Option<ChannelId>, ConfigError> {
    let id: u64 = raw
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidChannelId(raw.to_string()))?;
    if id == 0 {
        Ok(None)
    } else {
        Ok(Some(ChannelId::new(id)))
    }
}
