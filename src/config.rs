//! Runtime configuration read from the process environment (after `.env` loading).
use crate::constants::{DEFAULT_IMAGES_DIR, DEFAULT_WEAPONS_FILE};
use crate::error::ConfigError;
use serenity::model::id::GuildId;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct Config {
    pub token: String,
    pub weapons_file: PathBuf,
    pub images_dir: PathBuf,
    /// Register the slash command on this guild only; global registration when unset.
    pub guild_id: Option<GuildId>,
    /// Bind address of the uptime-check listener; disabled when unset.
    pub health_bind: Option<SocketAddr>,
    /// Whether multi-draw results offer the overwrite toggle and replace prior posts.
    pub overwrite_toggle: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup so tests need not touch the real environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = lookup("DISCORD_BOT_TOKEN")
            .filter(|t| !t.trim().is_empty())
            .ok_or(ConfigError::Missing("DISCORD_BOT_TOKEN"))?;

        let weapons_file = lookup("WEAPONS_FILE")
            .unwrap_or_else(|| DEFAULT_WEAPONS_FILE.to_string())
            .into();
        let images_dir = lookup("IMAGES_DIR")
            .unwrap_or_else(|| DEFAULT_IMAGES_DIR.to_string())
            .into();

        let guild_id = match lookup("GUILD_ID") {
            Some(raw) => {
                let id = raw
                    .trim()
                    .parse::<u64>()
                    .ok()
                    .filter(|id| *id != 0)
                    .ok_or(ConfigError::Invalid {
                        name: "GUILD_ID",
                        value: raw.clone(),
                    })?;
                Some(GuildId::new(id))
            }
            None => None,
        };

        let health_bind = match lookup("HEALTH_BIND") {
            Some(raw) => Some(raw.trim().parse::<SocketAddr>().map_err(|_| {
                ConfigError::Invalid {
                    name: "HEALTH_BIND",
                    value: raw.clone(),
                }
            })?),
            None => None,
        };

        let overwrite_toggle = match lookup("OVERWRITE_TOGGLE") {
            Some(raw) => parse_flag(&raw).ok_or(ConfigError::Invalid {
                name: "OVERWRITE_TOGGLE",
                value: raw,
            })?,
            None => true,
        };

        Ok(Self {
            token,
            weapons_file,
            images_dir,
            guild_id,
            health_bind,
            overwrite_toggle,
        })
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
