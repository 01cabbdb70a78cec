use anyhow::{anyhow, Result};
use std::str::FromStr;

use crate::domain::post::Author;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub viewer_name: String,
    pub viewer_handle: String,
    pub viewer_avatar: String,
    pub utc_offset_hours: i8,
    pub seed_data: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from `lookup`, which maps a variable name to its
    /// value when set.
    pub fn from_lookup<L>(lookup: L) -> Result<Self>
    where
        L: Fn(&str) -> Option<String>,
    {
        let utc_offset_hours: i8 = env_or_parse(&lookup, "RONIM_UTC_OFFSET_HOURS", "0")?;
        if !(-23..=23).contains(&utc_offset_hours) {
            return Err(anyhow!(
                "invalid RONIM_UTC_OFFSET_HOURS: {} is outside -23..=23",
                utc_offset_hours
            ));
        }

        Ok(Self {
            viewer_name: env_or(&lookup, "RONIM_VIEWER_NAME", "You"),
            viewer_handle: env_or(&lookup, "RONIM_VIEWER_HANDLE", "you"),
            viewer_avatar: env_or(&lookup, "RONIM_VIEWER_AVATAR", "/placeholder.svg"),
            utc_offset_hours,
            seed_data: env_or_parse(&lookup, "RONIM_SEED", "true")?,
        })
    }

    /// Identity stamped on posts composed in this session.
    pub fn viewer(&self) -> Author {
        Author::new(&self.viewer_name, &self.viewer_handle, &self.viewer_avatar)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            viewer_name: "You".to_string(),
            viewer_handle: "you".to_string(),
            viewer_avatar: "/placeholder.svg".to_string(),
            utc_offset_hours: 0,
            seed_data: true,
        }
    }
}

fn env_or<L>(lookup: &L, key: &str, default: &str) -> String
where
    L: Fn(&str) -> Option<String>,
{
    lookup(key).unwrap_or_else(|| default.to_string())
}

fn env_or_parse<L, T>(lookup: &L, key: &str, default: &str) -> Result<T>
where
    L: Fn(&str) -> Option<String>,
    T: FromStr,
    <T as FromStr>::Err: std::fmt::Display,
{
    let value = env_or(lookup, key, default);
    value
        .parse::<T>()
        .map_err(|err| anyhow!("invalid {}: {}", key, err))
}
