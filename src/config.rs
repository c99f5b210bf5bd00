//! Application configuration baked in at compile time.
//!
//! The browser has no process environment, so values come from `option_env!`
//! (fed by the real environment or a `.env` file through `build.rs`). Parsing
//! goes through [`AppConfig::from_lookup`] so any key source can drive it.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use crate::error::ConfigError;

pub const DEFAULT_STORAGE_KEY: &str = "idToken";
pub const DEFAULT_ADMIN_GROUP: &str = "admins";
pub const DEFAULT_MOUNT_ANCHOR: &str = "app";

pub const ENV_STORAGE_KEY: &str = "EXPEDITE_ID_TOKEN_KEY";
pub const ENV_ADMIN_GROUP: &str = "EXPEDITE_ADMIN_GROUP";
pub const ENV_MOUNT_ANCHOR: &str = "EXPEDITE_MOUNT_ANCHOR";
pub const ENV_LOG_LEVEL: &str = "EXPEDITE_LOG_LEVEL";
pub const ENV_RELOAD_ON_LOGOUT: &str = "EXPEDITE_RELOAD_ON_LOGOUT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// `localStorage` key holding the id token.
    pub storage_key: String,
    /// Group name in `cognito:groups` that grants admin.
    pub admin_group: String,
    /// Element id the application mounts onto.
    pub mount_anchor: String,
    pub log_level: log::Level,
    /// Reload the page after logout in addition to running reset hooks.
    pub reload_on_logout: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            admin_group: DEFAULT_ADMIN_GROUP.to_owned(),
            mount_anchor: DEFAULT_MOUNT_ANCHOR.to_owned(),
            log_level: log::Level::Info,
            reload_on_logout: false,
        }
    }
}

impl AppConfig {
    /// Build config from values captured at compile time.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if any set value fails to parse.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| {
            let raw = match key {
                ENV_STORAGE_KEY => option_env!("EXPEDITE_ID_TOKEN_KEY"),
                ENV_ADMIN_GROUP => option_env!("EXPEDITE_ADMIN_GROUP"),
                ENV_MOUNT_ANCHOR => option_env!("EXPEDITE_MOUNT_ANCHOR"),
                ENV_LOG_LEVEL => option_env!("EXPEDITE_LOG_LEVEL"),
                ENV_RELOAD_ON_LOGOUT => option_env!("EXPEDITE_RELOAD_ON_LOGOUT"),
                _ => None,
            };
            raw.map(str::to_owned)
        })
    }

    /// Build config from an arbitrary key lookup. Unset keys take defaults.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for empty names, unknown log levels, or
    /// non-boolean flags.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            storage_key: non_empty(&lookup, ENV_STORAGE_KEY)?.unwrap_or(defaults.storage_key),
            admin_group: non_empty(&lookup, ENV_ADMIN_GROUP)?.unwrap_or(defaults.admin_group),
            mount_anchor: non_empty(&lookup, ENV_MOUNT_ANCHOR)?.unwrap_or(defaults.mount_anchor),
            log_level: parse_log_level(lookup(ENV_LOG_LEVEL).as_deref())?,
            reload_on_logout: parse_flag(ENV_RELOAD_ON_LOGOUT, lookup(ENV_RELOAD_ON_LOGOUT).as_deref())?,
        })
    }
}

fn non_empty<F>(lookup: &F, key: &str) -> Result<Option<String>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                Err(ConfigError::Empty { key: key.to_owned() })
            } else {
                Ok(Some(trimmed.to_owned()))
            }
        }
    }
}

fn parse_log_level(raw: Option<&str>) -> Result<log::Level, ConfigError> {
    let Some(raw) = raw else {
        return Ok(log::Level::Info);
    };
    raw.trim()
        .parse::<log::Level>()
        .map_err(|_| ConfigError::InvalidLogLevel(raw.to_owned()))
}

fn parse_flag(key: &str, raw: Option<&str>) -> Result<bool, ConfigError> {
    match raw.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        None => Ok(false),
        Some("true" | "1" | "yes") => Ok(true),
        Some("false" | "0" | "no") => Ok(false),
        Some(_) => Err(ConfigError::InvalidFlag {
            key: key.to_owned(),
            value: raw.unwrap_or_default().to_owned(),
        }),
    }
}
