//! Application configuration.
//!
//! Settings come from the process environment (a `.env` file is loaded by the
//! binary before this runs):
//!
//! | Variable                | Default                     |
//! |-------------------------|-----------------------------|
//! | `PORT`                  | `8000`                      |
//! | `DIRECTORY_API_URL`     | `https://fdnd.directus.app` |
//! | `SQUAD_COHORT`          | `2425`                      |
//! | `SQUAD_TRIBE`           | `FDND Jaar 1`               |
//! | `UPSTREAM_TIMEOUT_SECS` | unset (no timeout)          |

use std::time::Duration;

use anyhow::{Context, Result};

use crate::api::client::DEFAULT_BASE_URL;

/// Port used when `PORT` is unset
pub const DEFAULT_PORT: u16 = 8000;

/// Academic year shown on the site
pub const DEFAULT_COHORT: &str = "2425";

/// Tribe whose squads and students are listed
pub const DEFAULT_TRIBE: &str = "FDND Jaar 1";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub port: u16,
    pub api_base_url: String,
    pub cohort: String,
    pub tribe: String,
    pub upstream_timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            api_base_url: DEFAULT_BASE_URL.to_string(),
            cohort: DEFAULT_COHORT.to_string(),
            tribe: DEFAULT_TRIBE.to_string(),
            upstream_timeout: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any variable source. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = Self::default();

        let port = match get("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("Invalid PORT value: {}", raw))?,
            None => defaults.port,
        };

        let upstream_timeout = match get("UPSTREAM_TIMEOUT_SECS") {
            Some(raw) => {
                let secs = raw
                    .parse::<u64>()
                    .with_context(|| format!("Invalid UPSTREAM_TIMEOUT_SECS value: {}", raw))?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        Ok(Self {
            port,
            api_base_url: get("DIRECTORY_API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            cohort: get("SQUAD_COHORT").unwrap_or(defaults.cohort),
            tribe: get("SQUAD_TRIBE").unwrap_or(defaults.tribe),
            upstream_timeout,
        })
    }
}
