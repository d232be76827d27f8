// ABOUTME: Base URLs for the scraper backends
// ABOUTME: Composes the HubCloud and timer service URLs from a VPS base URL and two ports

use std::env;
use std::num::ParseIntError;

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::constants::{HUBCLOUD_PORT, TIMER_PORT, VPS_BASE_URL};

pub const DEFAULT_VPS_BASE_URL: &str = "http://85.121.5.246";
pub const DEFAULT_HUBCLOUD_PORT: u16 = 5001;
pub const DEFAULT_TIMER_PORT: u16 = 10000;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid port number for {var}: {source}")]
    InvalidPort {
        var: &'static str,
        #[source]
        source: ParseIntError,
    },
    #[error("Port {0} is out of valid range (1-65535)")]
    PortOutOfRange(u16),
    #[error("Base URL cannot be empty")]
    EmptyBaseUrl,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceEndpoints {
    pub base_url: String,
    pub hubcloud_port: u16,
    pub timer_port: u16,
}

impl Default for ServiceEndpoints {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_VPS_BASE_URL.to_string(),
            hubcloud_port: DEFAULT_HUBCLOUD_PORT,
            timer_port: DEFAULT_TIMER_PORT,
        }
    }
}

impl ServiceEndpoints {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build endpoints from an arbitrary variable source. Unset or blank
    /// variables fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let base_url = read(VPS_BASE_URL)
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_VPS_BASE_URL.to_string());

        if base_url.is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }

        let hubcloud_port = match read(HUBCLOUD_PORT) {
            Some(v) => parse_port(HUBCLOUD_PORT, &v)?,
            None => DEFAULT_HUBCLOUD_PORT,
        };
        let timer_port = match read(TIMER_PORT) {
            Some(v) => parse_port(TIMER_PORT, &v)?,
            None => DEFAULT_TIMER_PORT,
        };

        debug!(
            "Resolved service endpoints: base={}, hubcloud={}, timer={}",
            base_url, hubcloud_port, timer_port
        );

        Ok(Self {
            base_url,
            hubcloud_port,
            timer_port,
        })
    }

    pub fn hubcloud_api(&self) -> String {
        format!("{}:{}", self.base_url, self.hubcloud_port)
    }

    pub fn timer_api(&self) -> String {
        format!("{}:{}", self.base_url, self.timer_port)
    }
}

fn parse_port(var: &'static str, value: &str) -> Result<u16, ConfigError> {
    let port = value
        .trim()
        .parse::<u16>()
        .map_err(|source| ConfigError::InvalidPort { var, source })?;

    if port == 0 {
        return Err(ConfigError::PortOutOfRange(port));
    }

    Ok(port)
}
