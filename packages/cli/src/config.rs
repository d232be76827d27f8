use std::env;
use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

use linkdesk_config::constants;
use linkdesk_config::ServiceEndpoints;
use linkdesk_storage::default_database_path;

pub const DEFAULT_PORT: u16 = 4001;
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid port number: {0}")]
    InvalidPort(#[from] ParseIntError),
    #[error("Port {0} is out of valid range (1-65535)")]
    PortOutOfRange(u16),
    #[error(transparent)]
    Endpoints(#[from] linkdesk_config::ConfigError),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub cors_origin: String,
    pub database_path: PathBuf,
    pub endpoints: ServiceEndpoints,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match env::var(constants::PORT) {
            Ok(value) => value.trim().parse::<u16>()?,
            Err(_) => DEFAULT_PORT,
        };

        if port == 0 {
            return Err(ConfigError::PortOutOfRange(port));
        }

        let cors_origin =
            env::var(constants::CORS_ORIGIN).unwrap_or_else(|_| DEFAULT_CORS_ORIGIN.to_string());

        let database_path = env::var_os(constants::LINKDESK_DATABASE_PATH)
            .filter(|path| !path.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_database_path);

        let endpoints = ServiceEndpoints::from_env()?;

        Ok(Config {
            port,
            cors_origin,
            database_path,
            endpoints,
        })
    }
}
