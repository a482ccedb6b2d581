//! Configuration for Users API

use axum::http::HeaderValue;
use core_config::{app_info, env_optional, server::ServerConfig, AppInfo, FromEnv};
use database::postgres::PostgresConfig;
use domain_users::handlers::DEFAULT_SERVER_NAME;
use std::path::PathBuf;

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub database: PostgresConfig,
    pub server: ServerConfig,
    pub environment: Environment,
    /// `Server` header on read responses (`SERVICE_NAME`)
    pub service_name: HeaderValue,
    /// Write logs here instead of stdout (`LOG_FILE`)
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let database = PostgresConfig::from_env()?;
        let server = ServerConfig::from_env()?;

        let service_name = env_optional("SERVICE_NAME")
            .unwrap_or_else(|| DEFAULT_SERVER_NAME.to_string());
        let service_name = HeaderValue::from_str(&service_name)
            .map_err(|_| eyre::eyre!("SERVICE_NAME is not a valid header value: {:?}", service_name))?;

        Ok(Self {
            app: app_info!(),
            database,
            server,
            environment,
            service_name,
            log_file: env_optional("LOG_FILE").map(PathBuf::from),
        })
    }
}
