//! Application configuration loaded from environment.

use sqlx::postgres::PgConnectOptions;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Application configuration loaded from `.env` and environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address, `0.0.0.0:$PORT`.
    pub server_addr: SocketAddr,
    /// PostgreSQL host.
    pub db_host: String,
    /// PostgreSQL port.
    pub db_port: u16,
    pub db_user: String,
    pub db_pass: String,
    pub db_name: String,
    /// Directory served for every non-API GET (falls back to its `index.html`).
    pub static_dir: PathBuf,
    /// Log level: `error`, `warn`, `info`, `debug`, `trace`.
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment. Call `dotenvy::dotenv().ok()` before this.
    pub fn from_env() -> Result<Self, ConfigLoadError> {
        let server_addr = server_addr_from_port(std::env::var("PORT").ok().as_deref())?;

        let db_host = std::env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string());
        let db_port = match std::env::var("DB_PORT") {
            Ok(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigLoadError::InvalidDbPort(raw.clone()))?,
            Err(_) => 5432,
        };
        let db_user = std::env::var("DB_USER").unwrap_or_else(|_| "postgres".to_string());
        let db_pass = std::env::var("DB_PASS").unwrap_or_default();
        let db_name = std::env::var("DB_NAME").unwrap_or_else(|_| "accounts".to_string());
        let static_dir = std::env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("public"));
        let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            server_addr,
            db_host,
            db_port,
            db_user,
            db_pass,
            db_name,
            static_dir,
            log_level,
        })
    }

    /// Connection options for the credential store.
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.db_host)
            .port(self.db_port)
            .username(&self.db_user)
            .password(&self.db_pass)
            .database(&self.db_name)
    }
}

const DEFAULT_PORT: u16 = 4000;

fn server_addr_from_port(port: Option<&str>) -> Result<SocketAddr, ConfigLoadError> {
    let port = match port.map(str::trim).filter(|p| !p.is_empty()) {
        Some(raw) => raw
            .parse::<u16>()
            .map_err(|_| ConfigLoadError::InvalidPort(raw.to_string()))?,
        None => DEFAULT_PORT,
    };
    Ok(SocketAddr::from(([0, 0, 0, 0], port)))
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
    #[error("Invalid PORT: {0}")]
    InvalidPort(String),
    #[error("Invalid DB_PORT: {0}")]
    InvalidDbPort(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_defaults_to_4000() {
        let addr = server_addr_from_port(None).unwrap();
        assert_eq!(addr.port(), 4000);
        assert!(addr.ip().is_unspecified());

        let addr = server_addr_from_port(Some("  ")).unwrap();
        assert_eq!(addr.port(), 4000);
    }

    #[test]
    fn port_is_parsed() {
        let addr = server_addr_from_port(Some("8080")).unwrap();
        assert_eq!(addr.to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn invalid_port_is_rejected() {
        assert!(matches!(
            server_addr_from_port(Some("http")),
            Err(ConfigLoadError::InvalidPort(_))
        ));
        assert!(server_addr_from_port(Some("70000")).is_err());
    }
}
