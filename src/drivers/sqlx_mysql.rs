use async_trait::async_trait;
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};
use sqlx::Connection;

use crate::config::ProbeConfig;
use crate::error::{ProbeError, Result};
use crate::traits::{ConnectionDriver, ConnectionHandle};

/// MySQL driver implementation using sqlx.
#[derive(Debug, Default, Clone, Copy)]
pub struct SqlxMySqlDriver;

impl SqlxMySqlDriver {
    pub fn new() -> Self {
        Self
    }
}

/// Build connect options that stop after authentication.
///
/// sqlx normally follows the handshake with a `SET sql_mode=..., time_zone=...,
/// NAMES ...` statement. All of those are switched off here; the charset is
/// still sent in the handshake response.
pub(crate) fn connect_options(config: &ProbeConfig) -> MySqlConnectOptions {
    MySqlConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .database(&config.database)
        .charset(&config.charset)
        .username(&config.username)
        .password(&config.password)
        .pipes_as_concat(false)
        .no_engine_substitution(false)
        .timezone(None::<String>)
        .set_names(false)
}

#[async_trait]
impl ConnectionDriver for SqlxMySqlDriver {
    async fn open(&self, config: &ProbeConfig) -> Result<Box<dyn ConnectionHandle>> {
        let options = connect_options(config);
        let connection = MySqlConnection::connect_with(&options)
            .await
            .map_err(|e| ProbeError::ConnectionFailed(e.to_string()))?;

        Ok(Box::new(SqlxMySqlHandle { connection }))
    }
}

struct SqlxMySqlHandle {
    connection: MySqlConnection,
}

#[async_trait]
impl ConnectionHandle for SqlxMySqlHandle {
    async fn close(self: Box<Self>) -> Result<()> {
        self.connection
            .close()
            .await
            .map_err(|e| ProbeError::CloseFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_options_carry_config() {
        let config = ProbeConfig {
            host: "db.internal".to_string(),
            port: 3307,
            ..ProbeConfig::default()
        };
        let options = connect_options(&config);

        assert_eq!(options.get_host(), "db.internal");
        assert_eq!(options.get_port(), 3307);
        assert_eq!(options.get_database(), Some("app_db"));
        assert_eq!(options.get_charset(), "utf8mb4");
        assert_eq!(options.get_username(), "root");
    }

    #[test]
    fn test_connect_options_disable_session_statements() {
        let rendered = format!("{:?}", connect_options(&ProbeConfig::default()));

        assert!(rendered.contains("set_names: false"), "{}", rendered);
        assert!(rendered.contains("timezone: None"), "{}", rendered);
        assert!(rendered.contains("pipes_as_concat: false"), "{}", rendered);
        assert!(rendered.contains("no_engine_substitution: false"), "{}", rendered);
    }
}
