use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{ProbeError, Result};

pub const DEFAULT_HOST: &str = "mysql";
pub const DEFAULT_PORT: u16 = 3306;
pub const DEFAULT_DATABASE: &str = "app_db";
pub const DEFAULT_CHARSET: &str = "utf8mb4";
pub const DEFAULT_USERNAME: &str = "root";
pub const DEFAULT_PASSWORD: &str = "root";

/// Connection descriptor and credentials for a single probe.
///
/// Every field has a default, so a TOML document only needs the keys it
/// wants to change:
///
/// ```
/// use myprobe::ProbeConfig;
///
/// let config = ProbeConfig::from_toml_str("host = \"db.internal\"").unwrap();
/// assert_eq!(config.host, "db.internal");
/// assert_eq!(config.database, "app_db");
/// ```
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProbeConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub charset: String,
    pub username: String,
    pub password: String,
}

impl ProbeConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ProbeError::Config(e.to_string()))
    }

    /// Load a configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| ProbeError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&content)
    }

    /// The connection descriptor, without credentials.
    /// `port=` only appears when it differs from the default.
    pub fn dsn(&self) -> String {
        let port = if self.port == DEFAULT_PORT {
            String::new()
        } else {
            format!("port={};", self.port)
        };
        format!(
            "mysql:host={};{}dbname={};charset={}",
            self.host, port, self.database, self.charset
        )
    }

    /// Check that every required field is present.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("host", &self.host),
            ("database", &self.database),
            ("charset", &self.charset),
            ("username", &self.username),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(ProbeError::InvalidConfig(format!("{} must not be empty", name)));
            }
        }
        Ok(())
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            database: DEFAULT_DATABASE.to_string(),
            charset: DEFAULT_CHARSET.to_string(),
            username: DEFAULT_USERNAME.to_string(),
            password: DEFAULT_PASSWORD.to_string(),
        }
    }
}

impl fmt::Debug for ProbeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProbeConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("charset", &self.charset)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
