use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::ProbeConfig;
use crate::drivers::SqlxMySqlDriver;
use crate::error::ProbeError;
use crate::traits::ConnectionDriver;

pub const SUCCESS_MESSAGE: &str = "MySQL connection successful!";
pub const ERROR_PREFIX: &str = "Error: ";

/// Result of a single connection attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    Connected,
    /// The driver's message, unclassified.
    Failed(String),
}

impl ProbeOutcome {
    pub fn is_connected(&self) -> bool {
        matches!(self, ProbeOutcome::Connected)
    }
}

impl fmt::Display for ProbeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeOutcome::Connected => f.write_str(SUCCESS_MESSAGE),
            ProbeOutcome::Failed(message) => write!(f, "{}{}", ERROR_PREFIX, message),
        }
    }
}

/// Main entry point for myprobe.
/// Opens one connection through its driver and reports what happened.
pub struct Probe {
    driver: Arc<dyn ConnectionDriver>,
}

impl Probe {
    /// Create a probe backed by the sqlx MySQL driver.
    pub fn new() -> Self {
        Self::with_driver(Arc::new(SqlxMySqlDriver::new()))
    }

    /// Create a probe with a custom driver.
    /// Useful for testing or using alternative database drivers.
    pub fn with_driver(driver: Arc<dyn ConnectionDriver>) -> Self {
        Self { driver }
    }

    /// Attempt one connection and release it again.
    ///
    /// # Example
    /// ```ignore
    /// let outcome = Probe::new().run(&ProbeConfig::default()).await;
    /// println!("{}", outcome);
    /// ```
    pub async fn run(&self, config: &ProbeConfig) -> ProbeOutcome {
        if let Err(e) = config.validate() {
            return failed(e);
        }

        debug!(dsn = %config.dsn(), user = %config.username, "opening connection");
        let handle = match self.driver.open(config).await {
            Ok(handle) => handle,
            Err(e) => {
                debug!(error = %e, "connection attempt failed");
                return failed(e);
            }
        };

        // The session was established; a failed quit does not change that.
        if let Err(e) = handle.close().await {
            warn!(error = %e, "connection opened but did not close cleanly");
        }

        ProbeOutcome::Connected
    }
}

impl Default for Probe {
    fn default() -> Self {
        Self::new()
    }
}

fn failed(error: ProbeError) -> ProbeOutcome {
    match error {
        ProbeError::ConnectionFailed(message) => ProbeOutcome::Failed(message),
        other => ProbeOutcome::Failed(other.to_string()),
    }
}
