use async_trait::async_trait;

use crate::config::ProbeConfig;
use crate::error::Result;

/// Trait for connection driver implementations.
/// Drivers are responsible for:
/// - Translating a ProbeConfig into the client library's connect options
/// - Performing the handshake and authentication
/// - Mapping library errors to ProbeError::ConnectionFailed with the message intact
#[async_trait]
pub trait ConnectionDriver: Send + Sync {
    /// Open one session to the server described by `config`.
    async fn open(&self, config: &ProbeConfig) -> Result<Box<dyn ConnectionHandle>>;
}

/// One live session returned by a driver.
#[async_trait]
pub trait ConnectionHandle: Send {
    /// Release the session.
    async fn close(self: Box<Self>) -> Result<()>;
}
