//! myprobe - A one-shot MySQL connection probe
//!
//! # Example
//! ```ignore
//! use myprobe::{Probe, ProbeConfig};
//!
//! // Defaults: host `mysql`, database `app_db`, charset `utf8mb4`, user `root`
//! let config = ProbeConfig::default();
//!
//! // Open one connection and release it
//! let outcome = Probe::new().run(&config).await;
//!
//! // "MySQL connection successful!" or "Error: <driver message>"
//! println!("{}", outcome);
//! ```

pub mod config;
pub mod drivers;
pub mod error;
pub mod traits;

mod probe;

// Re-export main types for convenient access
pub use config::ProbeConfig;
pub use error::{ProbeError, Result};
pub use probe::{Probe, ProbeOutcome, ERROR_PREFIX, SUCCESS_MESSAGE};
pub use traits::{ConnectionDriver, ConnectionHandle};
