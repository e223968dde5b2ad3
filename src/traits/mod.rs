mod driver;

pub use driver::{ConnectionDriver, ConnectionHandle};
