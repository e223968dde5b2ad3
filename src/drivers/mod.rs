mod sqlx_mysql;

pub use self::in_memory_test::{InMemoryTestDriver, RecordedAttempt, ScriptedOutcome};
pub use self::sqlx_mysql::SqlxMySqlDriver;
