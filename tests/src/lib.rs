mod mock_connection;
pub use mock_connection::{EngineError, LoggedCommand, MockConnection, MockTransaction, Response};

pub mod models;

use rowmap::Row;

/// Install a tracing subscriber that writes through the test harness.
///
/// Controlled by `RUST_LOG`; safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn person_row(id: i64, name: &str) -> Row {
    Row::new().with("Id", id).with("Name", name)
}
