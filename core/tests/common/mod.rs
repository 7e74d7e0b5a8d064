#![allow(dead_code)]

use tracing_subscriber::EnvFilter;

/// Installs a test-writer subscriber filtered by the `CONSOLE_LOG` environment variable. Later calls are no-ops.
pub fn init_tracing() {
  let filter = EnvFilter::try_from_env("CONSOLE_LOG").unwrap_or_default();
  let _ = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_test_writer()
    .try_init();
}
