//! Tracing initialization.
//!
//! The library itself only emits `tracing` events; binaries and tests that
//! want to see them call [`init`] once.

use std::sync::OnceLock;
use tracing_subscriber::EnvFilter;

static INIT: OnceLock<()> = OnceLock::new();

/// Installs a formatting subscriber honoring `RUST_LOG`, defaulting to
/// `foliosync=info`. Safe to call more than once; later calls are no-ops.
pub fn init() {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("foliosync=info"));
        // A subscriber may already be installed by the host application.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init();
        init();
    }
}
