//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter.
pub const LOG_ENV_VAR: &str = "CAPACITA_LOG";

/// Initialize the Capacita tracing/logging system.
///
/// Reads `CAPACITA_LOG` for per-crate log levels.
/// Format: `CAPACITA_LOG=capacita_content=debug,capacita_billing=info`
///
/// Falls back to `capacita=info` if `CAPACITA_LOG` is unset or invalid.
/// Idempotent; a subscriber installed by the host is left in place.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new("capacita=info"));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
