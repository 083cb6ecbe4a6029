/// Logger setup.
///
/// Uses the `log` facade with `env_logger` as the backend. Verbosity comes
/// from `RUST_LOG` and defaults to `warn`, so normal runs print nothing extra:
/// - `RUST_LOG=debug`: parsed options, chosen action, output size
///
/// User-facing `[warning]` lines do not go through the logger.
use env_logger::{Builder, Env};

/// Initialise the global logger. Call once, first thing in `main`.
pub fn init() {
    Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .format_target(false)
        .init();
}
