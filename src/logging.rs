// src/logging.rs
use env_logger::{Builder, Env};

/// Map `-v` counts onto a log filter. `RUST_LOG` wins when set. Timestamps
/// and targets are dropped so hook stderr stays readable next to git's own
/// output.
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    Builder::from_env(Env::default().default_filter_or(level))
        .format_timestamp(None)
        .format_target(false)
        .init();
}
