//! Console logging setup shared by the CLI and the gallery.
//!
//! `RUST_LOG` wins when set; otherwise the `-v` count picks the level.
//!
//! ```bash
//! # Per-frame animation traces
//! RUST_LOG=vantui_core::animation=trace vantui animate --from 0 --to 60
//! ```

use tracing_subscriber::EnvFilter;

/// Filter directive for a `-v` count
pub fn filter_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global fmt subscriber.
///
/// Safe to call more than once; later calls leave the first subscriber in
/// place.
pub fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_for_verbosity(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(filter_for_verbosity(0), "warn");
        assert_eq!(filter_for_verbosity(1), "info");
        assert_eq!(filter_for_verbosity(2), "debug");
        assert_eq!(filter_for_verbosity(9), "trace");
    }

    #[test]
    fn init_twice_is_harmless() {
        init_logging(0);
        init_logging(3);
    }
}
