//! Log output for the overlay binary

use tracing_subscriber::EnvFilter;

/// Filter for a run. Normal runs show `info` and up. `--debug` (or
/// `debug_logging` in the config file) drops the floor to `debug` and hands
/// control to `RUST_LOG` when it is set, so
/// `RUST_LOG=MouseOverlayRust::sampler=trace` shows each rejected delta.
fn overlay_filter(debug: bool) -> EnvFilter {
    if !debug {
        return EnvFilter::new("info");
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
}

/// Install the fmt subscriber. Returns false if one was already installed.
pub fn init(debug: bool) -> bool {
    tracing_subscriber::fmt().with_env_filter(overlay_filter(debug)).try_init().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_runs_log_info() {
        assert_eq!(overlay_filter(false).to_string(), "info");
    }

    #[test]
    fn test_second_init_is_harmless() {
        let _ = init(false);
        assert!(!init(true));
    }
}
