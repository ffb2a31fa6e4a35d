//! Stderr diagnostics for `food-lottery`.
//!
//! The menu, the preference listing and the drawn food are written to stdout
//! by the front ends and never pass through here, so `draw` output stays
//! pipeable whatever `RUST_LOG` says. Store loads and draws log at `debug`.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Level used when `RUST_LOG` is unset or unparseable.
pub const DEFAULT_DIRECTIVE: &str = "warn";

/// Build the filter from a `RUST_LOG`-style directive string.
pub fn filter_from(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|raw| EnvFilter::try_new(raw).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Install the global subscriber. Call once, first thing in `main`.
///
/// `RUST_LOG=lottery=debug food-lottery draw` shows each load and draw.
pub fn init() {
    let directives = std::env::var("RUST_LOG").ok();
    tracing_subscriber::registry()
        .with(filter_from(directives.as_deref()))
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_directives_fall_back_to_warn() {
        assert_eq!(filter_from(None).to_string(), "warn");
    }

    #[test]
    fn explicit_directives_are_used() {
        assert_eq!(filter_from(Some("lottery=debug")).to_string(), "lottery=debug");
    }
}
