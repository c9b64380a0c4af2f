//! Common logging initializer
//!
//! Everything goes to stderr, stdout is kept for the actual results.
//!

use eyre::Result;
use tracing::trace;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use tracing_tree::HierarchicalLayer;

/// Filter used when `RUST_LOG` is not set.
const DEFAULT_FILTER: &str = "warn";

/// Filter used when `RUST_LOG` is not set and debug output was requested.
const DEBUG_FILTER: &str = "debug";

/// Select the filter: `RUST_LOG` wins, then the debug flag, then our default.
///
fn select_filter(env: Option<&str>, debug: bool) -> EnvFilter {
    match env {
        Some(directives) if !directives.is_empty() => EnvFilter::new(directives),
        _ if debug => EnvFilter::new(DEBUG_FILTER),
        _ => EnvFilter::new(DEFAULT_FILTER),
    }
}

#[tracing::instrument(skip(debug))]
pub fn init_logging(name: &'static str, use_tree: bool, debug: bool) -> Result<()> {
    // Load filters from environment
    //
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = select_filter(env.as_deref(), debug);

    // Do we want hierarchical output?
    //
    let tree = if use_tree {
        Some(
            HierarchicalLayer::new(2)
                .with_ansi(true)
                .with_span_retrace(true)
                .with_span_modes(true)
                .with_targets(true)
                .with_verbose_entry(true)
                .with_verbose_exit(true)
                .with_bracketed_fields(true),
        )
    } else {
        None
    };

    // Otherwise plain lines on stderr.
    //
    let plain = if use_tree {
        None
    } else {
        Some(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(debug),
        )
    };

    // Combine filter & specific format
    //
    tracing_subscriber::registry()
        .with(filter)
        .with(tree)
        .with(plain)
        .try_init()?;

    trace!("Logging initialised for {name}.");
    Ok(())
}
