//! Library half of the `kx` command-line tool.

pub mod commands;
mod error;
mod options;
pub mod params;

pub use error::CliError;
pub use options::{parse_eval_options, EvalOptions};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a tracing subscriber when `RUST_LOG` is set.
///
/// Output is hierarchical, so nested symbol expansions are indented under
/// the reference that triggered them. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_bracketed_fields(true),
                )
                .with(filter)
                .init();
        }
    });
}
