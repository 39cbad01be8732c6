//! Subscriber setup for the binary.

use std::env;
use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a tracing subscriber writing to stderr.
///
/// The filter comes from `GOTOCHAN_LOG`, or `RUST_LOG` when that is unset;
/// with neither set nothing is installed. `GOTOCHAN_LOG_TREE=1` switches to
/// the indented tree layout. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let Ok(directives) = env::var("GOTOCHAN_LOG").or_else(|_| env::var("RUST_LOG")) else {
            return;
        };
        let filter = EnvFilter::new(directives);

        if env::var("GOTOCHAN_LOG_TREE").is_ok_and(|value| value == "1") {
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_indent_lines(true),
                )
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
