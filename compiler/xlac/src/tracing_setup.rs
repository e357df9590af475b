//! Log subscriber installation.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing if `RUST_LOG` is set.
///
/// Logs go to stderr. With `XLA_LOG_TREE` also set, events are shown as an
/// indented tree following span nesting, which makes recursive evaluation
/// readable; otherwise each event is a flat line with its target.
///
/// Safe to call more than once; only the first call has an effect.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let filter = EnvFilter::from_default_env();

        if std::env::var_os("XLA_LOG_TREE").is_some() {
            let tree = tracing_tree::HierarchicalLayer::new(2)
                .with_writer(std::io::stderr)
                .with_indent_lines(true)
                .with_targets(true);
            tracing_subscriber::registry().with(tree).with(filter).init();
        } else {
            let flat = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true);
            tracing_subscriber::registry().with(flat).with(filter).init();
        }
    });
}
