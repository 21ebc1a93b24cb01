//! Subscriber installation for the `ppp` binary.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Does nothing unless `RUST_LOG` is set, e.g. `RUST_LOG=ppp_tree=trace`.
/// Events go to stderr so they never mix with program output. With
/// `PPP_LOG_TREE` set, spans are rendered as an indented tree instead of
/// flat lines. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }

        let hierarchical = std::env::var_os("PPP_LOG_TREE").is_some();
        let tree_layer = hierarchical.then(|| {
            tracing_tree::HierarchicalLayer::new(2)
                .with_targets(true)
                .with_writer(std::io::stderr)
        });
        let fmt_layer = (!hierarchical).then(|| {
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_writer(std::io::stderr)
        });

        let _ = tracing_subscriber::registry()
            .with(EnvFilter::from_default_env())
            .with(tree_layer)
            .with(fmt_layer)
            .try_init();
    });
}
