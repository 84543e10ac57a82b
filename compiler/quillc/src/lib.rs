//! Quill command-line driver.
//!
//! ```text
//! source ──► quill_lexer ──► quill_parse ──► StmtList ──► quill_eval::Environment
//! ```
//!
//! The library half holds everything the binary does, so commands and the
//! interactive [`Session`] can be tested without a process.

pub mod commands;
mod session;

use std::sync::Once;

pub use session::{Feed, Session};

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber filtered by `RUST_LOG`.
///
/// Does nothing when `RUST_LOG` is unset. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
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
