#![doc(test(attr(deny(warnings))))]

//! In-memory emulation of a hosted server-side UI construction API (forms,
//! lists, sublists and multi-step assistants) together with a small
//! customer comment handler built on top of it.

pub mod cli;
pub mod config;
pub mod errors;
pub mod handler;
pub mod record;
pub mod server_widget;
pub mod utils;
pub mod widget;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing with the default filter and emits a startup log.
pub fn init() {
    init_with_filter(utils::DEFAULT_LOG_FILTER);
}

/// Like [`init`], with `filter` used when `RUST_LOG` is unset.
pub fn init_with_filter(filter: &str) {
    INIT_TRACING.call_once(|| {
        utils::init_tracing(filter);
        tracing::info!("Server widget tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init_with_filter("debug");
    }
}
