//! Shared helpers for the integration suite: payload builders, scripted
//! transport, and response-document synthesis.
#![allow(dead_code)]

pub mod builders;
pub mod transport;

pub use builders::*;
pub use transport::MockTransport;

/// Route log records to the test harness when `RUST_LOG` is set.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
