// Shared helpers for the integration test crates. Each aggregator
// (`protocol.rs`, `device.rs`, ...) declares `mod common;` once and the
// per-topic files reach it through `crate::common`.
#![allow(dead_code)]


pub use pn532::test_support::{
    SharedMock, ack, initialized_mock_device, response_frame, seed_firmware, seed_reply,
};

/// Route `log` output through the test harness; safe to call repeatedly.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
