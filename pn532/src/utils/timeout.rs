//! Timeout defaults for the command layer.

use std::time::Duration;

/// Readiness-poll timeout applied to each handshake phase when a caller
/// does not provide one.
pub const DEFAULT_CALL_TIMEOUT_MS: u64 = 1000;

/// GetFirmwareVersion answers quickly; wait less before declaring the
/// device absent.
pub const FIRMWARE_VERSION_TIMEOUT_MS: u64 = 500;

/// Settle delay used around reset and wake pulses.
pub const RESET_SETTLE_MS: u64 = 100;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// [`DEFAULT_CALL_TIMEOUT_MS`] as a Duration.
pub fn default_call_timeout() -> Duration {
    ms(DEFAULT_CALL_TIMEOUT_MS)
}

/// [`FIRMWARE_VERSION_TIMEOUT_MS`] as a Duration.
pub fn firmware_version_timeout() -> Duration {
    ms(FIRMWARE_VERSION_TIMEOUT_MS)
}
