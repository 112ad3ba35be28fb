// pn532/src/device/config.rs

//! Session settings.

use std::time::Duration;

use crate::utils::default_call_timeout;

/// Per-session settings fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Log raw frames at debug level instead of trace
    pub debug: bool,
    /// GPIO line pulsed low during bootstrap, if wired
    pub reset_pin: Option<u8>,
    /// Readiness timeout for commands called without an explicit one
    pub timeout: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            debug: false,
            reset_pin: None,
            timeout: default_call_timeout(),
        }
    }
}
