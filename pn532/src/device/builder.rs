// pn532/src/device/builder.rs

use std::time::Duration;

use crate::device::config::SessionConfig;
use crate::device::handle::{Device, Uninitialized};
use crate::transport::Transport;
use crate::{Error, Result};

/// Helper to construct a Device with optional configuration.
#[derive(Default)]
pub struct DeviceBuilder {
    transport: Option<Box<dyn Transport>>,
    config: SessionConfig,
}

impl DeviceBuilder {
    /// Builder with default settings and no transport.
    pub fn new() -> Self {
        Self::default()
    }

    /// Provide an already-created transport instance (e.g. MockTransport)
    pub fn with_transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// GPIO line to pulse during initialization.
    pub fn with_reset_pin(mut self, pin: u8) -> Self {
        self.config.reset_pin = Some(pin);
        self
    }

    /// Log raw frames at debug level.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.config.debug = debug;
        self
    }

    /// Readiness timeout for SAM configuration and card exchanges.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Consume the builder and return an uninitialized Device.
    /// Requires a transport to be provided; otherwise returns DeviceNotFound.
    pub fn build_uninitialized(self) -> Result<Device<Uninitialized>> {
        match self.transport {
            Some(t) => Device::with_config(t, self.config),
            None => Err(Error::DeviceNotFound),
        }
    }

    /// Open the default I2C bus and use it as the transport.
    #[cfg(feature = "i2c")]
    pub fn with_i2c(self, req_pin: Option<u8>) -> Result<Self> {
        let transport = crate::transport::I2cTransport::open(req_pin)?;
        Ok(self.with_transport(Box::new(transport)))
    }
}
