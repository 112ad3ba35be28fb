// pn532/src/transport/mod.rs

//! Byte transports the dispatcher runs over.

/// Raspberry Pi I2C backend
#[cfg(feature = "i2c")]
pub mod i2c;
/// Scripted transport for tests
pub mod mock;
pub mod traits;

#[cfg(feature = "i2c")]
pub use i2c::I2cTransport;
pub use mock::MockTransport;
pub use traits::Transport;
