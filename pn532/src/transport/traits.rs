// pn532/src/transport/traits.rs

//! The bus abstraction.

use std::time::Duration;

use crate::Result;

/// Transport trait abstracts the bus (I2C, SPI, UART) away from the frame
/// protocol. The PN532 link is half-duplex: implementations never see more
/// than one command in flight.
pub trait Transport {
    /// Write a complete frame to the device. Return `Error::Transport` for
    /// transient bus failures (device not addressable yet); the dispatcher
    /// answers those with a wake pulse.
    fn write(&mut self, frame: &[u8]) -> Result<()>;

    /// Read up to `count` bytes of frame data, not including any bus-level
    /// status byte. Returning fewer bytes is not an error.
    fn read(&mut self, count: usize) -> Result<Vec<u8>>;

    /// Block until the device signals data is ready or `timeout` elapses.
    /// Returns `false` on timeout.
    fn wait_ready(&mut self, timeout: Duration) -> Result<bool>;

    /// Send the wake-up sequence.
    fn wakeup(&mut self) -> Result<()>;

    /// Toggle the hardware reset line on `pin`, including the settle delay.
    /// Transports without a reset line keep the default no-op.
    fn reset(&mut self, pin: u8) -> Result<()> {
        log::debug!("transport has no reset line; ignoring reset on pin {}", pin);
        Ok(())
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn write(&mut self, frame: &[u8]) -> Result<()> {
        (**self).write(frame)
    }

    fn read(&mut self, count: usize) -> Result<Vec<u8>> {
        (**self).read(count)
    }

    fn wait_ready(&mut self, timeout: Duration) -> Result<bool> {
        (**self).wait_ready(timeout)
    }

    fn wakeup(&mut self) -> Result<()> {
        (**self).wakeup()
    }

    fn reset(&mut self, pin: u8) -> Result<()> {
        (**self).reset(pin)
    }
}
