// pn532/src/transport/i2c.rs

#![cfg(feature = "i2c")]

use std::thread;
use std::time::{Duration, Instant};

use rppal::gpio::{Gpio, OutputPin};
use rppal::i2c::I2c;

use crate::constants::{I2C_ADDRESS, I2C_READY};
use crate::transport::traits::Transport;
use crate::utils::{RESET_SETTLE_MS, ms};
use crate::{Error, Result};

/// Raspberry Pi I2C transport for a PN532 breakout (e.g. the Waveshare
/// NFC HAT). Every I2C read from the PN532 starts with a status byte that
/// is 0x01 once the chip has data; `read` strips it and reports `Busy`
/// otherwise.
pub struct I2cTransport {
    i2c: I2c,
    gpio: Gpio,
    /// Optional P32/H_REQ line used to wake the chip
    req: Option<OutputPin>,
    poll_interval: Duration,
}

// Bus errors are what the dispatcher treats as "device not addressable yet".
fn bus_error(e: rppal::i2c::Error) -> Error {
    Error::Transport(e.to_string())
}

impl I2cTransport {
    /// Open the default I2C bus with the PN532 at its default address.
    pub fn open(req_pin: Option<u8>) -> Result<Self> {
        Self::open_with(1, I2C_ADDRESS, req_pin)
    }

    /// Open a specific bus and slave address.
    pub fn open_with(bus: u8, address: u16, req_pin: Option<u8>) -> Result<Self> {
        let mut i2c = I2c::with_bus(bus).map_err(bus_error)?;
        i2c.set_slave_address(address).map_err(bus_error)?;

        let gpio = Gpio::new()?;
        let req = match req_pin {
            Some(pin) => {
                let mut out = gpio.get(pin)?.into_output();
                out.set_reset_on_drop(false);
                Some(out)
            }
            None => None,
        };

        log::debug!(
            "opened PN532 on i2c bus {} address {:#04x} (req pin {:?})",
            bus,
            address,
            req_pin
        );

        Ok(Self {
            i2c,
            gpio,
            req,
            poll_interval: ms(5),
        })
    }
}

impl Transport for I2cTransport {
    fn write(&mut self, frame: &[u8]) -> Result<()> {
        self.i2c.write(frame).map_err(bus_error)?;
        Ok(())
    }

    fn read(&mut self, count: usize) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; count + 1];
        let n = self.i2c.read(&mut buf).map_err(bus_error)?;
        buf.truncate(n);
        if buf.first() != Some(&I2C_READY) {
            return Err(Error::Busy);
        }
        Ok(buf.split_off(1))
    }

    fn wait_ready(&mut self, timeout: Duration) -> Result<bool> {
        let start = Instant::now();
        loop {
            let mut status = [0u8; 1];
            // A NAK while the chip is busy is expected; keep polling.
            if let Ok(1) = self.i2c.read(&mut status) {
                if status[0] == I2C_READY {
                    return Ok(true);
                }
            }
            if start.elapsed() >= timeout {
                return Ok(false);
            }
            thread::sleep(self.poll_interval);
        }
    }

    fn wakeup(&mut self) -> Result<()> {
        if let Some(req) = self.req.as_mut() {
            req.set_high();
            thread::sleep(ms(RESET_SETTLE_MS));
            req.set_low();
            thread::sleep(ms(RESET_SETTLE_MS));
            req.set_high();
            thread::sleep(ms(5 * RESET_SETTLE_MS));
        }
        Ok(())
    }

    fn reset(&mut self, pin: u8) -> Result<()> {
        let mut rst = self.gpio.get(pin)?.into_output();
        rst.set_reset_on_drop(false);
        rst.set_high();
        thread::sleep(ms(RESET_SETTLE_MS));
        rst.set_low();
        thread::sleep(ms(5 * RESET_SETTLE_MS));
        rst.set_high();
        thread::sleep(ms(RESET_SETTLE_MS));
        Ok(())
    }
}
