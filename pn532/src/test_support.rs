//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockTransport setup so tests across the
//! crate and tests/ directory script the same ACK/result exchanges.
#![allow(dead_code)]

use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;
use std::time::Duration;

use crate::constants::{ACK, PN532_TO_HOST};
use crate::device::{Device, Initialized};
use crate::protocol::Frame;
use crate::transport::Transport;
use crate::transport::mock::MockTransport;
use crate::Result;

/// Firmware reply used by [`seed_firmware`]: PN532 v1.6, all card families.
#[doc(hidden)]
pub const FIRMWARE_REPLY: [u8; 4] = [0x32, 0x01, 0x06, 0x07];

/// The ACK frame as an owned buffer.
#[doc(hidden)]
pub fn ack() -> Vec<u8> {
    ACK.to_vec()
}

/// Wire bytes of the result frame the chip sends for `command`:
/// D5 <command + 1> <data...>
#[doc(hidden)]
pub fn response_frame(command: u8, data: &[u8]) -> Vec<u8> {
    let mut payload = vec![PN532_TO_HOST, command.wrapping_add(1)];
    payload.extend_from_slice(data);
    Frame::encode(&payload).expect("test payload fits in a frame")
}

/// Queue an ACK followed by the result frame for `command`.
#[doc(hidden)]
pub fn seed_reply(mock: &mut MockTransport, command: u8, data: &[u8]) {
    mock.push_read(ack());
    mock.push_read(response_frame(command, data));
}

/// Queue one successful GetFirmwareVersion exchange.
#[doc(hidden)]
pub fn seed_firmware(mock: &mut MockTransport) {
    seed_reply(mock, 0x02, &FIRMWARE_REPLY);
}

/// MockTransport shared between a test and the Device that owns its
/// boxed handle, so the test can keep scripting and inspecting it.
#[doc(hidden)]
#[derive(Debug, Clone, Default)]
pub struct SharedMock {
    inner: Rc<RefCell<MockTransport>>,
}

impl SharedMock {
    /// Fresh mock with nothing scripted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inspect the mock.
    pub fn borrow(&self) -> Ref<'_, MockTransport> {
        self.inner.borrow()
    }

    /// Script the mock.
    pub fn borrow_mut(&self) -> RefMut<'_, MockTransport> {
        self.inner.borrow_mut()
    }

    /// A handle to hand to a Device.
    pub fn boxed(&self) -> Box<dyn Transport> {
        Box::new(self.clone())
    }
}

impl Transport for SharedMock {
    fn write(&mut self, frame: &[u8]) -> Result<()> {
        self.inner.borrow_mut().write(frame)
    }

    fn read(&mut self, count: usize) -> Result<Vec<u8>> {
        self.inner.borrow_mut().read(count)
    }

    fn wait_ready(&mut self, timeout: Duration) -> Result<bool> {
        self.inner.borrow_mut().wait_ready(timeout)
    }

    fn wakeup(&mut self) -> Result<()> {
        self.inner.borrow_mut().wakeup()
    }

    fn reset(&mut self, pin: u8) -> Result<()> {
        self.inner.borrow_mut().reset(pin)
    }
}

/// Create and initialize a Device over `shared`, scripting the two
/// bootstrap firmware probes first.
#[doc(hidden)]
pub fn initialized_mock_device(shared: &SharedMock) -> Result<Device<Initialized>> {
    {
        let mut mock = shared.borrow_mut();
        seed_firmware(&mut mock);
        seed_firmware(&mut mock);
    }
    Device::new_with_transport(shared.boxed())?.initialize()
}
