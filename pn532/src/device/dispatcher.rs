// pn532/src/device/dispatcher.rs

//! Command dispatch: one half-duplex exchange of
//! command frame -> ACK frame -> result frame.

use std::time::Duration;

use log::Level;

use crate::constants::{ACK, FRAME_OVERHEAD};
use crate::protocol::codec::{encode_host_frame, strip_result_header};
use crate::protocol::Frame;
use crate::transport::Transport;
use crate::utils::bytes_to_hex_spaced;
use crate::{Error, Result};

/// Runs single command exchanges against a transport. Holds no state
/// between calls apart from the level raw frames are logged at.
#[derive(Debug, Clone, Copy)]
pub struct Dispatcher {
    frame_level: Level,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(false)
    }
}

impl Dispatcher {
    /// With `debug` set, raw frames are logged at debug level instead of trace.
    pub fn new(debug: bool) -> Self {
        Self {
            frame_level: if debug { Level::Debug } else { Level::Trace },
        }
    }

    fn dump(&self, what: &str, bytes: &[u8]) {
        log::log!(self.frame_level, "{}: [{}]", what, bytes_to_hex_spaced(bytes));
    }

    /// Send `command` with `params` and wait for up to `response_len` result
    /// bytes.
    ///
    /// Returns `Ok(None)` when the device stays silent: a transient write
    /// failure (after one wake pulse), or a readiness timeout in either
    /// the ACK or the result phase. A wrong ACK, a malformed frame or a
    /// result for another command are returned as errors because the byte
    /// stream is out of sync.
    pub fn call_function(
        &self,
        transport: &mut dyn Transport,
        command: u8,
        params: &[u8],
        response_len: usize,
        timeout: Duration,
    ) -> Result<Option<Vec<u8>>> {
        let frame = encode_host_frame(command, params)?;
        self.dump("write frame", frame.as_bytes());

        match transport.write(frame.as_bytes()) {
            Ok(()) => {}
            Err(e) if e.is_transient() => {
                log::warn!("write of command {:#04x} failed ({}); sending wake-up", command, e);
                transport.wakeup()?;
                return Ok(None);
            }
            Err(e) => return Err(e),
        }

        if !transport.wait_ready(timeout)? {
            log::debug!("no ACK for command {:#04x} within {:?}", command, timeout);
            return Ok(None);
        }

        let ack = transport.read(ACK.len())?;
        self.dump("read ack", &ack);
        if ack != ACK {
            return Err(Error::UnexpectedAck(ack));
        }

        if !transport.wait_ready(timeout)? {
            log::debug!("no result for command {:#04x} within {:?}", command, timeout);
            return Ok(None);
        }

        // two header bytes (D5, command + 1) precede the result
        let raw = transport.read(response_len + 2 + FRAME_OVERHEAD)?;
        self.dump("read frame", &raw);
        let payload = Frame::decode(&raw)?;
        let data = strip_result_header(command, payload)?;
        Ok(Some(data.to_vec()))
    }
}
