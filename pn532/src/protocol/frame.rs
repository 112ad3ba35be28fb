// pn532/src/protocol/frame.rs

//! Normal information frames: `00 00 FF LEN LCS payload DCS 00`.

use crate::constants::{FRAME_OVERHEAD, FRAME_START, MAX_PAYLOAD_LEN, MIN_PAYLOAD_LEN, POSTAMBLE};
use crate::protocol::checksum::{dcs, lcs, sum};
use crate::{Error, Result};

/// PN532 normal information frame.
///
/// Format: [Preamble(1)] [Start code(2)] [Len(1)] [LCS(1)] [Payload(n)] [DCS(1)] [Postamble(1)]
/// Preamble + start code: 0x00 0x00 0xFF
/// Postamble: 0x00
///
/// A `Frame` is built once from its payload and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    bytes: Vec<u8>,
}

impl Frame {
    /// Build a frame around `payload`. The payload must hold at least the
    /// TFI and a command byte and must stay below 255 bytes.
    pub fn new(payload: &[u8]) -> Result<Self> {
        if payload.len() < MIN_PAYLOAD_LEN || payload.len() > MAX_PAYLOAD_LEN {
            return Err(Error::InvalidArgument(format!(
                "frame payload must be {}..={} bytes, got {}",
                MIN_PAYLOAD_LEN,
                MAX_PAYLOAD_LEN,
                payload.len()
            )));
        }

        let len = payload.len() as u8;
        let mut bytes = Vec::with_capacity(payload.len() + FRAME_OVERHEAD);
        bytes.extend_from_slice(&FRAME_START);
        bytes.push(len);
        bytes.push(lcs(len));
        bytes.extend_from_slice(payload);
        bytes.push(dcs(payload));
        bytes.push(POSTAMBLE);
        Ok(Self { bytes })
    }

    /// Encode a payload into full wire bytes.
    pub fn encode(payload: &[u8]) -> Result<Vec<u8>> {
        Self::new(payload).map(Frame::into_bytes)
    }

    /// Full wire bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume into the wire bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Payload carried by this frame.
    pub fn payload(&self) -> &[u8] {
        &self.bytes[5..self.bytes.len() - 2]
    }

    /// Locate and validate a frame inside `raw` and return its payload.
    ///
    /// `raw` is whatever the transport returned for a read sized for the
    /// expected response; it may be shorter than requested and may carry
    /// any number of 0x00 bytes before the 0xFF start marker. Bytes after
    /// the DCS (postamble, bus padding) are not inspected.
    pub fn decode(raw: &[u8]) -> Result<&[u8]> {
        // Swallow the 0x00 bytes that precede 0xFF.
        let marker = raw
            .iter()
            .position(|&b| b != 0x00)
            .ok_or(Error::MalformedPreamble)?;
        if raw[marker] != 0xFF {
            return Err(Error::MalformedPreamble);
        }

        let len_idx = marker + 1;
        let len = *raw
            .get(len_idx)
            .ok_or_else(|| Error::FrameFormat("response contains no data".into()))?;
        let lcs_actual = *raw.get(len_idx + 1).ok_or(Error::InvalidLength {
            expected: len_idx + 2,
            actual: raw.len(),
        })?;
        if len.wrapping_add(lcs_actual) != 0 {
            return Err(Error::LengthChecksumMismatch {
                expected: lcs(len),
                actual: lcs_actual,
            });
        }

        let start = len_idx + 2;
        let end = start + len as usize;
        // payload plus its DCS byte
        let checked = raw.get(start..=end).ok_or(Error::InvalidLength {
            expected: end + 1,
            actual: raw.len(),
        })?;
        if sum(checked) != 0 {
            let payload = &checked[..len as usize];
            return Err(Error::ChecksumMismatch {
                expected: dcs(payload),
                actual: checked[len as usize],
            });
        }

        Ok(&checked[..len as usize])
    }
}

impl AsRef<[u8]> for Frame {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}
