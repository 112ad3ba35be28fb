// pn532/src/protocol/parser.rs

use crate::protocol::status::classify;
use crate::{Error, Result};

/// Ensure the slice has at least `min` bytes.
pub fn ensure_len(data: &[u8], min: usize) -> Result<()> {
    if data.len() < min {
        return Err(Error::InvalidLength {
            expected: min,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Return a subslice with bounds checking.
pub fn slice_at(data: &[u8], idx: usize, len: usize) -> Result<&[u8]> {
    ensure_len(data, idx + len)?;
    Ok(&data[idx..idx + len])
}

/// Read a single byte at `idx` with bounds checking.
pub fn byte_at(data: &[u8], idx: usize) -> Result<u8> {
    ensure_len(data, idx + 1)?;
    Ok(data[idx])
}

/// Check the leading status byte of an InDataExchange result. Zero is
/// success; anything else is surfaced as the classified device error.
pub fn expect_status_ok(data: &[u8]) -> Result<()> {
    match byte_at(data, 0)? {
        0x00 => Ok(()),
        status => Err(Error::Device(classify(status))),
    }
}
