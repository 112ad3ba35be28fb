use crate::device::{Device, Initialized};
use crate::Result;

/// Write one 16 byte block. Other lengths are rejected before any I/O.
pub fn write_block(device: &mut Device<Initialized>, block: u8, data: &[u8]) -> Result<()> {
    device.mifare_classic_write_block(block, data)
}
