// pn532/src/protocol/responses/mifare.rs

use crate::Result;
use crate::constants::MIFARE_BLOCK_LEN;
use crate::protocol::parser::{expect_status_ok, slice_at};
use crate::types::BlockData;

/// Decode a status-only InDataExchange result (authenticate, write).
pub fn decode_status(data: &[u8]) -> Result<()> {
    expect_status_ok(data)
}

/// Decode a MIFARE read result: status (1) + block data (16)
pub fn decode_read_block(data: &[u8]) -> Result<BlockData> {
    expect_status_ok(data)?;
    BlockData::try_from(slice_at(data, 1, MIFARE_BLOCK_LEN)?)
}
