use std::ops::RangeInclusive;

use crate::card::Card;
use crate::device::{Device, Initialized};
use crate::types::{BlockData, KeyType, MifareKey};
use crate::{Error, Result};

/// Read a single, already authenticated block.
pub fn read_block(device: &mut Device<Initialized>, block: u8) -> Result<BlockData> {
    device.mifare_classic_read_block(block)
}

/// Authenticate and read each block of `blocks` in order.
///
/// A status error from the card (wrong key, card removed) ends the dump
/// and the blocks read so far are returned. Protocol and bus errors are
/// propagated.
pub fn dump_blocks(
    card: &Card,
    device: &mut Device<Initialized>,
    blocks: RangeInclusive<u8>,
    key_type: KeyType,
    key: &MifareKey,
) -> Result<Vec<(u8, BlockData)>> {
    let mut out = Vec::new();
    for block in blocks {
        let read = super::authenticate(card, device, block, key_type, key)
            .and_then(|()| read_block(device, block));
        match read {
            Ok(data) => out.push((block, data)),
            Err(Error::Device(e)) => {
                log::warn!("stopping dump at block {}: {}", block, e);
                break;
            }
            Err(e) => return Err(e),
        }
    }
    Ok(out)
}
