// pn532/src/protocol/commands/mifare.rs

//! MIFARE Classic commands carried as InDataExchange parameters. Each
//! encoding starts with the logical target number (always 1, a single
//! card is ever listed).

use crate::constants::{MAX_TARGETS, MIFARE_CMD_READ, MIFARE_CMD_WRITE};
use crate::types::{BlockData, KeyType, MifareKey, Uid};

/// Tg (1) + auth command (1) + block (1) + key (6) + UID (4..=7)
pub fn encode_authenticate(uid: &Uid, block: u8, key_type: KeyType, key: &MifareKey) -> Vec<u8> {
    let mut v = Vec::with_capacity(3 + key.as_bytes().len() + uid.len());
    v.push(MAX_TARGETS);
    v.push(key_type.command());
    v.push(block);
    v.extend_from_slice(key.as_bytes());
    v.extend_from_slice(uid.as_bytes());
    v
}

/// Tg (1) + read command (1) + block (1)
pub fn encode_read_block(block: u8) -> Vec<u8> {
    vec![MAX_TARGETS, MIFARE_CMD_READ, block]
}

/// Tg (1) + write command (1) + block (1) + data (16)
pub fn encode_write_block(block: u8, data: &BlockData) -> Vec<u8> {
    let mut v = Vec::with_capacity(3 + data.as_bytes().len());
    v.push(MAX_TARGETS);
    v.push(MIFARE_CMD_WRITE);
    v.push(block);
    v.extend_from_slice(data.as_bytes());
    v
}
