// pn532/src/card/mod.rs

//! Card-level helpers on top of the device commands.

use std::ops::RangeInclusive;

use crate::device::{Device, Initialized};
use crate::types::{BlockData, KeyType, MifareKey, PassiveTarget, Uid};
use crate::Result;

pub mod operations;

/// A MIFARE Classic card found by [`Device::list_passive_target`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    target: PassiveTarget,
}

impl Card {
    /// Wrap a detected target.
    pub fn new(target: PassiveTarget) -> Self {
        Self { target }
    }

    /// Detection record this card was built from.
    pub fn target(&self) -> &PassiveTarget {
        &self.target
    }

    /// NFCID1 of the card.
    pub fn uid(&self) -> &Uid {
        &self.target.uid
    }

    /// ATQA.
    pub fn sens_res(&self) -> [u8; 2] {
        self.target.sens_res
    }

    /// SAK.
    pub fn sel_res(&self) -> u8 {
        self.target.sel_res
    }

    /// Authenticate `block` against this card's UID.
    pub fn authenticate(
        &self,
        device: &mut Device<Initialized>,
        block: u8,
        key_type: KeyType,
        key: &MifareKey,
    ) -> Result<()> {
        operations::authenticate(self, device, block, key_type, key)
    }

    /// Read a block whose sector is already authenticated.
    pub fn read_block(&self, device: &mut Device<Initialized>, block: u8) -> Result<BlockData> {
        operations::read_block(device, block)
    }

    /// Authenticate then read a single block.
    pub fn read_block_with_key(
        &self,
        device: &mut Device<Initialized>,
        block: u8,
        key_type: KeyType,
        key: &MifareKey,
    ) -> Result<BlockData> {
        self.authenticate(device, block, key_type, key)?;
        operations::read_block(device, block)
    }

    /// Write 16 bytes to an authenticated block.
    pub fn write_block(&self, device: &mut Device<Initialized>, block: u8, data: &[u8]) -> Result<()> {
        operations::write_block(device, block, data)
    }

    /// Authenticate and read every block in `blocks`, stopping at the
    /// first status error the card reports.
    pub fn dump_blocks(
        &self,
        device: &mut Device<Initialized>,
        blocks: RangeInclusive<u8>,
        key_type: KeyType,
        key: &MifareKey,
    ) -> Result<Vec<(u8, BlockData)>> {
        operations::dump_blocks(self, device, blocks, key_type, key)
    }
}

impl From<PassiveTarget> for Card {
    fn from(target: PassiveTarget) -> Self {
        Self::new(target)
    }
}
