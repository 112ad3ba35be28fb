use crate::card::Card;
use crate::device::{Device, Initialized};
use crate::types::{KeyType, MifareKey};
use crate::Result;

/// MIFARE Classic authentication of `block` using the card's own UID.
pub fn authenticate(
    card: &Card,
    device: &mut Device<Initialized>,
    block: u8,
    key_type: KeyType,
    key: &MifareKey,
) -> Result<()> {
    device.mifare_classic_authenticate_block(card.uid(), block, key_type, key)
}
