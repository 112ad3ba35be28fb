// pn532/src/types.rs

//! Value types shared by the command layer and the card helpers.

use crate::Error;
use crate::constants::{
    MAX_UID_LEN, MIFARE_BLOCK_LEN, MIFARE_CMD_AUTH_A, MIFARE_CMD_AUTH_B, MIFARE_KEY_LEN,
    MIN_UID_LEN,
};
use std::convert::TryFrom;
use std::fmt;

/// Card UID - Newtype Pattern (4..=7 bytes)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Uid(Vec<u8>);

impl Uid {
    /// Raw UID bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Number of UID bytes (4 or 7 in practice).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true for a constructed Uid.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Lowercase hex, no separators.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for Uid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if !(MIN_UID_LEN..=MAX_UID_LEN).contains(&bytes.len()) {
            return Err(Error::ImplausibleUidLength(bytes.len()));
        }
        Ok(Self(bytes.to_vec()))
    }
}

impl fmt::Display for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::utils::bytes_to_hex_spaced(&self.0))
    }
}

/// BlockData (16 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockData([u8; MIFARE_BLOCK_LEN]);

impl BlockData {
    /// Wrap exactly one block's worth of bytes.
    pub fn from_bytes(bytes: [u8; MIFARE_BLOCK_LEN]) -> Self {
        Self(bytes)
    }

    /// The 16 block bytes.
    pub fn as_bytes(&self) -> &[u8; MIFARE_BLOCK_LEN] {
        &self.0
    }

    /// Upper-case, space separated hex, e.g. `E5 01 54 ...`
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_spaced(self.as_bytes()).to_uppercase()
    }

    /// Printable ASCII as-is, anything else as `.`
    pub fn to_ascii_safe(&self) -> String {
        self.0
            .iter()
            .map(|&b| {
                if b.is_ascii_graphic() || b == b' ' {
                    b as char
                } else {
                    '.'
                }
            })
            .collect()
    }
}

impl TryFrom<&[u8]> for BlockData {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; MIFARE_BLOCK_LEN] =
            bytes.try_into().map_err(|_| Error::InvalidLength {
                expected: MIFARE_BLOCK_LEN,
                actual: bytes.len(),
            })?;
        Ok(Self(arr))
    }
}

/// MIFARE Classic sector key (6 bytes)
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct MifareKey([u8; MIFARE_KEY_LEN]);

impl MifareKey {
    /// Factory default transport key.
    pub const DEFAULT: Self = Self([0xFF; MIFARE_KEY_LEN]);

    /// Key from its six bytes.
    pub const fn new(bytes: [u8; MIFARE_KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// The six key bytes.
    pub fn as_bytes(&self) -> &[u8; MIFARE_KEY_LEN] {
        &self.0
    }
}

// Keys are secrets; keep them out of logs.
impl fmt::Debug for MifareKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MifareKey(..)")
    }
}

impl TryFrom<&[u8]> for MifareKey {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; MIFARE_KEY_LEN] = bytes.try_into().map_err(|_| {
            Error::InvalidArgument(format!(
                "MIFARE key must be {} bytes, got {}",
                MIFARE_KEY_LEN,
                bytes.len()
            ))
        })?;
        Ok(Self(arr))
    }
}

/// Which sector key to authenticate with.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KeyType {
    /// Key A, authenticated with MIFARE command 0x60
    A = MIFARE_CMD_AUTH_A,
    /// Key B, authenticated with MIFARE command 0x61
    B = MIFARE_CMD_AUTH_B,
}

impl KeyType {
    /// MIFARE authentication command byte for this key.
    pub fn command(&self) -> u8 {
        *self as u8
    }
}

/// Baud rate / modulation passed to InListPassiveTarget (BrTy).
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CardBaud {
    /// 106 kbps ISO14443 Type A (MIFARE)
    #[default]
    Iso14443A = 0x00,
    /// 212 kbps FeliCa
    Felica212 = 0x01,
    /// 424 kbps FeliCa
    Felica424 = 0x02,
    /// 106 kbps ISO14443-3B
    Iso14443B = 0x03,
    /// 106 kbps Innovision Jewel
    Jewel = 0x04,
}

/// SAM usage mode for SAMConfiguration.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SamMode {
    /// No SAM in use
    #[default]
    Normal = 0x01,
    /// The PN532 and the SAM appear as one virtual card
    VirtualCard = 0x02,
    /// The host reaches the SAM through the PN532
    WiredCard = 0x03,
    /// Both the PN532 and the SAM are visible to an external reader
    DualCard = 0x04,
}

/// Reply of GetFirmwareVersion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display(fmt = "PN5{:02x} v{}.{}", ic, ver, rev)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FirmwareVersion {
    /// IC identifier, 0x32 for the PN532
    pub ic: u8,
    /// Firmware version
    pub ver: u8,
    /// Firmware revision
    pub rev: u8,
    /// Bit field of supported card families
    pub support: u8,
}

impl FirmwareVersion {
    /// `(ic, ver, rev, support)`
    pub fn as_tuple(&self) -> (u8, u8, u8, u8) {
        (self.ic, self.ver, self.rev, self.support)
    }
}

/// Description of a single ISO14443A target found by InListPassiveTarget.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PassiveTarget {
    /// Logical target number assigned by the PN532
    pub target: u8,
    /// SENS_RES (ATQA)
    pub sens_res: [u8; 2],
    /// SEL_RES (SAK)
    pub sel_res: u8,
    /// NFCID1
    pub uid: Uid,
}
