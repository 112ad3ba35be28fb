// pn532/src/protocol/status.rs

//! Status codes reported by the PN532 in the first byte of card-exchange
//! results. Every byte maps to exactly one [`DeviceError`]; codes the chip
//! documentation does not define land in [`DeviceError::Unrecognized`].

use thiserror::Error;

/// Error status reported by the chip, one variant per documented code.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeviceError {
    /// Status 0x01
    #[error("target timeout")]
    Timeout,
    /// Status 0x02
    #[error("CRC error")]
    Crc,
    /// Status 0x03
    #[error("parity error")]
    Parity,
    /// Status 0x04
    #[error("erroneous bit count during anticollision")]
    CollisionBitCount,
    /// Status 0x05
    #[error("MIFARE framing error")]
    MifareFraming,
    /// Status 0x06
    #[error("abnormal bit collision")]
    CollisionBitCollision,
    /// Status 0x07
    #[error("communication buffer too small")]
    NoBufs,
    /// Status 0x09
    #[error("RF buffer overflow")]
    RfNoBufs,
    /// Status 0x0A
    #[error("RF field not switched on in time")]
    ActiveTooSlow,
    /// Status 0x0B
    #[error("RF protocol error")]
    RfProtocol,
    /// Status 0x0D
    #[error("temperature too high")]
    TooHot,
    /// Status 0x0E
    #[error("internal buffer overflow")]
    InternalNoBufs,
    /// Status 0x10
    #[error("invalid parameter")]
    Invalid,
    /// Status 0x12
    #[error("DEP command not supported")]
    DepInvalidCommand,
    /// Status 0x13
    #[error("DEP data format mismatch")]
    DepBadData,
    /// Status 0x14
    #[error("mifare authentication error")]
    MifareAuth,
    /// Status 0x18
    #[error("target does not support secure operation")]
    NoSecure,
    /// Status 0x19
    #[error("I2C bus busy")]
    I2cBusy,
    /// Status 0x23
    #[error("UID check byte is wrong")]
    UidChecksum,
    /// Status 0x25
    #[error("invalid DEP state")]
    DepState,
    /// Status 0x26
    #[error("operation not allowed in this configuration")]
    HciInvalid,
    /// Status 0x27
    #[error("command not acceptable in current context")]
    Context,
    /// Status 0x29
    #[error("target released")]
    Released,
    /// Status 0x2A
    #[error("card swapped")]
    CardSwapped,
    /// Status 0x2B
    #[error("card disappeared")]
    NoCard,
    /// Status 0x2C
    #[error("NFCID3 mismatch")]
    Mismatch,
    /// Status 0x2D
    #[error("over-current event")]
    Overcurrent,
    /// Status 0x2E
    #[error("NAD missing in DEP frame")]
    NoNad,
    /// A status byte with no documented meaning
    #[error("unrecognized status {0:#04x}")]
    Unrecognized(u8),
}

// (code, error) pairs; `code()` and `from_code()` are both derived from it.
static STATUS_TABLE: [(u8, DeviceError); 28] = [
    (0x01, DeviceError::Timeout),
    (0x02, DeviceError::Crc),
    (0x03, DeviceError::Parity),
    (0x04, DeviceError::CollisionBitCount),
    (0x05, DeviceError::MifareFraming),
    (0x06, DeviceError::CollisionBitCollision),
    (0x07, DeviceError::NoBufs),
    (0x09, DeviceError::RfNoBufs),
    (0x0A, DeviceError::ActiveTooSlow),
    (0x0B, DeviceError::RfProtocol),
    (0x0D, DeviceError::TooHot),
    (0x0E, DeviceError::InternalNoBufs),
    (0x10, DeviceError::Invalid),
    (0x12, DeviceError::DepInvalidCommand),
    (0x13, DeviceError::DepBadData),
    (0x14, DeviceError::MifareAuth),
    (0x18, DeviceError::NoSecure),
    (0x19, DeviceError::I2cBusy),
    (0x23, DeviceError::UidChecksum),
    (0x25, DeviceError::DepState),
    (0x26, DeviceError::HciInvalid),
    (0x27, DeviceError::Context),
    (0x29, DeviceError::Released),
    (0x2A, DeviceError::CardSwapped),
    (0x2B, DeviceError::NoCard),
    (0x2C, DeviceError::Mismatch),
    (0x2D, DeviceError::Overcurrent),
    (0x2E, DeviceError::NoNad),
];

impl DeviceError {
    /// Total lookup of a status byte.
    pub fn from_code(code: u8) -> Self {
        STATUS_TABLE
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, e)| *e)
            .unwrap_or(DeviceError::Unrecognized(code))
    }

    /// The status byte this error was created from.
    pub fn code(&self) -> u8 {
        match self {
            DeviceError::Unrecognized(code) => *code,
            known => STATUS_TABLE
                .iter()
                .find(|(_, e)| e == known)
                .map(|(c, _)| *c)
                .unwrap_or(0),
        }
    }

    /// False only for [`DeviceError::Unrecognized`].
    pub fn is_recognized(&self) -> bool {
        !matches!(self, DeviceError::Unrecognized(_))
    }
}

impl From<u8> for DeviceError {
    fn from(code: u8) -> Self {
        DeviceError::from_code(code)
    }
}

/// Classify a non-zero status byte.
pub fn classify(status: u8) -> DeviceError {
    DeviceError::from_code(status)
}
