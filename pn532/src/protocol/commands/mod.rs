// pn532/src/protocol/commands/mod.rs

//! Typed commands and their parameter encoders.

/// GetFirmwareVersion
pub mod firmware;
/// InListPassiveTarget
pub mod inlist;
pub mod mifare;
/// SAMConfiguration
pub mod sam;

pub use firmware::encode_get_firmware_version;
pub use inlist::encode_in_list_passive_target;
pub use mifare::{encode_authenticate, encode_read_block, encode_write_block};
pub use sam::{DEFAULT_SAM_TIMEOUT, encode_sam_configuration};

use crate::constants::{
    CMD_GET_FIRMWARE_VERSION, CMD_IN_DATA_EXCHANGE, CMD_IN_LIST_PASSIVE_TARGET,
    CMD_SAM_CONFIGURATION, MAX_TARGETS,
};
use crate::types::{BlockData, CardBaud, KeyType, MifareKey, SamMode, Uid};

/// High-level Command enum. New commands should be added here and
/// their parameter encoder placed in `protocol::commands::<name>.rs`.
#[derive(Debug, Clone)]
pub enum Command {
    /// GetFirmwareVersion (0x02)
    GetFirmwareVersion,
    /// SAMConfiguration (0x14)
    SamConfiguration {
        /// SAM usage mode
        mode: SamMode,
        /// Virtual-card timeout in 50 ms units
        timeout: u8,
        /// Drive the P70_IRQ pin
        use_irq: bool,
    },
    /// InListPassiveTarget (0x4A)
    InListPassiveTarget {
        /// MaxTg, at most 2
        max_targets: u8,
        /// BrTy
        baud: CardBaud,
    },
    /// MIFARE authentication through InDataExchange
    MifareAuthenticate {
        /// UID of the selected card
        uid: Uid,
        /// Block whose sector is opened
        block: u8,
        /// Key A or B
        key_type: KeyType,
        /// Sector key
        key: MifareKey,
    },
    /// MIFARE READ through InDataExchange
    MifareRead {
        /// Block number
        block: u8,
    },
    /// MIFARE WRITE through InDataExchange
    MifareWrite {
        /// Block number
        block: u8,
        /// Full block contents
        data: BlockData,
    },
}

impl Command {
    /// SAMConfiguration as used for card reading: normal mode, 1 s, IRQ pin.
    pub fn sam_for_card_reading() -> Self {
        Self::SamConfiguration {
            mode: SamMode::Normal,
            timeout: DEFAULT_SAM_TIMEOUT,
            use_irq: true,
        }
    }

    /// Detect a single passive target of the given type.
    pub fn detect_single(baud: CardBaud) -> Self {
        Self::InListPassiveTarget {
            max_targets: MAX_TARGETS,
            baud,
        }
    }

    /// PN532 command code.
    pub fn command_code(&self) -> u8 {
        match self {
            Self::GetFirmwareVersion => CMD_GET_FIRMWARE_VERSION,
            Self::SamConfiguration { .. } => CMD_SAM_CONFIGURATION,
            Self::InListPassiveTarget { .. } => CMD_IN_LIST_PASSIVE_TARGET,
            Self::MifareAuthenticate { .. } | Self::MifareRead { .. } | Self::MifareWrite { .. } => {
                CMD_IN_DATA_EXCHANGE
            }
        }
    }

    /// Maximum number of result bytes expected after the D5/code header.
    pub fn response_len(&self) -> usize {
        match self {
            Self::GetFirmwareVersion => 4,
            Self::SamConfiguration { .. } => 0,
            // NbTg + Tg + SENS_RES(2) + SEL_RES + NFCIDLength + NFCID(<=7) + ATS headroom
            Self::InListPassiveTarget { .. } => 19,
            Self::MifareAuthenticate { .. } | Self::MifareWrite { .. } => 1,
            // status + 16 data bytes
            Self::MifareRead { .. } => 17,
        }
    }

    /// Encode the parameter bytes that follow the command code.
    pub fn params(&self) -> Vec<u8> {
        match self {
            Self::GetFirmwareVersion => encode_get_firmware_version(),
            Self::SamConfiguration {
                mode,
                timeout,
                use_irq,
            } => encode_sam_configuration(*mode, *timeout, *use_irq),
            Self::InListPassiveTarget { max_targets, baud } => {
                encode_in_list_passive_target(*max_targets, *baud)
            }
            Self::MifareAuthenticate {
                uid,
                block,
                key_type,
                key,
            } => encode_authenticate(uid, *block, *key_type, key),
            Self::MifareRead { block } => encode_read_block(*block),
            Self::MifareWrite { block, data } => encode_write_block(*block, data),
        }
    }

    /// Encode the command into the raw payload (command code + params),
    /// without the host TFI.
    pub fn encode(&self) -> Vec<u8> {
        let mut v = vec![self.command_code()];
        v.extend(self.params());
        v
    }
}
