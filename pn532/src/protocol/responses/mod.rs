// pn532/src/protocol/responses/mod.rs

//! Result decoders, one per command family.

/// GetFirmwareVersion result
pub mod firmware;
/// InListPassiveTarget result
pub mod inlist;
/// InDataExchange status and block results
pub mod mifare;

pub use firmware::decode_firmware_version;
pub use inlist::decode_passive_target;
pub use mifare::{decode_read_block, decode_status};

use crate::protocol::commands::Command;
use crate::types::{BlockData, FirmwareVersion, PassiveTarget};

/// High-level Response enum. Per-command decoders live in
/// `protocol::responses::<name>.rs` and are dispatched here.
#[derive(Debug, Clone)]
pub enum Response {
    /// IC, version, revision and support bits
    FirmwareVersion(FirmwareVersion),
    /// SAMConfiguration carries no data
    SamConfiguration,
    /// The single target found by InListPassiveTarget
    PassiveTarget(PassiveTarget),
    /// Status-only card exchange (authenticate, write) that succeeded
    Completed,
    /// Block contents returned by a MIFARE read
    Block(BlockData),
}

impl Response {
    /// Decode the result bytes (header already stripped by the dispatcher)
    /// returned for `cmd`.
    pub fn decode(cmd: &Command, data: &[u8]) -> crate::Result<Self> {
        match cmd {
            Command::GetFirmwareVersion => Ok(Self::FirmwareVersion(decode_firmware_version(data)?)),
            Command::SamConfiguration { .. } => Ok(Self::SamConfiguration),
            Command::InListPassiveTarget { .. } => {
                Ok(Self::PassiveTarget(decode_passive_target(data)?))
            }
            Command::MifareAuthenticate { .. } | Command::MifareWrite { .. } => {
                decode_status(data)?;
                Ok(Self::Completed)
            }
            Command::MifareRead { .. } => Ok(Self::Block(decode_read_block(data)?)),
        }
    }
}
