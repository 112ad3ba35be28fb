// pn532/src/protocol/responses/firmware.rs

use crate::Result;
use crate::protocol::parser::slice_at;
use crate::types::FirmwareVersion;

/// Decode GetFirmwareVersion result: IC (1) + Ver (1) + Rev (1) + Support (1)
pub fn decode_firmware_version(data: &[u8]) -> Result<FirmwareVersion> {
    let b = slice_at(data, 0, 4)?;
    Ok(FirmwareVersion {
        ic: b[0],
        ver: b[1],
        rev: b[2],
        support: b[3],
    })
}
