// pn532/src/protocol/commands/firmware.rs

/// Encode GetFirmwareVersion parameters (none).
pub fn encode_get_firmware_version() -> Vec<u8> {
    Vec::new()
}
