// pn532/src/protocol/commands/sam.rs

use crate::types::SamMode;

/// Virtual-card timeout in 50 ms units: 0x14 * 50 ms = 1 s.
pub const DEFAULT_SAM_TIMEOUT: u8 = 0x14;

/// Encode SAMConfiguration parameters:
/// mode (1) + timeout in 50 ms units (1) + IRQ pin use (1)
pub fn encode_sam_configuration(mode: SamMode, timeout: u8, use_irq: bool) -> Vec<u8> {
    vec![mode as u8, timeout, use_irq as u8]
}
