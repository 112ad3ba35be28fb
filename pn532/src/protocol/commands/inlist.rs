// pn532/src/protocol/commands/inlist.rs

use crate::types::CardBaud;

/// Encode InListPassiveTarget parameters: MaxTg (1) + BrTy (1).
pub fn encode_in_list_passive_target(max_targets: u8, baud: CardBaud) -> Vec<u8> {
    vec![max_targets, baud as u8]
}
