// pn532/src/protocol/checksum.rs

/// Compute the Length Checksum (LCS) of a frame.
/// LCS = 0x100 - length (mod 256), so LEN + LCS == 0.
pub fn lcs(len: u8) -> u8 {
    0u8.wrapping_sub(len)
}

/// Compute the Data Checksum (DCS) of a frame payload.
/// DCS = 0x100 - (sum(payload) & 0xff), so sum(payload) + DCS == 0.
pub fn dcs(payload: &[u8]) -> u8 {
    0u8.wrapping_sub(sum(payload))
}

/// Wrapping byte sum.
pub fn sum(bytes: &[u8]) -> u8 {
    bytes.iter().fold(0u8, |acc, &b| acc.wrapping_add(b))
}
