// pn532/src/protocol/mod.rs

//! Wire protocol: framing, checksums, command encoding and result decoding.
//! Nothing here touches a transport.

/// LCS and DCS
pub mod checksum;
/// Host frames out, result headers in
pub mod codec;
pub mod commands;
pub mod frame;
/// Bounds-checked readers over result bytes
pub mod parser;
pub mod responses;
pub mod status;

pub use checksum::{dcs, lcs};
pub use commands::Command;
pub use frame::Frame;
pub use responses::Response;
pub use status::{DeviceError, classify};
