// pn532/src/lib.rs

//! pn532
//!
//! Pure Rust driver for the NXP PN532 NFC controller: frame codec,
//! command dispatch and MIFARE Classic card access over an injected
//! transport.
#![warn(missing_docs)]

pub mod card;
pub mod constants;
pub mod device;
/// Crate error type and its classes
pub mod error;
/// Glob import for applications
pub mod prelude;
pub mod protocol;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
