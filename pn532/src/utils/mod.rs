//! Small helpers shared across the crate: hex formatting for frame dumps
//! and the timeout defaults used by the command layer.

pub mod hex;
pub mod timeout;

pub use hex::*;
pub use timeout::*;
