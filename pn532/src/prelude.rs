// pn532/src/prelude.rs

pub use crate::card::Card;
pub use crate::device::{Device, DeviceBuilder, SessionConfig};
pub use crate::device::{Initialized, Uninitialized};
pub use crate::protocol::{Command, DeviceError, Response};
pub use crate::transport::Transport;
pub use crate::{
    BlockData, CardBaud, Error, ErrorClass, FirmwareVersion, KeyType, MifareKey, PassiveTarget,
    Result, SamMode, Uid,
};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, default_call_timeout, ms, parse_hex};
