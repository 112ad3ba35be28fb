// pn532/src/error.rs

use thiserror::Error;

use crate::protocol::status::DeviceError;

/// Common error type
#[derive(Error, Debug)]
pub enum Error {
    /// No firmware answer: the chip is absent, unpowered or asleep.
    #[error("device not detected")]
    DeviceNotFound,

    /// The device accepted the command but never produced a result on a path
    /// where silence has no "no card" meaning.
    #[error("operation timed out")]
    Timeout,

    /// The transport is held by another exchange.
    #[error("device busy")]
    Busy,

    /// Transient bus failure (device not yet addressable, NAK, ...).
    #[error("transport error: {0}")]
    Transport(String),

    // GPIO is only reachable through the optional Raspberry Pi transport
    /// Reset or wake line could not be driven.
    #[cfg(feature = "i2c")]
    #[error("gpio error: {0}")]
    Gpio(#[from] rppal::gpio::Error),

    /// Rejected before any bus traffic.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A frame or field was shorter (or longer) than its layout requires.
    #[error("invalid packet length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Bytes the layout needs
        expected: usize,
        /// Bytes available
        actual: usize,
    },

    /// No `00 FF` start marker in the bytes read.
    #[error("response frame preamble does not contain 0x00FF")]
    MalformedPreamble,

    /// Structurally valid frame with content that makes no sense.
    #[error("frame format error: {0}")]
    FrameFormat(String),

    /// LEN + LCS did not sum to zero.
    #[error("length checksum mismatch: expected {expected:#04x}, got {actual:#04x}")]
    LengthChecksumMismatch {
        /// LCS computed from LEN
        expected: u8,
        /// LCS on the wire
        actual: u8,
    },

    /// Payload + DCS did not sum to zero.
    #[error("payload checksum mismatch: expected {expected:#04x}, got {actual:#04x}")]
    ChecksumMismatch {
        /// DCS computed from the payload
        expected: u8,
        /// DCS on the wire
        actual: u8,
    },

    /// The six bytes after a command were not the ACK frame.
    #[error("unexpected ACK: {0:02x?}")]
    UnexpectedAck(Vec<u8>),

    /// Result frame did not start with the device TFI.
    #[error("unexpected frame direction: expected {expected:#04x}, got {actual:#04x}")]
    UnexpectedDirection {
        /// 0xD5
        expected: u8,
        /// TFI received
        actual: u8,
    },

    /// Result frame answers a different command.
    #[error("response for wrong command: expected {expected:#04x}, got {actual:#04x}")]
    UnexpectedResponse {
        /// Command code plus one
        expected: u8,
        /// Response code received
        actual: u8,
    },

    /// InListPassiveTarget answered with a target count other than one.
    #[error("expected exactly one card, reader reported {0}")]
    TargetCount(u8),

    /// UID length outside 4..=7 bytes.
    #[error("implausible UID length: {0}")]
    ImplausibleUidLength(usize),

    /// Non-zero status byte from the chip.
    #[error("device error: {0}")]
    Device(#[from] DeviceError),
}

/// Coarse grouping of [`Error`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Expected absence or a recoverable bus hiccup; retrying the whole call is fine.
    Transient,
    /// The chip reported a status code.
    Device,
    /// The byte stream or device state is out of sync.
    Protocol,
    /// The caller broke an API precondition; no I/O happened.
    Caller,
}

impl Error {
    /// Which [`ErrorClass`] this error belongs to.
    pub fn class(&self) -> ErrorClass {
        match self {
            Error::DeviceNotFound | Error::Timeout | Error::Busy | Error::Transport(_) => {
                ErrorClass::Transient
            }
            #[cfg(feature = "i2c")]
            Error::Gpio(_) => ErrorClass::Transient,
            Error::Device(_) => ErrorClass::Device,
            Error::InvalidArgument(_) => ErrorClass::Caller,
            Error::InvalidLength { .. }
            | Error::MalformedPreamble
            | Error::FrameFormat(_)
            | Error::LengthChecksumMismatch { .. }
            | Error::ChecksumMismatch { .. }
            | Error::UnexpectedAck(_)
            | Error::UnexpectedDirection { .. }
            | Error::UnexpectedResponse { .. }
            | Error::TargetCount(_)
            | Error::ImplausibleUidLength(_) => ErrorClass::Protocol,
        }
    }

    /// True for bus failures the dispatcher answers with a wake pulse.
    pub fn is_transient(&self) -> bool {
        matches!(self, Error::Transport(_))
    }

    /// LCS or DCS failure.
    pub fn is_checksum_mismatch(&self) -> bool {
        matches!(
            self,
            Error::LengthChecksumMismatch { .. } | Error::ChecksumMismatch { .. }
        )
    }

    /// Shorthand for `class() == ErrorClass::Protocol`.
    pub fn is_protocol(&self) -> bool {
        self.class() == ErrorClass::Protocol
    }

    /// Device status code carried by this error, if any.
    pub fn device_error(&self) -> Option<DeviceError> {
        match self {
            Error::Device(e) => Some(*e),
            _ => None,
        }
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
