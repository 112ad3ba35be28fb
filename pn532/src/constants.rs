// pn532/src/constants.rs
//! Protocol constants for the PN532 host interface.

/// Frame preamble byte.
pub const PREAMBLE: u8 = 0x00;

/// Two-byte start code that follows the preamble.
pub const START_CODE: [u8; 2] = [0x00, 0xFF];

/// Full wire prefix of every frame: preamble + start code.
pub const FRAME_START: [u8; 3] = [PREAMBLE, START_CODE[0], START_CODE[1]];

/// Frame postamble byte.
pub const POSTAMBLE: u8 = 0x00;

/// Framing overhead: prefix(3) + LEN + LCS + DCS + postamble.
pub const FRAME_OVERHEAD: usize = 7;

/// Largest payload accepted by `Frame::encode` (exclusive bound is 255).
pub const MAX_PAYLOAD_LEN: usize = 254;

/// Smallest payload accepted by `Frame::encode` (TFI + command code).
pub const MIN_PAYLOAD_LEN: usize = 2;

/// Frame identifier (TFI) for host -> PN532 frames.
pub const HOST_TO_PN532: u8 = 0xD4;

/// Frame identifier (TFI) for PN532 -> host frames.
pub const PN532_TO_HOST: u8 = 0xD5;

/// ACK frame sent by the PN532 once it accepted a command frame.
pub const ACK: [u8; 6] = [0x00, 0x00, 0xFF, 0x00, 0xFF, 0x00];

/// Byte used by serial transports to wake the chip from power down.
pub const WAKEUP: u8 = 0x55;

/// Maximum number of targets passed to InListPassiveTarget / InDataExchange.
pub const MAX_TARGETS: u8 = 0x01;

// PN532 command codes
/// Diagnose
pub const CMD_DIAGNOSE: u8 = 0x00;
/// GetFirmwareVersion
pub const CMD_GET_FIRMWARE_VERSION: u8 = 0x02;
/// GetGeneralStatus
pub const CMD_GET_GENERAL_STATUS: u8 = 0x04;
/// ReadRegister
pub const CMD_READ_REGISTER: u8 = 0x06;
/// WriteRegister
pub const CMD_WRITE_REGISTER: u8 = 0x08;
/// ReadGPIO
pub const CMD_READ_GPIO: u8 = 0x0C;
/// WriteGPIO
pub const CMD_WRITE_GPIO: u8 = 0x0E;
/// SetSerialBaudRate
pub const CMD_SET_SERIAL_BAUD_RATE: u8 = 0x10;
/// SetParameters
pub const CMD_SET_PARAMETERS: u8 = 0x12;
/// SAMConfiguration
pub const CMD_SAM_CONFIGURATION: u8 = 0x14;
/// PowerDown
pub const CMD_POWER_DOWN: u8 = 0x16;
/// RFConfiguration
pub const CMD_RF_CONFIGURATION: u8 = 0x32;
/// RFRegulationTest
pub const CMD_RF_REGULATION_TEST: u8 = 0x58;
/// InJumpForDEP
pub const CMD_IN_JUMP_FOR_DEP: u8 = 0x56;
/// InJumpForPSL
pub const CMD_IN_JUMP_FOR_PSL: u8 = 0x46;
/// InListPassiveTarget
pub const CMD_IN_LIST_PASSIVE_TARGET: u8 = 0x4A;
/// InATR
pub const CMD_IN_ATR: u8 = 0x50;
/// InPSL
pub const CMD_IN_PSL: u8 = 0x4E;
/// InDataExchange
pub const CMD_IN_DATA_EXCHANGE: u8 = 0x40;
/// InCommunicateThru
pub const CMD_IN_COMMUNICATE_THRU: u8 = 0x42;
/// InDeselect
pub const CMD_IN_DESELECT: u8 = 0x44;
/// InRelease
pub const CMD_IN_RELEASE: u8 = 0x52;
/// InSelect
pub const CMD_IN_SELECT: u8 = 0x54;
/// InAutoPoll
pub const CMD_IN_AUTO_POLL: u8 = 0x60;
/// TgInitAsTarget
pub const CMD_TG_INIT_AS_TARGET: u8 = 0x8C;
/// TgSetGeneralBytes
pub const CMD_TG_SET_GENERAL_BYTES: u8 = 0x92;
/// TgGetData
pub const CMD_TG_GET_DATA: u8 = 0x86;
/// TgSetData
pub const CMD_TG_SET_DATA: u8 = 0x8E;
/// TgSetMetaData
pub const CMD_TG_SET_META_DATA: u8 = 0x94;
/// TgGetInitiatorCommand
pub const CMD_TG_GET_INITIATOR_COMMAND: u8 = 0x88;
/// TgResponseToInitiator
pub const CMD_TG_RESPONSE_TO_INITIATOR: u8 = 0x90;
/// TgGetTargetStatus
pub const CMD_TG_GET_TARGET_STATUS: u8 = 0x8A;

// Response codes are always command code + 1.
/// InDataExchange response code
pub const RESP_IN_DATA_EXCHANGE: u8 = CMD_IN_DATA_EXCHANGE + 1;
/// InListPassiveTarget response code
pub const RESP_IN_LIST_PASSIVE_TARGET: u8 = CMD_IN_LIST_PASSIVE_TARGET + 1;

// MIFARE commands carried inside InDataExchange
/// Authenticate with key A
pub const MIFARE_CMD_AUTH_A: u8 = 0x60;
/// Authenticate with key B
pub const MIFARE_CMD_AUTH_B: u8 = 0x61;
/// Read one 16-byte block
pub const MIFARE_CMD_READ: u8 = 0x30;
/// Write one 16-byte block
pub const MIFARE_CMD_WRITE: u8 = 0xA0;
/// Transfer
pub const MIFARE_CMD_TRANSFER: u8 = 0xB0;
/// Decrement
pub const MIFARE_CMD_DECREMENT: u8 = 0xC0;
/// Increment
pub const MIFARE_CMD_INCREMENT: u8 = 0xC1;
/// Restore
pub const MIFARE_CMD_STORE: u8 = 0xC2;
/// Ultralight 4-byte page write
pub const MIFARE_ULTRALIGHT_CMD_WRITE: u8 = 0xA2;

/// MIFARE Classic block size in bytes.
pub const MIFARE_BLOCK_LEN: usize = 16;

/// MIFARE Classic key size in bytes.
pub const MIFARE_KEY_LEN: usize = 6;

/// Longest UID a single ISO14443A target may report.
pub const MAX_UID_LEN: usize = 7;

/// Shortest UID a single ISO14443A target may report.
pub const MIN_UID_LEN: usize = 4;

/// Default I2C slave address of the PN532.
pub const I2C_ADDRESS: u16 = 0x24;

/// Status byte prefixed by the PN532 to every I2C read when it is ready.
pub const I2C_READY: u8 = 0x01;
