use pn532::protocol::codec::decode_response_frame;
use pn532::protocol::{Command, DeviceError, Response};
use pn532::types::CardBaud;
use pn532::Error;

use crate::common::{self, fixtures};

#[test]
fn firmware_version_from_wire() {
    let raw = common::response_frame(0x02, &[0x32, 0x01, 0x06, 0x07]);
    match decode_response_frame(&Command::GetFirmwareVersion, &raw).unwrap() {
        Response::FirmwareVersion(fw) => {
            assert_eq!(fw.ic, 0x32);
            assert_eq!(fw.to_string(), "PN532 v1.6");
        }
        other => panic!("unexpected response: {:?}", other),
    }
}

#[test]
fn passive_target_from_wire() {
    let raw = common::response_frame(0x4A, &fixtures::inlist_data(1, &fixtures::SAMPLE_UID7));
    match decode_response_frame(&Command::detect_single(CardBaud::Iso14443A), &raw).unwrap() {
        Response::PassiveTarget(t) => assert_eq!(t.uid.as_bytes(), &fixtures::SAMPLE_UID7),
        other => panic!("unexpected response: {:?}", other),
    }
}

#[test]
fn read_block_returns_sixteen_bytes() {
    let block = fixtures::block_from_hex(fixtures::BLOCK0_HEX);
    let raw = common::response_frame(0x40, &fixtures::read_data(&block));
    match decode_response_frame(&Command::MifareRead { block: 0 }, &raw).unwrap() {
        Response::Block(b) => assert_eq!(b, block),
        other => panic!("unexpected response: {:?}", other),
    }
}

#[test]
fn card_status_becomes_device_error() {
    let raw = common::response_frame(0x40, &[0x01]);
    let err = decode_response_frame(&Command::MifareRead { block: 0 }, &raw).unwrap_err();
    assert_eq!(err.device_error(), Some(DeviceError::Timeout));
}

#[test]
fn wrong_direction_byte() {
    let raw = pn532::protocol::Frame::encode(&[0xD4, 0x03, 0x32, 0x01, 0x06, 0x07]).unwrap();
    assert!(matches!(
        decode_response_frame(&Command::GetFirmwareVersion, &raw),
        Err(Error::UnexpectedDirection {
            expected: 0xD5,
            actual: 0xD4
        })
    ));
}
