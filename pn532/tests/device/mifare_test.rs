use pn532::prelude::*;

use crate::common::{self, SharedMock, fixtures};

#[test]
fn authenticate_then_read_counting_block() {
    common::init_logging();
    let shared = SharedMock::new();
    let mut dev = common::initialized_mock_device(&shared).unwrap();
    {
        let mut m = shared.borrow_mut();
        common::seed_reply(&mut m, 0x40, &[0x00]);
        common::seed_reply(&mut m, 0x40, &hex::decode("000102030405060708090a0b0c0d0e0f10").unwrap());
    }

    dev.mifare_classic_authenticate_block(&fixtures::sample_uid(), 4, KeyType::A, &MifareKey::DEFAULT)
        .unwrap();
    let block = dev.mifare_classic_read_block(4).unwrap();
    assert_eq!(block, fixtures::counting_block());
}

#[test]
fn wrong_key_is_device_error() {
    let shared = SharedMock::new();
    let mut dev = common::initialized_mock_device(&shared).unwrap();
    common::seed_reply(&mut shared.borrow_mut(), 0x40, &[0x14]);

    let err = dev
        .mifare_classic_authenticate_block(&fixtures::sample_uid(), 4, KeyType::A, &MifareKey::DEFAULT)
        .unwrap_err();
    assert_eq!(err.class(), ErrorClass::Device);
    assert_eq!(err.device_error(), Some(DeviceError::MifareAuth));
}

#[test]
fn write_length_checked_before_any_io() {
    let shared = SharedMock::new();
    let mut dev = common::initialized_mock_device(&shared).unwrap();
    let before = shared.borrow().bus_activity();

    for data in [vec![0u8; 15], vec![0u8; 17], Vec::new()] {
        let err = dev.mifare_classic_write_block(4, &data).unwrap_err();
        assert_eq!(err.class(), ErrorClass::Caller);
    }
    assert_eq!(shared.borrow().bus_activity(), before);
}

#[test]
fn write_then_read_back() {
    let shared = SharedMock::new();
    let mut dev = common::initialized_mock_device(&shared).unwrap();
    let block = fixtures::block_from_hex(fixtures::BLOCK0_HEX);
    {
        let mut m = shared.borrow_mut();
        common::seed_reply(&mut m, 0x40, &[0x00]);
        common::seed_reply(&mut m, 0x40, &fixtures::read_data(&block));
    }
    dev.mifare_classic_write_block(1, block.as_bytes()).unwrap();
    assert_eq!(dev.mifare_classic_read_block(1).unwrap(), block);
}

#[test]
fn write_status_error_surfaces() {
    let shared = SharedMock::new();
    let mut dev = common::initialized_mock_device(&shared).unwrap();
    common::seed_reply(&mut shared.borrow_mut(), 0x40, &[0x27]);
    let err = dev.mifare_classic_write_block(0, &[0u8; 16]).unwrap_err();
    assert!(matches!(err, Error::Device(_)));
}

#[test]
fn silence_on_card_exchange_is_timeout() {
    let shared = SharedMock::new();
    let mut dev = common::initialized_mock_device(&shared).unwrap();
    {
        let mut m = shared.borrow_mut();
        m.push_read(common::ack());
        m.push_ready(true);
        m.push_ready(false);
    }
    assert!(matches!(dev.mifare_classic_read_block(2), Err(Error::Timeout)));
}
