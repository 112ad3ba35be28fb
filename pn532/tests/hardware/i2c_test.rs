use std::time::Duration;

use pn532::{CardBaud, KeyType, MifareKey};
use serial_test::serial;

use crate::common::open_and_initialize_device;

#[test]
#[ignore]
#[serial]
fn firmware_version_on_hardware() {
    let Some(mut dev) = open_and_initialize_device().unwrap() else {
        return;
    };
    let fw = dev.get_firmware_version().unwrap();
    assert_eq!(fw.ic, 0x32);
}

#[test]
#[ignore]
#[serial]
fn read_block_zero_if_card_present() {
    let Some(mut dev) = open_and_initialize_device().unwrap() else {
        return;
    };
    dev.configure_for_card_reading().unwrap();
    let Some(uid) = dev
        .read_passive_target(CardBaud::Iso14443A, Duration::from_millis(500))
        .unwrap()
    else {
        eprintln!("no card in the field");
        return;
    };
    dev.mifare_classic_authenticate_block(&uid, 0, KeyType::A, &MifareKey::DEFAULT)
        .unwrap();
    let block = dev.mifare_classic_read_block(0).unwrap();
    assert_eq!(&block.as_bytes()[..uid.len()], uid.as_bytes());
}
