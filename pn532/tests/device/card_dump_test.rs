use pn532::prelude::*;

use crate::common::{self, SharedMock, fixtures};

fn seed_block(shared: &SharedMock, block: &BlockData) {
    let mut m = shared.borrow_mut();
    common::seed_reply(&mut m, 0x40, &[0x00]);
    common::seed_reply(&mut m, 0x40, &fixtures::read_data(block));
}

#[test]
fn dump_reads_every_block_in_range() {
    let shared = SharedMock::new();
    let mut dev = common::initialized_mock_device(&shared).unwrap();
    let card = Card::new(fixtures::sample_target());

    let block0 = fixtures::block_from_hex(fixtures::BLOCK0_HEX);
    let trailer = fixtures::block_from_hex(fixtures::TRAILER_HEX);
    seed_block(&shared, &block0);
    seed_block(&shared, &BlockData::from_bytes([0; 16]));
    seed_block(&shared, &BlockData::from_bytes([0; 16]));
    seed_block(&shared, &trailer);

    let dump = card
        .dump_blocks(&mut dev, 0..=3, KeyType::A, &MifareKey::DEFAULT)
        .unwrap();
    assert_eq!(dump.len(), 4);
    assert_eq!(dump[0], (0, block0));
    assert_eq!(dump[3], (3, trailer));
    assert_eq!(dump[0].1.to_hex(), "DE AD BE EF 22 08 04 00 62 63 64 65 66 67 68 6A");
}

#[test]
fn dump_stops_at_first_card_error() {
    let shared = SharedMock::new();
    let mut dev = common::initialized_mock_device(&shared).unwrap();
    let card = Card::new(fixtures::sample_target());

    seed_block(&shared, &fixtures::counting_block());
    // block 1: authentication refused
    common::seed_reply(&mut shared.borrow_mut(), 0x40, &[0x14]);

    let dump = card
        .dump_blocks(&mut dev, 0..=7, KeyType::A, &MifareKey::DEFAULT)
        .unwrap();
    assert_eq!(dump, vec![(0, fixtures::counting_block())]);
}

#[test]
fn dump_propagates_protocol_errors() {
    let shared = SharedMock::new();
    let mut dev = common::initialized_mock_device(&shared).unwrap();
    let card = Card::new(fixtures::sample_target());
    shared.borrow_mut().push_read(vec![0xFF; 6]);

    assert!(matches!(
        card.dump_blocks(&mut dev, 0..=1, KeyType::A, &MifareKey::DEFAULT),
        Err(Error::UnexpectedAck(_))
    ));
}

#[test]
fn card_helpers_use_card_uid() {
    let shared = SharedMock::new();
    let mut dev = common::initialized_mock_device(&shared).unwrap();
    let card = Card::new(fixtures::sample_target());
    seed_block(&shared, &fixtures::counting_block());
    {
        let mut m = shared.borrow_mut();
        common::seed_reply(&mut m, 0x40, &[0x00]);
    }

    let block = card
        .read_block_with_key(&mut dev, 8, KeyType::B, &MifareKey::DEFAULT)
        .unwrap();
    assert_eq!(block, fixtures::counting_block());
    card.write_block(&mut dev, 8, block.as_bytes()).unwrap();

    let m = shared.borrow();
    let auth = &m.written[m.written.len() - 3];
    // D4 40 01 61 08 <key> <uid>
    assert_eq!(&auth[5..10], &[0xD4, 0x40, 0x01, 0x61, 0x08]);
    assert_eq!(&auth[16..20], &fixtures::SAMPLE_UID);
}

#[test]
fn dump_matches_expected_dump_text() {
    let shared = SharedMock::new();
    let mut dev = common::initialized_mock_device(&shared).unwrap();
    let card = Card::new(fixtures::sample_target());
    seed_block(&shared, &fixtures::block_from_hex(fixtures::BLOCK0_HEX));
    seed_block(&shared, &fixtures::counting_block());

    // as written by hand: mixed case, spaced and unspaced, blank line
    let expected_text = "DE AD BE EF 22 08 04 00 62 63 64 65 66 67 68 6a\n\n0102030405060708090a0B0C0D0E0F10\n";
    let expected: Vec<Vec<u8>> = expected_text
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| parse_hex(l).unwrap())
        .collect();

    let dump = card
        .dump_blocks(&mut dev, 0..=1, KeyType::A, &MifareKey::DEFAULT)
        .unwrap();
    let blocks: Vec<Vec<u8>> = dump.iter().map(|(_, b)| b.as_bytes().to_vec()).collect();
    assert_eq!(blocks, expected);
}
