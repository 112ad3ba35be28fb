use std::time::Duration;

use pn532::{CardBaud, Error};

use crate::common::{self, SharedMock, fixtures};

const WAIT: Duration = Duration::from_millis(20);

#[test]
fn no_card_is_none() {
    let shared = SharedMock::new();
    let mut dev = common::initialized_mock_device(&shared).unwrap();
    shared.borrow_mut().push_ready(false);
    assert_eq!(dev.read_passive_target(CardBaud::Iso14443A, WAIT).unwrap(), None);
}

#[test]
fn zero_targets_in_a_result_is_fatal() {
    let shared = SharedMock::new();
    let mut dev = common::initialized_mock_device(&shared).unwrap();
    common::seed_reply(&mut shared.borrow_mut(), 0x4A, &[0x00]);
    let err = dev.read_passive_target(CardBaud::Iso14443A, WAIT).unwrap_err();
    assert!(matches!(err, Error::TargetCount(0)));
    assert!(err.is_protocol());
}

#[test]
fn single_card_uid() {
    let shared = SharedMock::new();
    let mut dev = common::initialized_mock_device(&shared).unwrap();
    common::seed_reply(
        &mut shared.borrow_mut(),
        0x4A,
        &fixtures::inlist_data(1, &fixtures::SAMPLE_UID),
    );
    let uid = dev.read_passive_target(CardBaud::Iso14443A, WAIT).unwrap().unwrap();
    assert_eq!(uid, fixtures::sample_uid());
}

#[test]
fn two_cards_never_yield_a_uid() {
    let shared = SharedMock::new();
    let mut dev = common::initialized_mock_device(&shared).unwrap();
    common::seed_reply(
        &mut shared.borrow_mut(),
        0x4A,
        &fixtures::inlist_data(2, &fixtures::SAMPLE_UID),
    );
    let err = dev.read_passive_target(CardBaud::Iso14443A, WAIT).unwrap_err();
    assert!(matches!(err, Error::TargetCount(2)));
    assert!(err.is_protocol());
}

#[test]
fn implausible_uid_length_is_fatal() {
    let shared = SharedMock::new();
    let mut dev = common::initialized_mock_device(&shared).unwrap();
    common::seed_reply(
        &mut shared.borrow_mut(),
        0x4A,
        &fixtures::inlist_data(1, &[0x11; 9]),
    );
    assert!(matches!(
        dev.read_passive_target(CardBaud::Iso14443A, WAIT),
        Err(Error::ImplausibleUidLength(9))
    ));
}

#[test]
fn other_baud_rates_are_encoded() {
    let shared = SharedMock::new();
    let mut dev = common::initialized_mock_device(&shared).unwrap();
    shared.borrow_mut().push_ready(false);
    dev.list_passive_target(CardBaud::Felica212, WAIT).unwrap();
    let m = shared.borrow();
    let frame = m.written.last().unwrap();
    assert_eq!(&frame[5..9], &[0xD4, 0x4A, 0x01, 0x01]);
}
