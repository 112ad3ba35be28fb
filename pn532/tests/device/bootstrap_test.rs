use pn532::{DeviceBuilder, Error};

use crate::common::{self, SharedMock};

#[test]
fn first_probe_timeout_is_masked() {
    common::init_logging();
    let shared = SharedMock::new();
    {
        let mut m = shared.borrow_mut();
        // first probe: no ACK within the firmware timeout
        m.push_ready(false);
        common::seed_firmware(&mut m);
    }
    let dev = DeviceBuilder::new()
        .with_transport(shared.boxed())
        .build_uninitialized()
        .unwrap()
        .initialize();
    assert!(dev.is_ok());

    let m = shared.borrow();
    assert_eq!(m.written.len(), 2);
    assert_eq!(m.written[0], m.written[1]);
    assert_eq!(m.wakeups, 1);
}

#[test]
fn second_probe_timeout_fails_construction() {
    let shared = SharedMock::new();
    {
        let mut m = shared.borrow_mut();
        m.push_ready(false);
        m.push_ready(false);
    }
    let res = DeviceBuilder::new()
        .with_transport(shared.boxed())
        .build_uninitialized()
        .unwrap()
        .initialize();
    assert!(matches!(res, Err(Error::DeviceNotFound)));
}

#[test]
fn second_probe_protocol_error_propagates() {
    let shared = SharedMock::new();
    {
        let mut m = shared.borrow_mut();
        common::seed_firmware(&mut m);
        m.push_read(vec![0x00, 0x00, 0xFF, 0xFF, 0x00, 0x00]);
    }
    let res = DeviceBuilder::new()
        .with_transport(shared.boxed())
        .build_uninitialized()
        .unwrap()
        .initialize();
    assert!(matches!(res, Err(Error::UnexpectedAck(_))));
}

#[test]
fn transient_write_on_first_probe_wakes_again() {
    let shared = SharedMock::new();
    {
        let mut m = shared.borrow_mut();
        m.set_write_failures(1);
        common::seed_firmware(&mut m);
    }
    DeviceBuilder::new()
        .with_transport(shared.boxed())
        .with_reset_pin(20)
        .build_uninitialized()
        .unwrap()
        .initialize()
        .unwrap();

    let m = shared.borrow();
    // bootstrap wake plus the recovery wake
    assert_eq!(m.wakeups, 2);
    assert_eq!(m.resets, vec![20]);
}

#[test]
fn wakeup_nak_on_first_attempt_is_masked() {
    let shared = SharedMock::new();
    {
        let mut m = shared.borrow_mut();
        m.set_wakeup_failures(1);
        common::seed_firmware(&mut m);
    }
    let dev = DeviceBuilder::new()
        .with_transport(shared.boxed())
        .build_uninitialized()
        .unwrap()
        .initialize();
    assert!(dev.is_ok());
    assert_eq!(shared.borrow().written.len(), 1);
}
