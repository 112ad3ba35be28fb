use pn532::transport::Transport;
use pn532::transport::mock::MockTransport;

use crate::common;

#[test]
fn scripted_reads_are_truncated_to_request() {
    let mut m = MockTransport::new();
    common::seed_firmware(&mut m);

    assert_eq!(m.read(6).unwrap(), common::ack());
    let frame = m.read(4).unwrap();
    assert_eq!(frame, vec![0x00, 0x00, 0xFF, 0x06]);
    assert_eq!(m.read_requests, vec![6, 4]);
}

#[test]
fn boxed_transport_delegates() {
    let mut boxed: Box<dyn Transport> = Box::new(MockTransport::new());
    boxed.write(&[0x01, 0x02]).unwrap();
    boxed.wakeup().unwrap();
    boxed.reset(17).unwrap();
}

#[test]
fn shared_mock_is_observable_after_boxing() {
    let shared = common::SharedMock::new();
    let mut boxed = shared.boxed();
    boxed.write(&[0xAA]).unwrap();
    boxed.reset(4).unwrap();
    let m = shared.borrow();
    assert_eq!(m.written, vec![vec![0xAA]]);
    assert_eq!(m.resets, vec![4]);
    assert_eq!(m.bus_activity(), 2);
}
