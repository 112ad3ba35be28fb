use pn532::device::{Device, DeviceBuilder, Initialized};

use crate::common::{self, SharedMock};

#[test]
fn builder_then_initialize_yields_initialized_device() {
    common::init_logging();
    let shared = SharedMock::new();
    common::seed_firmware(&mut shared.borrow_mut());
    common::seed_firmware(&mut shared.borrow_mut());

    let dev: Device<Initialized> = DeviceBuilder::new()
        .with_transport(shared.boxed())
        .with_debug(true)
        .build_uninitialized()
        .unwrap()
        .initialize()
        .unwrap();
    assert!(dev.config().debug);
}

#[test]
fn initialized_device_queries_firmware() {
    let shared = SharedMock::new();
    let mut dev = common::initialized_mock_device(&shared).unwrap();
    common::seed_firmware(&mut shared.borrow_mut());
    let fw = dev.get_firmware_version().unwrap();
    assert_eq!(fw.as_tuple(), (0x32, 0x01, 0x06, 0x07));
}
