use pn532::protocol::{DeviceError, classify};

#[test]
fn classify_is_total() {
    let mut recognized = 0;
    for code in 0..=255u8 {
        match classify(code) {
            DeviceError::Unrecognized(c) => assert_eq!(c, code),
            known => {
                assert_eq!(known.code(), code);
                recognized += 1;
            }
        }
    }
    assert_eq!(recognized, 28);
}

#[test]
fn messages_follow_status_names() {
    assert_eq!(classify(0x14).to_string(), "mifare authentication error");
    assert_eq!(classify(0x2D), DeviceError::Overcurrent);
    assert!(matches!(classify(0x00), DeviceError::Unrecognized(0)));
}
