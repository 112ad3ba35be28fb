use pn532::Error;
use pn532::protocol::Frame;

use crate::common;

#[test]
fn firmware_result_frame_decodes_to_payload() {
    let raw = common::response_frame(0x02, &[0x32, 0x01, 0x06, 0x07]);
    let payload = Frame::decode(&raw).expect("frame decode");
    assert_eq!(payload, &[0xD5, 0x03, 0x32, 0x01, 0x06, 0x07]);
}

#[test]
fn decode_survives_short_i2c_read() {
    // the postamble never arrived; everything up to DCS did
    let raw = common::response_frame(0x14, &[]);
    let payload = Frame::decode(&raw[..raw.len() - 1]).unwrap();
    assert_eq!(payload, &[0xD5, 0x15]);
}

#[test]
fn one_and_many_leading_zeros_decode_identically() {
    let frame = Frame::encode(&[0xD5, 0x41, 0x00]).unwrap();
    // the frame already starts with two zero bytes
    let one = &frame[1..];
    let mut many = vec![0u8; 40];
    many.extend_from_slice(&frame);
    assert_eq!(Frame::decode(one).unwrap(), Frame::decode(&many).unwrap());
}

#[test]
fn marker_is_required() {
    assert!(matches!(Frame::decode(&[0u8; 9]), Err(Error::MalformedPreamble)));
    assert!(matches!(
        Frame::decode(&[0x00, 0x00, 0xFE, 0x02, 0xFE, 0xD5, 0x03, 0x28, 0x00]),
        Err(Error::MalformedPreamble)
    ));
}

#[test]
fn every_single_byte_corruption_is_rejected() {
    let frame = Frame::encode(&[0xD5, 0x41, 0x00, 0x10, 0x20, 0x30]).unwrap();
    // LEN through DCS; the postamble is not inspected
    for idx in 3..frame.len() - 1 {
        for delta in [0x01u8, 0x80, 0xFF] {
            let mut bad = frame.clone();
            bad[idx] = bad[idx].wrapping_add(delta);
            let err = Frame::decode(&bad).unwrap_err();
            assert!(err.is_checksum_mismatch(), "index {idx}: {:?}", err);
        }
    }
}

#[test]
fn frame_size_limits() {
    assert!(matches!(Frame::new(&[0xD4]), Err(Error::InvalidArgument(_))));
    assert!(matches!(Frame::new(&[0u8; 255]), Err(Error::InvalidArgument(_))));
    let max = Frame::new(&[0x11; 254]).unwrap();
    assert_eq!(max.as_bytes().len(), 261);
    assert_eq!(max.payload().len(), 254);
}
