#[path = "../common/mod.rs"]
mod common;

use libultralight::protocol::Frame;
use libultralight::Error;

#[test]
fn encode_appends_lsb_first() {
    assert_eq!(Frame::encode(&[0x60]), vec![0x60, 0xF8, 0x32]);
}

#[test]
fn decode_strips_valid_crc() {
    let raw = common::fixtures::version_answer(0x0B);
    let payload = Frame::decode(&raw).unwrap();
    assert_eq!(payload, common::fixtures::version_payload(0x0B));
}

#[test]
fn decode_too_short() {
    match Frame::decode(&[0x0A]) {
        Err(Error::InvalidResponseLength { expected: 2, actual: 1 }) => {}
        other => panic!("expected InvalidResponseLength, got {:?}", other),
    }
}

#[test]
fn decode_swapped_crc_bytes() {
    // CRC present but byte order reversed
    let raw = [0x60, 0x32, 0xF8];
    match Frame::decode(&raw) {
        Err(Error::ChecksumMismatch { expected, actual }) => {
            assert_eq!(expected, 0x32F8);
            assert_eq!(actual, 0xF832);
        }
        other => panic!("expected ChecksumMismatch, got {:?}", other),
    }
}
