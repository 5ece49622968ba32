// fixtures.rs: frames captured from an MF0UL11, in the hex form trace logging prints

use libultralight::types::{Password, Pack, UidPart};

/// Decode a hex fixture, panicking on typos in the fixture itself.
pub fn frame(hex_str: &str) -> Vec<u8> {
    let cleaned: String = hex_str.split_whitespace().collect();
    hex::decode(cleaned).expect("fixture hex")
}

pub fn atqa() -> Vec<u8> {
    frame("44 00")
}

pub fn cl1_bytes() -> [u8; 4] {
    [0x88, 0x04, 0x6E, 0x1A]
}

pub fn cl2_bytes() -> [u8; 4] {
    [0x52, 0x3C, 0x81, 0x80]
}

pub fn cl1_part() -> UidPart {
    UidPart::from_bytes(cl1_bytes())
}

pub fn cl2_part() -> UidPart {
    UidPart::from_bytes(cl2_bytes())
}

/// Anticollision answer: id bytes followed by their BCC.
pub fn anticollision_answer(part: [u8; 4]) -> Vec<u8> {
    let mut v = part.to_vec();
    v.push(part.iter().fold(0, |a, b| a ^ b));
    v
}

pub fn sak_cl1() -> Vec<u8> {
    frame("04")
}

pub fn sak_cl2() -> Vec<u8> {
    frame("00")
}

pub fn ack() -> Vec<u8> {
    frame("0a")
}

pub fn nak() -> Vec<u8> {
    frame("05")
}

/// GET_VERSION payload with the given storage-size byte.
pub fn version_payload(storage_size: u8) -> Vec<u8> {
    let mut v = frame("00 04 03 01 01 00");
    v.push(storage_size);
    v.push(0x03);
    v
}

pub fn version_answer(storage_size: u8) -> Vec<u8> {
    libultralight::test_support::with_crc(&version_payload(storage_size))
}

/// READ of page 0: UID0..2 BCC0 UID3..6 BCC1 INT LOCK0 LOCK1 OTP.
pub fn page0_payload() -> Vec<u8> {
    frame("04 6e 1a f8 52 3c 81 80 21 48 00 00 00 00 00 00")
}

pub fn page0_answer() -> Vec<u8> {
    libultralight::test_support::with_crc(&page0_payload())
}

pub fn default_password() -> Password {
    Password::from_bytes([0xFF; 4])
}

pub fn default_pack() -> Pack {
    Pack::from_bytes([0x00, 0x00])
}
