// libultralight/src/protocol/responses/ev1.rs

use crate::protocol::parser;
use crate::types::{Pack, Version};
use crate::Result;

/// Decode GET_VERSION: 8 bytes + CRC.
pub fn decode_get_version(data: &[u8]) -> Result<Version> {
    let payload = parser::expect_crc_frame(data, 10)?;
    Version::try_from(&payload[..])
}

/// Decode READ_CNT: 24-bit little-endian counter + CRC.
pub fn decode_read_counter(data: &[u8]) -> Result<u32> {
    let payload = parser::expect_crc_frame(data, 5)?;
    parser::le_u24_at(&payload, 0)
}

/// Decode CHECK_TEARING_EVENT: one flag byte + CRC.
pub fn decode_check_tearing_event(data: &[u8]) -> Result<u8> {
    let payload = parser::expect_crc_frame(data, 3)?;
    parser::byte_at(&payload, 0)
}

/// Decode VCSL: virtual card type identifier + CRC.
pub fn decode_vcsl(data: &[u8]) -> Result<u8> {
    let payload = parser::expect_crc_frame(data, 3)?;
    parser::byte_at(&payload, 0)
}

/// Decode PWD_AUTH: PACK + CRC. Comparing against the expected PACK is
/// left to the caller.
pub fn decode_pwd_auth(data: &[u8]) -> Result<Pack> {
    let payload = parser::expect_crc_frame(data, 4)?;
    Pack::try_from(&payload[..])
}
