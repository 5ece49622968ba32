// libultralight/src/protocol/parser.rs

use crate::constants::ACK;
use crate::protocol::Frame;
use crate::{Error, Result};

/// Ensure the response has exactly `expected` bytes.
pub fn expect_len(data: &[u8], expected: usize) -> Result<()> {
    if data.len() != expected {
        return Err(Error::InvalidResponseLength {
            expected,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Return a subslice with bounds checking.
pub fn slice_at(data: &[u8], idx: usize, len: usize) -> Result<&[u8]> {
    data.get(idx..idx + len).ok_or(Error::InvalidResponseLength {
        expected: idx + len,
        actual: data.len(),
    })
}

/// Read a single byte at `idx` with bounds checking.
pub fn byte_at(data: &[u8], idx: usize) -> Result<u8> {
    slice_at(data, idx, 1).map(|s| s[0])
}

/// Read a little-endian 24-bit value at `idx`.
pub fn le_u24_at(data: &[u8], idx: usize) -> Result<u32> {
    let s = slice_at(data, idx, 3)?;
    Ok(u32::from_le_bytes([s[0], s[1], s[2], 0]))
}

/// Check the exact length of a CRC-protected response, verify its CRC and
/// return the payload.
pub fn expect_crc_frame(data: &[u8], expected: usize) -> Result<Vec<u8>> {
    expect_len(data, expected)?;
    Frame::decode(data)
}

/// Check a single-byte ACK response.
pub fn expect_ack(data: &[u8]) -> Result<()> {
    expect_len(data, 1)?;
    let actual = data[0];
    if actual != ACK {
        return Err(Error::Ack { actual });
    }
    Ok(())
}
