// libultralight/src/protocol/frame.rs

use crate::protocol::checksum::{crc_a, crc16, trailing_crc};
use crate::{Error, Result};

/// CRC_A framing helper.
/// Format: [Payload(n)] [CRC lo] [CRC hi]
pub struct Frame;

impl Frame {
    /// Length of the trailing checksum.
    pub const CRC_LEN: usize = 2;

    /// Append CRC_A to a payload.
    pub fn encode(payload: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(payload.len() + Self::CRC_LEN);
        out.extend_from_slice(payload);
        out.extend_from_slice(&crc16(payload));
        out
    }

    /// Verify the trailing CRC_A and return the payload.
    pub fn decode(frame: &[u8]) -> Result<Vec<u8>> {
        let actual = trailing_crc(frame).ok_or(Error::InvalidResponseLength {
            expected: Self::CRC_LEN,
            actual: frame.len(),
        })?;
        let payload = &frame[..frame.len() - Self::CRC_LEN];
        let expected = crc_a(payload);
        if actual != expected {
            return Err(Error::ChecksumMismatch { expected, actual });
        }
        Ok(payload.to_vec())
    }
}
