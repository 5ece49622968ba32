// libultralight/src/protocol/responses/ack.rs

use crate::Result;
use crate::protocol::parser;

/// Decode the 4-bit ACK of WRITE, COMPATIBILITY_WRITE and INCR_CNT.
pub fn decode_ack(data: &[u8]) -> Result<()> {
    parser::expect_ack(data)
}
