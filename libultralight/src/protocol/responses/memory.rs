// libultralight/src/protocol/responses/memory.rs

use crate::constants::{PAGE_SIZE, READ_PAGE_COUNT};
use crate::protocol::parser;
use crate::types::{Block, Signature};
use crate::Result;

/// Decode READ: 16 data bytes + CRC.
pub fn decode_read(data: &[u8]) -> Result<Block> {
    let payload = parser::expect_crc_frame(data, PAGE_SIZE * READ_PAGE_COUNT + 2)?;
    Block::try_from(&payload[..])
}

/// Decode FAST_READ for `pages` pages: 4 * pages data bytes + CRC.
pub fn decode_fast_read(pages: usize, data: &[u8]) -> Result<Vec<u8>> {
    parser::expect_crc_frame(data, pages * PAGE_SIZE + 2)
}

/// Decode READ_SIG: 32-byte signature + CRC.
pub fn decode_read_signature(data: &[u8]) -> Result<Signature> {
    let payload = parser::expect_crc_frame(data, Signature::LEN + 2)?;
    Signature::try_from(&payload[..])
}
