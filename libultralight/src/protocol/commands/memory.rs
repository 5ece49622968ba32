// libultralight/src/protocol/commands/memory.rs

use crate::constants::Operation;
use crate::types::{Block, PageData};

/// READ: four pages starting at `page`.
pub fn encode_read(page: u8) -> Vec<u8> {
    let mut buf = Operation::Read.spec().opcode_bytes();
    buf.push(page);
    buf
}

/// FAST_READ: pages `start..=stop`.
pub fn encode_fast_read(start: u8, stop: u8) -> Vec<u8> {
    let mut buf = Operation::FastRead.spec().opcode_bytes();
    buf.push(start);
    buf.push(stop);
    buf
}

/// WRITE: one page.
pub fn encode_write(page: u8, data: PageData) -> Vec<u8> {
    let mut buf = Operation::Write.spec().opcode_bytes();
    buf.push(page);
    buf.extend_from_slice(data.as_bytes());
    buf
}

/// COMPATIBILITY_WRITE, first frame: address only.
pub fn encode_compatibility_write(page: u8) -> Vec<u8> {
    let mut buf = Operation::CompatibilityWrite.spec().opcode_bytes();
    buf.push(page);
    buf
}

/// COMPATIBILITY_WRITE, second frame: the 16-byte block.
pub fn encode_compatibility_write_data(block: Block) -> Vec<u8> {
    let mut buf = Operation::CompatibilityWriteData.spec().opcode_bytes();
    buf.extend_from_slice(block.as_bytes());
    buf
}
