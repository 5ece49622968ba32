// libultralight/src/protocol/commands/iso14443a.rs

use crate::constants::Operation;
use crate::types::{CascadeLevel, UidPart};

/// REQA (short frame, no CRC).
pub fn encode_request() -> Vec<u8> {
    Operation::Request.spec().opcode_bytes()
}

/// WUPA (short frame, no CRC).
pub fn encode_wake_up() -> Vec<u8> {
    Operation::WakeUp.spec().opcode_bytes()
}

/// HLTA payload `50 00`.
pub fn encode_halt() -> Vec<u8> {
    Operation::Halt.spec().opcode_bytes()
}

/// ANTICOLLISION `SEL 20` for the given cascade level.
pub fn encode_anticollision(level: CascadeLevel) -> Vec<u8> {
    match level {
        CascadeLevel::One => Operation::AnticollisionCl1.spec().opcode_bytes(),
        CascadeLevel::Two => Operation::AnticollisionCl2.spec().opcode_bytes(),
    }
}

/// SELECT `SEL 70 uid0..uid3 BCC` payload (CRC appended by the codec).
pub fn encode_select(level: CascadeLevel, part: UidPart) -> Vec<u8> {
    let mut buf = match level {
        CascadeLevel::One => Operation::SelectCl1.spec().opcode_bytes(),
        CascadeLevel::Two => Operation::SelectCl2.spec().opcode_bytes(),
    };
    buf.extend_from_slice(part.as_bytes());
    buf.push(part.bcc());
    buf
}
