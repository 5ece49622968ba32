// libultralight/src/protocol/commands/ev1.rs

use crate::constants::Operation;
use crate::types::Password;

/// GET_VERSION.
pub fn encode_get_version() -> Vec<u8> {
    Operation::GetVersion.spec().opcode_bytes()
}

/// READ_CNT.
pub fn encode_read_counter(addr: u8) -> Vec<u8> {
    let mut buf = Operation::ReadCounter.spec().opcode_bytes();
    buf.push(addr);
    buf
}

/// INCR_CNT: 24-bit little-endian increment followed by one RFU byte.
/// Bits above 23 are dropped.
pub fn encode_increment_counter(addr: u8, value: u32) -> Vec<u8> {
    let mut buf = Operation::IncrementCounter.spec().opcode_bytes();
    buf.push(addr);
    let le = value.to_le_bytes();
    buf.extend_from_slice(&le[..3]);
    buf.push(0x00);
    buf
}

/// CHECK_TEARING_EVENT.
pub fn encode_check_tearing_event(addr: u8) -> Vec<u8> {
    let mut buf = Operation::CheckTearingEvent.spec().opcode_bytes();
    buf.push(addr);
    buf
}

/// VCSL: installation identifier then PCD capabilities.
pub fn encode_vcsl(installation_identifier: &[u8; 16], pcd_capabilities: &[u8; 4]) -> Vec<u8> {
    let mut buf = Operation::Vcsl.spec().opcode_bytes();
    buf.extend_from_slice(installation_identifier);
    buf.extend_from_slice(pcd_capabilities);
    buf
}

/// READ_SIG; the address byte is RFU and always zero.
pub fn encode_read_signature() -> Vec<u8> {
    let mut buf = Operation::ReadSignature.spec().opcode_bytes();
    buf.push(0x00);
    buf
}

/// PWD_AUTH.
pub fn encode_pwd_auth(password: Password) -> Vec<u8> {
    let mut buf = Operation::PasswordAuth.spec().opcode_bytes();
    buf.extend_from_slice(password.as_bytes());
    buf
}
