// libultralight/src/protocol/codec.rs

use crate::Result;

use super::Frame;
use super::commands::Command;
use super::responses::Response;

/// Encode a Command into the bytes handed to the transceiver (CRC appended
/// when the command carries one).
pub fn encode_command_frame(cmd: &Command) -> Vec<u8> {
    let payload = cmd.encode();
    if cmd.has_crc() {
        Frame::encode(&payload)
    } else {
        payload
    }
}

/// Validate and decode the raw transceiver answer for `cmd`.
pub fn decode_response_frame(cmd: &Command, raw: &[u8]) -> Result<Response> {
    Response::decode(cmd, raw)
}
