// libultralight/src/protocol/mod.rs

/// CRC_A.
pub mod checksum;
/// Command to frame and frame to response.
pub mod codec;
/// Command enum and encoders.
pub mod commands;
/// CRC framing.
pub mod frame;
/// Bounds-checked response parsing helpers.
pub mod parser;
/// Response enum and decoders.
pub mod responses;

pub use checksum::{crc_a, crc16};
pub use commands::Command;
pub use frame::Frame;
pub use responses::Response;
