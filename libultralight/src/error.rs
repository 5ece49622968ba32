// libultralight/src/error.rs

use thiserror::Error;

/// A collaborator the handle cannot work without.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collaborator {
    /// RF front-end (open/close/transceive).
    Transport,
    /// Millisecond delay.
    Delay,
}

impl std::fmt::Display for Collaborator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Collaborator::Transport => f.write_str("transport"),
            Collaborator::Delay => f.write_str("delay"),
        }
    }
}

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// The builder was not given a required collaborator.
    #[error("{0} is not linked")]
    MissingCollaborator(Collaborator),

    /// Operation called before `init` succeeded.
    #[error("handle is not initialized")]
    NotInitialized,

    /// The transport failed to exchange a frame.
    #[error("contactless transceiver failed: {0}")]
    Transceiver(String),

    /// The transport failed to open.
    #[error("contactless init failed: {0}")]
    ContactlessInit(String),

    /// The transport failed to close.
    #[error("contactless deinit failed: {0}")]
    ContactlessDeinit(String),

    /// Answer length differs from the command's fixed length.
    #[error("invalid response length: expected {expected}, got {actual}")]
    InvalidResponseLength {
        /// Bytes the command answers with.
        expected: usize,
        /// Bytes received.
        actual: usize,
    },

    /// Trailing CRC_A does not match the payload.
    #[error("crc mismatch: expected {expected:#06x}, got {actual:#06x}")]
    ChecksumMismatch {
        /// CRC computed over the payload.
        expected: u16,
        /// CRC carried by the frame.
        actual: u16,
    },

    /// Anticollision check byte is not the XOR of the id bytes.
    #[error("check byte mismatch: expected {expected:#04x}, got {actual:#04x}")]
    BccMismatch {
        /// XOR of the four id bytes.
        expected: u8,
        /// Check byte received.
        actual: u8,
    },

    /// Write-type command answered with something other than ACK.
    #[error("ack error: got {actual:#04x}")]
    Ack {
        /// Byte received instead of 0x0A.
        actual: u8,
    },

    /// SELECT answered with the wrong SAK for the cascade level.
    #[error("sak error: expected {expected:#04x}, got {actual:#04x}")]
    Sak {
        /// SAK of the cascade level.
        expected: u8,
        /// SAK received.
        actual: u8,
    },

    /// REQA/WUPA answered by something that is not an Ultralight.
    #[error("type is invalid: atqa {atqa:02x?}")]
    InvalidType {
        /// ATQA received.
        atqa: [u8; 2],
    },

    /// PWD_AUTH returned a PACK other than the expected one.
    #[error("pack check failed: expected {expected:02x?}, got {actual:02x?}")]
    PackMismatch {
        /// PACK the caller expected.
        expected: [u8; 2],
        /// PACK the tag returned.
        actual: [u8; 2],
    },

    /// Counter address outside 0..=2.
    #[error("counter address {0} is out of range")]
    InvalidAddress(u8),

    /// FAST_READ stop page precedes the start page.
    #[error("stop page {stop} is before start page {start}")]
    InvalidRange {
        /// First page requested.
        start: u8,
        /// Last page requested.
        stop: u8,
    },

    /// FAST_READ asks for more pages than one exchange returns.
    #[error("{pages} pages requested, at most {max} per fast read")]
    RangeTooLarge {
        /// Pages requested.
        pages: usize,
        /// Pages allowed.
        max: usize,
    },

    /// Caller buffer cannot hold the requested pages.
    #[error("buffer too small: need {needed} bytes, got {actual}")]
    BufferTooSmall {
        /// Bytes the read produces.
        needed: usize,
        /// Length of the buffer given.
        actual: usize,
    },

    /// Authentication limit above 7.
    #[error("authenticate limitation {0} is over 7")]
    LimitOutOfRange(u8),

    /// Cascade level 2 used before cascade level 1 was selected.
    #[error("cascade level 1 must complete before cascade level 2")]
    CascadeOutOfOrder,

    /// A command decoded to a response of the wrong kind.
    #[error("unexpected response for {0}")]
    UnexpectedResponse(&'static str),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Numeric status code tables. The same failure maps to different numbers
/// depending on which family of driver calls reported it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeTable {
    /// Single-exchange commands (activation, read, write, counters, auth).
    Command,
    /// `fast_read_pages`.
    FastRead,
    /// Configuration read-modify-write calls.
    Configuration,
}

impl Error {
    /// Status code in the driver's integer taxonomy; success is 0 and is not
    /// represented here.
    pub fn status_code(&self, table: CodeTable) -> u8 {
        match self {
            Error::NotInitialized | Error::MissingCollaborator(_) => return 3,
            Error::ContactlessInit(_) | Error::ContactlessDeinit(_) | Error::Transceiver(_) => {
                return 1;
            }
            _ => {}
        }

        match table {
            CodeTable::Configuration => match self {
                Error::LimitOutOfRange(_) => 4,
                _ => 1,
            },
            CodeTable::FastRead => match self {
                Error::InvalidRange { .. } => 4,
                Error::RangeTooLarge { .. } => 5,
                Error::BufferTooSmall { .. } => 6,
                Error::InvalidResponseLength { .. } => 7,
                Error::ChecksumMismatch { .. } => 8,
                _ => 1,
            },
            CodeTable::Command => match self {
                Error::InvalidResponseLength { .. } => 4,
                Error::ChecksumMismatch { .. }
                | Error::BccMismatch { .. }
                | Error::Ack { .. }
                | Error::Sak { .. }
                | Error::InvalidType { .. } => 5,
                Error::PackMismatch { .. } | Error::InvalidAddress(_) => 6,
                _ => 1,
            },
        }
    }
}
