// libultralight/src/protocol/responses/mod.rs

/// ACK answers.
pub mod ack;
/// ATQA, anticollision and SAK answers.
pub mod activation;
/// EV1 command answers.
pub mod ev1;
/// Page read and signature answers.
pub mod memory;

pub use ack::decode_ack;
pub use activation::{decode_anticollision, decode_atqa, decode_sak};
pub use ev1::{
    decode_check_tearing_event, decode_get_version, decode_pwd_auth, decode_read_counter,
    decode_vcsl,
};
pub use memory::{decode_fast_read, decode_read, decode_read_signature};

use crate::protocol::Command;
use crate::types::{Block, Pack, Signature, UidPart, Version};
use crate::Result;

/// High-level Response enum. Per-command decoders live in
/// `protocol::responses::<group>.rs` and are dispatched here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// ATQA of an Ultralight.
    Atqa([u8; 2]),
    /// HLTA is never answered; the transceiver result is not inspected.
    Halted,
    /// Id bytes of one cascade level, BCC checked.
    UidPart(UidPart),
    /// SAK of the selected level.
    Sak(u8),
    /// GET_VERSION record.
    Version(Version),
    /// Four pages from READ.
    Block(Block),
    /// FAST_READ data, 4 bytes per page.
    Pages(Vec<u8>),
    /// Write-type command acknowledged.
    Ack,
    /// 24-bit counter value.
    Counter(u32),
    /// Tearing flag, 0xBD when the last update completed.
    TearingFlag(u8),
    /// Virtual card type identifier from VCSL.
    VirtualCardType(u8),
    /// Originality signature.
    Signature(Signature),
    /// PACK returned by PWD_AUTH.
    Pack(Pack),
}

impl Response {
    /// Decode a raw response for the command that produced it. Length is
    /// checked before CRC, CRC before any content check.
    pub fn decode(cmd: &Command, data: &[u8]) -> Result<Self> {
        match cmd {
            Command::Request | Command::WakeUp => decode_atqa(data).map(Self::Atqa),
            Command::Halt => Ok(Self::Halted),
            Command::Anticollision { .. } => decode_anticollision(data).map(Self::UidPart),
            Command::Select { level, .. } => decode_sak(*level, data).map(Self::Sak),
            Command::GetVersion => decode_get_version(data).map(Self::Version),
            Command::Read { .. } => decode_read(data).map(Self::Block),
            Command::FastRead { start, stop } => {
                let pages = stop.saturating_sub(*start) as usize + 1;
                decode_fast_read(pages, data).map(Self::Pages)
            }
            Command::Write { .. }
            | Command::CompatibilityWrite { .. }
            | Command::CompatibilityWriteData { .. }
            | Command::IncrementCounter { .. } => decode_ack(data).map(|_| Self::Ack),
            Command::ReadCounter { .. } => decode_read_counter(data).map(Self::Counter),
            Command::CheckTearingEvent { .. } => {
                decode_check_tearing_event(data).map(Self::TearingFlag)
            }
            Command::Vcsl { .. } => decode_vcsl(data).map(Self::VirtualCardType),
            Command::ReadSignature => decode_read_signature(data).map(Self::Signature),
            Command::PasswordAuth { .. } => decode_pwd_auth(data).map(Self::Pack),
        }
    }

    /// Short name used in `Error::UnexpectedResponse`.
    pub fn name(&self) -> &'static str {
        match self {
            Response::Atqa(_) => "atqa",
            Response::Halted => "halt",
            Response::UidPart(_) => "anticollision",
            Response::Sak(_) => "select",
            Response::Version(_) => "get_version",
            Response::Block(_) => "read",
            Response::Pages(_) => "fast_read",
            Response::Ack => "ack",
            Response::Counter(_) => "read_counter",
            Response::TearingFlag(_) => "check_tearing_event",
            Response::VirtualCardType(_) => "vcsl",
            Response::Signature(_) => "read_signature",
            Response::Pack(_) => "pwd_auth",
        }
    }
}
