// libultralight/src/protocol/commands/mod.rs

/// GET_VERSION, counters, signature and password frames.
pub mod ev1;
/// ISO14443A activation frames.
pub mod iso14443a;
/// Page read and write frames.
pub mod memory;

pub use ev1::{
    encode_check_tearing_event, encode_get_version, encode_increment_counter, encode_pwd_auth,
    encode_read_counter, encode_read_signature, encode_vcsl,
};
pub use iso14443a::{
    encode_anticollision, encode_halt, encode_request, encode_select, encode_wake_up,
};
pub use memory::{
    encode_compatibility_write, encode_compatibility_write_data, encode_fast_read, encode_read,
    encode_write,
};

use crate::constants::{Operation, PAGE_SIZE};
use crate::types::{Block, CascadeLevel, PageData, Password, UidPart};

/// High-level Command enum. New commands should be added here, their
/// frame shape to `constants::Operation::spec` and their encoder to
/// `protocol::commands::<group>.rs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// REQA.
    Request,
    /// WUPA.
    WakeUp,
    /// HLTA.
    Halt,
    /// ANTICOLLISION at one cascade level.
    Anticollision {
        /// Cascade level.
        level: CascadeLevel,
    },
    /// SELECT of one id part.
    Select {
        /// Cascade level.
        level: CascadeLevel,
        /// Id bytes returned by anticollision at this level.
        part: UidPart,
    },
    /// GET_VERSION.
    GetVersion,
    /// READ of four pages.
    Read {
        /// First page.
        page: u8,
    },
    /// FAST_READ of `start..=stop`.
    FastRead {
        /// First page.
        start: u8,
        /// Last page, inclusive.
        stop: u8,
    },
    /// WRITE of one page.
    Write {
        /// Target page.
        page: u8,
        /// Four bytes to store.
        data: PageData,
    },
    /// First COMPATIBILITY_WRITE frame.
    CompatibilityWrite {
        /// Target page.
        page: u8,
    },
    /// Second COMPATIBILITY_WRITE frame.
    CompatibilityWriteData {
        /// 16 bytes, of which the tag keeps the first 4.
        block: Block,
    },
    /// READ_CNT.
    ReadCounter {
        /// Counter 0..=2.
        addr: u8,
    },
    /// INCR_CNT.
    IncrementCounter {
        /// Counter 0..=2.
        addr: u8,
        /// Increment; only the low 24 bits are sent.
        value: u32,
    },
    /// CHECK_TEARING_EVENT.
    CheckTearingEvent {
        /// Counter 0..=2.
        addr: u8,
    },
    /// VCSL.
    Vcsl {
        /// Installation identifier.
        installation_identifier: [u8; 16],
        /// PCD capabilities.
        pcd_capabilities: [u8; 4],
    },
    /// READ_SIG.
    ReadSignature,
    /// PWD_AUTH.
    PasswordAuth {
        /// 32-bit password.
        password: Password,
    },
}

impl Command {
    /// Row of the frame shape table this command uses.
    pub fn operation(&self) -> Operation {
        match self {
            Self::Request => Operation::Request,
            Self::WakeUp => Operation::WakeUp,
            Self::Halt => Operation::Halt,
            Self::Anticollision {
                level: CascadeLevel::One,
            } => Operation::AnticollisionCl1,
            Self::Anticollision {
                level: CascadeLevel::Two,
            } => Operation::AnticollisionCl2,
            Self::Select {
                level: CascadeLevel::One,
                ..
            } => Operation::SelectCl1,
            Self::Select {
                level: CascadeLevel::Two,
                ..
            } => Operation::SelectCl2,
            Self::GetVersion => Operation::GetVersion,
            Self::Read { .. } => Operation::Read,
            Self::FastRead { .. } => Operation::FastRead,
            Self::Write { .. } => Operation::Write,
            Self::CompatibilityWrite { .. } => Operation::CompatibilityWrite,
            Self::CompatibilityWriteData { .. } => Operation::CompatibilityWriteData,
            Self::ReadCounter { .. } => Operation::ReadCounter,
            Self::IncrementCounter { .. } => Operation::IncrementCounter,
            Self::CheckTearingEvent { .. } => Operation::CheckTearingEvent,
            Self::Vcsl { .. } => Operation::Vcsl,
            Self::ReadSignature => Operation::ReadSignature,
            Self::PasswordAuth { .. } => Operation::PasswordAuth,
        }
    }

    /// Whether the frame carries a trailing CRC_A.
    pub fn has_crc(&self) -> bool {
        self.operation().spec().crc
    }

    /// Exact number of bytes the tag answers with.
    pub fn response_len(&self) -> usize {
        match self {
            Self::FastRead { start, stop } => {
                (stop.saturating_sub(*start) as usize + 1) * PAGE_SIZE + 2
            }
            other => other.operation().spec().response_len.unwrap_or(0),
        }
    }

    /// Encode the command into the raw payload (opcode + params, no CRC).
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::Request => encode_request(),
            Self::WakeUp => encode_wake_up(),
            Self::Halt => encode_halt(),
            Self::Anticollision { level } => encode_anticollision(*level),
            Self::Select { level, part } => encode_select(*level, *part),
            Self::GetVersion => encode_get_version(),
            Self::Read { page } => encode_read(*page),
            Self::FastRead { start, stop } => encode_fast_read(*start, *stop),
            Self::Write { page, data } => encode_write(*page, *data),
            Self::CompatibilityWrite { page } => encode_compatibility_write(*page),
            Self::CompatibilityWriteData { block } => encode_compatibility_write_data(*block),
            Self::ReadCounter { addr } => encode_read_counter(*addr),
            Self::IncrementCounter { addr, value } => encode_increment_counter(*addr, *value),
            Self::CheckTearingEvent { addr } => encode_check_tearing_event(*addr),
            Self::Vcsl {
                installation_identifier,
                pcd_capabilities,
            } => encode_vcsl(installation_identifier, pcd_capabilities),
            Self::ReadSignature => encode_read_signature(),
            Self::PasswordAuth { password } => encode_pwd_auth(*password),
        }
    }
}
