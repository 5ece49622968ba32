// libultralight/src/constants.rs
//! Protocol constants: opcodes, frame shapes and the memory map.
//!
//! Every wire command is described once in [`Operation::spec`] so the frame
//! layout can be audited against the MF0ULx1 datasheet in one place.

/// ATQA answered by an Ultralight EV1 to REQA/WUPA.
pub const ATQA_ULTRALIGHT: [u8; 2] = [0x44, 0x00];

/// 4-bit ACK returned by write-type commands.
pub const ACK: u8 = 0x0A;

/// SAK after cascade level 1: UID not complete.
pub const SAK_CASCADE_1: u8 = 0x04;
/// SAK after cascade level 2: UID complete, tag selected.
pub const SAK_CASCADE_2: u8 = 0x00;

/// Size of one memory page in bytes.
pub const PAGE_SIZE: usize = 4;
/// READ always returns 4 pages.
pub const READ_PAGE_COUNT: usize = 4;
/// Upper bound on pages returned by one FAST_READ.
pub const FAST_READ_MAX_PAGES: usize = 15;

/// Number of one-way counters.
pub const COUNTER_COUNT: u8 = 3;
/// Counters are 24 bits wide.
pub const COUNTER_MAX: u32 = 0x00FF_FFFF;

/// Largest AUTHLIM value (ACCESS bits 0..=2).
pub const AUTH_LIMIT_MAX: u8 = 7;

/// `end_page` before it is known.
pub const END_PAGE_UNKNOWN: u8 = 0xFF;

/// Page holding UID bytes 0..=2 and BCC0.
pub const SERIAL_PAGE: u8 = 0x00;
/// Page holding static lock bytes 0 and 1 (in bytes 2 and 3).
pub const STATIC_LOCK_PAGE: u8 = 0x02;
/// One-time-programmable page.
pub const OTP_PAGE: u8 = 0x03;

/// PACK page: `end_page`.
pub const PACK_PAGE_OFFSET: u8 = 0;
/// PWD page: `end_page - 1`.
pub const PASSWORD_PAGE_OFFSET: u8 = 1;
/// CFG1 (ACCESS, VCTID) page: `end_page - 2`.
pub const ACCESS_PAGE_OFFSET: u8 = 2;
/// CFG0 (MOD, AUTH0) page: `end_page - 3`.
pub const CONFIG_PAGE_OFFSET: u8 = 3;
/// Dynamic lock bytes page: `end_page - 4`.
pub const DYNAMIC_LOCK_PAGE_OFFSET: u8 = 4;

/// CFG0 byte 0 bit carrying the modulation mode.
pub const MODULATION_BIT: u8 = 2;
/// CFG0 byte index of AUTH0 (first protected page).
pub const AUTH0_BYTE: usize = 3;
/// ACCESS byte index of the virtual card type identifier.
pub const VCTID_BYTE: usize = 1;
/// ACCESS mask of AUTHLIM.
pub const AUTH_LIMIT_MASK: u8 = 0x07;

/// Delay inserted before WUPA.
pub const DEFAULT_WAKE_UP_DELAY_MS: u32 = 1;

/// Every command the driver puts on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// REQA.
    Request,
    /// WUPA.
    WakeUp,
    /// HLTA.
    Halt,
    /// ANTICOLLISION, cascade level 1.
    AnticollisionCl1,
    /// ANTICOLLISION, cascade level 2.
    AnticollisionCl2,
    /// SELECT, cascade level 1.
    SelectCl1,
    /// SELECT, cascade level 2.
    SelectCl2,
    /// GET_VERSION.
    GetVersion,
    /// READ.
    Read,
    /// FAST_READ.
    FastRead,
    /// WRITE.
    Write,
    /// COMPATIBILITY_WRITE address frame.
    CompatibilityWrite,
    /// COMPATIBILITY_WRITE data frame.
    CompatibilityWriteData,
    /// READ_CNT.
    ReadCounter,
    /// INCR_CNT.
    IncrementCounter,
    /// CHECK_TEARING_EVENT.
    CheckTearingEvent,
    /// VCSL.
    Vcsl,
    /// READ_SIG.
    ReadSignature,
    /// PWD_AUTH.
    PasswordAuth,
}

/// Static frame shape of one command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    /// Opcode; two-byte opcodes are sent high byte first.
    pub opcode: u16,
    /// 1 or 2 opcode bytes (0 for the data frame of COMPATIBILITY_WRITE).
    pub opcode_len: usize,
    /// Request length including CRC when present.
    pub request_len: usize,
    /// Expected response length; `None` when it depends on parameters.
    pub response_len: Option<usize>,
    /// Whether the request carries a trailing CRC_A.
    pub crc: bool,
}

impl CommandSpec {
    const fn new(
        opcode: u16,
        opcode_len: usize,
        request_len: usize,
        response_len: Option<usize>,
        crc: bool,
    ) -> Self {
        Self {
            opcode,
            opcode_len,
            request_len,
            response_len,
            crc,
        }
    }

    /// Opcode bytes as they appear on the wire.
    pub fn opcode_bytes(&self) -> Vec<u8> {
        let be = self.opcode.to_be_bytes();
        be[be.len() - self.opcode_len..].to_vec()
    }
}

impl Operation {
    /// Frame shape table.
    pub const fn spec(self) -> CommandSpec {
        match self {
            Self::Request => CommandSpec::new(0x26, 1, 1, Some(2), false),
            Self::WakeUp => CommandSpec::new(0x52, 1, 1, Some(2), false),
            Self::Halt => CommandSpec::new(0x5000, 2, 4, Some(1), true),
            Self::AnticollisionCl1 => CommandSpec::new(0x9320, 2, 2, Some(5), false),
            Self::AnticollisionCl2 => CommandSpec::new(0x9520, 2, 2, Some(5), false),
            Self::SelectCl1 => CommandSpec::new(0x9370, 2, 9, Some(1), true),
            Self::SelectCl2 => CommandSpec::new(0x9570, 2, 9, Some(1), true),
            Self::GetVersion => CommandSpec::new(0x60, 1, 3, Some(10), true),
            Self::Read => CommandSpec::new(0x30, 1, 4, Some(18), true),
            Self::FastRead => CommandSpec::new(0x3A, 1, 5, None, true),
            Self::Write => CommandSpec::new(0xA2, 1, 8, Some(1), true),
            Self::CompatibilityWrite => CommandSpec::new(0xA0, 1, 4, Some(1), true),
            Self::CompatibilityWriteData => CommandSpec::new(0x00, 0, 18, Some(1), true),
            Self::ReadCounter => CommandSpec::new(0x39, 1, 4, Some(5), true),
            Self::IncrementCounter => CommandSpec::new(0xA5, 1, 8, Some(1), true),
            Self::CheckTearingEvent => CommandSpec::new(0x3E, 1, 4, Some(3), true),
            Self::Vcsl => CommandSpec::new(0x4B, 1, 23, Some(3), true),
            Self::ReadSignature => CommandSpec::new(0x3C, 1, 4, Some(34), true),
            Self::PasswordAuth => CommandSpec::new(0x1B, 1, 7, Some(4), true),
        }
    }
}
