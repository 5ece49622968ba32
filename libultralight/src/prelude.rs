// libultralight/src/prelude.rs

pub use crate::card::{CardInfo, ChipInfo, info};
pub use crate::device::{Selection, Ultralight, UltralightBuilder};
pub use crate::protocol::{Command, Response};
pub use crate::transport::Transport;
pub use crate::{
    Access, Block, CascadeLevel, CodeTable, Error, LockBytes, ModulationMode, Pack, PageData,
    Password, Result, SerialNumber, Signature, Storage, TagType, Uid, UidPart, Version,
};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, parse_hex};
