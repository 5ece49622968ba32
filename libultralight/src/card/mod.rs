// libultralight/src/card/mod.rs

use crate::types::{SerialNumber, Storage, Uid, Version};

mod chip;
pub use chip::{ChipInfo, info};

/// Operations implemented on `Ultralight`.
pub mod operations;

/// What `Ultralight::activate` learned about the tag in the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardInfo {
    uid: Uid,
    serial: SerialNumber,
    version: Version,
    storage: Option<Storage>,
}

impl CardInfo {
    /// Bundle the results of one activation.
    pub fn new(uid: Uid, serial: SerialNumber, version: Version, storage: Option<Storage>) -> Self {
        Self {
            uid,
            serial,
            version,
            storage,
        }
    }

    /// Both cascade levels as selected.
    pub fn uid(&self) -> &Uid {
        &self.uid
    }

    /// Seven-byte serial number from page 0.
    pub fn serial(&self) -> &SerialNumber {
        &self.serial
    }

    /// GET_VERSION record.
    pub fn version(&self) -> &Version {
        &self.version
    }

    /// `None` when GET_VERSION reported an unknown storage size.
    pub fn storage(&self) -> Option<Storage> {
        self.storage
    }
}
