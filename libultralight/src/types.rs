// libultralight/src/types.rs

use crate::Error;
use crate::constants::{SAK_CASCADE_1, SAK_CASCADE_2};
use derive_more::{From, Into};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;

/// Copy a slice of exactly `N` bytes into an array.
fn exact<const N: usize>(bytes: &[u8]) -> Result<[u8; N], Error> {
    if bytes.len() != N {
        return Err(Error::InvalidResponseLength {
            expected: N,
            actual: bytes.len(),
        });
    }
    let mut arr = [0u8; N];
    arr.copy_from_slice(bytes);
    Ok(arr)
}

/// Declares a fixed-size byte newtype with the usual accessors.
macro_rules! byte_newtype {
    ($(#[$meta:meta])* $name:ident, $len:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, From, Into)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        pub struct $name([u8; $len]);

        impl $name {
            /// Length in bytes.
            pub const LEN: usize = $len;

            /// Wrap raw bytes.
            pub fn from_bytes(bytes: [u8; $len]) -> Self {
                Self(bytes)
            }

            /// Borrow the raw bytes.
            pub fn as_bytes(&self) -> &[u8; $len] {
                &self.0
            }

            /// Lowercase hex without separators.
            pub fn to_hex(&self) -> String {
                crate::utils::bytes_to_hex(&self.0)
            }
        }

        impl TryFrom<&[u8]> for $name {
            type Error = Error;

            fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
                exact::<$len>(bytes).map(Self)
            }
        }
    };
}

byte_newtype!(
    /// Four id bytes returned by one anti-collision level.
    UidPart,
    4
);

byte_newtype!(
    /// Combined id of a selected tag: cascade 1 part followed by cascade 2 part.
    Uid,
    8
);

byte_newtype!(
    /// One memory page.
    PageData,
    4
);

byte_newtype!(
    /// Four consecutive pages as returned by READ.
    Block,
    16
);

byte_newtype!(
    /// 32-bit password (PWD).
    Password,
    4
);

byte_newtype!(
    /// 16-bit password acknowledge (PACK).
    Pack,
    2
);

byte_newtype!(
    /// ECC originality signature.
    Signature,
    32
);

byte_newtype!(
    /// Seven-byte serial number (UID without check bytes).
    SerialNumber,
    7
);

byte_newtype!(
    /// Five lock bytes: two static (page 2) and three dynamic.
    LockBytes,
    5
);

impl UidPart {
    /// Block check character: XOR of the four id bytes.
    pub fn bcc(&self) -> u8 {
        self.0.iter().fold(0u8, |acc, &b| acc ^ b)
    }
}

impl Uid {
    /// Concatenate the two cascade levels.
    pub fn from_parts(cl1: UidPart, cl2: UidPart) -> Self {
        let mut bytes = [0u8; 8];
        bytes[..4].copy_from_slice(cl1.as_bytes());
        bytes[4..].copy_from_slice(cl2.as_bytes());
        Self(bytes)
    }

    /// Id bytes sent at cascade level 1.
    pub fn cascade1(&self) -> UidPart {
        let mut part = [0u8; 4];
        part.copy_from_slice(&self.0[..4]);
        UidPart(part)
    }

    /// Id bytes sent at cascade level 2.
    pub fn cascade2(&self) -> UidPart {
        let mut part = [0u8; 4];
        part.copy_from_slice(&self.0[4..]);
        UidPart(part)
    }
}

impl Block {
    /// Page `index` (0..4) of the block.
    pub fn page(&self, index: usize) -> Option<PageData> {
        let slice = self.0.chunks_exact(4).nth(index)?;
        PageData::try_from(slice).ok()
    }

    /// Compatibility write payload: one page followed by twelve zero bytes.
    pub fn compatibility(page: PageData) -> Self {
        let mut bytes = [0u8; Block::LEN];
        bytes[..4].copy_from_slice(page.as_bytes());
        Self(bytes)
    }
}

impl Pack {
    /// PACK page content: `pack0 pack1 00 00`.
    pub fn to_page(&self) -> PageData {
        PageData([self.0[0], self.0[1], 0, 0])
    }
}

impl Password {
    /// PWD page content.
    pub fn to_page(&self) -> PageData {
        PageData(self.0)
    }
}

impl SerialNumber {
    /// Extract from page 0..1 contents, skipping BCC0 at index 3.
    pub fn from_pages(data: &[u8; 8]) -> Self {
        Self([data[0], data[1], data[2], data[4], data[5], data[6], data[7]])
    }
}

/// Tag type observed by REQA/WUPA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TagType {
    /// No tag, or a tag of another type.
    #[default]
    Invalid,
    /// ATQA `44 00`.
    Ultralight,
}

/// Memory size variant of the EV1 family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Storage {
    /// 20 pages, last page 0x13.
    Mf0ul11,
    /// 41 pages, last page 0x28.
    Mf0ul21,
}

impl Storage {
    /// Last page index.
    pub const fn end_page(self) -> u8 {
        match self {
            Storage::Mf0ul11 => 0x13,
            Storage::Mf0ul21 => 0x28,
        }
    }

    /// Variant for a GET_VERSION storage-size byte (0x0B, 0x0E).
    pub fn from_storage_size(size: u8) -> Option<Self> {
        match size {
            0x0B => Some(Storage::Mf0ul11),
            0x0E => Some(Storage::Mf0ul21),
            _ => None,
        }
    }

    /// Variant whose last page is `end_page`.
    pub fn from_end_page(end_page: u8) -> Option<Self> {
        match end_page {
            0x13 => Some(Storage::Mf0ul11),
            0x28 => Some(Storage::Mf0ul21),
            _ => None,
        }
    }
}

/// Load modulation strength (CFG0 MOD bit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ModulationMode {
    /// MOD bit clear.
    #[default]
    Normal,
    /// MOD bit set.
    Strong,
}

impl ModulationMode {
    /// Strong when the MOD bit is set.
    pub fn from_bit(set: bool) -> Self {
        if set {
            ModulationMode::Strong
        } else {
            ModulationMode::Normal
        }
    }

    /// Whether the MOD bit is set.
    pub fn is_strong(self) -> bool {
        self == ModulationMode::Strong
    }
}

/// Protection flags in the ACCESS byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Access {
    /// PROT: password also required for reads.
    ReadProtection,
    /// CFGLCK: user configuration permanently locked.
    UserConfProtection,
}

impl Access {
    /// Bit position inside ACCESS byte 0.
    pub const fn bit(self) -> u8 {
        match self {
            Access::ReadProtection => 7,
            Access::UserConfProtection => 6,
        }
    }
}

/// ISO14443A cascade level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CascadeLevel {
    /// First 3 id bytes behind the cascade tag 0x88.
    One,
    /// Last 4 id bytes.
    Two,
}

impl CascadeLevel {
    /// SAK expected after selecting this level.
    pub const fn expected_sak(self) -> u8 {
        match self {
            CascadeLevel::One => SAK_CASCADE_1,
            CascadeLevel::Two => SAK_CASCADE_2,
        }
    }
}

/// GET_VERSION record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Version {
    /// Fixed header, 0x00.
    pub fixed_header: u8,
    /// Vendor, 0x04 for NXP.
    pub vendor_id: u8,
    /// Product type, 0x03 for Ultralight.
    pub product_type: u8,
    /// Product subtype.
    pub product_subtype: u8,
    /// Major product version.
    pub major_product_version: u8,
    /// Minor product version.
    pub minor_product_version: u8,
    /// Storage-size byte.
    pub storage_size: u8,
    /// Protocol type, 0x03 for ISO14443-3.
    pub protocol_type: u8,
}

impl Version {
    /// Decode the 8-byte GET_VERSION payload.
    pub fn from_bytes(b: [u8; 8]) -> Self {
        Self {
            fixed_header: b[0],
            vendor_id: b[1],
            product_type: b[2],
            product_subtype: b[3],
            major_product_version: b[4],
            minor_product_version: b[5],
            storage_size: b[6],
            protocol_type: b[7],
        }
    }

    /// Raw 8-byte record.
    pub fn to_bytes(&self) -> [u8; 8] {
        [
            self.fixed_header,
            self.vendor_id,
            self.product_type,
            self.product_subtype,
            self.major_product_version,
            self.minor_product_version,
            self.storage_size,
            self.protocol_type,
        ]
    }

    /// Memory variant from the storage-size byte.
    pub fn storage(&self) -> Option<Storage> {
        Storage::from_storage_size(self.storage_size)
    }
}

impl TryFrom<&[u8]> for Version {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        exact::<8>(bytes).map(Self::from_bytes)
    }
}
