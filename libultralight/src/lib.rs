// libultralight/src/lib.rs

//! libultralight
//!
//! Pure Rust driver for MIFARE Ultralight EV1 (MF0UL11 / MF0UL21) tags
//! talking ISO14443A through a caller-supplied RF transceiver.
//!
//! ```no_run
//! use libultralight::{Transport, Ultralight};
//!
//! fn dump(transport: Box<dyn Transport>) -> libultralight::Result<()> {
//!     let mut tag = Ultralight::builder()
//!         .with_transport(transport)
//!         .with_std_delay()
//!         .build()?;
//!     tag.init()?;
//!     let card = tag.activate()?;
//!     println!("uid {}", card.uid().to_hex());
//!     for page in (0..=tag.end_page()).step_by(4) {
//!         println!("{:02x}: {}", page, tag.read_four_pages(page)?.to_hex());
//!     }
//!     tag.deinit()
//! }
//! ```
#![warn(missing_docs)]

/// Card-level operations and card/chip descriptions.
pub mod card;
/// Opcodes, frame shapes and the memory map.
pub mod constants;
/// The `Ultralight` handle, its builder and the selection state.
pub mod device;
/// Error type and status code tables.
pub mod error;
/// Common imports.
pub mod prelude;
/// CRC_A, frame encoding and response decoding.
pub mod protocol;
/// Mock-backed handle constructors for tests.
pub mod test_support;
/// RF front-end trait, mocks and delays.
pub mod transport;
/// Byte newtypes and protocol enums.
pub mod types;
/// Hex helpers.
pub mod utils;

// Errors and value newtypes live at the crate root (`crate::Error`,
// `crate::PageData`, ...); the prelude adds the handle and codec types.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
