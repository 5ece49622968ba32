// libultralight/src/device/mod.rs

/// Handle construction.
pub mod builder;
/// The session handle.
pub mod handle;
/// Cascade selection state machine.
pub mod selection;

pub use builder::UltralightBuilder;
pub use handle::Ultralight;
pub use selection::Selection;
