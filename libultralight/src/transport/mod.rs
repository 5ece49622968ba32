// libultralight/src/transport/mod.rs

#[cfg(feature = "std")]
/// Blocking delay on top of `std::thread::sleep`.
pub mod delay;
/// Recording mocks for tests.
pub mod mock;
/// The `Transport` trait.
pub mod traits;

#[cfg(feature = "std")]
pub use delay::StdDelay;
pub use mock::{MockDelay, MockTransport};
pub use traits::Transport;
