// libultralight/src/device/builder.rs

use embedded_hal::delay::DelayNs;

use crate::constants::DEFAULT_WAKE_UP_DELAY_MS;
use crate::device::handle::Ultralight;
use crate::error::Collaborator;
use crate::transport::Transport;
use crate::{Error, Result};

/// Helper to construct an `Ultralight` handle with optional configuration.
pub struct UltralightBuilder {
    transport: Option<Box<dyn Transport>>,
    delay: Option<Box<dyn DelayNs>>,
    wake_up_delay_ms: u32,
}

impl Default for UltralightBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl UltralightBuilder {
    /// Builder with no collaborators and the default wake-up delay.
    pub fn new() -> Self {
        Self {
            transport: None,
            delay: None,
            wake_up_delay_ms: DEFAULT_WAKE_UP_DELAY_MS,
        }
    }

    /// Provide the RF front-end (e.g. MockTransport).
    pub fn with_transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Provide the millisecond delay used before WUPA.
    pub fn with_delay(mut self, delay: Box<dyn DelayNs>) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Use `std::thread::sleep` for delays.
    #[cfg(feature = "std")]
    pub fn with_std_delay(self) -> Self {
        self.with_delay(Box::new(crate::transport::StdDelay))
    }

    /// Delay inserted before WUPA (default 1 ms).
    pub fn wake_up_delay_ms(mut self, ms: u32) -> Self {
        self.wake_up_delay_ms = ms;
        self
    }

    /// Consume the builder and return an uninitialized handle. Fails with
    /// `MissingCollaborator` naming the first collaborator not provided.
    pub fn build(self) -> Result<Ultralight> {
        let transport = self
            .transport
            .ok_or(Error::MissingCollaborator(Collaborator::Transport))?;
        let delay = self
            .delay
            .ok_or(Error::MissingCollaborator(Collaborator::Delay))?;
        Ok(Ultralight::new(transport, delay, self.wake_up_delay_ms))
    }
}
