//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockTransport setup so tests across the
//! crate and tests/ directory can reuse the same logic.
#![allow(dead_code)]

use crate::constants::ACK;
use crate::device::Ultralight;
use crate::protocol::Frame;
use crate::transport::{MockDelay, MockTransport};
use crate::types::Storage;

/// Build an uninitialized handle over fresh mocks. The returned mocks share
/// state with the ones the handle owns.
#[doc(hidden)]
pub fn mock_device() -> (Ultralight, MockTransport, MockDelay) {
    let transport = MockTransport::new();
    let delay = MockDelay::new();
    let dev = Ultralight::new(Box::new(transport.clone()), Box::new(delay.clone()), 1);
    (dev, transport, delay)
}

/// Convenience: an initialized handle whose transport is pre-seeded with
/// `responses`, in order.
#[doc(hidden)]
pub fn initialized_mock(responses: Vec<Vec<u8>>) -> (Ultralight, MockTransport) {
    let (mut dev, mock, _) = mock_device();
    for resp in responses {
        mock.push_response(resp);
    }
    // open() on the mock only fails when told to
    let _ = dev.init();
    (dev, mock)
}

/// Same as `initialized_mock` with the end page already set.
#[doc(hidden)]
pub fn initialized_mock_with_storage(
    storage: Storage,
    responses: Vec<Vec<u8>>,
) -> (Ultralight, MockTransport) {
    let (mut dev, mock) = initialized_mock(responses);
    let _ = dev.set_storage(storage);
    (dev, mock)
}

/// Append CRC_A to a tag answer.
#[doc(hidden)]
pub fn with_crc(payload: &[u8]) -> Vec<u8> {
    Frame::encode(payload)
}

/// Single-byte ACK answer.
#[doc(hidden)]
pub fn ack() -> Vec<u8> {
    vec![ACK]
}
