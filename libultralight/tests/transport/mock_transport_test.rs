#[path = "../common/mod.rs"]
mod common;

use embedded_hal::delay::DelayNs;
use libultralight::transport::{MockDelay, MockTransport, Transport};

#[test]
fn queued_responses_are_fifo() -> anyhow::Result<()> {
    let mut mock = MockTransport::new();
    mock.push_response(vec![0x44, 0x00]);
    mock.push_response(vec![0x0A]);
    assert_eq!(mock.transceive(&[0x26], 2)?, vec![0x44, 0x00]);
    assert_eq!(mock.transceive(&[0xA2, 0x04], 1)?, vec![0x0A]);
    assert_eq!(mock.remaining_responses(), 0);
    assert_eq!(mock.max_lens(), vec![2, 1]);
    Ok(())
}

#[test]
fn clones_share_state() {
    let mock = MockTransport::new();
    let mut handle_side: Box<dyn Transport> = Box::new(mock.clone());
    mock.push_response(vec![0x01]);
    let _ = handle_side.transceive(&[0x60], 10);
    assert_eq!(mock.sent(), vec![vec![0x60]]);
    assert_eq!(mock.last_sent(), Some(vec![0x60]));
}

#[test]
fn delay_records_nanoseconds() {
    let mut delay = MockDelay::new();
    let observer = delay.clone();
    delay.delay_ms(3);
    delay.delay_ms(1);
    assert_eq!(observer.calls_ns(), vec![3_000_000, 1_000_000]);
    assert_eq!(observer.total_ms(), 4);
}

#[test]
fn wake_up_uses_configured_delay() -> anyhow::Result<()> {
    let mock = MockTransport::new();
    let delay = MockDelay::new();
    let mut dev = libultralight::Ultralight::builder()
        .with_transport(Box::new(mock.clone()))
        .with_delay(Box::new(delay.clone()))
        .wake_up_delay_ms(5)
        .build()?;
    dev.init()?;
    mock.push_response(common::fixtures::atqa());
    dev.wake_up()?;
    assert_eq!(delay.total_ms(), 5);
    Ok(())
}
