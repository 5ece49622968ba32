#[path = "../common/mod.rs"]
mod common;

use libultralight::test_support::mock_device;
use libultralight::types::TagType;
use libultralight::{CodeTable, Error};

#[test]
fn open_failure_is_contactless_init() {
    let (mut dev, mock, _) = mock_device();
    mock.set_fail_open(true);
    let err = dev.init().unwrap_err();
    assert!(matches!(err, Error::ContactlessInit(_)));
    assert_eq!(err.status_code(CodeTable::Command), 1);
    assert!(!dev.is_initialized());
}

#[test]
fn close_failure_is_contactless_deinit() -> anyhow::Result<()> {
    let (mut dev, mock, _) = mock_device();
    dev.init()?;
    mock.set_fail_close(true);
    assert!(matches!(dev.deinit(), Err(Error::ContactlessDeinit(_))));
    assert!(dev.is_initialized());
    Ok(())
}

#[test]
fn transceive_failure_surfaces_unchanged() -> anyhow::Result<()> {
    common::helpers::init_logger();
    let (mut dev, mock, _) = mock_device();
    dev.init()?;
    mock.push_response(common::fixtures::atqa());
    dev.request()?;
    assert_eq!(dev.tag_type(), TagType::Ultralight);

    mock.set_transceive_failures(2);
    let err = dev.read_page(0).unwrap_err();
    assert!(matches!(err, Error::Transceiver(_)));
    assert_eq!(err.status_code(CodeTable::FastRead), 1);

    assert!(matches!(dev.request(), Err(Error::Transceiver(_))));
    assert_eq!(dev.tag_type(), TagType::Invalid);
    Ok(())
}

#[test]
fn empty_queue_is_a_transceiver_error() -> anyhow::Result<()> {
    let (mut dev, _mock, _) = mock_device();
    dev.init()?;
    assert!(matches!(dev.read_signature(), Err(Error::Transceiver(_))));
    Ok(())
}
