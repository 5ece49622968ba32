// End-to-end runs against the opcode-driven tag simulator.

#[path = "../common/mod.rs"]
mod common;

use common::helpers::{stub_device, TagState};
use libultralight::constants::END_PAGE_UNKNOWN;
use libultralight::types::{Pack, PageData, Password, TagType};
use libultralight::{CodeTable, Error};

#[test]
fn request_classifies_ultralight() -> anyhow::Result<()> {
    let (mut dev, _stub) = stub_device(TagState::mf0ul11());
    assert_eq!(dev.request()?, TagType::Ultralight);
    assert_eq!(dev.tag_type(), TagType::Ultralight);
    Ok(())
}

#[test]
fn version_sets_end_page_per_storage_size() -> anyhow::Result<()> {
    let (mut dev, stub) = stub_device(TagState::mf0ul11());
    assert_eq!(dev.end_page(), END_PAGE_UNKNOWN);

    dev.get_version()?;
    assert_eq!(dev.end_page(), 0x13);

    stub.state.borrow_mut().storage_size = 0x0E;
    dev.get_version()?;
    assert_eq!(dev.end_page(), 0x28);

    stub.state.borrow_mut().storage_size = 0x0F;
    let v = dev.get_version()?;
    assert_eq!(v.storage_size, 0x0F);
    assert_eq!(dev.end_page(), 0x28);
    Ok(())
}

#[test]
fn nak_write_leaves_old_data() -> anyhow::Result<()> {
    let mut state = TagState::mf0ul11();
    state.pages[4] = [0xDE, 0xAD, 0xBE, 0xEF];
    state.write_answer = 0x05;
    let (mut dev, _stub) = stub_device(state);

    let err = dev
        .write_page(4, PageData::from_bytes([1, 2, 3, 4]))
        .unwrap_err();
    assert!(matches!(err, Error::Ack { actual: 0x05 }));
    assert_eq!(err.status_code(CodeTable::Command), 5);

    let page = dev.read_page(4)?;
    assert_eq!(page.as_bytes(), &[0xDE, 0xAD, 0xBE, 0xEF]);
    Ok(())
}

#[test]
fn acked_write_is_read_back() -> anyhow::Result<()> {
    let (mut dev, stub) = stub_device(TagState::mf0ul11());
    dev.write_page(5, PageData::from_bytes([9, 8, 7, 6]))?;
    assert_eq!(stub.state.borrow().pages[5], [9, 8, 7, 6]);
    assert_eq!(dev.fast_read(5, 5)?, vec![9, 8, 7, 6]);
    Ok(())
}

#[test]
fn pack_mismatch_differs_from_crc_error() {
    let mut state = TagState::mf0ul11();
    state.pack = [0x12, 0x34];
    let (mut dev, stub) = stub_device(state);
    let password = Password::from_bytes([0xFF; 4]);
    let expected = Pack::from_bytes([0xAB, 0xCD]);

    let mismatch = dev.authenticate(password, expected).unwrap_err();
    match &mismatch {
        Error::PackMismatch { expected, actual } => {
            assert_eq!(expected, &[0xAB, 0xCD]);
            assert_eq!(actual, &[0x12, 0x34]);
        }
        other => panic!("expected PackMismatch, got {:?}", other),
    }

    stub.state.borrow_mut().corrupt_crc = true;
    let crc = dev.authenticate(password, expected).unwrap_err();
    assert!(matches!(crc, Error::ChecksumMismatch { .. }));

    let mismatch_code = mismatch.status_code(CodeTable::Command);
    let crc_code = crc.status_code(CodeTable::Command);
    assert_eq!(mismatch_code, 6);
    assert_eq!(crc_code, 5);
}

#[test]
fn read_wraps_past_end_page() -> anyhow::Result<()> {
    let (mut dev, _stub) = stub_device(TagState::mf0ul11());
    let block = dev.read_four_pages(0x12)?;
    let serial_page = block.page(2).expect("third page");
    assert_eq!(serial_page.as_bytes(), &[0x04, 0x6E, 0x1A, 0xF8]);
    Ok(())
}
