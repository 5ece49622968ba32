#[path = "../common/mod.rs"]
mod common;

use common::helpers::{stub_device, TagState};
use libultralight::types::{Access, LockBytes, ModulationMode, Pack, Password, Storage};
use libultralight::{CodeTable, Error};

fn ready() -> (libultralight::Ultralight, common::helpers::TagStub) {
    let (mut dev, stub) = stub_device(TagState::mf0ul11());
    dev.get_version().expect("version");
    (dev, stub)
}

#[test]
fn modulation_round_trip_keeps_other_bits() -> anyhow::Result<()> {
    let (mut dev, stub) = ready();
    stub.state.borrow_mut().pages[0x10] = [0x03, 0x00, 0x00, 0xFF];
    dev.set_modulation_mode(ModulationMode::Strong)?;
    assert_eq!(stub.state.borrow().pages[0x10], [0x07, 0x00, 0x00, 0xFF]);
    assert_eq!(dev.get_modulation_mode()?, ModulationMode::Strong);
    dev.set_modulation_mode(ModulationMode::Normal)?;
    assert_eq!(stub.state.borrow().pages[0x10], [0x03, 0x00, 0x00, 0xFF]);
    Ok(())
}

#[test]
fn protect_start_page_is_auth0() -> anyhow::Result<()> {
    let (mut dev, stub) = ready();
    dev.set_protect_start_page(0x04)?;
    assert_eq!(stub.state.borrow().pages[0x10][3], 0x04);
    assert_eq!(dev.get_protect_start_page()?, 0x04);
    Ok(())
}

#[test]
fn access_bits_and_limit_share_a_byte() -> anyhow::Result<()> {
    let (mut dev, stub) = ready();
    dev.set_authenticate_limitation(5)?;
    dev.set_access(Access::ReadProtection, true)?;
    assert_eq!(stub.state.borrow().pages[0x11][0], 0x85);
    assert!(dev.get_access(Access::ReadProtection)?);
    assert!(!dev.get_access(Access::UserConfProtection)?);
    assert_eq!(dev.get_authenticate_limitation()?, 5);

    dev.set_virtual_card_type_identifier(0x05)?;
    assert_eq!(stub.state.borrow().pages[0x11], [0x85, 0x05, 0x00, 0x00]);
    assert_eq!(dev.get_virtual_card_type_identifier()?, 0x05);
    Ok(())
}

#[test]
fn limit_over_seven_is_rejected_without_io() {
    let (mut dev, stub) = ready();
    let before = stub.state.borrow().pages.clone();
    let err = dev.set_authenticate_limitation(8).unwrap_err();
    assert!(matches!(err, Error::LimitOutOfRange(8)));
    assert_eq!(err.status_code(CodeTable::Configuration), 4);
    assert_eq!(stub.state.borrow().pages, before);
}

#[test]
fn password_and_pack_pages() -> anyhow::Result<()> {
    let (mut dev, stub) = ready();
    dev.set_password(Password::from_bytes([1, 2, 3, 4]))?;
    dev.set_pack(Pack::from_bytes([0xAA, 0xBB]))?;
    let st = stub.state.borrow();
    assert_eq!(st.pages[0x12], [1, 2, 3, 4]);
    assert_eq!(st.pages[0x13], [0xAA, 0xBB, 0x00, 0x00]);
    Ok(())
}

#[test]
fn lock_bytes_span_two_pages() -> anyhow::Result<()> {
    let (mut dev, stub) = ready();
    dev.set_lock(LockBytes::from_bytes([0x11, 0x22, 0x33, 0x44, 0x55]))?;
    {
        let st = stub.state.borrow();
        assert_eq!(st.pages[0x02], [0x00, 0x00, 0x11, 0x22]);
        assert_eq!(st.pages[0x0F], [0x33, 0x44, 0x55, 0x00]);
    }
    let lock = dev.get_lock()?;
    assert_eq!(lock.as_bytes(), &[0x11, 0x22, 0x33, 0x44, 0x55]);
    Ok(())
}

#[test]
fn larger_variant_moves_config_pages() -> anyhow::Result<()> {
    let mut state = TagState::mf0ul11();
    state.pages.resize(0x29, [0; 4]);
    let (mut dev, stub) = stub_device(state);
    dev.set_storage(Storage::Mf0ul21)?;
    dev.set_protect_start_page(0x10)?;
    assert_eq!(stub.state.borrow().pages[0x25][3], 0x10);
    Ok(())
}

#[test]
fn config_write_failure_maps_to_one() {
    let (mut dev, stub) = ready();
    stub.state.borrow_mut().write_answer = 0x00;
    let err = dev.set_modulation_mode(ModulationMode::Strong).unwrap_err();
    assert!(matches!(err, Error::Ack { actual: 0x00 }));
    assert_eq!(err.status_code(CodeTable::Configuration), 1);
}
