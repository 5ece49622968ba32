#[path = "../common/mod.rs"]
mod common;

use common::fixtures;
use common::helpers::initialized_device;
use libultralight::types::TagType;
use libultralight::{Error, Selection, Storage};

#[test]
fn activate_collects_card_info() -> anyhow::Result<()> {
    let (mut dev, mock) = initialized_device(vec![
        fixtures::atqa(),
        fixtures::anticollision_answer(fixtures::cl1_bytes()),
        fixtures::sak_cl1(),
        fixtures::anticollision_answer(fixtures::cl2_bytes()),
        fixtures::sak_cl2(),
        fixtures::page0_answer(),
        fixtures::version_answer(0x0B),
    ]);

    let card = dev.activate()?;
    assert_eq!(dev.tag_type(), TagType::Ultralight);
    assert_eq!(card.uid().cascade1(), fixtures::cl1_part());
    assert_eq!(card.uid().cascade2(), fixtures::cl2_part());
    assert_eq!(card.serial().to_hex(), "046e1a523c8180");
    assert_eq!(card.storage(), Some(Storage::Mf0ul11));
    assert_eq!(card.version().storage_size, 0x0B);
    assert!(dev.selection().is_complete());
    assert_eq!(mock.sent_count(), 7);
    Ok(())
}

#[test]
fn activate_stops_at_first_failure() {
    let (mut dev, mock) = initialized_device(vec![
        fixtures::atqa(),
        vec![0x88, 0x04, 0x6E, 0x1A, 0x00],
    ]);
    assert!(matches!(dev.activate(), Err(Error::BccMismatch { .. })));
    assert_eq!(mock.sent_count(), 2);
    assert_eq!(dev.selection(), Selection::Idle);
}

#[test]
fn halt_resets_selection() -> anyhow::Result<()> {
    let (mut dev, _mock) = initialized_device(vec![fixtures::sak_cl1()]);
    dev.select_cl1(fixtures::cl1_part())?;
    assert_eq!(dev.selection(), Selection::Cascade1(fixtures::cl1_part()));
    dev.halt()?;
    assert_eq!(dev.selection(), Selection::Idle);
    assert!(matches!(
        dev.anticollision_cl2(),
        Err(Error::CascadeOutOfOrder)
    ));
    Ok(())
}

#[test]
fn wake_up_after_halt() -> anyhow::Result<()> {
    // HLTA is answered with silence
    let (mut dev, mock) = initialized_device(vec![vec![], fixtures::atqa()]);
    dev.halt()?;
    assert_eq!(dev.wake_up()?, TagType::Ultralight);
    assert_eq!(mock.sent()[1], vec![0x52]);
    Ok(())
}

#[test]
fn cascade2_select_before_cascade1_sends_nothing() {
    let (mut dev, mock) = initialized_device(vec![fixtures::sak_cl2()]);
    assert!(matches!(
        dev.select_cl2(fixtures::cl2_part()),
        Err(Error::CascadeOutOfOrder)
    ));
    assert_eq!(dev.selection(), Selection::Idle);
    assert_eq!(mock.sent_count(), 0);
    assert_eq!(mock.remaining_responses(), 1);
}

#[test]
fn public_operations_keep_session_in_step() -> anyhow::Result<()> {
    let (mut dev, _mock) =
        initialized_device(vec![fixtures::atqa(), fixtures::version_answer(0x0B)]);
    dev.request()?;
    assert_eq!(dev.tag_type(), TagType::Ultralight);
    dev.get_version()?;
    assert_eq!(dev.end_page(), 0x13);
    Ok(())
}
