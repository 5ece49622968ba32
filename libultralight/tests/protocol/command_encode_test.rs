#[path = "../common/mod.rs"]
mod common;

use common::fixtures::frame;
use libultralight::protocol::codec::encode_command_frame;
use libultralight::types::{Block, CascadeLevel, PageData, Password};
use libultralight::Command;

#[test]
fn short_frames_have_no_crc() {
    assert_eq!(encode_command_frame(&Command::Request), frame("26"));
    assert_eq!(encode_command_frame(&Command::WakeUp), frame("52"));
    assert_eq!(
        encode_command_frame(&Command::Anticollision {
            level: CascadeLevel::One
        }),
        frame("93 20")
    );
    assert_eq!(
        encode_command_frame(&Command::Anticollision {
            level: CascadeLevel::Two
        }),
        frame("95 20")
    );
}

#[test]
fn halt_keeps_its_crc() {
    assert_eq!(encode_command_frame(&Command::Halt), frame("50 00 57 cd"));
}

#[test]
fn select_carries_bcc_and_crc() {
    let part = common::fixtures::cl1_part();
    let f = encode_command_frame(&Command::Select {
        level: CascadeLevel::One,
        part,
    });
    assert_eq!(f.len(), 9);
    assert_eq!(&f[..2], &[0x93, 0x70]);
    assert_eq!(&f[2..6], &common::fixtures::cl1_bytes());
    assert_eq!(f[6], part.bcc());

    let golden = encode_command_frame(&Command::Select {
        level: CascadeLevel::One,
        part: libultralight::UidPart::from_bytes([1, 2, 3, 4]),
    });
    assert_eq!(golden, frame("93 70 01 02 03 04 04 8e 25"));
}

#[test]
fn memory_frames() {
    assert_eq!(
        encode_command_frame(&Command::Read { page: 0 }),
        frame("30 00 02 a8")
    );
    assert_eq!(
        encode_command_frame(&Command::FastRead {
            start: 0x10,
            stop: 0x10
        }),
        frame("3a 10 10 d0 d5")
    );

    let w = encode_command_frame(&Command::Write {
        page: 4,
        data: PageData::from_bytes([0x11, 0x22, 0x33, 0x44]),
    });
    assert_eq!(w.len(), 8);
    assert_eq!(&w[..6], &frame("a2 04 11 22 33 44")[..]);

    let cw = encode_command_frame(&Command::CompatibilityWrite { page: 5 });
    assert_eq!(&cw[..2], &[0xA0, 0x05]);
    assert_eq!(cw.len(), 4);

    let block = Block::compatibility(PageData::from_bytes([1, 2, 3, 4]));
    let data = encode_command_frame(&Command::CompatibilityWriteData { block });
    assert_eq!(data.len(), 18);
    assert_eq!(&data[..4], &[1, 2, 3, 4]);
    assert!(data[4..16].iter().all(|b| *b == 0));
}

#[test]
fn ev1_frames() {
    assert_eq!(encode_command_frame(&Command::GetVersion), frame("60 f8 32"));
    assert_eq!(
        encode_command_frame(&Command::PasswordAuth {
            password: Password::from_bytes([1, 2, 3, 4])
        }),
        frame("1b 01 02 03 04 b5 36")
    );

    let incr = encode_command_frame(&Command::IncrementCounter {
        addr: 1,
        value: 0x0102_0304,
    });
    assert_eq!(&incr[..6], &frame("a5 01 04 03 02 00")[..]);

    let sig = encode_command_frame(&Command::ReadSignature);
    assert_eq!(&sig[..2], &[0x3C, 0x00]);

    let vcsl = encode_command_frame(&Command::Vcsl {
        installation_identifier: [0xAA; 16],
        pcd_capabilities: [0xBB; 4],
    });
    assert_eq!(vcsl.len(), 23);
    assert_eq!(vcsl[0], 0x4B);
    assert_eq!(&vcsl[17..21], &[0xBB; 4]);
}

#[test]
fn expected_answer_lengths() {
    assert_eq!(Command::Request.response_len(), 2);
    assert_eq!(Command::GetVersion.response_len(), 10);
    assert_eq!(Command::Read { page: 0 }.response_len(), 18);
    assert_eq!(Command::FastRead { start: 0, stop: 14 }.response_len(), 62);
    assert_eq!(Command::ReadSignature.response_len(), 34);
}
