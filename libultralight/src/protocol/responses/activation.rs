// libultralight/src/protocol/responses/activation.rs

use crate::constants::ATQA_ULTRALIGHT;
use crate::protocol::parser;
use crate::types::{CascadeLevel, UidPart};
use crate::{Error, Result};

/// Decode the ATQA answering REQA/WUPA. Only `44 00` is accepted.
pub fn decode_atqa(data: &[u8]) -> Result<[u8; 2]> {
    parser::expect_len(data, 2)?;
    let atqa = [data[0], data[1]];
    if atqa != ATQA_ULTRALIGHT {
        return Err(Error::InvalidType { atqa });
    }
    Ok(atqa)
}

/// Decode `uid0..uid3 BCC` and check the BCC.
pub fn decode_anticollision(data: &[u8]) -> Result<UidPart> {
    parser::expect_len(data, 5)?;
    let part = UidPart::try_from(parser::slice_at(data, 0, 4)?)?;
    let expected = part.bcc();
    let actual = data[4];
    if actual != expected {
        return Err(Error::BccMismatch { expected, actual });
    }
    Ok(part)
}

/// Decode the SAK and check it against the level's expected value.
pub fn decode_sak(level: CascadeLevel, data: &[u8]) -> Result<u8> {
    parser::expect_len(data, 1)?;
    let expected = level.expected_sak();
    let actual = data[0];
    if actual != expected {
        return Err(Error::Sak { expected, actual });
    }
    Ok(actual)
}
