// libultralight/src/protocol/checksum.rs

/// CRC_A initial register value.
pub const CRC_A_SEED: u16 = 0x6363;

/// Compute the ISO14443A CRC_A register over `data`.
pub fn crc_a(data: &[u8]) -> u16 {
    data.iter().fold(CRC_A_SEED, |w, &b| {
        let mut bt = b ^ (w & 0x00ff) as u8;
        bt ^= bt << 4;
        let bt = bt as u16;
        (w >> 8) ^ (bt << 8) ^ (bt << 3) ^ (bt >> 4)
    })
}

/// CRC_A as it goes on the wire: low byte first.
pub fn crc16(data: &[u8]) -> [u8; 2] {
    crc_a(data).to_le_bytes()
}

/// Read the trailing two CRC bytes of a frame as a register value.
pub fn trailing_crc(frame: &[u8]) -> Option<u16> {
    match frame {
        [.., lo, hi] => Some(u16::from_le_bytes([*lo, *hi])),
        _ => None,
    }
}
