//! Lighting1 frame layout (8 bytes, length byte 0x07).
//!
//! ```text
//! 0 length | 1 packet type | 2 subtype | 3 sequence | 4 house code
//! 5 unit code | 6 command | 7 signal (bits 7-4), filler (bits 3-0)
//! ```

pub const HOUSE_CODE_OFFSET: usize = 4;
pub const UNIT_CODE_OFFSET: usize = 5;
pub const COMMAND_OFFSET: usize = 6;
pub const SIGNAL_OFFSET: usize = 7;

pub const FRAME_LEN: usize = SIGNAL_OFFSET + 1;
pub const PAYLOAD_LEN: u8 = (FRAME_LEN - 1) as u8;

pub const HOUSE_CODES: std::ops::RangeInclusive<u8> = b'A'..=b'P';
pub const UNIT_CODES: std::ops::RangeInclusive<u8> = 1..=16;
