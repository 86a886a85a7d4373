//! Transmitter response layout (5 bytes, length byte 0x04).
//!
//! ```text
//! 0 length | 1 packet type | 2 subtype | 3 sequence (echoed) | 4 response
//! ```

pub const RESPONSE_OFFSET: usize = 4;

pub const FRAME_LEN: usize = RESPONSE_OFFSET + 1;
pub const PAYLOAD_LEN: u8 = (FRAME_LEN - 1) as u8;
