//! Lighting3 frame layout (9 bytes, length byte 0x08).
//!
//! ```text
//! 0 length | 1 packet type | 2 subtype | 3 sequence | 4 system | 5 channel
//! 6 dim level | 7 command | 8 signal (bits 7-4), filler (bits 3-0)
//! ```

pub const SYSTEM_OFFSET: usize = 4;
pub const CHANNEL_OFFSET: usize = 5;
pub const DIM_LEVEL_OFFSET: usize = 6;
pub const COMMAND_OFFSET: usize = 7;
pub const SIGNAL_OFFSET: usize = 8;

pub const FRAME_LEN: usize = SIGNAL_OFFSET + 1;
pub const PAYLOAD_LEN: u8 = (FRAME_LEN - 1) as u8;

/// Relative dim requests carry no prior level, so they always dim to this step.
pub const RELATIVE_DIM_STEP: u8 = 5;
