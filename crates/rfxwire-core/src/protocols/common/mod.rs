mod byte_enum;
pub mod reader;

pub(crate) use byte_enum::byte_enum;
pub use reader::FrameReader;
pub(crate) use reader::{MAX_NIBBLE, to_high_nibble};
