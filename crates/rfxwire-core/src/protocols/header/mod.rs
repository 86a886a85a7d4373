//! Header shared by every frame: `[length][packet type][subtype][sequence]`.
//!
//! The length byte always equals the frame size minus one. Subtype bytes are
//! kept raw here and interpreted by the per-type codec.

pub mod layout;
pub mod packet_type;
pub mod parser;

pub use packet_type::PacketType;
pub use parser::{FrameHeader, decode_header, encode_header};
