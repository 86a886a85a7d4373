//! Lighting3 (dimmer/switch) frames.
//!
//! Decoding validates the exact 9-byte size, the length byte and the packet
//! type; subtype and command bytes outside the tables decode to `Unknown`.
//! Semantic conversion covers signal level, dim level (number or percent),
//! switch and contact state, and raw data. Outgoing commands accept on/off,
//! numeric command codes, percentages and relative dim requests.

pub mod convert;
pub mod layout;
pub mod parser;
pub mod types;

pub use convert::SUPPORTED_SELECTORS;
pub use parser::Lighting3Message;
pub use types::{Command, SubType};
