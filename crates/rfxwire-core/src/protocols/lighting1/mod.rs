//! Lighting1 frames: house/unit addressed switches (X10, ARC and friends).

pub mod convert;
pub mod layout;
pub mod parser;
pub mod types;

pub use convert::SUPPORTED_SELECTORS;
pub use parser::{Lighting1Message, parse_device_id};
pub use types::{Command, SubType};
