//! Transceiver responses (ACK/NAK) correlating with outgoing sequence numbers.

pub mod layout;
pub mod parser;
pub mod types;

pub use parser::{SUPPORTED_SELECTORS, TransmitterMessage};
pub use types::{Response, SubType};
