use thiserror::Error;

use crate::value::{CommandInput, TargetKind, ValueSelector};

/// Errors returned by frame decoding, encoding and semantic conversion.
///
/// Unknown subtype or command bytes are never errors; they decode into the
/// `Unknown(u8)` variant of the matching byte-enum.
///
/// # Examples
/// ```
/// use rfxwire_core::CodecError;
///
/// let err = CodecError::UnknownPacketType { value: 0x7f };
/// assert!(err.to_string().contains("0x7F"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("frame too short: need at least {needed} bytes, got {actual}")]
    FrameTooShort { needed: usize, actual: usize },
    #[error("invalid frame length: expected {expected} bytes, got {actual}")]
    InvalidFrameLength { expected: usize, actual: usize },
    #[error("length byte mismatch: declared {declared} payload bytes, frame has {actual} bytes")]
    LengthByteMismatch { declared: u8, actual: usize },
    #[error("packet type mismatch: expected 0x{expected:02X}, got 0x{actual:02X}")]
    PacketTypeMismatch { expected: u8, actual: u8 },
    #[error("no codec registered for packet type 0x{value:02X}")]
    UnknownPacketType { value: u8 },
    #[error("unsupported selector {selector} for {target} on {packet_type}")]
    UnsupportedSelector {
        selector: ValueSelector,
        target: TargetKind,
        packet_type: &'static str,
    },
    #[error("command {command} cannot be converted to {target}")]
    UnconvertibleCommand {
        command: &'static str,
        target: TargetKind,
    },
    #[error("input {input} is not accepted for selector {selector}")]
    UnsupportedCommandInput {
        selector: ValueSelector,
        input: CommandInput,
    },
    #[error("unknown sub type {0}")]
    UnknownSubType(String),
    #[error("invalid device id '{0}'")]
    InvalidDeviceId(String),
}
