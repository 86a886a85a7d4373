use serde::Serialize;

use super::layout;
use super::packet_type::PacketType;
use crate::error::CodecError;
use crate::protocols::common::FrameReader;

/// Fields shared by every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FrameHeader {
    /// Frame size minus one, as carried on the wire.
    pub length: u8,
    pub packet_type: PacketType,
    /// Raw subtype byte; each packet type interprets it with its own table.
    pub sub_type: u8,
    /// Opaque byte assigned by the sender and echoed in acknowledgements.
    pub sequence_number: u8,
}

/// Decode the common header from the first bytes of a frame.
///
/// Only the header bytes are checked here; payload length is validated by
/// the per-type codec.
///
/// # Examples
/// ```
/// use rfxwire_core::{PacketType, decode_header};
///
/// let header = decode_header(&[0x08, 0x12, 0x00, 0x01, 0x00]).unwrap();
/// assert_eq!(header.packet_type, PacketType::Lighting3);
/// assert_eq!(header.sequence_number, 1);
/// ```
///
/// # Errors
/// Returns `CodecError::FrameTooShort` when fewer than four bytes are given.
pub fn decode_header(frame: &[u8]) -> Result<FrameHeader, CodecError> {
    let reader = FrameReader::new(frame);
    reader.require_len(layout::HEADER_LEN)?;

    Ok(FrameHeader {
        length: reader.read_u8(layout::LENGTH_OFFSET)?,
        packet_type: PacketType::from_byte(reader.read_u8(layout::PACKET_TYPE_OFFSET)?),
        sub_type: reader.read_u8(layout::SUB_TYPE_OFFSET)?,
        sequence_number: reader.read_u8(layout::SEQUENCE_OFFSET)?,
    })
}

/// Encode the common header; the length byte is always `payload_length`.
pub fn encode_header(header: &FrameHeader, payload_length: u8) -> [u8; layout::HEADER_LEN] {
    let mut bytes = [0u8; layout::HEADER_LEN];
    bytes[layout::LENGTH_OFFSET] = payload_length;
    bytes[layout::PACKET_TYPE_OFFSET] = header.packet_type.to_byte();
    bytes[layout::SUB_TYPE_OFFSET] = header.sub_type;
    bytes[layout::SEQUENCE_OFFSET] = header.sequence_number;
    bytes
}
