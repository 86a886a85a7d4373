use std::fmt;

use serde::Serialize;
use tracing::trace;

use super::layout;
use super::types::{Command, SubType};
use crate::error::CodecError;
use crate::protocols::common::{FrameReader, MAX_NIBBLE, to_high_nibble};
use crate::protocols::header::{self, FrameHeader, PacketType};

/// Decoded Lighting1 (house/unit addressed switch) frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lighting1Message {
    pub(super) sub_type: SubType,
    pub(super) sequence_number: u8,
    pub(super) house_code: u8,
    pub(super) unit_code: u8,
    pub(super) command: Command,
    pub(super) signal_level: u8,
    #[serde(serialize_with = "crate::message::serialize_hex")]
    raw: Vec<u8>,
}

impl Lighting1Message {
    pub const PACKET_TYPE: PacketType = PacketType::Lighting1;

    pub fn new(
        sub_type: SubType,
        sequence_number: u8,
        house_code: u8,
        unit_code: u8,
        command: Command,
        signal_level: u8,
    ) -> Self {
        let mut message = Self {
            sub_type,
            sequence_number,
            house_code,
            unit_code,
            command,
            signal_level: signal_level.min(MAX_NIBBLE),
            raw: Vec::new(),
        };
        message.raw = message.encode();
        message
    }

    pub fn header(&self) -> FrameHeader {
        FrameHeader {
            length: layout::PAYLOAD_LEN,
            packet_type: Self::PACKET_TYPE,
            sub_type: self.sub_type.to_byte(),
            sequence_number: self.sequence_number,
        }
    }

    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    pub fn sub_type(&self) -> SubType {
        self.sub_type
    }

    pub fn sequence_number(&self) -> u8 {
        self.sequence_number
    }

    /// ASCII house letter, `A`..=`P` on conforming senders.
    pub fn house_code(&self) -> u8 {
        self.house_code
    }

    pub fn unit_code(&self) -> u8 {
        self.unit_code
    }

    pub fn command(&self) -> Command {
        self.command
    }

    pub fn signal_level(&self) -> u8 {
        self.signal_level
    }

    /// Address in `<house>.<unit>` form, e.g. `A.1`.
    pub fn device_id(&self) -> String {
        format!("{}.{}", self.house_code as char, self.unit_code)
    }

    pub fn decode(frame: &[u8]) -> Result<Self, CodecError> {
        let reader = FrameReader::new(frame);
        reader.require_exact_len(layout::FRAME_LEN)?;
        reader.require_consistent_length_byte()?;

        let header = header::decode_header(frame)?;
        if header.packet_type != Self::PACKET_TYPE {
            return Err(CodecError::PacketTypeMismatch {
                expected: Self::PACKET_TYPE.to_byte(),
                actual: header.packet_type.to_byte(),
            });
        }

        let message = Self {
            sub_type: SubType::from_byte(header.sub_type),
            sequence_number: header.sequence_number,
            house_code: reader.read_u8(layout::HOUSE_CODE_OFFSET)?,
            unit_code: reader.read_u8(layout::UNIT_CODE_OFFSET)?,
            command: Command::from_byte(reader.read_u8(layout::COMMAND_OFFSET)?),
            signal_level: reader.read_high_nibble(layout::SIGNAL_OFFSET)?,
            raw: frame.to_vec(),
        };
        trace!(
            seq = message.sequence_number,
            device = %message.device_id(),
            command = %message.command,
            "decoded lighting1 frame"
        );
        Ok(message)
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut frame = vec![0u8; layout::FRAME_LEN];
        let header = header::encode_header(&self.header(), layout::PAYLOAD_LEN);
        frame[..header.len()].copy_from_slice(&header);
        frame[layout::HOUSE_CODE_OFFSET] = self.house_code;
        frame[layout::UNIT_CODE_OFFSET] = self.unit_code;
        frame[layout::COMMAND_OFFSET] = self.command.to_byte();
        frame[layout::SIGNAL_OFFSET] = to_high_nibble(self.signal_level);
        frame
    }
}

/// Parse a `<house>.<unit>` address into its two code bytes.
///
/// # Examples
/// ```
/// use rfxwire_core::lighting1::parse_device_id;
///
/// assert_eq!(parse_device_id("c.12").unwrap(), (b'C', 12));
/// assert!(parse_device_id("Q.1").is_err());
/// ```
pub fn parse_device_id(device_id: &str) -> Result<(u8, u8), CodecError> {
    let invalid = || CodecError::InvalidDeviceId(device_id.to_string());

    let (house, unit) = device_id.trim().split_once('.').ok_or_else(invalid)?;
    let house = match house.as_bytes() {
        [letter] => letter.to_ascii_uppercase(),
        _ => return Err(invalid()),
    };
    let unit: u8 = unit.parse().map_err(|_| invalid())?;
    if !layout::HOUSE_CODES.contains(&house) || !layout::UNIT_CODES.contains(&unit) {
        return Err(invalid());
    }
    Ok((house, unit))
}

impl fmt::Display for Lighting1Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Packet type = {}", Self::PACKET_TYPE)?;
        writeln!(f, " - Seq number = {}", self.sequence_number)?;
        writeln!(f, " - Sub type = {}", self.sub_type)?;
        writeln!(f, " - Device id = {}", self.device_id())?;
        writeln!(f, " - Command = {}", self.command)?;
        write!(f, " - Signal level = {}", self.signal_level)
    }
}

#[cfg(test)]
mod tests {
    use super::{Lighting1Message, parse_device_id};
    use crate::error::CodecError;
    use crate::protocols::lighting1::types::{Command, SubType};

    const ARC_ON: [u8; 8] = [0x07, 0x10, 0x01, 0x03, 0x42, 0x05, 0x01, 0x70];

    #[test]
    fn decode_arc_on() {
        let message = Lighting1Message::decode(&ARC_ON).unwrap();
        assert_eq!(message.sub_type(), SubType::Arc);
        assert_eq!(message.sequence_number(), 3);
        assert_eq!(message.device_id(), "B.5");
        assert_eq!(message.command(), Command::On);
        assert_eq!(message.signal_level(), 7);
        assert_eq!(message.encode(), ARC_ON.to_vec());
    }

    #[test]
    fn decode_lighting3_sized_frame_fails() {
        let frame = [0x08, 0x10, 0x00, 0x01, 0x00, 0x00, 0x0F, 0x10, 0xA0];
        let err = Lighting1Message::decode(&frame).unwrap_err();
        assert_eq!(
            err,
            CodecError::InvalidFrameLength {
                expected: 8,
                actual: 9
            }
        );
    }

    #[test]
    fn filler_nibble_is_dropped_on_encode() {
        let mut frame = ARC_ON;
        frame[7] = 0x7C;
        let message = Lighting1Message::decode(&frame).unwrap();
        assert_eq!(message.encode()[7], 0x70);
    }

    #[test]
    fn new_saturates_signal_level_to_nibble() {
        let message = Lighting1Message::new(SubType::Arc, 2, b'B', 5, Command::On, 31);
        assert_eq!(message.signal_level(), 15);
        assert_eq!(Lighting1Message::decode(message.raw()).unwrap(), message);
    }

    #[test]
    fn device_id_parsing() {
        assert_eq!(parse_device_id("A.1").unwrap(), (b'A', 1));
        assert_eq!(parse_device_id(" p.16 ").unwrap(), (b'P', 16));
        for bad in ["A", "A.0", "A.17", "AA.1", "1.1", "A.x", ""] {
            assert_eq!(
                parse_device_id(bad).unwrap_err(),
                CodecError::InvalidDeviceId(bad.to_string()),
                "{bad}"
            );
        }
    }
}
