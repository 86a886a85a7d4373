use std::fmt;

use serde::Serialize;
use tracing::trace;

use super::layout;
use super::types::{Command, SubType};
use crate::error::CodecError;
use crate::protocols::common::{FrameReader, MAX_NIBBLE, to_high_nibble};
use crate::protocols::header::{self, FrameHeader, PacketType};

/// Decoded Lighting3 (dimmer/switch) frame.
///
/// Fields are read through accessors so the stored frame and the typed
/// fields cannot drift apart:
///
/// ```compile_fail
/// use rfxwire_core::lighting3::{Command, Lighting3Message};
///
/// let frame = [0x08, 0x12, 0x00, 0x01, 0x00, 0x00, 0x0F, 0x10, 0xA0];
/// let mut message = Lighting3Message::decode(&frame).unwrap();
/// message.command = Command::Off;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lighting3Message {
    pub(super) sub_type: SubType,
    pub(super) sequence_number: u8,
    pub(super) dimming_level: u8,
    pub(super) command: Command,
    pub(super) signal_level: u8,
    #[serde(serialize_with = "crate::message::serialize_hex")]
    raw: Vec<u8>,
}

impl Lighting3Message {
    pub const PACKET_TYPE: PacketType = PacketType::Lighting3;

    /// Build a message from typed fields; the raw frame is the encoded form.
    ///
    /// `signal_level` saturates at 15, the largest value the frame can carry.
    pub fn new(
        sub_type: SubType,
        sequence_number: u8,
        command: Command,
        dimming_level: u8,
        signal_level: u8,
    ) -> Self {
        let mut message = Self {
            sub_type,
            sequence_number,
            dimming_level,
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

    /// Frame this message was decoded from (or encoded to, when built locally).
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    pub fn sub_type(&self) -> SubType {
        self.sub_type
    }

    pub fn sequence_number(&self) -> u8 {
        self.sequence_number
    }

    /// Protocol dim level, nominally `0..=15`; kept as received.
    pub fn dimming_level(&self) -> u8 {
        self.dimming_level
    }

    pub fn command(&self) -> Command {
        self.command
    }

    /// Received signal strength, `0..=15`.
    pub fn signal_level(&self) -> u8 {
        self.signal_level
    }

    /// Decode a complete Lighting3 frame.
    ///
    /// # Errors
    /// - `InvalidFrameLength` unless the frame is exactly 9 bytes.
    /// - `LengthByteMismatch` when byte 0 is not 8.
    /// - `PacketTypeMismatch` when byte 1 is not the Lighting3 type.
    ///
    /// # Examples
    /// ```
    /// use rfxwire_core::lighting3::{Command, Lighting3Message, SubType};
    ///
    /// let frame = [0x08, 0x12, 0x00, 0x01, 0x00, 0x00, 0x0F, 0x10, 0xA0];
    /// let message = Lighting3Message::decode(&frame).unwrap();
    /// assert_eq!(message.sub_type(), SubType::Koppla);
    /// assert_eq!(message.command(), Command::On);
    /// assert_eq!(message.signal_level(), 10);
    /// ```
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
            dimming_level: reader.read_u8(layout::DIM_LEVEL_OFFSET)?,
            command: Command::from_byte(reader.read_u8(layout::COMMAND_OFFSET)?),
            signal_level: reader.read_high_nibble(layout::SIGNAL_OFFSET)?,
            raw: frame.to_vec(),
        };
        trace!(
            seq = message.sequence_number,
            command = %message.command,
            dim = message.dimming_level,
            "decoded lighting3 frame"
        );
        Ok(message)
    }

    /// Encode into a 9-byte frame. System and channel bytes are always zero,
    /// as is the filler nibble.
    pub fn encode(&self) -> Vec<u8> {
        let mut frame = vec![0u8; layout::FRAME_LEN];
        let header = header::encode_header(&self.header(), layout::PAYLOAD_LEN);
        frame[..header.len()].copy_from_slice(&header);
        frame[layout::SYSTEM_OFFSET] = 0;
        frame[layout::CHANNEL_OFFSET] = 0;
        frame[layout::DIM_LEVEL_OFFSET] = self.dimming_level;
        frame[layout::COMMAND_OFFSET] = self.command.to_byte();
        frame[layout::SIGNAL_OFFSET] = to_high_nibble(self.signal_level);
        frame
    }
}

impl fmt::Display for Lighting3Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Packet type = {}", Self::PACKET_TYPE)?;
        writeln!(f, " - Seq number = {}", self.sequence_number)?;
        writeln!(f, " - Sub type = {}", self.sub_type)?;
        writeln!(f, " - Command = {}", self.command)?;
        writeln!(f, " - Dim level = {}", self.dimming_level)?;
        write!(f, " - Signal level = {}", self.signal_level)
    }
}
