use std::fmt;

use serde::Serialize;
use tracing::{debug, trace};

use super::layout;
use super::types::{Response, SubType};
use crate::error::CodecError;
use crate::protocols::common::FrameReader;
use crate::protocols::header::{self, FrameHeader, PacketType};
use crate::value::{SemanticValue, TargetKind, ValueSelector};

pub const SUPPORTED_SELECTORS: &[ValueSelector] = &[ValueSelector::RawData];

/// Transceiver answer to a transmitted frame, carrying its sequence number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransmitterMessage {
    sub_type: SubType,
    sequence_number: u8,
    response: Response,
    #[serde(serialize_with = "crate::message::serialize_hex")]
    raw: Vec<u8>,
}

impl TransmitterMessage {
    pub const PACKET_TYPE: PacketType = PacketType::TransmitterMessage;

    pub fn new(sub_type: SubType, sequence_number: u8, response: Response) -> Self {
        let mut message = Self {
            sub_type,
            sequence_number,
            response,
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

    pub fn response(&self) -> Response {
        self.response
    }

    pub fn is_ack(&self) -> bool {
        self.sub_type == SubType::Response
            && matches!(self.response, Response::Ack | Response::AckDelayed)
    }

    /// True when this is a positive response to the frame sent with `sequence_number`.
    ///
    /// # Examples
    /// ```
    /// use rfxwire_core::transmitter::TransmitterMessage;
    ///
    /// let ack = TransmitterMessage::decode(&[0x04, 0x02, 0x01, 0x2A, 0x00]).unwrap();
    /// assert!(ack.acknowledges(0x2A));
    /// assert!(!ack.acknowledges(0x2B));
    /// ```
    pub fn acknowledges(&self, sequence_number: u8) -> bool {
        self.is_ack() && self.sequence_number == sequence_number
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
            response: Response::from_byte(reader.read_u8(layout::RESPONSE_OFFSET)?),
            raw: frame.to_vec(),
        };
        if message.is_ack() {
            trace!(seq = message.sequence_number, "transmitter ack");
        } else {
            debug!(
                seq = message.sequence_number,
                sub_type = %message.sub_type,
                response = %message.response,
                "transmitter rejected frame"
            );
        }
        Ok(message)
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut frame = vec![0u8; layout::FRAME_LEN];
        let header = header::encode_header(&self.header(), layout::PAYLOAD_LEN);
        frame[..header.len()].copy_from_slice(&header);
        frame[layout::RESPONSE_OFFSET] = self.response.to_byte();
        frame
    }

    pub fn supported_selectors(&self) -> &'static [ValueSelector] {
        SUPPORTED_SELECTORS
    }

    pub fn to_semantic_value(&self, selector: ValueSelector) -> Result<SemanticValue, CodecError> {
        self.to_semantic_value_as(selector, selector.default_target())
    }

    pub fn to_semantic_value_as(
        &self,
        selector: ValueSelector,
        target: TargetKind,
    ) -> Result<SemanticValue, CodecError> {
        match (target, selector) {
            (TargetKind::Text, ValueSelector::RawData) => {
                Ok(SemanticValue::RawHex(hex::encode_upper(&self.raw)))
            }
            _ => Err(CodecError::UnsupportedSelector {
                selector,
                target,
                packet_type: Self::PACKET_TYPE.name(),
            }),
        }
    }
}

impl fmt::Display for TransmitterMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Packet type = {}", Self::PACKET_TYPE)?;
        writeln!(f, " - Seq number = {}", self.sequence_number)?;
        writeln!(f, " - Sub type = {}", self.sub_type)?;
        write!(f, " - Response = {}", self.response)
    }
}
