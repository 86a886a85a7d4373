use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::CodecError;
use crate::protocols::header::{FrameHeader, PacketType};
use crate::protocols::lighting1::Lighting1Message;
use crate::protocols::lighting3::Lighting3Message;
use crate::protocols::transmitter::TransmitterMessage;
use crate::value::{SemanticValue, TargetKind, ValueSelector};

/// A decoded frame of any registered packet type.
///
/// Messages are built fresh from a frame or from a semantic command and are
/// not mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "packet_type", rename_all = "snake_case")]
pub enum Message {
    TransmitterMessage(TransmitterMessage),
    Lighting1(Lighting1Message),
    Lighting3(Lighting3Message),
}

impl Message {
    pub fn header(&self) -> FrameHeader {
        match self {
            Message::TransmitterMessage(message) => message.header(),
            Message::Lighting1(message) => message.header(),
            Message::Lighting3(message) => message.header(),
        }
    }

    pub fn packet_type(&self) -> PacketType {
        self.header().packet_type
    }

    pub fn sequence_number(&self) -> u8 {
        self.header().sequence_number
    }

    /// Frame the message was decoded from or encoded to.
    pub fn raw(&self) -> &[u8] {
        match self {
            Message::TransmitterMessage(message) => message.raw(),
            Message::Lighting1(message) => message.raw(),
            Message::Lighting3(message) => message.raw(),
        }
    }

    pub fn encode(&self) -> Vec<u8> {
        match self {
            Message::TransmitterMessage(message) => message.encode(),
            Message::Lighting1(message) => message.encode(),
            Message::Lighting3(message) => message.encode(),
        }
    }

    /// Source/target address carried by the frame; empty when it has none.
    pub fn device_id(&self) -> String {
        match self {
            Message::Lighting1(message) => message.device_id(),
            Message::TransmitterMessage(_) | Message::Lighting3(_) => String::new(),
        }
    }

    pub fn supported_selectors(&self) -> &'static [ValueSelector] {
        match self {
            Message::TransmitterMessage(message) => message.supported_selectors(),
            Message::Lighting1(message) => message.supported_selectors(),
            Message::Lighting3(message) => message.supported_selectors(),
        }
    }

    /// Convert using the selector's default target kind.
    ///
    /// # Examples
    /// ```
    /// use rfxwire_core::{OnOff, SemanticValue, ValueSelector, decode_frame};
    ///
    /// let message = decode_frame(&[0x08, 0x12, 0x00, 0x01, 0x00, 0x00, 0x0F, 0x10, 0xA0]).unwrap();
    /// assert_eq!(
    ///     message.to_semantic_value(ValueSelector::Command).unwrap(),
    ///     SemanticValue::OnOff(OnOff::On)
    /// );
    /// ```
    pub fn to_semantic_value(&self, selector: ValueSelector) -> Result<SemanticValue, CodecError> {
        self.to_semantic_value_as(selector, selector.default_target())
    }

    pub fn to_semantic_value_as(
        &self,
        selector: ValueSelector,
        target: TargetKind,
    ) -> Result<SemanticValue, CodecError> {
        match self {
            Message::TransmitterMessage(message) => message.to_semantic_value_as(selector, target),
            Message::Lighting1(message) => message.to_semantic_value_as(selector, target),
            Message::Lighting3(message) => message.to_semantic_value_as(selector, target),
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Message::TransmitterMessage(message) => fmt::Display::fmt(message, f),
            Message::Lighting1(message) => fmt::Display::fmt(message, f),
            Message::Lighting3(message) => fmt::Display::fmt(message, f),
        }
    }
}

impl From<TransmitterMessage> for Message {
    fn from(message: TransmitterMessage) -> Self {
        Message::TransmitterMessage(message)
    }
}

impl From<Lighting1Message> for Message {
    fn from(message: Lighting1Message) -> Self {
        Message::Lighting1(message)
    }
}

impl From<Lighting3Message> for Message {
    fn from(message: Lighting3Message) -> Self {
        Message::Lighting3(message)
    }
}

pub(crate) fn serialize_hex<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&hex::encode_upper(bytes))
}
