//! Dispatch from packet-type byte to codec.
//!
//! The registry is built once and read-only afterwards, so lookups from
//! several threads need no locking. [`default_registry`] holds every codec
//! this crate ships.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use tracing::{debug, warn};

use crate::error::CodecError;
use crate::message::Message;
use crate::protocols::header::{self, PacketType};
use crate::protocols::lighting1::{self, Lighting1Message};
use crate::protocols::lighting3::{self, Lighting3Message};
use crate::protocols::transmitter::TransmitterMessage;
use crate::value::{CommandInput, ValueSelector};

/// Outgoing command addressed to a packet type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRequest {
    pub packet_type: PacketType,
    /// Subtype protocol name, e.g. `KOPPLA`.
    pub sub_type: String,
    /// Target address for types that carry one; ignored otherwise.
    pub device_id: String,
    pub selector: ValueSelector,
    pub input: CommandInput,
    pub sequence_number: u8,
}

/// Codec for one packet type.
pub trait PacketCodec: Send + Sync {
    fn packet_type(&self) -> PacketType;

    fn decode(&self, frame: &[u8]) -> Result<Message, CodecError>;

    fn from_command(&self, request: &CommandRequest) -> Result<Message, CodecError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TransmitterCodec;

impl PacketCodec for TransmitterCodec {
    fn packet_type(&self) -> PacketType {
        TransmitterMessage::PACKET_TYPE
    }

    fn decode(&self, frame: &[u8]) -> Result<Message, CodecError> {
        TransmitterMessage::decode(frame).map(Message::from)
    }

    fn from_command(&self, request: &CommandRequest) -> Result<Message, CodecError> {
        Err(CodecError::UnsupportedSelector {
            selector: request.selector,
            target: request.selector.default_target(),
            packet_type: TransmitterMessage::PACKET_TYPE.name(),
        })
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Lighting1Codec;

impl PacketCodec for Lighting1Codec {
    fn packet_type(&self) -> PacketType {
        Lighting1Message::PACKET_TYPE
    }

    fn decode(&self, frame: &[u8]) -> Result<Message, CodecError> {
        Lighting1Message::decode(frame).map(Message::from)
    }

    fn from_command(&self, request: &CommandRequest) -> Result<Message, CodecError> {
        let sub_type: lighting1::SubType = request.sub_type.parse()?;
        Lighting1Message::from_command(
            request.selector,
            &request.device_id,
            sub_type,
            request.input,
            request.sequence_number,
        )
        .map(Message::from)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Lighting3Codec;

impl PacketCodec for Lighting3Codec {
    fn packet_type(&self) -> PacketType {
        Lighting3Message::PACKET_TYPE
    }

    fn decode(&self, frame: &[u8]) -> Result<Message, CodecError> {
        Lighting3Message::decode(frame).map(Message::from)
    }

    fn from_command(&self, request: &CommandRequest) -> Result<Message, CodecError> {
        let sub_type: lighting3::SubType = request.sub_type.parse()?;
        Lighting3Message::from_command(
            request.selector,
            sub_type,
            request.input,
            request.sequence_number,
        )
        .map(Message::from)
    }
}

/// Immutable packet-type to codec table.
pub struct CodecRegistry {
    codecs: BTreeMap<u8, Box<dyn PacketCodec>>,
}

impl CodecRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    pub fn codec(&self, packet_type: PacketType) -> Option<&dyn PacketCodec> {
        self.codecs
            .get(&packet_type.to_byte())
            .map(|codec| codec.as_ref())
    }

    /// Registered packet types in ascending byte order.
    pub fn packet_types(&self) -> Vec<PacketType> {
        self.codecs.keys().copied().map(PacketType::from_byte).collect()
    }

    /// Decode a frame with the codec registered for its packet-type byte.
    ///
    /// # Errors
    /// `FrameTooShort` when the header is incomplete, `UnknownPacketType`
    /// when nothing is registered for byte 1, or the codec's own error.
    pub fn decode_frame(&self, frame: &[u8]) -> Result<Message, CodecError> {
        let header = header::decode_header(frame)?;
        let Some(codec) = self.codec(header.packet_type) else {
            warn!(
                packet_type = header.packet_type.to_byte(),
                len = frame.len(),
                "no codec for packet type"
            );
            return Err(CodecError::UnknownPacketType {
                value: header.packet_type.to_byte(),
            });
        };
        debug!(
            packet_type = %header.packet_type,
            seq = header.sequence_number,
            len = frame.len(),
            "dispatching frame"
        );
        codec.decode(frame)
    }

    /// Build an outgoing message with the codec registered for the request's packet type.
    pub fn encode_command(&self, request: &CommandRequest) -> Result<Message, CodecError> {
        let codec = self
            .codec(request.packet_type)
            .ok_or(CodecError::UnknownPacketType {
                value: request.packet_type.to_byte(),
            })?;
        debug!(
            packet_type = %request.packet_type,
            selector = %request.selector,
            seq = request.sequence_number,
            "building command"
        );
        codec.from_command(request)
    }
}

impl fmt::Debug for CodecRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodecRegistry")
            .field("packet_types", &self.packet_types())
            .finish()
    }
}

#[derive(Default)]
pub struct RegistryBuilder {
    codecs: BTreeMap<u8, Box<dyn PacketCodec>>,
}

impl RegistryBuilder {
    /// Add a codec; a later codec for the same packet type replaces the earlier one.
    pub fn register<C: PacketCodec + 'static>(mut self, codec: C) -> Self {
        let packet_type = codec.packet_type();
        if self
            .codecs
            .insert(packet_type.to_byte(), Box::new(codec))
            .is_some()
        {
            warn!(%packet_type, "codec registered twice, keeping the latest");
        }
        self
    }

    pub fn build(self) -> CodecRegistry {
        CodecRegistry {
            codecs: self.codecs,
        }
    }
}

static DEFAULT_REGISTRY: LazyLock<CodecRegistry> = LazyLock::new(|| {
    CodecRegistry::builder()
        .register(TransmitterCodec)
        .register(Lighting1Codec)
        .register(Lighting3Codec)
        .build()
});

/// Process-wide registry with every codec in this crate.
pub fn default_registry() -> &'static CodecRegistry {
    &DEFAULT_REGISTRY
}

/// Decode a frame with [`default_registry`].
///
/// # Examples
/// ```
/// use rfxwire_core::{CodecError, decode_frame};
///
/// let err = decode_frame(&[0x03, 0x7F, 0x00, 0x00]).unwrap_err();
/// assert_eq!(err, CodecError::UnknownPacketType { value: 0x7F });
/// ```
pub fn decode_frame(frame: &[u8]) -> Result<Message, CodecError> {
    default_registry().decode_frame(frame)
}

/// Build an outgoing message with [`default_registry`].
pub fn encode_command(request: &CommandRequest) -> Result<Message, CodecError> {
    default_registry().encode_command(request)
}

#[cfg(test)]
mod tests {
    use super::{
        CodecRegistry, CommandRequest, Lighting3Codec, decode_frame,
        default_registry, encode_command,
    };
    use crate::error::CodecError;
    use crate::message::Message;
    use crate::protocols::header::PacketType;
    use crate::protocols::lighting3::Command;
    use crate::value::{CommandInput, OnOff, ValueSelector};

    fn request(packet_type: PacketType, sub_type: &str, input: CommandInput) -> CommandRequest {
        CommandRequest {
            packet_type,
            sub_type: sub_type.to_string(),
            device_id: "A.1".to_string(),
            selector: ValueSelector::Command,
            input,
            sequence_number: 5,
        }
    }

    #[test]
    fn default_registry_knows_every_type() {
        assert_eq!(
            default_registry().packet_types(),
            vec![
                PacketType::TransmitterMessage,
                PacketType::Lighting1,
                PacketType::Lighting3
            ]
        );
    }

    #[test]
    fn dispatch_by_packet_type_byte() {
        let message = decode_frame(&[0x08, 0x12, 0x00, 0x01, 0x00, 0x00, 0x0F, 0x10, 0xA0]).unwrap();
        match message {
            Message::Lighting3(inner) => assert_eq!(inner.command(), Command::On),
            other => panic!("unexpected message {other:?}"),
        }

        let message = decode_frame(&[0x04, 0x02, 0x01, 0x01, 0x00]).unwrap();
        assert!(matches!(message, Message::TransmitterMessage(_)));
    }

    #[test]
    fn unknown_packet_type() {
        let err = decode_frame(&[0x08, 0x30, 0x00, 0x01, 0x00, 0x00, 0x0F, 0x10, 0xA0]).unwrap_err();
        assert_eq!(err, CodecError::UnknownPacketType { value: 0x30 });
    }

    #[test]
    fn short_frame_fails_before_dispatch() {
        let err = decode_frame(&[0x08, 0x12]).unwrap_err();
        assert!(matches!(err, CodecError::FrameTooShort { needed: 4, actual: 2 }));
    }

    #[test]
    fn codec_errors_pass_through() {
        let err = decode_frame(&[0x04, 0x12, 0x00, 0x01, 0x00]).unwrap_err();
        assert!(matches!(err, CodecError::InvalidFrameLength { expected: 9, actual: 5 }));
    }

    #[test]
    fn empty_registry_rejects_everything() {
        let registry = CodecRegistry::builder().build();
        let err = registry
            .decode_frame(&[0x04, 0x02, 0x01, 0x01, 0x00])
            .unwrap_err();
        assert_eq!(err, CodecError::UnknownPacketType { value: 0x02 });
    }

    #[test]
    fn duplicate_registration_keeps_single_entry() {
        let registry = CodecRegistry::builder()
            .register(Lighting3Codec)
            .register(Lighting3Codec)
            .build();
        assert_eq!(registry.packet_types(), vec![PacketType::Lighting3]);
        assert_eq!(
            registry.codec(PacketType::Lighting3).map(|codec| codec.packet_type()),
            Some(PacketType::Lighting3)
        );
    }

    #[test]
    fn encode_lighting3_command() {
        let message = encode_command(&request(
            PacketType::Lighting3,
            "koppla",
            CommandInput::OnOff(OnOff::On),
        ))
        .unwrap();
        assert_eq!(
            message.encode(),
            vec![0x08, 0x12, 0x00, 0x05, 0x00, 0x00, 0x00, 0x10, 0x00]
        );
    }

    #[test]
    fn encode_lighting1_command_uses_device_id() {
        let message = encode_command(&request(
            PacketType::Lighting1,
            "ARC",
            CommandInput::OnOff(OnOff::Off),
        ))
        .unwrap();
        assert_eq!(message.device_id(), "A.1");
        assert_eq!(
            message.encode(),
            vec![0x07, 0x10, 0x01, 0x05, 0x41, 0x01, 0x00, 0x00]
        );
    }

    #[test]
    fn encode_rejects_unknown_sub_type_name() {
        let err = encode_command(&request(
            PacketType::Lighting3,
            "NOPE",
            CommandInput::OnOff(OnOff::On),
        ))
        .unwrap_err();
        assert_eq!(err, CodecError::UnknownSubType("NOPE".to_string()));
    }

    #[test]
    fn transmitter_is_receive_only() {
        let err = encode_command(&request(
            PacketType::TransmitterMessage,
            "RESPONSE",
            CommandInput::OnOff(OnOff::On),
        ))
        .unwrap_err();
        assert!(matches!(err, CodecError::UnsupportedSelector { .. }));
    }

    #[test]
    fn registry_is_shareable_across_threads() {
        let handles: Vec<_> = (0u8..4)
            .map(|seq| {
                std::thread::spawn(move || {
                    let frame = [0x04, 0x02, 0x01, seq, 0x00];
                    decode_frame(&frame).map(|message| message.sequence_number())
                })
            })
            .collect();
        for (seq, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().expect("thread"), Ok(seq as u8));
        }
    }
}
