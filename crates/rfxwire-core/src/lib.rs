//! rfxwire core library: binary frame codecs for an RF-to-serial transceiver.
//!
//! Frames exchanged with the transceiver share a header
//! (`[length][packet type][subtype][sequence]`) followed by a fixed,
//! type-specific payload. This crate decodes frames into typed messages,
//! converts them into protocol-agnostic semantic values for an event bus,
//! and builds outgoing frames from semantic commands. Codecs are pure and
//! stateless; transport, sessions and device registration live elsewhere.
//!
//! Invariants:
//! - `frame[0] + 1 == frame.len()` for every frame decoded or encoded.
//! - Unknown subtype/command bytes decode to `Unknown(byte)` and re-encode
//!   to the same byte; only unknown packet types are errors.
//! - Dim levels map to percentages with ceiling rounding in both directions.
//!
//! Version française (résumé):
//! Cette crate décode et encode les trames binaires du transceiver RF
//! (en-tête commun puis charge utile propre au type), convertit les messages
//! en valeurs sémantiques (on/off, pourcentage, ouvert/fermé, hex brut) et
//! construit les trames sortantes. Aucun état, aucune E/S.
//!
//! # Examples
//! ```
//! use rfxwire_core::{SemanticValue, ValueSelector, decode_frame};
//!
//! let frame = [0x08, 0x12, 0x00, 0x01, 0x00, 0x00, 0x0F, 0x10, 0xA0];
//! let message = decode_frame(&frame)?;
//! assert_eq!(
//!     message.to_semantic_value(ValueSelector::DimmingLevel)?,
//!     SemanticValue::Percent(100)
//! );
//! assert_eq!(message.encode(), frame.to_vec());
//! # Ok::<(), rfxwire_core::CodecError>(())
//! ```

mod error;
mod message;
mod protocols;
mod registry;
mod report;
pub mod scaling;
mod value;

pub use error::CodecError;
pub use message::Message;
pub use protocols::header::{FrameHeader, PacketType, decode_header, encode_header};
pub use protocols::{header, lighting1, lighting3, transmitter};
pub use registry::{
    CodecRegistry, CommandRequest, Lighting1Codec, Lighting3Codec, PacketCodec,
    RegistryBuilder, TransmitterCodec, decode_frame, default_registry, encode_command,
};
pub use report::{DecodeReport, FrameReport, RejectedFrame, SelectorValue, decode_batch};
pub use value::{
    CommandInput, IncreaseDecrease, OnOff, OpenClosed, SemanticValue, TargetKind, ValueSelector,
};

/// Selectors paired with their default semantic value for a message.
///
/// Selectors whose conversion fails map to [`SemanticValue::Undefined`], so
/// the list always has one entry per supported selector.
///
/// # Examples
/// ```
/// use rfxwire_core::{SemanticValue, ValueSelector, decode_frame, semantic_snapshot};
///
/// let message = decode_frame(&[0x08, 0x12, 0x00, 0x01, 0x00, 0x00, 0x00, 0x14, 0x00])?;
/// let snapshot = semantic_snapshot(&message);
/// let command = snapshot
///     .iter()
///     .find(|(selector, _)| *selector == ValueSelector::Command)
///     .map(|(_, value)| value.clone());
/// assert_eq!(command, Some(SemanticValue::Undefined));
/// # Ok::<(), rfxwire_core::CodecError>(())
/// ```
pub fn semantic_snapshot(message: &Message) -> Vec<(ValueSelector, SemanticValue)> {
    message
        .supported_selectors()
        .iter()
        .map(|selector| {
            let value = message.to_semantic_value(*selector).unwrap_or_default();
            (*selector, value)
        })
        .collect()
}
