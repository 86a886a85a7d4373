//! JSON-ready summaries of decoded frames.

use serde::Serialize;

use crate::error::CodecError;
use crate::message::Message;
use crate::registry::CodecRegistry;
use crate::semantic_snapshot;
use crate::value::{SemanticValue, ValueSelector};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectorValue {
    pub selector: ValueSelector,
    pub value: SemanticValue,
}

/// One decoded frame with the default semantic value of every supported selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrameReport {
    pub frame: String,
    pub device_id: String,
    pub message: Message,
    pub values: Vec<SelectorValue>,
}

impl FrameReport {
    pub fn new(message: Message) -> Self {
        let values = semantic_snapshot(&message)
            .into_iter()
            .map(|(selector, value)| SelectorValue { selector, value })
            .collect();
        Self {
            frame: hex::encode_upper(message.raw()),
            device_id: message.device_id(),
            message,
            values,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedFrame {
    pub frame: String,
    pub error: String,
    #[serde(skip)]
    pub cause: Option<CodecError>,
}

/// Outcome of decoding a batch of frames, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DecodeReport {
    pub decoded: Vec<FrameReport>,
    pub rejected: Vec<RejectedFrame>,
}

impl DecodeReport {
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Decode every frame with `registry`, collecting failures instead of stopping.
///
/// # Examples
/// ```
/// use rfxwire_core::{decode_batch, default_registry};
///
/// let frames = vec![
///     vec![0x08, 0x12, 0x00, 0x01, 0x00, 0x00, 0x0F, 0x10, 0xA0],
///     vec![0x04, 0x99, 0x00, 0x00, 0x00],
/// ];
/// let report = decode_batch(default_registry(), &frames);
/// assert_eq!(report.decoded.len(), 1);
/// assert_eq!(report.rejected[0].frame, "0499000000");
/// ```
pub fn decode_batch<F: AsRef<[u8]>>(registry: &CodecRegistry, frames: &[F]) -> DecodeReport {
    let mut report = DecodeReport::default();
    for frame in frames {
        let frame = frame.as_ref();
        match registry.decode_frame(frame) {
            Ok(message) => report.decoded.push(FrameReport::new(message)),
            Err(err) => report.rejected.push(RejectedFrame {
                frame: hex::encode_upper(frame),
                error: err.to_string(),
                cause: Some(err),
            }),
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::decode_batch;
    use crate::error::CodecError;
    use crate::registry::default_registry;
    use crate::value::{OnOff, SemanticValue, ValueSelector};

    #[test]
    fn keeps_input_order_and_collects_failures() {
        let frames: Vec<&[u8]> = vec![
            &[0x07, 0x10, 0x01, 0x03, 0x41, 0x05, 0x01, 0x70],
            &[0x08, 0x12],
            &[0x04, 0x02, 0x01, 0x05, 0x00],
        ];
        let report = decode_batch(default_registry(), &frames);

        assert!(!report.is_clean());
        assert_eq!(report.decoded.len(), 2);
        assert_eq!(report.decoded[0].device_id, "A.5");
        assert_eq!(report.decoded[1].frame, "0402010500");
        assert_eq!(
            report.rejected[0].cause,
            Some(CodecError::FrameTooShort {
                needed: 4,
                actual: 2
            })
        );
    }

    #[test]
    fn values_follow_supported_selectors() {
        let frames = [[0x07, 0x10, 0x01, 0x03, 0x41, 0x05, 0x01, 0x70]];
        let report = decode_batch(default_registry(), &frames);
        let values = &report.decoded[0].values;

        assert_eq!(values.len(), 4);
        assert_eq!(values[2].selector, ValueSelector::Command);
        assert_eq!(values[2].value, SemanticValue::OnOff(OnOff::On));
    }

    #[test]
    fn rejected_frames_serialize_without_cause() {
        let frames = [[0x04, 0x99, 0x00, 0x00, 0x00]];
        let report = decode_batch(default_registry(), &frames);
        let value = serde_json::to_value(&report).expect("report json");

        assert_eq!(
            value["rejected"][0],
            serde_json::json!({
                "frame": "0499000000",
                "error": "no codec registered for packet type 0x99"
            })
        );
    }
}
