use tracing::trace;

use super::parser::{Lighting1Message, parse_device_id};
use super::types::{Command, SubType};
use crate::error::CodecError;
use crate::value::{
    CommandInput, OnOff, OpenClosed, SemanticValue, TargetKind, ValueSelector,
};

pub const SUPPORTED_SELECTORS: &[ValueSelector] = &[
    ValueSelector::RawData,
    ValueSelector::SignalLevel,
    ValueSelector::Command,
    ValueSelector::Contact,
];

fn switch_state(command: Command) -> Option<OnOff> {
    match command {
        Command::Off | Command::GroupOff => Some(OnOff::Off),
        Command::On | Command::GroupOn | Command::Dim | Command::Bright | Command::Chime => {
            Some(OnOff::On)
        }
        Command::Unknown(_) => None,
    }
}

impl Lighting1Message {
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
        let unconvertible = || CodecError::UnconvertibleCommand {
            command: self.command.name(),
            target,
        };

        match (target, selector) {
            (TargetKind::Number, ValueSelector::SignalLevel) => {
                Ok(SemanticValue::Number(self.signal_level as i64))
            }
            (TargetKind::Switch, ValueSelector::Command) => switch_state(self.command)
                .map(SemanticValue::OnOff)
                .ok_or_else(unconvertible),
            (TargetKind::Contact, ValueSelector::Contact) => switch_state(self.command)
                .map(|state| match state {
                    OnOff::On => SemanticValue::OpenClosed(OpenClosed::Open),
                    OnOff::Off => SemanticValue::OpenClosed(OpenClosed::Closed),
                })
                .ok_or_else(unconvertible),
            (TargetKind::Text, ValueSelector::RawData) => {
                Ok(SemanticValue::RawHex(hex::encode_upper(self.raw())))
            }
            _ => Err(CodecError::UnsupportedSelector {
                selector,
                target,
                packet_type: Self::PACKET_TYPE.name(),
            }),
        }
    }

    /// Build an outgoing switch command addressed to `device_id` (`<house>.<unit>`).
    pub fn from_command(
        selector: ValueSelector,
        device_id: &str,
        sub_type: SubType,
        input: CommandInput,
        sequence_number: u8,
    ) -> Result<Self, CodecError> {
        if selector != ValueSelector::Command {
            return Err(CodecError::UnsupportedSelector {
                selector,
                target: selector.default_target(),
                packet_type: Self::PACKET_TYPE.name(),
            });
        }
        let (house_code, unit_code) = parse_device_id(device_id)?;

        let command = match input {
            CommandInput::OnOff(OnOff::On) => Command::On,
            CommandInput::OnOff(OnOff::Off) => Command::Off,
            CommandInput::Number(value) => u8::try_from(value)
                .map(Command::from_byte)
                .map_err(|_| CodecError::UnsupportedCommandInput { selector, input })?,
            CommandInput::Percent(_) | CommandInput::IncreaseDecrease(_) => {
                return Err(CodecError::UnsupportedCommandInput { selector, input });
            }
        };

        trace!(device = device_id, %command, "built lighting1 command");
        Ok(Self::new(
            sub_type,
            sequence_number,
            house_code,
            unit_code,
            command,
            0,
        ))
    }
}
