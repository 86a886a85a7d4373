//! Semantic values exchanged with the event layer.
//!
//! A [`ValueSelector`] names the facet of a message a caller is interested
//! in, a [`TargetKind`] names the shape it wants the value in, and
//! [`SemanticValue`] is the protocol-agnostic result. Outgoing commands are
//! described by a [`CommandInput`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// Facet of a decoded message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValueSelector {
    RawData,
    SignalLevel,
    Command,
    DimmingLevel,
    Contact,
}

impl ValueSelector {
    /// All selectors, in declaration order.
    pub const ALL: [ValueSelector; 5] = [
        ValueSelector::RawData,
        ValueSelector::SignalLevel,
        ValueSelector::Command,
        ValueSelector::DimmingLevel,
        ValueSelector::Contact,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ValueSelector::RawData => "RAW_DATA",
            ValueSelector::SignalLevel => "SIGNAL_LEVEL",
            ValueSelector::Command => "COMMAND",
            ValueSelector::DimmingLevel => "DIMMING_LEVEL",
            ValueSelector::Contact => "CONTACT",
        }
    }

    /// Target kind used when the caller does not ask for a specific one.
    ///
    /// # Examples
    /// ```
    /// use rfxwire_core::{TargetKind, ValueSelector};
    ///
    /// assert_eq!(ValueSelector::DimmingLevel.default_target(), TargetKind::Percent);
    /// ```
    pub fn default_target(self) -> TargetKind {
        match self {
            ValueSelector::RawData => TargetKind::Text,
            ValueSelector::SignalLevel => TargetKind::Number,
            ValueSelector::Command => TargetKind::Switch,
            ValueSelector::DimmingLevel => TargetKind::Percent,
            ValueSelector::Contact => TargetKind::Contact,
        }
    }
}

impl fmt::Display for ValueSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Shape of the semantic value a caller wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetKind {
    Number,
    Percent,
    Switch,
    Contact,
    Text,
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TargetKind::Number => "number",
            TargetKind::Percent => "percent",
            TargetKind::Switch => "switch",
            TargetKind::Contact => "contact",
            TargetKind::Text => "text",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnOff {
    On,
    Off,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpenClosed {
    Open,
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncreaseDecrease {
    Increase,
    Decrease,
}

/// Protocol-agnostic value published to the event layer.
///
/// # Examples
/// ```
/// use rfxwire_core::{OnOff, SemanticValue};
///
/// let value = SemanticValue::OnOff(OnOff::On);
/// assert_eq!(serde_json::to_string(&value).unwrap(), r#"{"on_off":"on"}"#);
/// assert_eq!(SemanticValue::default(), SemanticValue::Undefined);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SemanticValue {
    Number(i64),
    Percent(u8),
    OnOff(OnOff),
    OpenClosed(OpenClosed),
    RawHex(String),
    #[default]
    Undefined,
}

impl fmt::Display for SemanticValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SemanticValue::Number(value) => write!(f, "{value}"),
            SemanticValue::Percent(value) => write!(f, "{value}%"),
            SemanticValue::OnOff(OnOff::On) => f.write_str("ON"),
            SemanticValue::OnOff(OnOff::Off) => f.write_str("OFF"),
            SemanticValue::OpenClosed(OpenClosed::Open) => f.write_str("OPEN"),
            SemanticValue::OpenClosed(OpenClosed::Closed) => f.write_str("CLOSED"),
            SemanticValue::RawHex(hex) => f.write_str(hex),
            SemanticValue::Undefined => f.write_str("UNDEF"),
        }
    }
}

/// Input accepted when building an outgoing command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandInput {
    OnOff(OnOff),
    Number(i64),
    /// Percentages above 100 are clamped to 100.
    Percent(u8),
    IncreaseDecrease(IncreaseDecrease),
}

impl fmt::Display for CommandInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandInput::OnOff(OnOff::On) => f.write_str("ON"),
            CommandInput::OnOff(OnOff::Off) => f.write_str("OFF"),
            CommandInput::Number(value) => write!(f, "{value}"),
            CommandInput::Percent(value) => write!(f, "{value}%"),
            CommandInput::IncreaseDecrease(IncreaseDecrease::Increase) => f.write_str("INCREASE"),
            CommandInput::IncreaseDecrease(IncreaseDecrease::Decrease) => f.write_str("DECREASE"),
        }
    }
}
