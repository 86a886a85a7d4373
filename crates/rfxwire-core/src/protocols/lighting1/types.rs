use std::str::FromStr;

use crate::error::CodecError;
use crate::protocols::common::byte_enum;

byte_enum! {
    /// Lighting1 remote/receiver family.
    pub enum SubType {
        X10 = 0x00 => "X10",
        Arc = 0x01 => "ARC",
        Ab400d = 0x02 => "AB400D",
        Waveman = 0x03 => "WAVEMAN",
        Emw200 = 0x04 => "EMW200",
        Impuls = 0x05 => "IMPULS",
        RisingSun = 0x06 => "RISINGSUN",
        Philips = 0x07 => "PHILIPS",
        Energenie = 0x08 => "ENERGENIE",
        Energenie5 = 0x09 => "ENERGENIE_5",
        Coco = 0x0A => "COCO",
    }
}

byte_enum! {
    /// Lighting1 command byte.
    pub enum Command {
        Off = 0x00 => "OFF",
        On = 0x01 => "ON",
        Dim = 0x02 => "DIM",
        Bright = 0x03 => "BRIGHT",
        GroupOff = 0x05 => "GROUP_OFF",
        GroupOn = 0x06 => "GROUP_ON",
        Chime = 0x07 => "CHIME",
    }
}

impl FromStr for SubType {
    type Err = CodecError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        SubType::from_name(name).ok_or_else(|| CodecError::UnknownSubType(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::{Command, SubType};

    #[test]
    fn code_0x04_is_unassigned_command() {
        assert_eq!(Command::from_byte(0x04), Command::Unknown(0x04));
        assert_eq!(Command::from_byte(0x06), Command::GroupOn);
    }

    #[test]
    fn sub_type_names() {
        assert_eq!("energenie_5".parse::<SubType>(), Ok(SubType::Energenie5));
        assert_eq!(SubType::from_byte(0x0A).name(), "COCO");
        assert!("LIGHTWAVERF".parse::<SubType>().is_err());
    }
}
