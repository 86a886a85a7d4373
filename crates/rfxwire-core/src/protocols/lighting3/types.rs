use std::str::FromStr;

use crate::error::CodecError;
use crate::protocols::common::byte_enum;

byte_enum! {
    /// Lighting3 device family.
    pub enum SubType {
        Koppla = 0x00 => "KOPPLA",
    }
}

byte_enum! {
    /// Lighting3 command byte.
    pub enum Command {
        Bright = 0x00 => "BRIGHT",
        Dim = 0x08 => "DIM",
        On = 0x10 => "ON",
        Level1 = 0x11 => "LEVEL1",
        Level2 = 0x12 => "LEVEL2",
        Level3 = 0x13 => "LEVEL3",
        Level4 = 0x14 => "LEVEL4",
        Level5 = 0x15 => "LEVEL5",
        Level6 = 0x16 => "LEVEL6",
        Level7 = 0x17 => "LEVEL7",
        Level8 = 0x18 => "LEVEL8",
        Level9 = 0x19 => "LEVEL9",
        Off = 0x1A => "OFF",
        Program = 0x1B => "PROGRAM",
    }
}

impl FromStr for SubType {
    type Err = CodecError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        SubType::from_name(name).ok_or_else(|| CodecError::UnknownSubType(name.to_string()))
    }
}
