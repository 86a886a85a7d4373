use std::str::FromStr;

use crate::error::CodecError;
use crate::protocols::common::byte_enum;

byte_enum! {
    pub enum SubType {
        ErrorReceiverDidNotLock = 0x00 => "ERROR_RECEIVER_DID_NOT_LOCK",
        Response = 0x01 => "RESPONSE",
    }
}

byte_enum! {
    /// Outcome reported by the transceiver for a transmitted frame.
    pub enum Response {
        Ack = 0x00 => "ACK",
        AckDelayed = 0x01 => "ACK_DELAYED",
        Nak = 0x02 => "NAK",
        NakInvalidAcAddress = 0x03 => "NAK_INVALID_AC_ADDRESS",
    }
}

impl FromStr for SubType {
    type Err = CodecError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        SubType::from_name(name).ok_or_else(|| CodecError::UnknownSubType(name.to_string()))
    }
}
