use crate::protocols::common::byte_enum;

byte_enum! {
    /// Packet type byte at offset 1 of every frame.
    pub enum PacketType {
        TransmitterMessage = 0x02 => "TRANSMITTER_MESSAGE",
        Lighting1 = 0x10 => "LIGHTING1",
        Lighting3 = 0x12 => "LIGHTING3",
    }
}
