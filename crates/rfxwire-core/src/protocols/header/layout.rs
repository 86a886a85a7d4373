pub const LENGTH_OFFSET: usize = 0;
pub const PACKET_TYPE_OFFSET: usize = 1;
pub const SUB_TYPE_OFFSET: usize = 2;
pub const SEQUENCE_OFFSET: usize = 3;

pub const HEADER_LEN: usize = SEQUENCE_OFFSET + 1;
