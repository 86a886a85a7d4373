use crate::error::CodecError;

/// Bounds-checked access to a received frame.
///
/// Parsers read every field through this type so no parser indexes the frame
/// directly.
pub struct FrameReader<'a> {
    frame: &'a [u8],
}

impl<'a> FrameReader<'a> {
    pub fn new(frame: &'a [u8]) -> Self {
        Self { frame }
    }

    pub fn require_len(&self, needed: usize) -> Result<(), CodecError> {
        if self.frame.len() < needed {
            return Err(CodecError::FrameTooShort {
                needed,
                actual: self.frame.len(),
            });
        }
        Ok(())
    }

    pub fn require_exact_len(&self, expected: usize) -> Result<(), CodecError> {
        if self.frame.len() != expected {
            return Err(CodecError::InvalidFrameLength {
                expected,
                actual: self.frame.len(),
            });
        }
        Ok(())
    }

    /// Check that the leading length byte equals the frame size minus one.
    pub fn require_consistent_length_byte(&self) -> Result<(), CodecError> {
        let declared = self.read_u8(0)?;
        if declared as usize + 1 != self.frame.len() {
            return Err(CodecError::LengthByteMismatch {
                declared,
                actual: self.frame.len(),
            });
        }
        Ok(())
    }

    pub fn read_u8(&self, offset: usize) -> Result<u8, CodecError> {
        self.frame
            .get(offset)
            .copied()
            .ok_or(CodecError::FrameTooShort {
                needed: offset + 1,
                actual: self.frame.len(),
            })
    }

    pub fn read_high_nibble(&self, offset: usize) -> Result<u8, CodecError> {
        self.read_u8(offset).map(high_nibble)
    }
}

/// Largest value a nibble field can carry.
pub(crate) const MAX_NIBBLE: u8 = 0x0F;

pub(crate) fn high_nibble(value: u8) -> u8 {
    (value >> 4) & 0x0F
}

/// Place the low four bits of `value` in the high nibble; the low nibble is zero.
pub(crate) fn to_high_nibble(value: u8) -> u8 {
    (value & 0x0F) << 4
}
