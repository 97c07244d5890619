use thiserror::Error;

use crate::cursor::ByteCursor;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Not enough buffered bytes to decode")]
    Underrun,

    #[error("Payload header mismatch. Found {found:#04x}, expected {expected:#04x}")]
    HeaderMismatch { found: u8, expected: u8 },

    #[error("No payload kind registered for header identifier {0:#04x}")]
    UnknownPayloadId(u8),

    #[error("Could not decode byte with unexpected value. Found {value:#04x}, expected one of: {expected:02x?}")]
    UnexpectedValue { value: u8, expected: &'static [u8] },
}

/// A type that can be reconstructed from the unread bytes of a cursor.
///
/// Decoding consumes exactly the bytes that [`Encode`](crate::encode::Encode)
/// produces for the same value, in the same order. A failed decode returns
/// an error and yields no value; it never hands back a partially filled one.
pub trait Decode {
    /// Attempts to decode `Self` from the cursor's read position.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Underrun`] if the cursor cannot supply the
    /// required bytes, or another [`DecodeError`] if the bytes are malformed.
    fn decode(cursor: &mut ByteCursor) -> Result<Self, DecodeError>
    where
        Self: Sized;
}

macro_rules! impl_decode_for_primitive {
    ($($t:ty),*) => {
        $(
            impl Decode for $t {
                fn decode(cursor: &mut ByteCursor) -> Result<Self, DecodeError> {
                    let bytes = cursor.consume(size_of::<Self>())?;
                    Ok(Self::from_le_bytes(bytes.try_into().unwrap()))
                }
            }
        )*
    };
}

impl_decode_for_primitive!(u8, u16, u32, u64, i8, i16, i32, i64);

impl<const N: usize, T: Decode + Default + Copy> Decode for [T; N] {
    fn decode(cursor: &mut ByteCursor) -> Result<Self, DecodeError> {
        let mut arr = [T::default(); N];
        for slot in &mut arr {
            *slot = T::decode(cursor)?;
        }
        Ok(arr)
    }
}

#[cfg(test)]
mod tests {
    use super::{Decode, DecodeError};
    use crate::cursor::ByteCursor;

    #[test]
    fn primitives_are_little_endian() {
        let mut cursor = ByteCursor::from_bytes([0x34, 0x12, 0xFF, 0xFF]);
        assert_eq!(u16::decode(&mut cursor), Ok(0x1234));
        assert_eq!(i16::decode(&mut cursor), Ok(-1));
    }

    #[test]
    fn arrays_decode_element_wise() {
        let mut cursor = ByteCursor::from_bytes([0x01, 0x00, 0x02, 0x00, 0x03, 0x00]);
        assert_eq!(<[u16; 3]>::decode(&mut cursor), Ok([1, 2, 3]));
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn short_input_underruns() {
        let mut cursor = ByteCursor::from_bytes([0x01]);
        assert_eq!(u32::decode(&mut cursor), Err(DecodeError::Underrun));
    }
}
