use thiserror::Error;

use crate::cursor::ByteCursor;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    #[error("Frame payload region is {len} bytes, more than the one-byte length field can declare")]
    PayloadRegionTooLarge { len: usize },
}

/// A type that can be encoded onto the write tail of a cursor.
///
/// Fields are written in fixed declared order with fixed byte widths and no
/// implicit padding, so encoding a value appends exactly the bytes its
/// [`Decode`](crate::decode::Decode) counterpart consumes.
pub trait Encode {
    /// Appends this value's wire representation to the cursor.
    fn encode(&self, cursor: &mut ByteCursor);
}

macro_rules! impl_encode_for_primitive {
    ($($t:ty),*) => {
        $(
            impl Encode for $t {
                fn encode(&self, cursor: &mut ByteCursor) {
                    cursor.append(&self.to_le_bytes());
                }
            }
        )*
    };
}

impl_encode_for_primitive!(u8, u16, u32, u64, i8, i16, i32, i64);

impl<const N: usize, T: Encode> Encode for [T; N] {
    fn encode(&self, cursor: &mut ByteCursor) {
        for item in self {
            item.encode(cursor);
        }
    }
}
