//! Eeprom block payloads.
//!
//! The base's eeprom is read and written 16 bytes at a time; each payload
//! carries one block along with the frame (slot) index it belongs to. This
//! is the one payload kind with a bulk data field, so it is written out by
//! hand rather than generated from a field-layout descriptor.

use crate::{
    cursor::ByteCursor,
    decode::{Decode, DecodeError},
    encode::Encode,
};

/// One 16-byte eeprom block, addressed by its frame index.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Eeprom {
    /// Index of the eeprom frame this block belongs to.
    pub frame_id: u8,
    /// The block contents. Decoding populates all 16 bytes or fails; short
    /// reads never leave a partially copied block behind.
    pub data: [u8; 16],
}

impl Eeprom {
    /// Header identifier announcing this payload kind on the wire.
    pub const HEADER: u8 = super::ids::EEPROM;
}

impl Encode for Eeprom {
    fn encode(&self, cursor: &mut ByteCursor) {
        Self::HEADER.encode(cursor);
        self.frame_id.encode(cursor);
        self.data.encode(cursor);
    }
}

impl Decode for Eeprom {
    fn decode(cursor: &mut ByteCursor) -> Result<Self, DecodeError> {
        let found = u8::decode(cursor)?;
        if found != Self::HEADER {
            return Err(DecodeError::HeaderMismatch {
                found,
                expected: Self::HEADER,
            });
        }
        Ok(Self {
            frame_id: u8::decode(cursor)?,
            data: Decode::decode(cursor)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::Eeprom;
    use crate::{
        cursor::ByteCursor,
        decode::{Decode, DecodeError},
        encode::Encode,
    };

    #[test]
    fn default_round_trip() {
        let payload = Eeprom::default();
        let mut cursor = ByteCursor::new();
        payload.encode(&mut cursor);
        assert_eq!(cursor.len(), 18);
        assert_eq!(Eeprom::decode(&mut cursor), Ok(payload));
    }

    #[test]
    fn block_contents_round_trip() {
        let payload = Eeprom {
            frame_id: 0x05,
            data: [
                0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A, 0x0B, 0x0C,
                0x0D, 0x0E, 0xFF,
            ],
        };
        let mut cursor = ByteCursor::new();
        payload.encode(&mut cursor);
        assert_eq!(Eeprom::decode(&mut cursor), Ok(payload));
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn every_truncation_underruns() {
        let mut encoded = ByteCursor::new();
        Eeprom {
            frame_id: 0x01,
            data: [0xAB; 16],
        }
        .encode(&mut encoded);
        let bytes = encoded.into_bytes();

        for len in 0..bytes.len() {
            let mut cursor = ByteCursor::from_bytes(bytes[..len].to_vec());
            assert_eq!(Eeprom::decode(&mut cursor), Err(DecodeError::Underrun));
        }
    }

    #[test]
    fn wrong_header_is_a_mismatch() {
        let mut cursor = ByteCursor::from_bytes([0x01; 18]);
        assert_eq!(
            Eeprom::decode(&mut cursor),
            Err(DecodeError::HeaderMismatch {
                found: 0x01,
                expected: Eeprom::HEADER,
            })
        );
    }
}
