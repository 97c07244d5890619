//! Preprogrammed tone sequence commands.

use crate::{
    cursor::ByteCursor,
    decode::{Decode, DecodeError},
    encode::Encode,
};

/// Tone sequences baked into the base's firmware.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SoundSequence {
    /// Played when the base powers on.
    #[default]
    On = 0x00,
    /// Played when the base powers off.
    Off = 0x01,
    /// Recharging started.
    Recharge = 0x02,
    /// Button pressed.
    Button = 0x03,
    /// Error sound.
    Error = 0x04,
    /// Cleaning started.
    CleaningStart = 0x05,
    /// Cleaning ended.
    CleaningEnd = 0x06,
}

impl Encode for SoundSequence {
    fn encode(&self, cursor: &mut ByteCursor) {
        (*self as u8).encode(cursor);
    }
}

impl Decode for SoundSequence {
    fn decode(cursor: &mut ByteCursor) -> Result<Self, DecodeError> {
        let byte = u8::decode(cursor)?;
        match byte {
            0x00 => Ok(Self::On),
            0x01 => Ok(Self::Off),
            0x02 => Ok(Self::Recharge),
            0x03 => Ok(Self::Button),
            0x04 => Ok(Self::Error),
            0x05 => Ok(Self::CleaningStart),
            0x06 => Ok(Self::CleaningEnd),
            value => Err(DecodeError::UnexpectedValue {
                value,
                expected: &[0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06],
            }),
        }
    }
}

record_payload! {
    /// Commands the base to play one of its preprogrammed tone sequences.
    SoundCommand(super::ids::SOUND) {
        /// The sequence to play.
        sequence: SoundSequence,
    }
}

#[cfg(test)]
mod tests {
    use super::{SoundCommand, SoundSequence};
    use crate::{
        cursor::ByteCursor,
        decode::{Decode, DecodeError},
        encode::Encode,
    };

    #[test]
    fn every_sequence_round_trips() {
        let sequences = [
            SoundSequence::On,
            SoundSequence::Off,
            SoundSequence::Recharge,
            SoundSequence::Button,
            SoundSequence::Error,
            SoundSequence::CleaningStart,
            SoundSequence::CleaningEnd,
        ];
        for sequence in sequences {
            let command = SoundCommand { sequence };
            let mut cursor = ByteCursor::new();
            command.encode(&mut cursor);
            assert_eq!(cursor.len(), 2);
            assert_eq!(SoundCommand::decode(&mut cursor), Ok(command));
        }
    }

    #[test]
    fn out_of_range_byte_is_rejected() {
        let mut cursor = ByteCursor::from_bytes([SoundCommand::HEADER, 0x07]);
        assert_eq!(
            SoundCommand::decode(&mut cursor),
            Err(DecodeError::UnexpectedValue {
                value: 0x07,
                expected: &[0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06],
            })
        );
    }

    #[test]
    fn recharge_scenario() {
        let command = SoundCommand {
            sequence: SoundSequence::Recharge,
        };
        let mut cursor = ByteCursor::new();
        command.encode(&mut cursor);
        assert_eq!(cursor.as_bytes(), &[0x07, 0x02]);
        assert_eq!(
            SoundCommand::decode(&mut cursor).unwrap().sequence,
            SoundSequence::Recharge
        );
    }
}
