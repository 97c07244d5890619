//! Payload kinds carried inside Kobuki frames.
//!
//! Each payload is a fixed-layout record announced by a one-byte header
//! identifier. A frame's payload region holds any number of them back to
//! back; [`Payload::decode`] reads the next identifier and dispatches to
//! the matching kind.

use crate::{
    cursor::ByteCursor,
    decode::{Decode, DecodeError},
    encode::Encode,
};

/// Generates a fixed-layout payload record from its field-layout
/// descriptor: the header identifier plus the ordered, fixed-width fields.
///
/// Encoding writes the header byte and then each field in declared order;
/// decoding consumes them back in the same order, failing with
/// [`HeaderMismatch`](DecodeError::HeaderMismatch) when pointed at a
/// different payload kind.
macro_rules! record_payload {
    (
        $(#[$meta:meta])*
        $name:ident($id:expr) {
            $($(#[$field_meta:meta])* $field:ident: $ty:ty),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
        pub struct $name {
            $($(#[$field_meta])* pub $field: $ty,)+
        }

        impl $name {
            /// Header identifier announcing this payload kind on the wire.
            pub const HEADER: u8 = $id;
        }

        impl $crate::encode::Encode for $name {
            fn encode(&self, cursor: &mut $crate::cursor::ByteCursor) {
                $crate::encode::Encode::encode(&Self::HEADER, cursor);
                $($crate::encode::Encode::encode(&self.$field, cursor);)+
            }
        }

        impl $crate::decode::Decode for $name {
            fn decode(
                cursor: &mut $crate::cursor::ByteCursor,
            ) -> Result<Self, $crate::decode::DecodeError> {
                let found = <u8 as $crate::decode::Decode>::decode(cursor)?;
                if found != Self::HEADER {
                    return Err($crate::decode::DecodeError::HeaderMismatch {
                        found,
                        expected: Self::HEADER,
                    });
                }
                Ok(Self {
                    $($field: $crate::decode::Decode::decode(cursor)?,)+
                })
            }
        }
    };
}

/// Header identifiers for every payload kind the protocol defines.
///
/// The real device reuses some values between its command and feedback
/// namespaces; this set keeps one identifier per kind so dispatch stays
/// unambiguous, with the sound command on the unassigned feedback slot.
pub mod ids {
    pub const CORE_SENSORS: u8 = 0x01;
    pub const DOCK_INFRARED: u8 = 0x03;
    pub const INERTIA: u8 = 0x04;
    pub const CLIFF: u8 = 0x05;
    pub const CURRENT: u8 = 0x06;
    pub const SOUND: u8 = 0x07;
    pub const HARDWARE_VERSION: u8 = 0x0A;
    pub const FIRMWARE_VERSION: u8 = 0x0B;
    pub const EEPROM: u8 = 0x0F;
    pub const GP_INPUT: u8 = 0x10;
    pub const UNIQUE_DEVICE_ID: u8 = 0x13;
}

pub mod core_sensors;
pub mod eeprom;
pub mod identity;
pub mod sound;
pub mod telemetry;

pub use core_sensors::CoreSensors;
pub use eeprom::Eeprom;
pub use identity::{FirmwareVersion, HardwareVersion, UniqueDeviceId};
pub use sound::{SoundCommand, SoundSequence};
pub use telemetry::{Cliff, Current, DockInfraRed, GpInput, Inertia};

/// One typed, self-identifying record carried inside a frame's payload
/// region.
///
/// The set is closed: every header identifier the protocol defines maps to
/// exactly one variant here, so dispatch is exhaustively checkable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Payload {
    CoreSensors(CoreSensors),
    DockInfraRed(DockInfraRed),
    Inertia(Inertia),
    Cliff(Cliff),
    Current(Current),
    Sound(SoundCommand),
    Hardware(HardwareVersion),
    Firmware(FirmwareVersion),
    Eeprom(Eeprom),
    GpInput(GpInput),
    UniqueDeviceId(UniqueDeviceId),
}

impl Payload {
    /// The header identifier this payload encodes with.
    pub fn header(&self) -> u8 {
        match self {
            Self::CoreSensors(_) => CoreSensors::HEADER,
            Self::DockInfraRed(_) => DockInfraRed::HEADER,
            Self::Inertia(_) => Inertia::HEADER,
            Self::Cliff(_) => Cliff::HEADER,
            Self::Current(_) => Current::HEADER,
            Self::Sound(_) => SoundCommand::HEADER,
            Self::Hardware(_) => HardwareVersion::HEADER,
            Self::Firmware(_) => FirmwareVersion::HEADER,
            Self::Eeprom(_) => Eeprom::HEADER,
            Self::GpInput(_) => GpInput::HEADER,
            Self::UniqueDeviceId(_) => UniqueDeviceId::HEADER,
        }
    }
}

impl Encode for Payload {
    fn encode(&self, cursor: &mut ByteCursor) {
        match self {
            Self::CoreSensors(payload) => payload.encode(cursor),
            Self::DockInfraRed(payload) => payload.encode(cursor),
            Self::Inertia(payload) => payload.encode(cursor),
            Self::Cliff(payload) => payload.encode(cursor),
            Self::Current(payload) => payload.encode(cursor),
            Self::Sound(payload) => payload.encode(cursor),
            Self::Hardware(payload) => payload.encode(cursor),
            Self::Firmware(payload) => payload.encode(cursor),
            Self::Eeprom(payload) => payload.encode(cursor),
            Self::GpInput(payload) => payload.encode(cursor),
            Self::UniqueDeviceId(payload) => payload.encode(cursor),
        }
    }
}

impl Decode for Payload {
    /// Reads the next header identifier without consuming it and dispatches
    /// to the registered payload kind, which consumes the identifier along
    /// with its fields.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::UnknownPayloadId`] when no kind is registered
    /// for the identifier. The identifier byte is left unconsumed in that
    /// case; recovering is the frame assembler's job, since payload-level
    /// lengths are not known for unrecognized kinds.
    fn decode(cursor: &mut ByteCursor) -> Result<Self, DecodeError> {
        let id = cursor.peek().ok_or(DecodeError::Underrun)?;
        Ok(match id {
            ids::CORE_SENSORS => Self::CoreSensors(CoreSensors::decode(cursor)?),
            ids::DOCK_INFRARED => Self::DockInfraRed(DockInfraRed::decode(cursor)?),
            ids::INERTIA => Self::Inertia(Inertia::decode(cursor)?),
            ids::CLIFF => Self::Cliff(Cliff::decode(cursor)?),
            ids::CURRENT => Self::Current(Current::decode(cursor)?),
            ids::SOUND => Self::Sound(SoundCommand::decode(cursor)?),
            ids::HARDWARE_VERSION => Self::Hardware(HardwareVersion::decode(cursor)?),
            ids::FIRMWARE_VERSION => Self::Firmware(FirmwareVersion::decode(cursor)?),
            ids::EEPROM => Self::Eeprom(Eeprom::decode(cursor)?),
            ids::GP_INPUT => Self::GpInput(GpInput::decode(cursor)?),
            ids::UNIQUE_DEVICE_ID => Self::UniqueDeviceId(UniqueDeviceId::decode(cursor)?),
            unknown => return Err(DecodeError::UnknownPayloadId(unknown)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_identifiers_are_unique() {
        let headers = [
            CoreSensors::HEADER,
            DockInfraRed::HEADER,
            Inertia::HEADER,
            Cliff::HEADER,
            Current::HEADER,
            SoundCommand::HEADER,
            HardwareVersion::HEADER,
            FirmwareVersion::HEADER,
            Eeprom::HEADER,
            GpInput::HEADER,
            UniqueDeviceId::HEADER,
        ];
        for (i, a) in headers.iter().enumerate() {
            for b in &headers[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn dispatches_on_header_identifier() {
        let mut cursor = ByteCursor::new();
        Payload::Sound(SoundCommand {
            sequence: SoundSequence::Button,
        })
        .encode(&mut cursor);

        let decoded = Payload::decode(&mut cursor).unwrap();
        assert_eq!(
            decoded,
            Payload::Sound(SoundCommand {
                sequence: SoundSequence::Button,
            })
        );
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn unknown_identifier_is_rejected_without_consuming() {
        let mut cursor = ByteCursor::from_bytes([0xE0, 0x00]);
        assert_eq!(
            Payload::decode(&mut cursor),
            Err(DecodeError::UnknownPayloadId(0xE0))
        );
        assert_eq!(cursor.remaining(), 2);
    }

    #[test]
    fn empty_region_underruns() {
        let mut cursor = ByteCursor::new();
        assert_eq!(Payload::decode(&mut cursor), Err(DecodeError::Underrun));
    }
}
