//! Telemetry records for the base's auxiliary sensors.
//!
//! These all follow the same fixed-layout pattern and are generated from
//! their field-layout descriptors. Analog values are reported raw; scaling
//! and calibration are the application's business.

record_payload! {
    /// Signal strength seen by the three docking-station infrared receivers.
    DockInfraRed(super::ids::DOCK_INFRARED) {
        /// Right, central and left receiver, in that order.
        signals: [u8; 3],
    }
}

record_payload! {
    /// Factory-calibrated gyro heading.
    Inertia(super::ids::INERTIA) {
        /// Heading in hundredths of a degree.
        angle: i16,
        /// Angular rate in hundredths of a degree per second.
        angle_rate: i16,
        /// Unused by current firmware.
        acc: [u8; 3],
    }
}

record_payload! {
    /// Raw readings from the three floor-facing cliff sensors.
    Cliff(super::ids::CLIFF) {
        /// Right, central and left sensor ADC values, in that order.
        bottom: [u16; 3],
    }
}

record_payload! {
    /// Wheel motor current draw.
    Current(super::ids::CURRENT) {
        /// Left and right motor current in tens of milliamps.
        current: [u8; 2],
    }
}

record_payload! {
    /// State of the expansion port's general purpose inputs.
    GpInput(super::ids::GP_INPUT) {
        /// Bit n reflects digital channel n.
        digital_input: u16,
        /// 12-bit ADC readings; the trailing three slots are reserved.
        analog_input: [u16; 7],
    }
}

#[cfg(test)]
mod tests {
    use super::{Cliff, Current, DockInfraRed, GpInput, Inertia};
    use crate::{
        cursor::ByteCursor,
        decode::{Decode, DecodeError},
        encode::Encode,
    };

    fn round_trip<T>(value: T, wire_len: usize)
    where
        T: Encode + Decode + PartialEq + std::fmt::Debug,
    {
        let mut cursor = ByteCursor::new();
        value.encode(&mut cursor);
        assert_eq!(cursor.len(), wire_len);
        assert_eq!(T::decode(&mut cursor).unwrap(), value);
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn dock_infrared() {
        round_trip(DockInfraRed::default(), 4);
        round_trip(
            DockInfraRed {
                signals: [0xFF, 0x00, 0x2A],
            },
            4,
        );
    }

    #[test]
    fn inertia_extremes() {
        round_trip(
            Inertia {
                angle: i16::MIN,
                angle_rate: i16::MAX,
                acc: [0, 0x80, 0xFF],
            },
            8,
        );
    }

    #[test]
    fn cliff() {
        round_trip(
            Cliff {
                bottom: [0, 2048, u16::MAX],
            },
            7,
        );
    }

    #[test]
    fn current() {
        round_trip(Current { current: [12, 250] }, 3);
    }

    #[test]
    fn gp_input() {
        round_trip(
            GpInput {
                digital_input: 0b1010,
                analog_input: [0, 1, 2, 3, 4095, 0, 0],
            },
            17,
        );
    }

    #[test]
    fn truncations_underrun() {
        let mut encoded = ByteCursor::new();
        Cliff {
            bottom: [1, 2, 3],
        }
        .encode(&mut encoded);
        let bytes = encoded.into_bytes();
        for len in 0..bytes.len() {
            let mut cursor = ByteCursor::from_bytes(bytes[..len].to_vec());
            assert_eq!(Cliff::decode(&mut cursor), Err(DecodeError::Underrun));
        }
    }
}
