//! The base's core sensor record, streamed in every feedback frame.

use bitflags::bitflags;

use crate::{
    cursor::ByteCursor,
    decode::{Decode, DecodeError},
    encode::Encode,
};

bitflags! {
    /// Pressed bumpers.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Bumper: u8 {
        const RIGHT = 0b00000001;
        const CENTRAL = 0b00000010;
        const LEFT = 0b00000100;
    }

    /// Wheels that have dropped away from the body.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct WheelDrop: u8 {
        const RIGHT = 0b00000001;
        const LEFT = 0b00000010;
    }

    /// Cliff sensors currently over a drop.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct CliffState: u8 {
        const RIGHT = 0b00000001;
        const CENTRAL = 0b00000010;
        const LEFT = 0b00000100;
    }

    /// Pressed buttons on the top panel.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Buttons: u8 {
        const BUTTON_0 = 0b00000001;
        const BUTTON_1 = 0b00000010;
        const BUTTON_2 = 0b00000100;
    }

    /// Motors drawing more current than their limit allows.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct OverCurrent: u8 {
        const LEFT_WHEEL = 0b00000001;
        const RIGHT_WHEEL = 0b00000010;
    }
}

macro_rules! impl_codec_for_flags {
    ($($t:ty),*) => {
        $(
            impl Default for $t {
                fn default() -> Self {
                    Self::empty()
                }
            }

            impl Encode for $t {
                fn encode(&self, cursor: &mut ByteCursor) {
                    self.bits().encode(cursor);
                }
            }

            impl Decode for $t {
                fn decode(cursor: &mut ByteCursor) -> Result<Self, DecodeError> {
                    // Undefined bits are preserved verbatim.
                    Ok(Self::from_bits_retain(u8::decode(cursor)?))
                }
            }
        )*
    };
}

impl_codec_for_flags!(Bumper, WheelDrop, CliffState, Buttons, OverCurrent);

record_payload! {
    /// Basic sensor feedback: bumpers, wheel drops, cliff bits, encoders,
    /// motor PWM, buttons and charger/battery status.
    ///
    /// Interpretation of the analog values (tick geometry, voltage scaling,
    /// charger state codes) belongs to the application layer.
    CoreSensors(super::ids::CORE_SENSORS) {
        /// Milliseconds, wrapping at 65536.
        time_stamp: u16,
        bumper: Bumper,
        wheel_drop: WheelDrop,
        cliff: CliffState,
        /// Accumulated left wheel encoder ticks, wrapping.
        left_encoder: u16,
        /// Accumulated right wheel encoder ticks, wrapping.
        right_encoder: u16,
        left_pwm: u8,
        right_pwm: u8,
        buttons: Buttons,
        /// Raw charger state code.
        charger: u8,
        /// Battery voltage in decivolts.
        battery: u8,
        over_current: OverCurrent,
    }
}
