//! Identity records reported once on request: version numbers and the
//! controller's unique id.

record_payload! {
    /// Version of the board the base is running on.
    HardwareVersion(super::ids::HARDWARE_VERSION) {
        patch: u8,
        minor: u8,
        major: u8,
        /// Reserved.
        unused: u8,
    }
}

record_payload! {
    /// Version of the firmware flashed onto the base.
    FirmwareVersion(super::ids::FIRMWARE_VERSION) {
        patch: u8,
        minor: u8,
        major: u8,
        /// Reserved.
        unused: u8,
    }
}

record_payload! {
    /// The controller's 96-bit factory-unique identifier.
    UniqueDeviceId(super::ids::UNIQUE_DEVICE_ID) {
        udid0: u32,
        udid1: u32,
        udid2: u32,
    }
}
