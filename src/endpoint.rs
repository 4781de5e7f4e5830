//! Wire endpoints exposed by the lamp firmware.
//!
//! One GATT service with five characteristics. The UUIDs must match the
//! firmware; any change here is a breaking protocol change.

/// Primary lamp service UUID.
pub const LAMP_SERVICE_UUID: &str = "12345678-1234-5678-1234-56789abcdef0";

const LED_STATE_UUID: &str = "12345678-1234-5678-1234-56789abcdef1";
const COLOR_PRESET_UUID: &str = "12345678-1234-5678-1234-56789abcdef2";
const BRIGHTNESS_UUID: &str = "12345678-1234-5678-1234-56789abcdef3";
const LED_CUSTOM_UUID: &str = "12345678-1234-5678-1234-56789abcdef4";
const MOTOR_POSITION_UUID: &str = "12345678-1234-5678-1234-56789abcdef5";

/// A read/write/notify channel on the wireless link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// Bulk LED state, read/notify (32 bytes)
    LedState,
    /// Color preset selector, write (1 byte)
    ColorPreset,
    /// Global brightness, write (1 byte)
    Brightness,
    /// Per-LED custom color, write (5 bytes)
    LedCustom,
    /// Motor position command, write (2 bytes LE)
    MotorPosition,
}

impl Endpoint {
    /// Characteristic UUID for this endpoint.
    pub const fn uuid(self) -> &'static str {
        match self {
            Endpoint::LedState => LED_STATE_UUID,
            Endpoint::ColorPreset => COLOR_PRESET_UUID,
            Endpoint::Brightness => BRIGHTNESS_UUID,
            Endpoint::LedCustom => LED_CUSTOM_UUID,
            Endpoint::MotorPosition => MOTOR_POSITION_UUID,
        }
    }
}
