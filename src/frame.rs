//! Command encoding.
//!
//! Pure mapping from a validated intent to a fixed-layout byte frame plus
//! its target endpoint. The byte layouts are versioned implicitly by the
//! lamp firmware; changing one here is a breaking protocol change.

use heapless::Vec;

use crate::color::Rgb;
use crate::endpoint::Endpoint;

/// Length of the longest command frame (the per-LED custom command).
pub const MAX_FRAME_LEN: usize = 5;

/// Out-of-band motor value meaning "reset the physical zero reference".
///
/// Outside the valid angle range (0-359) and reserved exclusively for
/// [`Command::MotorZero`], never a real position.
pub const MOTOR_ZERO_SENTINEL: u16 = u16::MAX;

/// An encoded command frame.
pub type Frame = Vec<u8, MAX_FRAME_LEN>;

/// Commands that can be written to the lamp
#[derive(Debug, Clone, Copy)]
pub enum Command {
    /// Select a firmware color preset
    Preset(u8),
    /// Set global brightness (0-100)
    Brightness(u8),
    /// Set one LED to a custom color and brightness (0-100)
    Led {
        index: u8,
        color: Rgb,
        brightness: u8,
    },
    /// Move the motor to an absolute position (0-359 degrees)
    MotorPosition(u16),
    /// Re-declare the current motor position as the zero reference
    MotorZero,
}

impl Command {
    /// Endpoint this command is written to.
    pub const fn endpoint(self) -> Endpoint {
        match self {
            Command::Preset(_) => Endpoint::ColorPreset,
            Command::Brightness(_) => Endpoint::Brightness,
            Command::Led { .. } => Endpoint::LedCustom,
            Command::MotorPosition(_) | Command::MotorZero => Endpoint::MotorPosition,
        }
    }

    /// Encode this command into its wire frame.
    ///
    /// Never fails for in-range input; all frames fit in [`MAX_FRAME_LEN`].
    pub fn encode(self) -> Frame {
        let mut frame = Frame::new();
        let _ = match self {
            Command::Preset(id) => frame.extend_from_slice(&[id]),
            Command::Brightness(level) => frame.extend_from_slice(&[level]),
            Command::Led {
                index,
                color,
                brightness,
            } => frame.extend_from_slice(&[index, color.r, color.g, color.b, brightness]),
            Command::MotorPosition(angle) => frame.extend_from_slice(&angle.to_le_bytes()),
            Command::MotorZero => frame.extend_from_slice(&MOTOR_ZERO_SENTINEL.to_le_bytes()),
        };
        frame
    }
}
