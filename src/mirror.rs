//! Local mirror of the lamp's 8-LED array.
//!
//! The mirror is updated either optimistically (one slot, after the
//! transport confirms a write) or authoritatively (all slots, from a bulk
//! device report). The last authoritative update always wins; there is no
//! conflict tracking.

use crate::color::{Rgb, scale_by_percent};

/// Number of LEDs in the ring. Fixed by the hardware.
pub const LED_COUNT: usize = 8;

/// Length of a bulk device report: 8 x `[r, g, b, brightness]`.
pub const REPORT_LEN: usize = LED_COUNT * 4;

/// State of one LED: color channels plus a display brightness percentage.
///
/// Brightness scales the channels for display only; on the wire it travels
/// as its own byte and is never pre-multiplied into `r`/`g`/`b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedState {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Brightness percentage (0-100)
    pub brightness: u8,
}

impl LedState {
    /// Create a state from a color and brightness, clamping brightness to 100.
    pub const fn new(color: Rgb, brightness: u8) -> Self {
        Self {
            r: color.r,
            g: color.g,
            b: color.b,
            brightness: if brightness > 100 { 100 } else { brightness },
        }
    }

    /// Raw color channels, unscaled.
    pub const fn color(self) -> Rgb {
        Rgb {
            r: self.r,
            g: self.g,
            b: self.b,
        }
    }

    /// Color with the brightness percentage applied, for rendering.
    pub const fn display_color(self) -> Rgb {
        scale_by_percent(self.color(), self.brightness)
    }
}

impl Default for LedState {
    /// Warm white at 75%, the lamp's power-on state.
    fn default() -> Self {
        Self {
            r: 255,
            g: 220,
            b: 150,
            brightness: 75,
        }
    }
}

/// Error decoding a bulk device report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportError {
    /// Payload length was not exactly [`REPORT_LEN`] bytes.
    Length { got: usize },
}

/// Fixed-size mirror of the LED ring.
///
/// Exactly [`LED_COUNT`] entries exist at all times; slots are only ever
/// overwritten, never added or removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedMirror {
    leds: [LedState; LED_COUNT],
}

#[allow(clippy::cast_lossless)]
impl LedMirror {
    pub fn new() -> Self {
        Self {
            leds: [LedState::default(); LED_COUNT],
        }
    }

    /// Overwrite one slot with a confirmed value.
    ///
    /// Indices outside the ring are ignored.
    pub fn set(&mut self, index: u8, state: LedState) {
        if let Some(slot) = self.leds.get_mut(index as usize) {
            *slot = state;
        }
    }

    /// Apply an authoritative bulk report from the device.
    ///
    /// Decodes 8 consecutive `[r, g, b, brightness]` groups in index order.
    /// A report of the wrong length is rejected and the mirror is left
    /// unchanged.
    pub fn apply_report(&mut self, data: &[u8]) -> Result<(), ReportError> {
        if data.len() != REPORT_LEN {
            return Err(ReportError::Length { got: data.len() });
        }
        for (slot, group) in self.leds.iter_mut().zip(data.chunks_exact(4)) {
            *slot = LedState::new(
                Rgb {
                    r: group[0],
                    g: group[1],
                    b: group[2],
                },
                group[3],
            );
        }
        Ok(())
    }

    /// Snapshot of all slots in index order.
    pub const fn leds(&self) -> &[LedState; LED_COUNT] {
        &self.leds
    }

    /// Snapshot of one slot, `None` outside the ring.
    pub fn get(&self, index: u8) -> Option<LedState> {
        self.leds.get(index as usize).copied()
    }
}

impl Default for LedMirror {
    fn default() -> Self {
        Self::new()
    }
}
