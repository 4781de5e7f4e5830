//! Circular widget geometry.
//!
//! Pure layout math for the LED ring and the motor dial; no presentation.
//! The coordinate system is screen-style: +x right, +y down, 0° at
//! 12 o'clock, angles increasing clockwise.

use libm::{atan2f, cosf, sinf};

use crate::mirror::LED_COUNT;

const DEG_TO_RAD: f32 = core::f32::consts::PI / 180.0;
const RAD_TO_DEG: f32 = 180.0 / core::f32::consts::PI;

/// Angular spacing between adjacent LED swatches.
#[allow(clippy::cast_precision_loss)]
pub const SWATCH_STEP_DEG: f32 = 360.0 / LED_COUNT as f32;

/// A point in widget coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

fn on_circle(angle_deg: f32, center: Point, radius: f32) -> Point {
    // Shift by -90° so 0° sits at 12 o'clock.
    let rad = (angle_deg - 90.0) * DEG_TO_RAD;
    Point {
        x: center.x + radius * cosf(rad),
        y: center.y + radius * sinf(rad),
    }
}

/// Position of LED swatch `index` on the ring.
///
/// LED 0 sits at 12 o'clock; indices proceed clockwise every 45°.
pub fn swatch_position(index: u8, center: Point, radius: f32) -> Point {
    on_circle(f32::from(index) * SWATCH_STEP_DEG, center, radius)
}

/// Endpoints of a dial tick mark at `angle_deg`, drawn between the inner
/// and outer radius.
pub fn marker_line(angle_deg: f32, center: Point, inner: f32, outer: f32) -> (Point, Point) {
    (
        on_circle(angle_deg, center, inner),
        on_circle(angle_deg, center, outer),
    )
}

/// Dial angle under a drag cursor, as an integer degree in 0-359.
///
/// `dx`/`dy` is the cursor offset from the dial center.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn angle_from_cursor(dx: f32, dy: f32) -> u16 {
    let mut angle = atan2f(dy, dx) * RAD_TO_DEG + 90.0;
    if angle < 0.0 {
        angle += 360.0;
    }
    let rounded = libm::roundf(angle) as u16;
    rounded % 360
}
