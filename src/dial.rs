//! Motor dial pointer arithmetic.
//!
//! The device is commanded with angles normalized to `[0, 360)`, but the
//! on-screen pointer tracks an unbounded continuous angle so that rotation
//! across the 359°→0° boundary animates forward instead of snapping back a
//! near-full turn.

use embassy_time::{Duration, Instant};

/// Degrees in a full turn.
pub const FULL_TURN: i32 = 360;

const HALF_TURN: i32 = FULL_TURN / 2;

/// Map a continuous angle into `[0, 360)`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn normalize(angle: i32) -> u16 {
    angle.rem_euclid(FULL_TURN) as u16
}

/// The dial pointer's accumulated rotation.
///
/// Invariant: `normalize(continuous)` equals the last commanded or observed
/// device position; the unbounded form only exists to drive animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialPointer {
    continuous: i32,
}

#[allow(clippy::cast_lossless)]
impl DialPointer {
    /// Create a pointer at a normalized starting position.
    pub const fn new(position: u16) -> Self {
        Self {
            continuous: position as i32 % FULL_TURN,
        }
    }

    /// Advance toward a target position (0-359) along the shortest path.
    ///
    /// The delta is wrapped into `[-180, 180]`, so a single update never
    /// rotates more than half a turn: 350°→10° moves forward through 360
    /// (continuous 370), 10°→350° moves backward through 0 (continuous -10).
    ///
    /// Returns the new continuous angle.
    pub const fn advance(&mut self, target: u16) -> i32 {
        let current = normalize(self.continuous) as i32;
        let mut delta = target as i32 % FULL_TURN - current;
        if delta > HALF_TURN {
            delta -= FULL_TURN;
        } else if delta < -HALF_TURN {
            delta += FULL_TURN;
        }
        self.continuous += delta;
        self.continuous
    }

    /// Current unbounded rotation.
    pub const fn continuous(self) -> i32 {
        self.continuous
    }

    /// Current position as the device sees it.
    pub const fn normalized(self) -> u16 {
        normalize(self.continuous)
    }
}

impl Default for DialPointer {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Calculate progress (0-255) based on elapsed time and duration
#[allow(clippy::cast_possible_truncation)]
#[inline]
const fn progress8(elapsed: Duration, duration: Duration) -> u8 {
    if duration.as_millis() == 0 {
        return 0;
    }
    if elapsed.as_millis() >= duration.as_millis() {
        return 255;
    }

    ((elapsed.as_millis() * 255) / duration.as_millis()) as u8
}

/// Time-based interpolation of the continuous angle.
///
/// Drives a smooth pointer rotation between continuous angles produced by
/// [`DialPointer::advance`]. Call [`PointerSweep::tick`] once per frame.
#[derive(Debug, Clone)]
pub struct PointerSweep {
    current: i32,
    source: i32,
    target: Option<i32>,
    duration: Duration,
    start_time: Instant,
}

impl PointerSweep {
    /// Create a sweep resting at a continuous angle.
    pub const fn new(initial: i32) -> Self {
        Self {
            current: initial,
            source: initial,
            target: None,
            duration: Duration::from_millis(0),
            start_time: Instant::from_millis(0),
        }
    }

    /// Current interpolated continuous angle.
    pub const fn current(&self) -> i32 {
        self.current
    }

    /// Check if a sweep is in progress
    pub const fn is_sweeping(&self) -> bool {
        self.target.is_some()
    }

    /// Start sweeping toward a continuous angle.
    ///
    /// A zero duration applies the target immediately.
    pub fn set(&mut self, target: i32, duration: Duration, start_time: Instant) {
        self.start_time = start_time;
        if duration.as_millis() == 0 {
            self.current = target;
            self.source = target;
            self.target = None;
            self.duration = Duration::from_millis(0);
        } else {
            self.source = self.current;
            self.target = Some(target);
            self.duration = duration;
        }
    }

    /// Update the interpolated angle.
    pub fn tick(&mut self, now: Instant) {
        let Some(target) = self.target else {
            return;
        };

        let elapsed = now.duration_since(self.start_time);
        if elapsed >= self.duration {
            self.current = target;
            self.source = target;
            self.target = None;
            return;
        }

        let progress = i32::from(progress8(elapsed, self.duration));
        self.current = self.source + (target - self.source) * progress / 255;
    }
}
