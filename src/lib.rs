#![no_std]

pub mod channel;
pub mod color;
pub mod controller;
pub mod dial;
pub mod endpoint;
pub mod frame;
pub mod mirror;
pub mod ring;
pub mod selection;

pub use channel::{IntentChannel, IntentOverflow, IntentReceiver, IntentSender};
pub use controller::{LampController, LampIntent, RefreshError};
pub use dial::{DialPointer, PointerSweep, normalize};
pub use endpoint::Endpoint;
pub use frame::{Command, Frame, MAX_FRAME_LEN, MOTOR_ZERO_SENTINEL};
pub use mirror::{LED_COUNT, LedMirror, LedState, REPORT_LEN, ReportError};
pub use selection::SelectionSet;

pub use color::Rgb;
pub use embassy_time::{Duration, Instant};

/// Abstract wireless link trait
///
/// Implement this trait over the platform's BLE stack. The controller is
/// generic over this trait and never manages the connection lifecycle;
/// notification payloads are handed by the caller to
/// [`LampController::handle_report`].
pub trait Transport {
    type Error;

    /// Write a command frame to an endpoint
    fn write(&mut self, endpoint: Endpoint, frame: &[u8]) -> Result<(), Self::Error>;

    /// Read the current value of an endpoint into `buf`
    ///
    /// Returns the number of bytes read.
    fn read(&mut self, endpoint: Endpoint, buf: &mut [u8]) -> Result<usize, Self::Error>;
}
