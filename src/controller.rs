//! Intent dispatch and state reconciliation.
//!
//! Converts queued user intents into command frames, hands them to the
//! transport, and commits the local mirror only after the transport
//! confirms each write. Authoritative device reports overwrite whatever
//! the optimistic path left behind.

use crate::Transport;
use crate::channel::IntentReceiver;
use crate::color::Rgb;
use crate::dial::DialPointer;
use crate::endpoint::Endpoint;
use crate::frame::Command;
use crate::mirror::{LED_COUNT, LedMirror, LedState, REPORT_LEN, ReportError};
use crate::selection::SelectionSet;

#[cfg(feature = "esp32-log")]
use esp_println::println;

/// A user intent to change the lamp state.
#[derive(Debug, Clone)]
pub enum LampIntent {
    /// Select a firmware color preset
    Preset(u8),
    /// Set global brightness (0-100)
    Brightness(u8),
    /// Set the selected LEDs to a custom color and brightness
    Leds {
        targets: SelectionSet,
        color: Rgb,
        brightness: u8,
    },
    /// Move the motor to an absolute position (0-359 degrees)
    MotorPosition(u16),
    /// Re-declare the current motor position as the zero reference
    MotorZero,
}

/// Error refreshing the mirror from a direct endpoint read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshError<E> {
    /// The transport read failed.
    Transport(E),
    /// The payload was not a valid bulk report.
    Report(ReportError),
}

impl<E> From<ReportError> for RefreshError<E> {
    fn from(err: ReportError) -> Self {
        RefreshError::Report(err)
    }
}

/// Lamp controller - owns the LED mirror and the dial pointer.
///
/// All operations are synchronous and non-blocking; anything that waits on
/// the wireless link lives behind the [`Transport`] implementation. Intents
/// and device reports are applied in the order they are delivered.
pub struct LampController<'a, const INTENT_CHANNEL_SIZE: usize> {
    intents: IntentReceiver<'a, INTENT_CHANNEL_SIZE>,
    mirror: LedMirror,
    dial: DialPointer,
}

impl<'a, const INTENT_CHANNEL_SIZE: usize> LampController<'a, INTENT_CHANNEL_SIZE> {
    /// Create a controller draining the given intent receiver.
    pub fn new(intents: IntentReceiver<'a, INTENT_CHANNEL_SIZE>) -> Self {
        Self {
            intents,
            mirror: LedMirror::new(),
            dial: DialPointer::new(0),
        }
    }

    /// Drain pending intents, writing each to the transport.
    ///
    /// Local state is committed per confirmed write, never before. The
    /// first transport error propagates immediately with no retry; writes
    /// confirmed before it stay committed, the failed one leaves no trace.
    pub fn process_pending<T: Transport>(&mut self, transport: &mut T) -> Result<(), T::Error> {
        while let Some(intent) = self.intents.try_receive() {
            self.dispatch(transport, &intent)?;
        }
        Ok(())
    }

    fn dispatch<T: Transport>(
        &mut self,
        transport: &mut T,
        intent: &LampIntent,
    ) -> Result<(), T::Error> {
        match intent {
            LampIntent::Preset(id) => {
                // The preset changes all LEDs device-side; the bulk
                // notification brings the mirror up to date.
                Self::write(transport, Command::Preset(*id))
            }
            LampIntent::Brightness(level) => Self::write(transport, Command::Brightness(*level)),
            LampIntent::Leds {
                targets,
                color,
                brightness,
            } => {
                for index in targets.iter() {
                    Self::write(
                        transport,
                        Command::Led {
                            index,
                            color: *color,
                            brightness: *brightness,
                        },
                    )?;
                    self.mirror.set(index, LedState::new(*color, *brightness));
                }
                Ok(())
            }
            LampIntent::MotorPosition(angle) => {
                Self::write(transport, Command::MotorPosition(*angle))?;
                self.dial.advance(*angle);
                Ok(())
            }
            LampIntent::MotorZero => {
                Self::write(transport, Command::MotorZero)?;
                // The reference point just became the current position.
                self.dial.advance(0);
                Ok(())
            }
        }
    }

    fn write<T: Transport>(transport: &mut T, command: Command) -> Result<(), T::Error> {
        transport.write(command.endpoint(), &command.encode())
    }

    /// Apply an authoritative bulk notification from the device.
    ///
    /// A malformed payload is rejected and the mirror is left unchanged.
    pub fn handle_report(&mut self, data: &[u8]) -> Result<(), ReportError> {
        let result = self.mirror.apply_report(data);
        #[cfg(feature = "esp32-log")]
        if let Err(ReportError::Length { got }) = result {
            println!("lamp: rejected report of {} bytes", got);
        }
        result
    }

    /// Read the LED state endpoint and apply it as a report.
    pub fn refresh<T: Transport>(
        &mut self,
        transport: &mut T,
    ) -> Result<(), RefreshError<T::Error>> {
        let mut buf = [0u8; REPORT_LEN];
        let len = transport
            .read(Endpoint::LedState, &mut buf)
            .map_err(RefreshError::Transport)?;
        if len > REPORT_LEN {
            return Err(ReportError::Length { got: len }.into());
        }
        self.handle_report(&buf[..len])?;
        Ok(())
    }

    /// Snapshot of the LED mirror in index order.
    pub const fn leds(&self) -> &[LedState; LED_COUNT] {
        self.mirror.leds()
    }

    /// Snapshot of one LED, `None` outside the ring.
    pub fn led(&self, index: u8) -> Option<LedState> {
        self.mirror.get(index)
    }

    /// Current continuous pointer angle.
    pub const fn pointer_angle(&self) -> i32 {
        self.dial.continuous()
    }

    /// Last commanded motor position as the device sees it.
    pub const fn motor_position(&self) -> u16 {
        self.dial.normalized()
    }
}
