//! Bounded intent queue between the UI surface and the controller pump.
//!
//! Built on `critical-section` and `heapless::Deque` so the queue can live
//! in a `static` and be fed from interrupt or callback context. The
//! controller drains it non-blocking on its next pump.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::controller::LampIntent;

/// Error returned when the queue is full; carries the rejected intent.
#[derive(Debug, Clone)]
pub struct IntentOverflow(pub LampIntent);

/// Fixed-capacity queue of pending [`LampIntent`]s.
pub struct IntentChannel<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<LampIntent, SIZE>>>,
}

impl<const SIZE: usize> IntentChannel<SIZE> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Get a sender handle for the UI surface.
    pub const fn sender(&self) -> IntentSender<'_, SIZE> {
        IntentSender { channel: self }
    }

    /// Get the receiver handle for the controller.
    pub const fn receiver(&self) -> IntentReceiver<'_, SIZE> {
        IntentReceiver { channel: self }
    }

    fn try_send(&self, intent: LampIntent) -> Result<(), IntentOverflow> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(intent).map_err(IntentOverflow)
        })
    }

    fn try_receive(&self) -> Option<LampIntent> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.pop_front()
        })
    }
}

impl<const SIZE: usize> Default for IntentChannel<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Sender half of an [`IntentChannel`].
#[derive(Clone, Copy)]
pub struct IntentSender<'a, const SIZE: usize> {
    channel: &'a IntentChannel<SIZE>,
}

impl<const SIZE: usize> IntentSender<'_, SIZE> {
    /// Queue an intent for the controller.
    ///
    /// Returns the intent back if the queue is full.
    pub fn try_send(&self, intent: LampIntent) -> Result<(), IntentOverflow> {
        self.channel.try_send(intent)
    }
}

/// Receiver half of an [`IntentChannel`].
#[derive(Clone, Copy)]
pub struct IntentReceiver<'a, const SIZE: usize> {
    channel: &'a IntentChannel<SIZE>,
}

impl<const SIZE: usize> IntentReceiver<'_, SIZE> {
    /// Take the next pending intent, if any.
    pub fn try_receive(&self) -> Option<LampIntent> {
        self.channel.try_receive()
    }
}
