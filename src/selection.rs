//! Multi-LED selection state.

use crate::mirror::LED_COUNT;

const ALL_MASK: u8 = ((1u16 << LED_COUNT) - 1) as u8;

/// A set of LED indices (0-7) targeted by the next custom-color apply.
///
/// Backed by a bitmask; duplicates are impossible and indices outside the
/// ring are ignored. Selection persists across applies until explicitly
/// changed or cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionSet {
    bits: u8,
}

#[allow(clippy::cast_lossless)]
impl SelectionSet {
    /// The empty selection.
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    /// All eight LEDs.
    pub const fn all() -> Self {
        Self { bits: ALL_MASK }
    }

    /// A single LED, or the empty selection for an out-of-range index.
    pub const fn single(index: u8) -> Self {
        let mut set = Self::empty();
        set.insert(index);
        set
    }

    pub const fn insert(&mut self, index: u8) {
        if (index as usize) < LED_COUNT {
            self.bits |= 1 << index;
        }
    }

    pub const fn remove(&mut self, index: u8) {
        if (index as usize) < LED_COUNT {
            self.bits &= !(1 << index);
        }
    }

    /// Flip membership of one index.
    pub const fn toggle(&mut self, index: u8) {
        if (index as usize) < LED_COUNT {
            self.bits ^= 1 << index;
        }
    }

    pub const fn contains(self, index: u8) -> bool {
        (index as usize) < LED_COUNT && self.bits & (1 << index) != 0
    }

    pub const fn clear(&mut self) {
        self.bits = 0;
    }

    /// Number of selected LEDs.
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Iterate the selected indices in ascending order.
    #[allow(clippy::cast_possible_truncation)]
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (0..LED_COUNT as u8).filter(move |&i| self.contains(i))
    }
}
