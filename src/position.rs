//! Symbol slots and where they sit on the display.

use crate::constants::{SLOT_WIDTH, STRIP_LEDS_NUMBER, SYMBOL_COUNT};
use crate::{Error, Result};

/// First visible column of each slot, left to right. Each slot is 5 ink columns plus one
/// spacing column on its right.
pub const SLOT_ORIGINS: [usize; SYMBOL_COUNT] = [0, 6, 12, 18, 24, 30];

const _: () = {
    let mut remaining: &[usize] = &SLOT_ORIGINS;
    while let [origin, rest @ ..] = remaining {
        let end = *origin + SLOT_WIDTH;
        assert!(
            end <= STRIP_LEDS_NUMBER,
            "slot must lie in the visible window"
        );
        if let [next, ..] = rest {
            assert!(end <= *next, "slots must not overlap");
        }
        remaining = rest;
    }
};

/// A symbol slot, 1 (leftmost) through 6 (rightmost).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Position(u8);

impl Position {
    /// The leftmost slot.
    pub const FIRST: Self = Self(1);

    /// Validate a raw slot number.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPosition`] for 0 or anything above 6.
    pub const fn new(position: u8) -> Result<Self> {
        if position == 0 || position as usize > SYMBOL_COUNT {
            Err(Error::InvalidPosition(position))
        } else {
            Ok(Self(position))
        }
    }

    /// The slot number, 1..=6.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Zero-based slot index.
    #[must_use]
    #[expect(clippy::arithmetic_side_effects, reason = "Construction guarantees at least 1")]
    pub const fn index(self) -> usize {
        self.0 as usize - 1
    }

    /// First frame-buffer column of this slot.
    #[must_use]
    #[expect(
        clippy::indexing_slicing,
        reason = "Construction guarantees an index below SYMBOL_COUNT"
    )]
    pub const fn column_origin(self) -> usize {
        SLOT_ORIGINS[self.index()]
    }

    /// Every slot, left to right.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..).take(SYMBOL_COUNT).map(Self)
    }
}

impl TryFrom<u8> for Position {
    type Error = Error;

    fn try_from(position: u8) -> Result<Self> {
        Self::new(position)
    }
}

impl From<Position> for u8 {
    fn from(position: Position) -> Self {
        position.0
    }
}
