//! A fully const description of how the strips are wired.
//!
//! [`LedLayout`] tells, for every LED in transmission order, which (column, strip) cell of
//! the display it lights. See [`LedLayout::serpentine`] for the usual wiring and
//! [`LedLayout::from_strip_directions`] for anything else.

use crate::constants::{LED_COUNT, STRIP_LEDS_NUMBER, STRIPS_NUMBER};
use crate::{Error, Result};

/// Direction a strip's data line runs across the display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StripDirection {
    /// First LED at column 0.
    Ascending,
    /// First LED at the rightmost column.
    Descending,
}

/// Wiring of the full 7-strip display.
pub type DisplayLayout = LedLayout<LED_COUNT, STRIP_LEDS_NUMBER, STRIPS_NUMBER>;

/// The display as built: strips chained top to bottom, the data line reversing direction at
/// the end of every strip.
pub const SERPENTINE_WIRING: DisplayLayout = DisplayLayout::serpentine();

/// A fully const table of the (column, strip) cell lit by each LED, in transmission order.
///
/// `W` is the number of LEDs per strip, `H` the number of strips, `N` their product.
///
/// # Examples
///
/// ```
/// use led_text_display::led_layout::LedLayout;
///
/// const WIRING: LedLayout<6, 3, 2> = LedLayout::serpentine();
/// const EXPECTED: LedLayout<6, 3, 2> =
///     LedLayout::new([(0, 0), (1, 0), (2, 0), (2, 1), (1, 1), (0, 1)]);
/// const _: () = assert!(WIRING.equals(&EXPECTED));
/// ```
///
/// ```text
/// 3 LEDs × 2 strips, serpentine:
///   LED0  LED1  LED2
///   LED5  LED4  LED3
/// ```
///
/// Compile-time validation catches wiring tables that miss or repeat a cell:
///
/// ```compile_fail
/// # use led_text_display::led_layout::LedLayout;
/// const INVALID: LedLayout<3, 3, 1> = LedLayout::new([(0, 0), (0, 0), (2, 0)]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LedLayout<const N: usize, const W: usize, const H: usize> {
    map: [(u16, u16); N],
}

impl<const N: usize, const W: usize, const H: usize> LedLayout<N, W, H> {
    /// Access the checked (column, strip) table.
    #[must_use]
    pub const fn map(&self) -> &[(u16, u16); N] {
        &self.map
    }

    /// Const equality helper for compile-time checks.
    #[must_use]
    #[expect(
        clippy::indexing_slicing,
        clippy::arithmetic_side_effects,
        reason = "Loop index stays below N"
    )]
    pub const fn equals(&self, other: &Self) -> bool {
        let mut i = 0;
        while i < N {
            if self.map[i].0 != other.map[i].0 || self.map[i].1 != other.map[i].1 {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Constructor: verifies the table covers every cell of the W×H grid exactly once.
    ///
    /// # Panics
    ///
    /// On a wrong size, an out-of-range cell, a duplicate, or a missing cell. In a `const`
    /// this is a compile error.
    #[must_use]
    #[expect(
        clippy::indexing_slicing,
        clippy::arithmetic_side_effects,
        reason = "Cells are bounds-checked by the asserts above each access"
    )]
    pub const fn new(map: [(u16, u16); N]) -> Self {
        assert!(W > 0 && H > 0, "W and H must be positive");
        assert!(W * H == N, "W*H must equal N");
        assert!(N <= u16::MAX as usize, "LED count must fit in u16");

        let mut seen = [false; N];

        let mut i = 0;
        while i < N {
            let (column, strip) = map[i];
            let column = column as usize;
            let strip = strip as usize;

            assert!(column < W, "column out of bounds");
            assert!(strip < H, "strip out of bounds");

            let cell = strip * W + column;
            assert!(!seen[cell], "duplicate (column,strip) in wiring");
            seen[cell] = true;

            i += 1;
        }

        let mut k = 0;
        while k < N {
            assert!(seen[k], "wiring does not cover every cell");
            k += 1;
        }

        Self { map }
    }

    /// Strips chained top to bottom, even strips ascending and odd strips descending.
    #[must_use]
    #[expect(
        clippy::indexing_slicing,
        clippy::arithmetic_side_effects,
        reason = "Loop index stays below H"
    )]
    pub const fn serpentine() -> Self {
        let mut directions = [StripDirection::Ascending; H];
        let mut strip_index = 1;
        while strip_index < H {
            directions[strip_index] = StripDirection::Descending;
            strip_index += 2;
        }
        Self::from_strip_directions(directions)
    }

    /// Strips chained top to bottom, each running in the given direction.
    ///
    /// ```
    /// use led_text_display::led_layout::{LedLayout, StripDirection};
    ///
    /// // Every strip fed from the right edge.
    /// const WIRING: LedLayout<6, 3, 2> =
    ///     LedLayout::from_strip_directions([StripDirection::Descending; 2]);
    /// const EXPECTED: LedLayout<6, 3, 2> =
    ///     LedLayout::new([(2, 0), (1, 0), (0, 0), (2, 1), (1, 1), (0, 1)]);
    /// const _: () = assert!(WIRING.equals(&EXPECTED));
    /// ```
    ///
    /// # Panics
    ///
    /// If `W * H != N` or either is zero. In a `const` this is a compile error.
    #[must_use]
    #[expect(
        clippy::indexing_slicing,
        clippy::arithmetic_side_effects,
        clippy::cast_possible_truncation,
        reason = "Indices stay below W and H, and N fits in u16 (checked in new)"
    )]
    pub const fn from_strip_directions(directions: [StripDirection; H]) -> Self {
        assert!(W > 0 && H > 0, "W and H must be positive");
        assert!(W * H == N, "W*H must equal N");

        let mut mapping = [(0_u16, 0_u16); N];
        let mut strip_index = 0;
        while strip_index < H {
            let mut led_in_strip = 0;
            while led_in_strip < W {
                let column_index = match directions[strip_index] {
                    StripDirection::Ascending => led_in_strip,
                    StripDirection::Descending => W - 1 - led_in_strip,
                };
                mapping[strip_index * W + led_in_strip] =
                    (column_index as u16, strip_index as u16);
                led_in_strip += 1;
            }
            strip_index += 1;
        }
        Self::new(mapping)
    }

    /// Mirror columns, for a panel mounted back to front.
    ///
    /// ```
    /// use led_text_display::led_layout::LedLayout;
    ///
    /// const FLIPPED: LedLayout<6, 3, 2> = LedLayout::serpentine().flip_h();
    /// const EXPECTED: LedLayout<6, 3, 2> =
    ///     LedLayout::new([(2, 0), (1, 0), (0, 0), (0, 1), (1, 1), (2, 1)]);
    /// const _: () = assert!(FLIPPED.equals(&EXPECTED));
    /// ```
    #[must_use]
    #[expect(
        clippy::indexing_slicing,
        clippy::arithmetic_side_effects,
        clippy::cast_possible_truncation,
        reason = "Cells were validated by new"
    )]
    pub const fn flip_h(self) -> Self {
        let mut out = [(0u16, 0u16); N];
        let mut i = 0;
        while i < N {
            let (column, strip) = self.map[i];
            out[i] = ((W - 1 - column as usize) as u16, strip);
            i += 1;
        }
        Self::new(out)
    }

    /// Mirror strips, for a panel whose data line enters at the bottom.
    ///
    /// ```
    /// use led_text_display::led_layout::LedLayout;
    ///
    /// const FLIPPED: LedLayout<6, 3, 2> = LedLayout::serpentine().flip_v();
    /// const EXPECTED: LedLayout<6, 3, 2> =
    ///     LedLayout::new([(0, 1), (1, 1), (2, 1), (2, 0), (1, 0), (0, 0)]);
    /// const _: () = assert!(FLIPPED.equals(&EXPECTED));
    /// ```
    #[must_use]
    #[expect(
        clippy::indexing_slicing,
        clippy::arithmetic_side_effects,
        clippy::cast_possible_truncation,
        reason = "Cells were validated by new"
    )]
    pub const fn flip_v(self) -> Self {
        let mut out = [(0u16, 0u16); N];
        let mut i = 0;
        while i < N {
            let (column, strip) = self.map[i];
            out[i] = (column, (H - 1 - strip as usize) as u16);
            i += 1;
        }
        Self::new(out)
    }

    /// Reverse lookup: (strip, column) → LED index, stored at `strip * W + column`.
    ///
    /// ```
    /// use led_text_display::led_layout::LedLayout;
    ///
    /// const WIRING: LedLayout<6, 3, 2> = LedLayout::serpentine();
    /// const INDEX_BY_CELL: [u16; 6] = WIRING.led_index_by_cell();
    /// assert_eq!(INDEX_BY_CELL, [0, 1, 2, 5, 4, 3]);
    /// ```
    #[must_use]
    #[expect(
        clippy::indexing_slicing,
        clippy::arithmetic_side_effects,
        clippy::cast_possible_truncation,
        reason = "Cells were validated by new"
    )]
    pub const fn led_index_by_cell(&self) -> [u16; N] {
        let mut index_by_cell = [0u16; N];
        let mut led_index = 0;
        while led_index < N {
            let (column, strip) = self.map[led_index];
            index_by_cell[strip as usize * W + column as usize] = led_index as u16;
            led_index += 1;
        }
        index_by_cell
    }

    /// Walk `grid` (indexed `[strip][column]`) in transmission order.
    ///
    /// `grid` may be wider than the layout; columns past `W` are never read.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if `grid` is narrower than the layout.
    pub fn remap<T: Copy + Default, const C: usize>(&self, grid: &[[T; C]; H]) -> Result<[T; N]> {
        let mut physical = [T::default(); N];
        for (slot, &(column, strip)) in physical.iter_mut().zip(self.map.iter()) {
            *slot = *grid
                .get(usize::from(strip))
                .and_then(|row| row.get(usize::from(column)))
                .ok_or(Error::IndexOutOfBounds)?;
        }
        Ok(physical)
    }
}
