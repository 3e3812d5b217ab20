//! The logical pixel grid every render pass composes into.
//!
//! A pass is two phases: [`FrameBuffer::paint`] writes glyph ink and marks it in the mask,
//! then [`FrameBuffer::fill`] writes the background into every cell the mask leaves free.
//! Foreground and background are therefore independent and no blending is needed.
//!
//! ```
//! use led_text_display::frame_buffer::FrameBuffer;
//! use led_text_display::led_strip::colors;
//! use led_text_display::position::Position;
//!
//! let mut frame_buffer = FrameBuffer::new();
//! frame_buffer.paint(b'A', colors::RED, Position::FIRST).unwrap();
//! frame_buffer.fill(colors::BLACK);
//!
//! // Top row of 'A' is ..#..
//! assert_eq!(frame_buffer.pixel(0, 2), Some(colors::RED));
//! assert_eq!(frame_buffer.pixel(0, 0), Some(colors::BLACK));
//! ```

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::{DrawTarget, OriginDimensions, Pixel, Size};

use crate::color::rgb888_to_rgb8;
use crate::constants::{
    FRAME_COLUMNS, GLYPH_COLUMNS, GLYPH_ROWS, SLOT_WIDTH, STRIP_LEDS_NUMBER, STRIPS_NUMBER,
};
use crate::font;
use crate::led_strip::Rgb;
use crate::position::Position;
use crate::{Error, Result};

/// Pixel rows, one per strip, each twice as wide as a strip.
pub type Pixels = [[Rgb; FRAME_COLUMNS]; STRIPS_NUMBER];

/// Ink flags over the visible window.
pub type Mask = [[bool; STRIP_LEDS_NUMBER]; STRIPS_NUMBER];

#[expect(clippy::cast_possible_truncation, reason = "Display dimensions are small constants")]
const VISIBLE_SIZE: Size = Size::new(STRIP_LEDS_NUMBER as u32, STRIPS_NUMBER as u32);

/// Frame buffer plus the ink mask of the current render pass.
///
/// Row `strip` holds what strip `strip` shows (strip 0 is the top row). Columns
/// `0..STRIP_LEDS_NUMBER` are visible; the rest form an off-screen page that only ever
/// receives background.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameBuffer {
    pixels: Pixels,
    mask: Mask,
}

impl FrameBuffer {
    /// All black, nothing marked as ink.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pixels: [[Rgb::new(0, 0, 0); FRAME_COLUMNS]; STRIPS_NUMBER],
            mask: [[false; STRIP_LEDS_NUMBER]; STRIPS_NUMBER],
        }
    }

    /// Forget all ink marks. Starts a new render pass; pixels are left as they are.
    pub fn clear_mask(&mut self) {
        self.mask = [[false; STRIP_LEDS_NUMBER]; STRIPS_NUMBER];
    }

    /// Paint the glyph for `code` in `foreground` at `position`.
    ///
    /// The slot's mask is cleared first, so only this glyph's ink is marked there afterwards.
    /// Cells without ink keep their pixel and stay unmarked until [`FrameBuffer::fill`].
    /// Unknown codes paint nothing and leave the slot blank.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if a write would leave the grid.
    pub fn paint(&mut self, code: u8, foreground: Rgb, position: Position) -> Result<()> {
        let glyph = font::lookup(code);
        let origin = position.column_origin();
        trace!(
            "paint: code {=u8:#x} at position {=u8} (column {=usize}), {=u32} ink cells",
            code,
            position.get(),
            origin,
            glyph.ink_count()
        );

        self.clear_slot_mask(origin)?;
        for row_index in 0..GLYPH_ROWS {
            for column_index in 0..GLYPH_COLUMNS {
                if glyph.is_ink(row_index, column_index) {
                    let column = origin
                        .checked_add(column_index)
                        .ok_or(Error::IndexOutOfBounds)?;
                    self.set_ink(row_index, column, foreground)?;
                }
            }
        }
        Ok(())
    }

    /// [`FrameBuffer::paint`] with an unchecked slot number.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPosition`] for 0 or anything above 6, before touching the
    /// buffer or the mask.
    pub fn paint_at(&mut self, code: u8, foreground: Rgb, position: u8) -> Result<()> {
        let position = Position::new(position).inspect_err(|_| {
            warn!("paint: rejected position {=u8}", position);
        })?;
        self.paint(code, foreground, position)
    }

    /// Write `background` into every cell not marked as ink, including the off-screen page.
    ///
    /// Idempotent; running it twice gives the same buffer.
    pub fn fill(&mut self, background: Rgb) {
        for (pixel_row, mask_row) in self.pixels.iter_mut().zip(self.mask.iter()) {
            for (column_index, pixel) in pixel_row.iter_mut().enumerate() {
                let is_ink = mask_row.get(column_index).copied().unwrap_or(false);
                if !is_ink {
                    *pixel = background;
                }
            }
        }
    }

    /// Pixel at (`strip`, `column`), or `None` outside the grid.
    #[must_use]
    pub fn pixel(&self, strip: usize, column: usize) -> Option<Rgb> {
        self.pixels.get(strip)?.get(column).copied()
    }

    /// True when (`strip`, `column`) is glyph ink in the current pass.
    #[must_use]
    pub fn is_ink(&self, strip: usize, column: usize) -> bool {
        self.mask
            .get(strip)
            .and_then(|row| row.get(column))
            .copied()
            .unwrap_or(false)
    }

    /// Every pixel row, off-screen page included.
    #[must_use]
    pub const fn pixels(&self) -> &Pixels {
        &self.pixels
    }

    /// The current ink mask.
    #[must_use]
    pub const fn mask(&self) -> &Mask {
        &self.mask
    }

    /// Visible part of each row, top strip first.
    pub fn visible_rows(&self) -> impl Iterator<Item = &[Rgb]> + '_ {
        self.pixels
            .iter()
            .map(|row| row.get(..STRIP_LEDS_NUMBER).unwrap_or(row.as_slice()))
    }

    fn clear_slot_mask(&mut self, origin: usize) -> Result<()> {
        let end = origin
            .checked_add(SLOT_WIDTH)
            .ok_or(Error::IndexOutOfBounds)?;
        for mask_row in &mut self.mask {
            mask_row
                .get_mut(origin..end)
                .ok_or(Error::IndexOutOfBounds)?
                .fill(false);
        }
        Ok(())
    }

    fn set_ink(&mut self, strip: usize, column: usize, color: Rgb) -> Result<()> {
        let mask_cell = self
            .mask
            .get_mut(strip)
            .and_then(|row| row.get_mut(column))
            .ok_or(Error::IndexOutOfBounds)?;
        let pixel = self
            .pixels
            .get_mut(strip)
            .and_then(|row| row.get_mut(column))
            .ok_or(Error::IndexOutOfBounds)?;
        *pixel = color;
        *mask_cell = true;
        Ok(())
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        VISIBLE_SIZE
    }
}

/// Drawing lands in the visible window and is marked as ink, so it survives
/// [`FrameBuffer::fill`] like glyphs do. Pixels outside the window are clipped.
///
/// Draw through [`crate::DisplayDriver::draw`] to get the result onto the strips.
impl DrawTarget for FrameBuffer {
    type Color = Rgb888;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> core::result::Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            let (Ok(column_index), Ok(row_index)) =
                (usize::try_from(coord.x), usize::try_from(coord.y))
            else {
                continue;
            };
            if column_index < STRIP_LEDS_NUMBER {
                // Clipped rows simply miss in `set_ink`.
                let _ = self.set_ink(row_index, column_index, rgb888_to_rgb8(color));
            }
        }
        Ok(())
    }
}
