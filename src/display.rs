//! The display driver: composes a frame, remaps it to strip order, and hands it to the
//! strip transmitter.
//!
//! Every entry point runs one full render pass:
//!
//! 1. clear the ink mask and enter [`DisplayState::Composing`]
//! 2. paint the requested glyph(s) in the configured foreground, or let the caller draw
//!    ([`DisplayDriver::draw`])
//! 3. fill every remaining cell with the requested background
//! 4. return to [`DisplayState::Idle`] and [`DisplayDriver::flush`] all 252 LEDs
//!
//! ```
//! use core::convert::Infallible;
//! use led_text_display::display::{DisplayConfig, DisplayDriver};
//! use led_text_display::led_strip::{Rgb, SmartLedsWrite, colors};
//!
//! #[derive(Default)]
//! struct Capture(Vec<Rgb>);
//!
//! impl SmartLedsWrite for Capture {
//!     type Error = Infallible;
//!     type Color = Rgb;
//!
//!     fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
//!     where
//!         T: IntoIterator<Item = I>,
//!         I: Into<Self::Color>,
//!     {
//!         self.0 = iterator.into_iter().map(Into::into).collect();
//!         Ok(())
//!     }
//! }
//!
//! let mut display = DisplayDriver::new(Capture::default(), DisplayConfig::new());
//! display.display_symbol(b'A', colors::BLUE, 1).unwrap();
//!
//! let leds = display.strip().0.as_slice();
//! assert_eq!(leds.len(), 252);
//! // LED 0 is strip 0, column 0: background, since 'A' starts with ..#..
//! assert_eq!(leds[0], colors::BLUE);
//! assert_eq!(leds[2], colors::WHITE);
//! ```

use crate::constants::LED_COUNT;
use crate::frame_buffer::FrameBuffer;
use crate::led_layout::{DisplayLayout, SERPENTINE_WIRING};
use crate::led_strip::{
    Milliamps, Rgb, SmartLedsWrite, apply_max_brightness, colors, max_brightness_for,
};
use crate::position::Position;
use crate::registers::HoldingRegisters;
use crate::text::{self, TextPayload};
use crate::{Error, RenderError};

/// Construction-time settings of a [`DisplayDriver`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Ink color for every glyph.
    pub foreground: Rgb,
    /// Which LED lights which (column, strip) cell.
    pub wiring: DisplayLayout,
    /// Current budget; frames are dimmed to stay within it. `None` sends colors as composed.
    pub max_current: Option<Milliamps>,
}

impl DisplayConfig {
    /// White ink, serpentine wiring, no current limit.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            foreground: colors::WHITE,
            wiring: SERPENTINE_WIRING,
            max_current: None,
        }
    }

    #[must_use]
    pub const fn with_foreground(mut self, foreground: Rgb) -> Self {
        self.foreground = foreground;
        self
    }

    #[must_use]
    pub const fn with_wiring(mut self, wiring: DisplayLayout) -> Self {
        self.wiring = wiring;
        self
    }

    #[must_use]
    pub const fn with_max_current(mut self, max_current: Milliamps) -> Self {
        self.max_current = Some(max_current);
        self
    }

    /// Per-channel brightness ceiling implied by `max_current`.
    #[must_use]
    pub fn max_brightness(&self) -> u8 {
        match self.max_current {
            Some(max_current) => max_brightness_for(LED_COUNT, max_current),
            None => u8::MAX,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether a render pass is in progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayState {
    /// Glyphs are being painted; the frame is not ready to send.
    Composing,
    /// The frame buffer holds a complete frame.
    Idle,
}

/// Owns the frame buffer and the strip transmitter `S`.
///
/// Calls are blocking and run to completion; for use from several tasks see
/// [`crate::device_loop`].
pub struct DisplayDriver<S> {
    strip: S,
    config: DisplayConfig,
    frame_buffer: FrameBuffer,
    state: DisplayState,
}

impl<S> DisplayDriver<S>
where
    S: SmartLedsWrite<Color = Rgb>,
{
    /// Take ownership of `strip`. Nothing is sent until the first render.
    #[must_use]
    pub fn new(strip: S, config: DisplayConfig) -> Self {
        info!(
            "DisplayDriver::new: {=usize} LEDs, brightness cap {=u8}",
            LED_COUNT,
            config.max_brightness()
        );
        Self {
            strip,
            config,
            frame_buffer: FrameBuffer::new(),
            state: DisplayState::Idle,
        }
    }

    /// Show `symbol` at `position` (1..=6) on `background`. Every other slot goes blank.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPosition`] for a position outside 1..=6, in which case nothing is
    /// painted or sent. Transmitter failures come back as [`RenderError::Transmit`].
    pub fn display_symbol(
        &mut self,
        symbol: u8,
        background: Rgb,
        position: u8,
    ) -> Result<(), RenderError<S::Error>> {
        let position = Position::new(position).inspect_err(|_| {
            warn!("display_symbol: rejected position {=u8}", position);
        })?;
        info!(
            "display_symbol: {=u8:#x} at position {=u8}",
            symbol,
            position.get()
        );

        self.begin_pass();
        self.frame_buffer
            .paint(symbol, self.config.foreground, position)?;
        self.end_pass(background);
        self.flush()
    }

    /// Show the six symbols carried by `payload` on `background`.
    ///
    /// # Errors
    ///
    /// Transmitter failures come back as [`RenderError::Transmit`].
    pub fn display_text(
        &mut self,
        payload: &TextPayload,
        background: Rgb,
    ) -> Result<(), RenderError<S::Error>> {
        info!("display_text: {=[?]:#x}", payload.as_slice());
        self.render_text(payload, self.config.foreground, background)
    }

    /// Show a register snapshot: its text in its own foreground on its own background.
    ///
    /// The configured foreground is left unchanged.
    ///
    /// # Errors
    ///
    /// Transmitter failures come back as [`RenderError::Transmit`].
    pub fn display_registers(
        &mut self,
        registers: &HoldingRegisters,
    ) -> Result<(), RenderError<S::Error>> {
        info!(
            "display_registers: text {=[?]:#x}, colors {=u16:#x} on {=u16:#x}",
            registers.text.as_slice(),
            registers.foreground,
            registers.background
        );
        self.render_text(
            &registers.text,
            registers.foreground_rgb(),
            registers.background_rgb(),
        )
    }

    /// Compose a frame by hand, then fill `background` and send it.
    ///
    /// `draw` gets the freshly cleared frame buffer; glyphs from [`FrameBuffer::paint`] and
    /// anything drawn with `embedded-graphics` count as ink.
    ///
    /// ```
    /// # use core::convert::Infallible;
    /// # use led_text_display::led_strip::{Rgb, SmartLedsWrite};
    /// # struct Ws2812;
    /// # impl SmartLedsWrite for Ws2812 {
    /// #     type Error = Infallible;
    /// #     type Color = Rgb;
    /// #     fn write<T, I>(&mut self, _: T) -> Result<(), Self::Error>
    /// #     where T: IntoIterator<Item = I>, I: Into<Self::Color> { Ok(()) }
    /// # }
    /// use embedded_graphics::{prelude::*, primitives::{Line, PrimitiveStyle}};
    /// use embedded_graphics::pixelcolor::Rgb888;
    /// use led_text_display::led_strip::colors;
    /// use led_text_display::{DisplayConfig, DisplayDriver, Position};
    ///
    /// let mut display = DisplayDriver::new(Ws2812, DisplayConfig::new());
    /// display
    ///     .draw(colors::BLACK, |frame_buffer| {
    ///         frame_buffer.paint(b'7', colors::WHITE, Position::FIRST)?;
    ///         let Ok(()) = Line::new(Point::new(6, 6), Point::new(35, 6))
    ///             .into_styled(PrimitiveStyle::with_stroke(Rgb888::RED, 1))
    ///             .draw(frame_buffer);
    ///         Ok(())
    ///     })
    ///     .unwrap();
    /// ```
    ///
    /// # Errors
    ///
    /// Whatever `draw` returns, in which case nothing is sent and the pass stays open until
    /// the next render. Transmitter failures come back as [`RenderError::Transmit`].
    pub fn draw<F>(&mut self, background: Rgb, draw: F) -> Result<(), RenderError<S::Error>>
    where
        F: FnOnce(&mut FrameBuffer) -> crate::Result<()>,
    {
        info!("draw");
        self.begin_pass();
        draw(&mut self.frame_buffer)?;
        self.end_pass(background);
        self.flush()
    }

    /// Light the whole display in `background`.
    ///
    /// # Errors
    ///
    /// Transmitter failures come back as [`RenderError::Transmit`].
    pub fn clear(&mut self, background: Rgb) -> Result<(), RenderError<S::Error>> {
        info!("clear");
        self.begin_pass();
        self.end_pass(background);
        self.flush()
    }

    /// Send the frame buffer's visible window to the strips in wiring order.
    ///
    /// Every render entry point ends with this; call it directly to resend the current frame.
    ///
    /// # Errors
    ///
    /// [`Error::NotIdle`] while a pass is being composed. Transmitter failures come back as
    /// [`RenderError::Transmit`]; the frame is not retried.
    pub fn flush(&mut self) -> Result<(), RenderError<S::Error>> {
        if self.state != DisplayState::Idle {
            return Err(Error::NotIdle.into());
        }

        let mut frame = self.config.wiring.remap(self.frame_buffer.pixels())?;
        apply_max_brightness(&mut frame, self.config.max_brightness());

        debug!("flush: sending {=usize} LEDs", frame.len());
        self.strip.write(frame).map_err(|err| {
            warn!("flush: strip transmitter failed");
            RenderError::Transmit(err)
        })
    }

    /// Change the ink color used by later symbol and text renders.
    pub fn set_foreground(&mut self, foreground: Rgb) {
        self.config.foreground = foreground;
    }

    #[must_use]
    pub const fn config(&self) -> &DisplayConfig {
        &self.config
    }

    #[must_use]
    pub const fn state(&self) -> DisplayState {
        self.state
    }

    #[must_use]
    pub const fn frame_buffer(&self) -> &FrameBuffer {
        &self.frame_buffer
    }

    /// The strip transmitter.
    #[must_use]
    pub const fn strip(&self) -> &S {
        &self.strip
    }

    /// Give back the strip transmitter.
    #[must_use]
    pub fn into_strip(self) -> S {
        self.strip
    }

    fn render_text(
        &mut self,
        payload: &TextPayload,
        foreground: Rgb,
        background: Rgb,
    ) -> Result<(), RenderError<S::Error>> {
        self.begin_pass();
        text::compose(&mut self.frame_buffer, payload, foreground)?;
        self.end_pass(background);
        self.flush()
    }

    fn begin_pass(&mut self) {
        self.frame_buffer.clear_mask();
        self.state = DisplayState::Composing;
    }

    fn end_pass(&mut self, background: Rgb) {
        self.frame_buffer.fill(background);
        self.state = DisplayState::Idle;
    }
}
