//! Color conversions between the register format (RGB565), the strip format (RGB8), and
//! [`embedded-graphics`](https://docs.rs/embedded-graphics).

use embedded_graphics::pixelcolor::raw::RawU16;
use embedded_graphics::pixelcolor::{Rgb565, Rgb888};
use embedded_graphics::prelude::{IntoStorage, RgbColor};

use crate::led_strip::Rgb;

/// Widen a 16-bit RGB565 color (5:6:5, red in the top bits) to 8 bits per channel.
///
/// Each channel is shifted up and its top bits replicated into the freed low bits, so
/// `0` stays `0`, the channel maximum becomes `255`, and larger inputs never map lower.
///
/// ```
/// use led_text_display::color::rgb565_to_rgb888;
/// use led_text_display::led_strip::Rgb;
///
/// assert_eq!(rgb565_to_rgb888(0xF800), Rgb::new(255, 0, 0));
/// assert_eq!(rgb565_to_rgb888(0x07E0), Rgb::new(0, 255, 0));
/// assert_eq!(rgb565_to_rgb888(0x001F), Rgb::new(0, 0, 255));
/// ```
#[must_use]
pub fn rgb565_to_rgb888(color: u16) -> Rgb {
    let rgb565 = Rgb565::from(RawU16::new(color));
    Rgb::new(
        widen_5(rgb565.r()),
        widen_6(rgb565.g()),
        widen_5(rgb565.b()),
    )
}

/// Narrow an RGB8 color to RGB565 by dropping the low bits of each channel.
#[must_use]
#[expect(clippy::arithmetic_side_effects, reason = "Bit operations")]
pub fn rgb888_to_rgb565(color: Rgb) -> u16 {
    Rgb565::new(color.r >> 3, color.g >> 2, color.b >> 3).into_storage()
}

/// Convert RGB8 (smart-leds) to Rgb888 (embedded-graphics).
#[must_use]
pub const fn rgb8_to_rgb888(color: Rgb) -> Rgb888 {
    Rgb888::new(color.r, color.g, color.b)
}

/// Convert Rgb888 (embedded-graphics) to RGB8 (smart-leds).
#[must_use]
pub fn rgb888_to_rgb8(color: Rgb888) -> Rgb {
    Rgb::new(color.r(), color.g(), color.b())
}

#[expect(clippy::arithmetic_side_effects, reason = "Bit operations")]
const fn widen_5(channel: u8) -> u8 {
    (channel << 3) | (channel >> 2)
}

#[expect(clippy::arithmetic_side_effects, reason = "Bit operations")]
const fn widen_6(channel: u8) -> u8 {
    (channel << 2) | (channel >> 4)
}
