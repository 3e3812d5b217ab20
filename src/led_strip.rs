//! Pixel type and the output stage shared by every strip frame.
//!
//! The physical transmitter is anything implementing [`SmartLedsWrite`] with `RGB8` items,
//! e.g. a WS2812 PIO, SPI, or RMT driver. This module only prepares what it receives.

pub use smart_leds::SmartLedsWrite;
/// RGB color constants.
pub use smart_leds::colors;
use smart_leds::RGB8;

/// RGB color representation re-exported from `smart_leds`.
pub type Rgb = RGB8;

/// Current budget for the whole display, specified in milliamps.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Milliamps(pub u16);

impl Milliamps {
    #[must_use]
    pub fn as_u32(self) -> u32 {
        u32::from(self.0)
    }
}

// A WS2812 draws about 60mA at full white.
const MILLIAMPS_PER_LED: u32 = 60;

#[inline]
#[expect(clippy::integer_division_remainder_used, reason = "Scaling by a 0..=255 ratio")]
fn scale_brightness(value: u8, brightness: u8) -> u8 {
    let scaled = u16::from(value).saturating_mul(u16::from(brightness)) / 255;
    u8::try_from(scaled).unwrap_or(u8::MAX)
}

/// Highest per-channel brightness that keeps `led_count` LEDs at full white within `max_current`.
///
/// Returns 255 when the budget covers full white (or there are no LEDs), and 0 for an empty
/// budget.
#[must_use]
pub fn max_brightness_for(led_count: usize, max_current: Milliamps) -> u8 {
    let Some(full_white) = u32::try_from(led_count)
        .ok()
        .and_then(|count| count.checked_mul(MILLIAMPS_PER_LED))
    else {
        return 0;
    };
    max_current
        .as_u32()
        .saturating_mul(u32::from(u8::MAX))
        .checked_div(full_white)
        .map_or(u8::MAX, |brightness| u8::try_from(brightness).unwrap_or(u8::MAX))
}

/// Applies a brightness cap to an entire frame in place.
pub fn apply_max_brightness(frame: &mut [Rgb], max_brightness: u8) {
    if max_brightness == u8::MAX {
        return;
    }
    for color in frame.iter_mut() {
        *color = Rgb::new(
            scale_brightness(color.r, max_brightness),
            scale_brightness(color.g, max_brightness),
            scale_brightness(color.b, max_brightness),
        );
    }
}
