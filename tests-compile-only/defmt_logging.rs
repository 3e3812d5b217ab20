//! Compile-only verification of the `defmt` feature.
//!
//! Builds every logging call site and every `defmt::Format` impl. There is no global logger
//! on the host, so this is checked but never linked or run.
//! Run via: `cargo check-all`

#![allow(dead_code, reason = "Compile-time verification only")]

use led_text_display::font::{self, Glyph};
use led_text_display::led_layout::StripDirection;
use led_text_display::led_strip::{Milliamps, Rgb, SmartLedsWrite, colors};
use led_text_display::text::encode_str;
use led_text_display::{
    DisplayConfig, DisplayDriver, DisplayState, Error, HoldingRegisters, Position, RenderError,
};

#[derive(Debug, defmt::Format)]
struct LineFault;

struct Ws2812;

impl SmartLedsWrite for Ws2812 {
    type Error = LineFault;
    type Color = Rgb;

    fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        iterator.into_iter().for_each(drop);
        Ok(())
    }
}

fn log_render(result: Result<(), RenderError<LineFault>>) {
    if let Err(err) = result {
        defmt::warn!("render failed: {}", err);
    }
}

fn main() {
    let config = DisplayConfig::new().with_max_current(Milliamps(1000));
    defmt::info!("budget {}", config.max_current);

    let mut display = DisplayDriver::new(Ws2812, config);
    log_render(display.display_symbol(b'A', colors::BLACK, 1));
    log_render(display.display_symbol(b'A', colors::BLACK, 9));
    log_render(display.display_text(&encode_str("defmt!"), colors::BLACK));

    let registers = HoldingRegisters::with_text("on", colors::GREEN, colors::BLACK);
    defmt::info!("registers {}", registers);
    log_render(display.display_registers(&registers));
    log_render(display.draw(colors::BLACK, |frame_buffer| {
        frame_buffer.paint_at(b'x', colors::RED, 2)
    }));
    log_render(display.clear(colors::BLACK));

    let state: DisplayState = display.state();
    let glyph: Glyph = font::lookup(b'?');
    let error: Error = Error::NotIdle;
    defmt::info!(
        "state {}, glyph {}, error {}, position {}, direction {}",
        state,
        glyph,
        error,
        Position::FIRST,
        StripDirection::Descending
    );
}
