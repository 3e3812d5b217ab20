//! Host-level tests for the display driver, checked at the strip transmitter.

mod common;

use common::{FailingStrip, LineFault, RecordingStrip};
use embedded_graphics::Drawable;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::{Point, Primitive, RgbColor};
use embedded_graphics::primitives::{Line, PrimitiveStyle};
use led_text_display::constants::{LED_COUNT, STRIP_LEDS_NUMBER};
use led_text_display::font;
use led_text_display::led_layout::SERPENTINE_WIRING;
use led_text_display::led_strip::{Milliamps, Rgb, colors};
use led_text_display::text::encode_str;
use led_text_display::{
    DisplayConfig, DisplayDriver, DisplayState, Error, HoldingRegisters, Position, RenderError,
};

/// LED index that lights (`column`, `strip`) on the serpentine display.
fn led_at(column: usize, strip: usize) -> usize {
    let index_by_cell = SERPENTINE_WIRING.led_index_by_cell();
    usize::from(index_by_cell[strip * STRIP_LEDS_NUMBER + column])
}

fn recording_display() -> (DisplayDriver<RecordingStrip>, RecordingStrip) {
    let strip = RecordingStrip::default();
    (DisplayDriver::new(strip.clone(), DisplayConfig::new()), strip)
}

#[test]
fn default_config_is_white_on_serpentine() {
    let config = DisplayConfig::default();
    assert_eq!(config.foreground, colors::WHITE);
    assert!(config.wiring.equals(&SERPENTINE_WIRING));
    assert_eq!(config.max_current, None);
    assert_eq!(config.max_brightness(), u8::MAX);
}

#[test]
fn symbol_sends_every_led_once() {
    let (mut display, strip) = recording_display();
    display.display_symbol(b'A', colors::BLACK, 1).unwrap();

    assert_eq!(strip.frame_count(), 1);
    assert_eq!(strip.last_frame().len(), LED_COUNT);
    assert_eq!(display.state(), DisplayState::Idle);
}

#[test]
fn symbol_lands_on_the_wired_leds() {
    let (mut display, strip) = recording_display();
    display.display_symbol(b'A', colors::BLUE, 2).unwrap();
    let frame = strip.last_frame();

    let glyph = font::lookup(b'A');
    for strip_index in 0..7 {
        for column in 0..STRIP_LEDS_NUMBER {
            let in_glyph = (6..11).contains(&column) && glyph.is_ink(strip_index, column - 6);
            let expected = if in_glyph { colors::WHITE } else { colors::BLUE };
            assert_eq!(
                frame[led_at(column, strip_index)],
                expected,
                "({column}, {strip_index})"
            );
        }
    }
}

#[test]
fn odd_strips_are_sent_right_to_left() {
    let (mut display, strip) = recording_display();
    // '|' lights column 2 of its slot on every strip.
    display.display_symbol(b'|', colors::BLACK, 1).unwrap();
    let frame = strip.last_frame();

    assert_eq!(frame[2], colors::WHITE);
    // Strip 1 starts at column 35; column 2 is its 34th LED.
    assert_eq!(frame[STRIP_LEDS_NUMBER], colors::BLACK);
    assert_eq!(frame[STRIP_LEDS_NUMBER + 33], colors::WHITE);
}

#[test]
fn invalid_position_sends_nothing() {
    let (mut display, strip) = recording_display();
    display.display_symbol(b'A', colors::RED, 3).unwrap();
    let frame_buffer_before = display.frame_buffer().clone();

    for position in [0, 7, 255] {
        assert_eq!(
            display.display_symbol(b'B', colors::GREEN, position),
            Err(RenderError::Render(Error::InvalidPosition(position)))
        );
    }
    assert_eq!(strip.frame_count(), 1);
    assert_eq!(display.frame_buffer(), &frame_buffer_before);
}

#[test]
fn new_symbol_clears_the_previous_one() {
    let (mut display, strip) = recording_display();
    display.display_symbol(b'#', colors::BLACK, 1).unwrap();
    display.display_symbol(b'#', colors::BLACK, 6).unwrap();

    let frame = strip.last_frame();
    for column in 0..5 {
        for strip_index in 0..7 {
            assert_eq!(frame[led_at(column, strip_index)], colors::BLACK);
        }
    }
}

#[test]
fn text_shows_all_six_symbols() {
    let (mut display, strip) = recording_display();
    display.set_foreground(colors::ORANGE);
    display
        .display_text(&encode_str("HELLO!"), colors::BLACK)
        .unwrap();

    assert_eq!(strip.frame_count(), 1);
    let frame = strip.last_frame();
    for (slot, code) in b"HELLO!".iter().enumerate() {
        let glyph = font::lookup(*code);
        let origin = slot * 6;
        for strip_index in 0..7 {
            for column in 0..5 {
                let expected = if glyph.is_ink(strip_index, column) {
                    colors::ORANGE
                } else {
                    colors::BLACK
                };
                assert_eq!(frame[led_at(origin + column, strip_index)], expected);
            }
        }
    }
    // Spacing columns and the unused right edge are background.
    for column in [5, 11, 17, 23, 29, 35] {
        assert_eq!(frame[led_at(column, 3)], colors::BLACK);
    }
}

#[test]
fn blank_text_is_all_background() {
    let (mut display, strip) = recording_display();
    display
        .display_text(&encode_str("      "), colors::TEAL)
        .unwrap();
    assert!(strip.last_frame().iter().all(|&led| led == colors::TEAL));
}

#[test]
fn registers_bring_their_own_colors() {
    let (mut display, strip) = recording_display();
    let registers = HoldingRegisters::from_words(&[0x4849, 0x2020, 0x2020, 0xF800, 0x001F]);
    display.display_registers(&registers).unwrap();

    let frame = strip.last_frame();
    // 'H' has ink in its top-left corner.
    assert_eq!(frame[led_at(0, 0)], Rgb::new(255, 0, 0));
    assert_eq!(frame[led_at(5, 0)], Rgb::new(0, 0, 255));
    // The configured foreground is untouched.
    assert_eq!(display.config().foreground, colors::WHITE);
}

#[test]
fn clear_lights_everything_in_background() {
    let (mut display, strip) = recording_display();
    display.display_symbol(b'X', colors::BLACK, 4).unwrap();
    display.clear(colors::GREEN).unwrap();
    assert!(strip.last_frame().iter().all(|&led| led == colors::GREEN));
}

#[test]
fn flush_resends_the_current_frame() {
    let (mut display, strip) = recording_display();
    display.display_symbol(b'k', colors::BLACK, 5).unwrap();
    let first = strip.last_frame();
    display.flush().unwrap();
    assert_eq!(strip.frame_count(), 2);
    assert_eq!(strip.last_frame(), first);
}

#[test]
fn transmit_errors_are_returned_verbatim() {
    let mut display = DisplayDriver::new(FailingStrip::default(), DisplayConfig::new());
    assert_eq!(
        display.display_symbol(b'A', colors::BLACK, 1),
        Err(RenderError::Transmit(LineFault))
    );
    assert_eq!(
        display.display_text(&encode_str("retry"), colors::BLACK),
        Err(RenderError::Transmit(LineFault))
    );
    // Not retried.
    assert_eq!(display.into_strip().attempts, 2);
}

#[test]
fn current_limit_dims_the_frame() {
    let strip = RecordingStrip::default();
    // Half of full white for 252 LEDs at 60mA.
    let config = DisplayConfig::new().with_max_current(Milliamps(7560));
    let mut display = DisplayDriver::new(strip.clone(), config);
    display.clear(colors::WHITE).unwrap();

    assert_eq!(config.max_brightness(), 127);
    assert!(
        strip
            .last_frame()
            .iter()
            .all(|&led| led == Rgb::new(127, 127, 127))
    );
}

#[test]
fn custom_wiring_is_honored() {
    let strip = RecordingStrip::default();
    let mirrored = SERPENTINE_WIRING.flip_h();
    let config = DisplayConfig::new()
        .with_wiring(mirrored)
        .with_foreground(colors::RED);
    let mut display = DisplayDriver::new(strip.clone(), config);
    display.display_symbol(b'|', colors::BLACK, 1).unwrap();

    // LED 0 now sits at column 35; column 2 is LED 33.
    let frame = strip.last_frame();
    assert_eq!(frame[0], colors::BLACK);
    assert_eq!(frame[33], colors::RED);
    assert_eq!(
        mirrored.map()[0],
        (35, 0),
        "mirrored wiring starts at the right edge"
    );
}

#[test]
fn bottom_fed_wiring_is_honored() {
    let strip = RecordingStrip::default();
    let config = DisplayConfig::new().with_wiring(SERPENTINE_WIRING.flip_v());
    let mut display = DisplayDriver::new(strip.clone(), config);
    // '_' only lights the bottom strip.
    display.display_symbol(b'_', colors::BLACK, 1).unwrap();

    let frame = strip.last_frame();
    // The data line now enters at strip 6, column 0.
    assert!(frame[..5].iter().all(|&led| led == colors::WHITE));
    assert_eq!(frame[5], colors::BLACK);
    let lit = frame.iter().filter(|&&led| led == colors::WHITE).count();
    assert_eq!(lit, 5);
}

#[test]
fn drawing_reaches_the_strips() {
    let (mut display, strip) = recording_display();
    display
        .draw(colors::BLACK, |frame_buffer| {
            frame_buffer.paint(b'|', colors::GREEN, Position::FIRST)?;
            let Ok(()) = Line::new(Point::new(0, 6), Point::new(35, 6))
                .into_styled(PrimitiveStyle::with_stroke(Rgb888::RED, 1))
                .draw(frame_buffer);
            Ok(())
        })
        .unwrap();

    assert_eq!(strip.frame_count(), 1);
    assert_eq!(display.state(), DisplayState::Idle);
    let frame = strip.last_frame();
    // The line covers the bottom strip, including the glyph's last row.
    for column in 0..STRIP_LEDS_NUMBER {
        assert_eq!(frame[led_at(column, 6)], colors::RED, "column {column}");
    }
    for strip_index in 0..6 {
        assert_eq!(frame[led_at(2, strip_index)], colors::GREEN);
        assert_eq!(frame[led_at(3, strip_index)], colors::BLACK);
    }
}

#[test]
fn drawing_outside_the_window_is_clipped() {
    let (mut display, strip) = recording_display();
    display
        .draw(colors::BLUE, |frame_buffer| {
            let Ok(()) = Line::new(Point::new(-5, 3), Point::new(60, 3))
                .into_styled(PrimitiveStyle::with_stroke(Rgb888::WHITE, 1))
                .draw(frame_buffer);
            Ok(())
        })
        .unwrap();

    let frame = strip.last_frame();
    assert_eq!(frame.len(), LED_COUNT);
    assert_eq!(
        frame.iter().filter(|&&led| led == colors::WHITE).count(),
        STRIP_LEDS_NUMBER
    );
    // Nothing drawn past the window reaches the off-screen page.
    let frame_buffer = display.frame_buffer();
    assert!(!frame_buffer.is_ink(3, STRIP_LEDS_NUMBER));
}

#[test]
fn failed_draw_sends_nothing_and_blocks_flush() {
    let (mut display, strip) = recording_display();
    assert_eq!(
        display.draw(colors::BLACK, |frame_buffer| {
            frame_buffer.paint_at(b'A', colors::RED, 9)
        }),
        Err(RenderError::Render(Error::InvalidPosition(9)))
    );
    assert_eq!(strip.frame_count(), 0);
    assert_eq!(display.state(), DisplayState::Composing);
    assert_eq!(display.flush(), Err(RenderError::Render(Error::NotIdle)));

    // The next render closes the pass.
    display.clear(colors::BLACK).unwrap();
    assert_eq!(display.state(), DisplayState::Idle);
    assert_eq!(strip.frame_count(), 1);
}
