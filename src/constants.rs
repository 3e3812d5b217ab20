//! Fixed geometry of the dot-matrix display.

/// Number of LED strips; one glyph row is drawn on each strip.
pub const STRIPS_NUMBER: usize = 7;

/// Number of LEDs on a single strip.
pub const STRIP_LEDS_NUMBER: usize = 36;

/// Total LEDs written to the transmitter on every flush.
pub const LED_COUNT: usize = STRIPS_NUMBER * STRIP_LEDS_NUMBER;

/// Frame buffer width: the visible window plus an equally wide off-screen page.
pub const FRAME_COLUMNS: usize = 2 * STRIP_LEDS_NUMBER;

/// Glyph height in pixels.
pub const GLYPH_ROWS: usize = 7;

/// Glyph width in pixels (the low 5 bits of each font row byte).
pub const GLYPH_COLUMNS: usize = 5;

/// Columns reserved per symbol slot: the glyph plus one spacing column.
pub const SLOT_WIDTH: usize = 6;

/// Symbol slots on the display.
pub const SYMBOL_COUNT: usize = 6;

/// Holding-register words carrying the encoded text.
pub const PAYLOAD_WORDS: usize = 3;

const _: () = assert!(
    GLYPH_ROWS == STRIPS_NUMBER,
    "each glyph row must own one strip"
);
const _: () = assert!(
    SLOT_WIDTH * SYMBOL_COUNT <= STRIP_LEDS_NUMBER,
    "slots must fit on a strip"
);
const _: () = assert!(GLYPH_COLUMNS < SLOT_WIDTH, "a slot needs a spacing column");
const _: () = assert!(
    PAYLOAD_WORDS * 2 == SYMBOL_COUNT,
    "two symbols per payload word"
);
