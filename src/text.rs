//! Text carried in three holding-register words, two symbol codes per word.
//!
//! The high byte of each word is the earlier symbol, matching Modbus big-endian registers:
//!
//! ```text
//! word:     [0]          [1]          [2]
//! byte:   hi    lo     hi    lo     hi    lo
//! slot:    1     2      3     4      5     6
//! ```

use crate::constants::{PAYLOAD_WORDS, SYMBOL_COUNT};
use crate::frame_buffer::FrameBuffer;
use crate::led_strip::Rgb;
use crate::position::Position;
use crate::Result;

/// Raw register words.
pub type TextPayload = [u16; PAYLOAD_WORDS];

/// Decoded symbol codes, slot 1 first.
pub type Symbols = [u8; SYMBOL_COUNT];

/// Split the payload into its six symbol codes.
///
/// ```
/// use led_text_display::text::{decode, encode_str};
///
/// assert_eq!(&decode(&encode_str("HELLO ")), b"HELLO ");
/// assert_eq!(decode(&[0x4849, 0x2100, 0x7f20]), [b'H', b'I', b'!', 0x00, 0x7f, b' ']);
/// ```
#[must_use]
pub fn decode(payload: &TextPayload) -> Symbols {
    let mut symbols = [0; SYMBOL_COUNT];
    for (pair, word) in symbols.chunks_exact_mut(2).zip(payload) {
        pair.copy_from_slice(&word.to_be_bytes());
    }
    symbols
}

/// Pack six symbol codes into register words; the inverse of [`decode`].
#[must_use]
pub fn encode(symbols: &Symbols) -> TextPayload {
    let mut payload = [0; PAYLOAD_WORDS];
    for (word, pair) in payload.iter_mut().zip(symbols.chunks_exact(2)) {
        if let [high, low] = *pair {
            *word = u16::from_be_bytes([high, low]);
        }
    }
    payload
}

/// Encode the first six bytes of `text`, padding with spaces.
///
/// Non-ASCII text is taken byte by byte; bytes without a glyph render blank.
#[must_use]
pub fn encode_str(text: &str) -> TextPayload {
    let mut symbols = [b' '; SYMBOL_COUNT];
    for (symbol, byte) in symbols.iter_mut().zip(text.bytes()) {
        *symbol = byte;
    }
    encode(&symbols)
}

/// Paint every symbol of `payload` in `foreground`, symbol *i* at position *i + 1*.
///
/// No symbol is skipped; a code without art still claims its slot and leaves it blank.
/// The background is not filled here.
///
/// # Errors
///
/// Propagates [`FrameBuffer::paint`] errors.
pub fn compose(
    frame_buffer: &mut FrameBuffer,
    payload: &TextPayload,
    foreground: Rgb,
) -> Result<()> {
    let symbols = decode(payload);
    debug!("compose: symbols {=[u8]:a}", symbols.as_slice());
    for (code, position) in symbols.into_iter().zip(Position::all()) {
        frame_buffer.paint(code, foreground, position)?;
    }
    Ok(())
}
