//! The holding-register block a register backend (e.g. Modbus) exposes to the display.
//!
//! ```text
//! address  content
//!   0..=2  text, two symbol codes per word (see `text`)
//!   3      foreground color, RGB565
//!   4      background color, RGB565
//! ```

use crate::color::{rgb565_to_rgb888, rgb888_to_rgb565};
use crate::constants::PAYLOAD_WORDS;
use crate::led_strip::Rgb;
use crate::text::{self, TextPayload};

/// Number of holding registers the display occupies.
pub const HOLDING_REGISTER_COUNT: usize = PAYLOAD_WORDS + 2;

/// Address of the foreground color register.
pub const FOREGROUND_REGISTER: usize = PAYLOAD_WORDS;

/// Address of the background color register.
pub const BACKGROUND_REGISTER: usize = PAYLOAD_WORDS + 1;

/// One snapshot of the display's holding registers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HoldingRegisters {
    /// Encoded text.
    pub text: TextPayload,
    /// Ink color, RGB565.
    pub foreground: u16,
    /// Background color, RGB565.
    pub background: u16,
}

impl HoldingRegisters {
    /// Build from the raw register words, lowest address first.
    #[must_use]
    pub const fn from_words(words: &[u16; HOLDING_REGISTER_COUNT]) -> Self {
        Self {
            text: [words[0], words[1], words[2]],
            foreground: words[FOREGROUND_REGISTER],
            background: words[BACKGROUND_REGISTER],
        }
    }

    /// Raw register words, lowest address first.
    #[must_use]
    pub const fn to_words(&self) -> [u16; HOLDING_REGISTER_COUNT] {
        [
            self.text[0],
            self.text[1],
            self.text[2],
            self.foreground,
            self.background,
        ]
    }

    /// Registers showing `text` (first six bytes, space padded) in the given colors.
    #[must_use]
    pub fn with_text(text: &str, foreground: Rgb, background: Rgb) -> Self {
        Self {
            text: text::encode_str(text),
            foreground: rgb888_to_rgb565(foreground),
            background: rgb888_to_rgb565(background),
        }
    }

    /// Ink color widened to RGB8.
    #[must_use]
    pub fn foreground_rgb(&self) -> Rgb {
        rgb565_to_rgb888(self.foreground)
    }

    /// Background color widened to RGB8.
    #[must_use]
    pub fn background_rgb(&self) -> Rgb {
        rgb565_to_rgb888(self.background)
    }
}
