//! Text on a 7-row dot-matrix display made of WS2812 strips.
//!
//! Seven strips of 36 LEDs each form the rows; the data line runs through them in a serpentine.
//! Up to six 5×7 ASCII symbols are painted into a frame buffer, the rest is filled with a
//! background color, and the frame is sent to the strips in wiring order.
//!
//! Start with [`display::DisplayDriver`]. To drive the display from several tasks, run it in
//! [`device_loop::display_device_loop`].
#![no_std]

// Macros first so every module below can use them.
#[macro_use]
mod fmt;

pub mod color;
pub mod constants;
pub mod device_loop;
pub mod display;
mod error;
pub mod font;
pub mod frame_buffer;
pub mod led_layout;
pub mod led_strip;
pub mod position;
pub mod registers;
pub mod text;

pub use display::{DisplayConfig, DisplayDriver, DisplayState};
pub use error::{Error, RenderError, Result};
pub use position::Position;
pub use registers::HoldingRegisters;
pub use text::TextPayload;
