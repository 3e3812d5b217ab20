//! Sharing one display between tasks.
//!
//! [`display_device_loop`] owns the [`DisplayDriver`] and runs forever; tasks talk to it through
//! a [`DisplayHandle`]. Each request is one command signal followed by one completion signal
//! carrying the render result. A request that arrives before the loop picks up the previous
//! one replaces it.
//!
//! ```no_run
//! # use core::convert::Infallible;
//! use led_text_display::device_loop::{DisplayHandle, DisplayStatic, display_device_loop};
//! use led_text_display::display::{DisplayConfig, DisplayDriver};
//! use led_text_display::led_strip::{Rgb, SmartLedsWrite, colors};
//!
//! # struct Ws2812;
//! # impl SmartLedsWrite for Ws2812 {
//! #     type Error = Infallible;
//! #     type Color = Rgb;
//! #     fn write<T, I>(&mut self, _: T) -> Result<(), Self::Error>
//! #     where T: IntoIterator<Item = I>, I: Into<Self::Color> { Ok(()) }
//! # }
//! static DISPLAY_STATIC: DisplayStatic<Infallible> = DisplayStatic::new_static();
//!
//! async fn display_task(strip: Ws2812) -> Infallible {
//!     let driver = DisplayDriver::new(strip, DisplayConfig::new());
//!     display_device_loop(&DISPLAY_STATIC, driver).await
//! }
//!
//! async fn some_other_task() {
//!     let display = DisplayHandle::new(&DISPLAY_STATIC);
//!     display.display_symbol(b'7', colors::BLACK, 3).await.ok();
//! }
//! ```

use core::convert::Infallible;

use embassy_sync::{blocking_mutex::raw::CriticalSectionRawMutex, signal::Signal};

use crate::display::DisplayDriver;
use crate::led_strip::{Rgb, SmartLedsWrite};
use crate::registers::HoldingRegisters;
use crate::text::TextPayload;
use crate::RenderError;

/// A render request for the device loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayCommand {
    /// See [`DisplayDriver::display_symbol`].
    Symbol {
        symbol: u8,
        background: Rgb,
        position: u8,
    },
    /// See [`DisplayDriver::display_text`].
    Text {
        payload: TextPayload,
        background: Rgb,
    },
    /// See [`DisplayDriver::display_registers`].
    Registers(HoldingRegisters),
    /// See [`DisplayDriver::clear`].
    Clear { background: Rgb },
}

pub type DisplayCommandSignal = Signal<CriticalSectionRawMutex, DisplayCommand>;
pub type DisplayCompletionSignal<E> = Signal<CriticalSectionRawMutex, Result<(), RenderError<E>>>;

/// Signals shared by a [`DisplayHandle`] and the [`display_device_loop`].
///
/// `E` is the strip transmitter's error type.
pub struct DisplayStatic<E> {
    pub command_signal: DisplayCommandSignal,
    pub completion_signal: DisplayCompletionSignal<E>,
}

impl<E> DisplayStatic<E> {
    #[must_use]
    pub const fn new_static() -> Self {
        Self {
            command_signal: Signal::new(),
            completion_signal: Signal::new(),
        }
    }
}

impl<E> Default for DisplayStatic<E> {
    fn default() -> Self {
        Self::new_static()
    }
}

impl<S> DisplayDriver<S>
where
    S: SmartLedsWrite<Color = Rgb>,
{
    /// Run one command to completion.
    ///
    /// # Errors
    ///
    /// Whatever the matching render call returns.
    pub fn execute(&mut self, command: &DisplayCommand) -> Result<(), RenderError<S::Error>> {
        match command {
            DisplayCommand::Symbol {
                symbol,
                background,
                position,
            } => self.display_symbol(*symbol, *background, *position),
            DisplayCommand::Text {
                payload,
                background,
            } => self.display_text(payload, *background),
            DisplayCommand::Registers(registers) => self.display_registers(registers),
            DisplayCommand::Clear { background } => self.clear(*background),
        }
    }
}

/// Cheap, copyable access to a display run by [`display_device_loop`].
pub struct DisplayHandle<'a, E> {
    display_static: &'a DisplayStatic<E>,
}

impl<E> Clone for DisplayHandle<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for DisplayHandle<'_, E> {}

impl<'a, E: Send> DisplayHandle<'a, E> {
    #[must_use]
    pub const fn new(display_static: &'a DisplayStatic<E>) -> Self {
        Self { display_static }
    }

    /// Show `symbol` at `position` (1..=6) on `background` and wait until it is sent.
    ///
    /// # Errors
    ///
    /// As [`DisplayDriver::display_symbol`].
    pub async fn display_symbol(
        &self,
        symbol: u8,
        background: Rgb,
        position: u8,
    ) -> Result<(), RenderError<E>> {
        self.send(DisplayCommand::Symbol {
            symbol,
            background,
            position,
        })
        .await
    }

    /// Show the six symbols of `payload` on `background` and wait until they are sent.
    ///
    /// # Errors
    ///
    /// As [`DisplayDriver::display_text`].
    pub async fn display_text(
        &self,
        payload: TextPayload,
        background: Rgb,
    ) -> Result<(), RenderError<E>> {
        self.send(DisplayCommand::Text {
            payload,
            background,
        })
        .await
    }

    /// Show a register snapshot and wait until it is sent.
    ///
    /// # Errors
    ///
    /// As [`DisplayDriver::display_registers`].
    pub async fn display_registers(
        &self,
        registers: HoldingRegisters,
    ) -> Result<(), RenderError<E>> {
        self.send(DisplayCommand::Registers(registers)).await
    }

    /// Light the whole display in `background` and wait until it is sent.
    ///
    /// # Errors
    ///
    /// As [`DisplayDriver::clear`].
    pub async fn clear(&self, background: Rgb) -> Result<(), RenderError<E>> {
        self.send(DisplayCommand::Clear { background }).await
    }

    async fn send(&self, command: DisplayCommand) -> Result<(), RenderError<E>> {
        debug!("DisplayHandle: sending command");
        self.display_static.completion_signal.reset();
        self.display_static.command_signal.signal(command);
        self.display_static.completion_signal.wait().await
    }
}

/// Serve commands for `driver` forever.
///
/// Render and transmit errors are reported to the waiting handle; the loop keeps going.
pub async fn display_device_loop<S>(
    display_static: &DisplayStatic<S::Error>,
    mut driver: DisplayDriver<S>,
) -> Infallible
where
    S: SmartLedsWrite<Color = Rgb>,
    S::Error: Send,
{
    info!("display_device_loop: task started");
    loop {
        debug!("display_device_loop: waiting for command");
        let command = display_static.command_signal.wait().await;

        let result = driver.execute(&command);
        if result.is_err() {
            warn!("display_device_loop: command failed");
        }
        display_static.completion_signal.signal(result);
    }
}
