use core::fmt;

use derive_more::derive::{Display, Error};

/// A specialized `Result` where the error is this crate's `Error` type.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors raised while composing a frame.
#[expect(missing_docs, reason = "The variants are self-explanatory.")]
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    #[display("Symbol position {_0} is outside 1..=6")]
    InvalidPosition(#[error(not(source))] u8),

    #[display("Index out of bounds")]
    IndexOutOfBounds,

    #[display("Frame buffer is still being composed")]
    NotIdle,
}

/// Outcome of a render call that reached the strip transmitter.
///
/// Transmitter errors are carried verbatim; the driver never interprets or retries them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderError<E> {
    /// The frame could not be composed; nothing was transmitted.
    Render(Error),
    /// The strip transmitter rejected the frame.
    Transmit(E),
}

impl<E> From<Error> for RenderError<E> {
    fn from(err: Error) -> Self {
        Self::Render(err)
    }
}

impl<E: fmt::Debug> fmt::Display for RenderError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Render(err) => write!(f, "{err}"),
            Self::Transmit(err) => write!(f, "LED strip transmission failed: {err:?}"),
        }
    }
}

impl<E: fmt::Debug> core::error::Error for RenderError<E> {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Render(err) => Some(err),
            Self::Transmit(_) => None,
        }
    }
}

#[cfg(feature = "defmt")]
impl<E: fmt::Debug> defmt::Format for RenderError<E> {
    fn format(&self, fmt: defmt::Formatter<'_>) {
        match self {
            Self::Render(err) => defmt::write!(fmt, "Render({})", err),
            Self::Transmit(_) => defmt::write!(fmt, "Transmit(..)"),
        }
    }
}
