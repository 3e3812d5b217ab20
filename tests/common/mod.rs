//! Strip transmitters for host tests.

#![allow(dead_code, reason = "Each test binary uses a different subset.")]

use std::cell::RefCell;
use std::rc::Rc;

use led_text_display::led_strip::{Rgb, SmartLedsWrite};

/// Records every frame it is asked to send.
#[derive(Clone, Default)]
pub struct RecordingStrip {
    frames: Rc<RefCell<Vec<Vec<Rgb>>>>,
}

impl RecordingStrip {
    pub fn frame_count(&self) -> usize {
        self.frames.borrow().len()
    }

    pub fn last_frame(&self) -> Vec<Rgb> {
        self.frames.borrow().last().cloned().unwrap_or_default()
    }
}

impl SmartLedsWrite for RecordingStrip {
    type Error = core::convert::Infallible;
    type Color = Rgb;

    fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        let frame = iterator.into_iter().map(Into::into).collect();
        self.frames.borrow_mut().push(frame);
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineFault;

/// Fails every transmission.
#[derive(Default)]
pub struct FailingStrip {
    pub attempts: usize,
}

impl SmartLedsWrite for FailingStrip {
    type Error = LineFault;
    type Color = Rgb;

    fn write<T, I>(&mut self, _iterator: T) -> Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        self.attempts += 1;
        Err(LineFault)
    }
}
