//! Runtime collaborator
//!
//! The app runtime is not part of this crate. Anything that can run an app
//! one frame at a time and hand out its framebuffer can drive the tests.

use thiserror::Error;

use crate::input::Input;

/// Failure reported by a runtime
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct RuntimeError(pub String);

impl RuntimeError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

/// An app runtime driven by the test harness
pub trait Runtime {
    /// Load the app and run its init callbacks
    fn start(&mut self) -> Result<(), RuntimeError>;

    /// Apply input and advance one frame. Returns true if the app exited.
    fn update(&mut self, input: &Input) -> Result<bool, RuntimeError>;

    /// Raw framebuffer in the device's packed format, `WIDTH` pixels per row
    fn frame(&self) -> Vec<u16>;
}

impl<R: Runtime + ?Sized> Runtime for Box<R> {
    fn start(&mut self) -> Result<(), RuntimeError> {
        (**self).start()
    }

    fn update(&mut self, input: &Input) -> Result<bool, RuntimeError> {
        (**self).update(input)
    }

    fn frame(&self) -> Vec<u16> {
        (**self).frame()
    }
}
