//! App under test
//!
//! Wraps a [`Runtime`] and enforces the app lifecycle: an app is started
//! once, updated until it exits, and never touched after that.

use std::fmt;
use std::str::FromStr;

use frame_core::{Frame, WIDTH};

use crate::error::{Error, Result};
use crate::input::Input;
use crate::runtime::Runtime;

/// Longest author or app name
pub const ID_MAX_LEN: usize = 16;

/// Full app ID: `author.app`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AppId {
    author: String,
    app: String,
}

impl AppId {
    pub fn new(author: &str, app: &str) -> Result<Self> {
        let valid = |s: &str| (1..=ID_MAX_LEN).contains(&s.chars().count());
        if !valid(author) || !valid(app) {
            return Err(Error::InvalidId(format!("{author}.{app}")));
        }
        Ok(Self {
            author: author.to_string(),
            app: app.to_string(),
        })
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn app(&self) -> &str {
        &self.app
    }
}

impl FromStr for AppId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.split_once('.') {
            Some((author, app)) => AppId::new(author, app),
            None => Err(Error::InvalidId(s.to_string())),
        }
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.author, self.app)
    }
}

/// An app running on a runtime
pub struct App<R: Runtime> {
    id: AppId,
    runtime: R,
    started: bool,
    exited: bool,
}

impl<R: Runtime> App<R> {
    pub fn new(id: AppId, runtime: R) -> Self {
        Self {
            id,
            runtime,
            started: false,
            exited: false,
        }
    }

    pub fn id(&self) -> &AppId {
        &self.id
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_exited(&self) -> bool {
        self.exited
    }

    /// Start the app. Fails if it was already started or has exited.
    pub fn start(&mut self) -> Result<()> {
        if self.exited {
            return Err(Error::State("trying to start exited app"));
        }
        if self.started {
            return Err(Error::State("trying to start already started app"));
        }
        tracing::debug!(app = %self.id, "starting app");
        self.runtime.start()?;
        self.started = true;
        Ok(())
    }

    /// Advance one frame with the given input.
    ///
    /// Returns true if the app exited during this update; any later call
    /// fails.
    pub fn update(&mut self, input: Input) -> Result<bool> {
        if self.exited {
            return Err(Error::State("trying to update exited app"));
        }
        if !self.started {
            return Err(Error::State("trying to update app that is not started"));
        }
        let exited = self.runtime.update(&input)?;
        if exited {
            tracing::info!(app = %self.id, "app exited");
            self.exited = true;
        }
        Ok(exited)
    }

    /// The current framebuffer
    pub fn frame(&self) -> Result<Frame> {
        Ok(Frame::from_rgb16(&self.runtime.frame(), WIDTH)?)
    }

    pub fn runtime(&self) -> &R {
        &self.runtime
    }
}

impl<R: Runtime + fmt::Debug> fmt::Debug for App<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("id", &self.id)
            .field("runtime", &self.runtime)
            .field("started", &self.started)
            .field("exited", &self.exited)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::RuntimeError;

    #[derive(Debug, Default)]
    struct Countdown {
        left: u32,
        updates: u32,
    }

    impl Runtime for Countdown {
        fn start(&mut self) -> std::result::Result<(), RuntimeError> {
            Ok(())
        }

        fn update(&mut self, _: &Input) -> std::result::Result<bool, RuntimeError> {
            self.updates += 1;
            self.left = self.left.saturating_sub(1);
            Ok(self.left == 0)
        }

        fn frame(&self) -> Vec<u16> {
            vec![0xFFFF; WIDTH * 2]
        }
    }

    fn app(left: u32) -> App<Countdown> {
        let id = "sys.input-test".parse().unwrap();
        App::new(id, Countdown { left, updates: 0 })
    }

    #[test]
    fn test_app_id() {
        let id: AppId = "lux.snek".parse().unwrap();
        assert_eq!(id.author(), "lux");
        assert_eq!(id.app(), "snek");
        assert_eq!(id.to_string(), "lux.snek");

        for bad in ["nodot", ".app", "author.", "a.12345678901234567"] {
            assert!(matches!(bad.parse::<AppId>(), Err(Error::InvalidId(_))), "{bad}");
        }
        assert!("a.1234567890123456".parse::<AppId>().is_ok());
    }

    #[test]
    fn test_lifecycle() {
        let mut app = app(2);
        assert!(matches!(app.update(Input::new()), Err(Error::State(_))));
        app.start().unwrap();
        assert!(matches!(app.start(), Err(Error::State(_))));
        assert!(!app.update(Input::new()).unwrap());
        assert!(app.update(Input::new()).unwrap());
        assert!(app.is_exited());
        assert!(matches!(app.update(Input::new()), Err(Error::State(_))));
        assert!(matches!(app.start(), Err(Error::State(_))));
        assert_eq!(app.runtime().updates, 2);
    }

    #[test]
    fn test_frame() {
        let app = app(1);
        let frame = app.frame().unwrap();
        assert_eq!(frame.width(), WIDTH);
        assert_eq!(frame.height(), 2);
        assert_eq!(frame.at(0, 0).unwrap(), frame_core::Color::TRUE_BLACK);
    }
}
