//! Input events fed to the app on every update
//!
//! The device has a touch pad and five buttons. The pad position is in
//! `-1000..=1000` on both axes; `None` means the pad is not touched.

use std::ops::BitOr;

use crate::error::{Error, Result};

/// Pad coordinate limit on either axis
pub const PAD_MAX: i16 = 1000;

/// Touch position on the pad
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pad {
    x: i16,
    y: i16,
}

impl Pad {
    pub fn new(x: i16, y: i16) -> Result<Self> {
        for v in [x, y] {
            if !(-PAD_MAX..=PAD_MAX).contains(&v) {
                return Err(Error::InvalidInput(format!(
                    "pad coordinate {v} is outside -{PAD_MAX}..={PAD_MAX}"
                )));
            }
        }
        Ok(Self { x, y })
    }

    pub fn x(self) -> i16 {
        self.x
    }

    pub fn y(self) -> i16 {
        self.y
    }
}

/// Pressed buttons as a bitmask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Buttons(u8);

impl Buttons {
    pub const S: Buttons = Buttons(0b1);
    pub const E: Buttons = Buttons(0b10);
    pub const W: Buttons = Buttons(0b100);
    pub const N: Buttons = Buttons(0b1000);
    pub const MENU: Buttons = Buttons(0b1_0000);

    pub const fn empty() -> Self {
        Buttons(0)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn contains(self, other: Buttons) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for Buttons {
    type Output = Buttons;

    fn bitor(self, rhs: Buttons) -> Buttons {
        Buttons(self.0 | rhs.0)
    }
}

/// Input state for a single update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Input {
    pub pad: Option<Pad>,
    pub buttons: Buttons,
}

impl Input {
    /// No pad touch, no buttons
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pad(mut self, pad: Pad) -> Self {
        self.pad = Some(pad);
        self
    }

    pub fn press(mut self, buttons: Buttons) -> Self {
        self.buttons = self.buttons | buttons;
        self
    }
}

/// Merge two inputs: buttons are combined, the first pad touch wins
impl BitOr for Input {
    type Output = Input;

    fn bitor(self, rhs: Input) -> Input {
        Input {
            pad: self.pad.or(rhs.pad),
            buttons: self.buttons | rhs.buttons,
        }
    }
}
