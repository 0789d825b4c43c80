//! Pointer and keyboard input mapping

use std::fmt;
use std::str::FromStr;

/// Clicks left of this fraction of the page width go back
pub const PREVIOUS_ZONE_END: f64 = 0.4;

/// Clicks right of this fraction of the page width go forward
pub const NEXT_ZONE_START: f64 = 0.6;

/// Region of the page surface a click landed in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickZone {
    Previous,
    /// Middle band; clicks here do nothing
    Dead,
    Next,
}

/// Classify a click by its horizontal offset within the page surface
///
/// Only the ratio `x / width` matters. The boundaries 0.4 and 0.6 belong to
/// the dead zone. A width that is zero, negative or not finite cannot be
/// classified and yields [`ClickZone::Dead`].
pub fn classify_click(x: f64, width: f64) -> ClickZone {
    if !width.is_finite() || width <= 0.0 || !x.is_finite() {
        return ClickZone::Dead;
    }
    let ratio = x / width;
    if ratio > NEXT_ZONE_START {
        ClickZone::Next
    } else if ratio < PREVIOUS_ZONE_END {
        ClickZone::Previous
    } else {
        ClickZone::Dead
    }
}

/// Keys the reader reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Escape,
}

impl Key {
    /// DOM `KeyboardEvent.key` name
    pub fn as_str(&self) -> &'static str {
        match self {
            Key::ArrowLeft => "ArrowLeft",
            Key::ArrowRight => "ArrowRight",
            Key::Escape => "Escape",
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A key name the reader does not handle
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unhandled key: {0}")]
pub struct UnknownKey(pub String);

impl FromStr for Key {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ArrowLeft" => Ok(Key::ArrowLeft),
            "ArrowRight" => Ok(Key::ArrowRight),
            "Escape" | "Esc" => Ok(Key::Escape),
            other => Err(UnknownKey(other.to_string())),
        }
    }
}

/// What an input event asks the reader to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    Next,
    Previous,
    CloseAbout,
}
