use std::io;

use crate::core::data::point::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Up,
    Down,
    Left,
    Right,
    PageUp,
    PageDown,
    Escape,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    WheelUp,
    WheelDown,
}

/// A single user interaction, already translated out of any terminal protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Key { key: Key, modifiers: Modifiers },
    /// `position` is in raster pixels.
    Mouse { button: MouseButton, position: Point, modifiers: Modifiers },
    Resize,
}

pub trait InputSource {
    /// Blocks until the next event arrives.
    fn next_event(&mut self) -> io::Result<InputEvent>;
}
