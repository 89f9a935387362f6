use std::io;

use crossterm::event::{
    self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton as TermMouseButton,
    MouseEventKind,
};

use crate::controllers::interactive::ports::{
    GeometryProvider, InputEvent, InputSource, Key, Modifiers, MouseButton,
};
use crate::core::data::raster_geometry::RasterGeometry;
use crate::input::terminal::geometry::TerminalGeometry;

/// Blocking reader over crossterm's event stream.
pub struct TerminalInput {
    geometry: TerminalGeometry,
}

impl TerminalInput {
    #[must_use]
    pub fn new(geometry: TerminalGeometry) -> Self {
        Self { geometry }
    }
}

impl InputSource for TerminalInput {
    fn next_event(&mut self) -> io::Result<InputEvent> {
        loop {
            let event = event::read()?;

            let geometry = match event {
                Event::Mouse(_) => Some(self.geometry.raster_geometry().map_err(io::Error::other)?),
                _ => None,
            };

            if let Some(translated) = translate_event(&event, geometry.as_ref()) {
                return Ok(translated);
            }
        }
    }
}

/// Converts a crossterm event. Mouse cells become raster pixels through
/// `geometry`, so mouse events are dropped when it is `None`. Events with
/// no counterpart (key releases, mouse motion, focus, paste) yield `None`.
#[must_use]
pub fn translate_event(event: &Event, geometry: Option<&RasterGeometry>) -> Option<InputEvent> {
    match event {
        Event::Key(key_event) => {
            if key_event.kind == KeyEventKind::Release {
                return None;
            }

            Some(InputEvent::Key {
                key: translate_key(key_event.code),
                modifiers: translate_modifiers(key_event.modifiers),
            })
        }
        Event::Mouse(mouse_event) => {
            let button = match mouse_event.kind {
                MouseEventKind::Down(TermMouseButton::Left) => MouseButton::Left,
                MouseEventKind::Down(TermMouseButton::Right) => MouseButton::Right,
                MouseEventKind::ScrollUp => MouseButton::WheelUp,
                MouseEventKind::ScrollDown => MouseButton::WheelDown,
                _ => return None,
            };

            Some(InputEvent::Mouse {
                button,
                position: geometry?.cell_to_pixel(mouse_event.column, mouse_event.row),
                modifiers: translate_modifiers(mouse_event.modifiers),
            })
        }
        Event::Resize(_, _) => Some(InputEvent::Resize),
        _ => None,
    }
}

fn translate_key(code: KeyCode) -> Key {
    match code {
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        KeyCode::Esc => Key::Escape,
        _ => Key::Other,
    }
}

fn translate_modifiers(modifiers: KeyModifiers) -> Modifiers {
    Modifiers {
        ctrl: modifiers.contains(KeyModifiers::CONTROL),
        alt: modifiers.contains(KeyModifiers::ALT),
    }
}
