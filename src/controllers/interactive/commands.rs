use crate::controllers::interactive::ports::input_source::{InputEvent, Key, Modifiers, MouseButton};
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::view_state::{PanDirection, ViewState};
use crate::core::util::plane_mapping::PlaneMapping;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zoom {
    In,
    Out,
}

/// A recognised interaction. `Redraw` always renders; any other command
/// renders only when it changes the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    Redraw,
    Pan(PanDirection),
    Zoom(Zoom),
    IncreaseDepth,
    DecreaseDepth,
    ToggleHelp,
    ToggleInfo,
    ToggleDecompose,
    Reset,
    CentreOn { pixel: Point, zoom: Zoom },
}

impl Command {
    /// Looks up the command bound to `event`. Unbound events map to `None`.
    #[must_use]
    pub fn from_event(event: &InputEvent) -> Option<Self> {
        match *event {
            InputEvent::Key { key, modifiers } => Self::from_key(key, modifiers),
            InputEvent::Mouse { button, position, modifiers } => {
                Some(Self::from_mouse(button, position, modifiers))
            }
            InputEvent::Resize => Some(Self::Redraw),
        }
    }

    fn from_key(key: Key, modifiers: Modifiers) -> Option<Self> {
        let command = match key {
            Key::Escape => Self::Quit,
            Key::Char('c') if modifiers.ctrl => Self::Quit,
            Key::Char('q') => Self::Quit,
            Key::Up => Self::Pan(PanDirection::Up),
            Key::Down => Self::Pan(PanDirection::Down),
            Key::Left => Self::Pan(PanDirection::Left),
            Key::Right => Self::Pan(PanDirection::Right),
            Key::PageUp | Key::Char('=') | Key::Char('+') => Self::Zoom(Zoom::In),
            Key::PageDown | Key::Char('-') | Key::Char('_') => Self::Zoom(Zoom::Out),
            Key::Char(']') => Self::IncreaseDepth,
            Key::Char('[') => Self::DecreaseDepth,
            Key::Char('h') => Self::ToggleHelp,
            Key::Char('i') => Self::ToggleInfo,
            Key::Char('d') => Self::ToggleDecompose,
            Key::Char('r') => Self::Reset,
            _ => return None,
        };

        Some(command)
    }

    fn from_mouse(button: MouseButton, pixel: Point, modifiers: Modifiers) -> Self {
        match button {
            MouseButton::Left if !modifiers.alt => Self::CentreOn { pixel, zoom: Zoom::In },
            MouseButton::Left | MouseButton::Right => Self::CentreOn { pixel, zoom: Zoom::Out },
            MouseButton::WheelUp => Self::Zoom(Zoom::In),
            MouseButton::WheelDown => Self::Zoom(Zoom::Out),
        }
    }

    /// Mutates `view` and returns whether a new frame is needed. `pixel_rect`
    /// is the raster the view was last drawn into, used to place clicks on
    /// the plane.
    pub fn apply(self, view: &mut ViewState, pixel_rect: PixelRect) -> bool {
        if self == Self::Redraw {
            return true;
        }

        let before = view.clone();

        match self {
            Self::Quit | Self::Redraw => {}
            Self::Pan(direction) => view.pan(direction),
            Self::Zoom(zoom) => zoom.apply(view),
            Self::IncreaseDepth => view.increase_depth(),
            Self::DecreaseDepth => view.decrease_depth(),
            Self::ToggleHelp => view.show_help = !view.show_help,
            Self::ToggleInfo => view.show_info = !view.show_info,
            Self::ToggleDecompose => view.decompose = !view.decompose,
            Self::Reset => view.reset(),
            Self::CentreOn { pixel, zoom } => {
                let mapping = PlaneMapping::from_view(view, pixel_rect);
                view.centre_on(mapping.pixel_to_complex(pixel));
                zoom.apply(view);
            }
        }

        *view != before
    }
}

impl Zoom {
    fn apply(self, view: &mut ViewState) {
        match self {
            Self::In => view.zoom_in(),
            Self::Out => view.zoom_out(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;

    fn key(key: Key) -> InputEvent {
        InputEvent::Key { key, modifiers: Modifiers::default() }
    }

    fn click(button: MouseButton, x: i32, y: i32, alt: bool) -> InputEvent {
        InputEvent::Mouse {
            button,
            position: Point { x, y },
            modifiers: Modifiers { alt, ..Modifiers::default() },
        }
    }

    #[test]
    fn test_quit_bindings() {
        assert_eq!(Command::from_event(&key(Key::Escape)), Some(Command::Quit));
        assert_eq!(Command::from_event(&key(Key::Char('q'))), Some(Command::Quit));
        assert_eq!(
            Command::from_event(&InputEvent::Key {
                key: Key::Char('c'),
                modifiers: Modifiers { ctrl: true, ..Modifiers::default() },
            }),
            Some(Command::Quit)
        );
    }

    #[test]
    fn test_plain_c_is_unbound() {
        assert_eq!(Command::from_event(&key(Key::Char('c'))), None);
    }

    #[test]
    fn test_zoom_bindings() {
        for k in [Key::PageUp, Key::Char('='), Key::Char('+')] {
            assert_eq!(Command::from_event(&key(k)), Some(Command::Zoom(Zoom::In)));
        }
        for k in [Key::PageDown, Key::Char('-'), Key::Char('_')] {
            assert_eq!(Command::from_event(&key(k)), Some(Command::Zoom(Zoom::Out)));
        }
    }

    #[test]
    fn test_arrow_keys_pan() {
        assert_eq!(Command::from_event(&key(Key::Up)), Some(Command::Pan(PanDirection::Up)));
        assert_eq!(Command::from_event(&key(Key::Left)), Some(Command::Pan(PanDirection::Left)));
    }

    #[test]
    fn test_unknown_keys_are_unbound() {
        for k in [Key::Char('x'), Key::Char('Q'), Key::Other] {
            assert_eq!(Command::from_event(&key(k)), None);
        }
    }

    #[test]
    fn test_left_click_zooms_in_unless_alt_held() {
        assert_eq!(
            Command::from_event(&click(MouseButton::Left, 3, 4, false)),
            Some(Command::CentreOn { pixel: Point { x: 3, y: 4 }, zoom: Zoom::In })
        );
        assert_eq!(
            Command::from_event(&click(MouseButton::Left, 3, 4, true)),
            Some(Command::CentreOn { pixel: Point { x: 3, y: 4 }, zoom: Zoom::Out })
        );
        assert_eq!(
            Command::from_event(&click(MouseButton::Right, 3, 4, false)),
            Some(Command::CentreOn { pixel: Point { x: 3, y: 4 }, zoom: Zoom::Out })
        );
    }

    #[test]
    fn test_wheel_zooms_without_recentring() {
        let pixel_rect = PixelRect::new(100, 100).unwrap();
        let mut view = ViewState::default();
        view.centre_on(Complex::new(0.3, 0.1));

        let command = Command::from_event(&click(MouseButton::WheelUp, 0, 0, false)).unwrap();
        command.apply(&mut view, pixel_rect);

        assert_eq!(view.center, Complex::new(0.3, 0.1));
        assert_eq!(view.radius(), 1.0);
    }

    #[test]
    fn test_centre_on_uses_the_render_mapping() {
        let pixel_rect = PixelRect::new(100, 100).unwrap();
        let mut view = ViewState::default();
        let expected = PlaneMapping::from_view(&view, pixel_rect).pixel_to_complex(Point { x: 75, y: 25 });

        Command::CentreOn { pixel: Point { x: 75, y: 25 }, zoom: Zoom::In }.apply(&mut view, pixel_rect);

        assert_eq!(view.center, expected);
        assert_eq!(view.center, Complex::new(1.0, -1.0));
        assert_eq!(view.radius(), 1.0);
    }

    #[test]
    fn test_clicking_the_centre_pixel_keeps_center() {
        let pixel_rect = PixelRect::new(81, 47).unwrap();
        let mut view = ViewState::default();
        view.centre_on(Complex::new(-0.5, 0.25));

        let (dx, dy) = PlaneMapping::from_view(&view, pixel_rect).step();

        Command::CentreOn { pixel: pixel_rect.centre(), zoom: Zoom::Out }.apply(&mut view, pixel_rect);

        assert!((view.center.real - -0.5).abs() <= dx);
        assert!((view.center.imag - 0.25).abs() <= dy);
        assert_eq!(view.radius(), 4.0);
    }

    #[test]
    fn test_toggles_flip_flags() {
        let pixel_rect = PixelRect::new(10, 10).unwrap();
        let mut view = ViewState::default();

        Command::ToggleHelp.apply(&mut view, pixel_rect);
        Command::ToggleInfo.apply(&mut view, pixel_rect);
        Command::ToggleDecompose.apply(&mut view, pixel_rect);

        assert!(!view.show_help);
        assert!(!view.show_info);
        assert!(view.decompose);

        Command::ToggleDecompose.apply(&mut view, pixel_rect);
        assert!(!view.decompose);
    }

    #[test]
    fn test_applying_same_command_from_same_state_is_reproducible() {
        let pixel_rect = PixelRect::new(64, 32).unwrap();
        let commands = [
            Command::Pan(PanDirection::Down),
            Command::Zoom(Zoom::In),
            Command::CentreOn { pixel: Point { x: 10, y: 20 }, zoom: Zoom::In },
            Command::DecreaseDepth,
        ];

        for command in commands {
            let mut a = ViewState::default();
            let mut b = ViewState::default();

            command.apply(&mut a, pixel_rect);
            command.apply(&mut b, pixel_rect);

            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_resize_redraws_without_changing_view() {
        let pixel_rect = PixelRect::new(10, 10).unwrap();
        let mut view = ViewState::default();

        let command = Command::from_event(&InputEvent::Resize).unwrap();

        assert_eq!(command, Command::Redraw);
        assert!(command.apply(&mut view, pixel_rect));
        assert_eq!(view, ViewState::default());
    }

    #[test]
    fn test_apply_reports_view_changes() {
        let pixel_rect = PixelRect::new(10, 10).unwrap();
        let mut view = ViewState::default();

        assert!(Command::Zoom(Zoom::In).apply(&mut view, pixel_rect));
        assert!(Command::ToggleHelp.apply(&mut view, pixel_rect));
        assert!(Command::Reset.apply(&mut view, pixel_rect));
        assert!(!Command::Reset.apply(&mut view, pixel_rect));
        assert!(!Command::Quit.apply(&mut view, pixel_rect));
    }

    #[test]
    fn test_apply_at_limits_leaves_view_unchanged() {
        let pixel_rect = PixelRect::new(10, 10).unwrap();
        let mut view = ViewState::default();

        while Command::Zoom(Zoom::In).apply(&mut view, pixel_rect) {}
        assert_eq!(view.radius(), f64::from_bits(1));
        assert!(!Command::Zoom(Zoom::In).apply(&mut view, pixel_rect));

        while Command::DecreaseDepth.apply(&mut view, pixel_rect) {}
        assert_eq!(view.depth(), 64);
        assert!(!Command::DecreaseDepth.apply(&mut view, pixel_rect));
    }
}
