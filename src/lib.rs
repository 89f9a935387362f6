mod controllers;
mod core;
mod input;
pub mod logging;
mod presenters;

pub use controllers::interactive::{
    Command, ControllerError, EventOutcome, FrameSink, GeometryProvider, InputEvent, InputSource,
    InteractiveController, Key, Modifiers, MouseButton, Zoom,
};
pub use crate::core::actions::render_plane::ports::colour_map::ColourMap;
pub use crate::core::actions::render_plane::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::actions::render_plane::render_plane::{render_plane, render_view};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
pub use crate::core::data::point::Point;
pub use crate::core::data::raster_geometry::{GeometryError, RasterGeometry};
pub use crate::core::data::view_state::{PanDirection, ViewState};
pub use crate::core::fractals::mandelbrot::algorithm::{
    EscapeTime, MandelbrotAlgorithm, MandelbrotAlgorithmError, escape_time,
};
pub use crate::core::fractals::mandelbrot::colour_map::SmoothGradient;
pub use crate::core::util::plane_mapping::PlaneMapping;
pub use input::terminal::{TerminalGeometry, TerminalGuard, TerminalInput, translate_event};
pub use presenters::kitty::KittyPresenter;
pub use presenters::kitty::transport::{PixelFormat, write_image};
pub use presenters::overlay::{RgbaImage, compose_overlay};
