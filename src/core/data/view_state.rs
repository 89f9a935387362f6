use std::time::Duration;

use crate::core::data::complex::Complex;
use crate::core::fractals::mandelbrot::mandelbrot_config::{
    DEFAULT_CENTER, DEFAULT_DEPTH, DEFAULT_RADIUS, MIN_DEPTH, PAN_FRACTION, ZOOM_FACTOR,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanDirection {
    Up,
    Down,
    Left,
    Right,
}

impl PanDirection {
    /// Unit vector in plane space. Imaginary values grow down the screen.
    #[must_use]
    pub fn unit_vector(self) -> Complex {
        match self {
            Self::Up => Complex::new(0.0, -1.0),
            Self::Down => Complex::new(0.0, 1.0),
            Self::Left => Complex::new(-1.0, 0.0),
            Self::Right => Complex::new(1.0, 0.0),
        }
    }
}

/// What the renderer draws next and what the overlay reports.
///
/// `radius` is the half-extent of the shorter raster side in plane units and
/// stays positive; `depth` never drops below [`MIN_DEPTH`].
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub center: Complex,
    radius: f64,
    depth: u32,
    pub decompose: bool,
    pub show_help: bool,
    pub show_info: bool,
    pub last_render_duration: Duration,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            radius: DEFAULT_RADIUS,
            depth: DEFAULT_DEPTH,
            decompose: false,
            show_help: true,
            show_info: true,
            last_render_duration: Duration::ZERO,
        }
    }
}

impl ViewState {
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Restores the home position. Display toggles are left alone.
    pub fn reset(&mut self) {
        self.center = DEFAULT_CENTER;
        self.radius = DEFAULT_RADIUS;
        self.depth = DEFAULT_DEPTH;
    }

    pub fn pan(&mut self, direction: PanDirection) {
        let unit = direction.unit_vector();
        let distance = self.radius * PAN_FRACTION;

        self.center = self.center + Complex::new(unit.real * distance, unit.imag * distance);
    }

    pub fn zoom_in(&mut self) {
        let radius = self.radius / ZOOM_FACTOR;

        // Halving a subnormal radius eventually reaches zero.
        if radius > 0.0 {
            self.radius = radius;
        }
    }

    pub fn zoom_out(&mut self) {
        let radius = self.radius * ZOOM_FACTOR;

        if radius.is_finite() {
            self.radius = radius;
        }
    }

    pub fn increase_depth(&mut self) {
        self.depth = self.depth.saturating_mul(2);
    }

    pub fn decrease_depth(&mut self) {
        self.depth = (self.depth / 2).max(MIN_DEPTH);
    }

    pub fn centre_on(&mut self, point: Complex) {
        self.center = point;
    }
}
