use crate::core::data::complex::Complex;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::view_state::ViewState;
use crate::core::fractals::mandelbrot::mandelbrot_config::ASPECT;

/// Affine map between raster pixels and plane coordinates.
///
/// The shorter raster side always spans `2 * radius` of the plane. Pixel
/// `(width / 2, height / 2)` sits exactly on `center`, and the imaginary
/// axis grows downwards like raster rows. The renderer and the click
/// handler both go through this one mapping.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlaneMapping {
    pixel_rect: PixelRect,
    top_left: Complex,
    dx: f64,
    dy: f64,
}

impl PlaneMapping {
    #[must_use]
    pub fn new(center: Complex, radius: f64, pixel_rect: PixelRect) -> Self {
        let (dx, dy) = plane_steps(radius, pixel_rect);
        let half = pixel_rect.centre();

        let top_left = Complex {
            real: center.real - dx * half.x as f64,
            imag: center.imag - dy * half.y as f64,
        };

        Self { pixel_rect, top_left, dx, dy }
    }

    #[must_use]
    pub fn from_view(view: &ViewState, pixel_rect: PixelRect) -> Self {
        Self::new(view.center, view.radius(), pixel_rect)
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn top_left(&self) -> Complex {
        self.top_left
    }

    /// Plane distance covered by one pixel along x and y.
    #[must_use]
    pub fn step(&self) -> (f64, f64) {
        (self.dx, self.dy)
    }

    /// Plane coordinate of the first pixel in row `y`.
    #[must_use]
    pub fn row_start(&self, y: u32) -> Complex {
        Complex {
            real: self.top_left.real,
            imag: self.top_left.imag + self.dy * y as f64,
        }
    }

    /// Points outside the raster are extrapolated along the same axes.
    #[must_use]
    pub fn pixel_to_complex(&self, pixel: Point) -> Complex {
        Complex {
            real: self.top_left.real + self.dx * pixel.x as f64,
            imag: self.top_left.imag + self.dy * pixel.y as f64,
        }
    }

    /// Pixel whose cell contains `point`.
    #[must_use]
    pub fn complex_to_pixel(&self, point: Complex) -> Point {
        Point {
            x: ((point.real - self.top_left.real) / self.dx).floor() as i32,
            y: ((point.imag - self.top_left.imag) / self.dy).floor() as i32,
        }
    }
}

fn plane_steps(radius: f64, pixel_rect: PixelRect) -> (f64, f64) {
    let width = pixel_rect.width() as f64;
    let height = pixel_rect.height() as f64;

    if height > width / ASPECT {
        let dx = 2.0 * radius / width;
        (dx, dx * ASPECT)
    } else {
        let dy = 2.0 * radius / height;
        (dy / ASPECT, dy)
    }
}
