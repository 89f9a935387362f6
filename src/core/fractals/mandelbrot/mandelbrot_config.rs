use crate::core::data::colour::Colour;
use crate::core::data::complex::Complex;

pub const DEFAULT_CENTER: Complex = Complex::new(0.0, 0.0);
pub const DEFAULT_RADIUS: f64 = 2.0;
pub const DEFAULT_DEPTH: u32 = 256;
pub const MIN_DEPTH: u32 = 64;

/// Fraction of the radius moved by one pan step.
pub const PAN_FRACTION: f64 = 0.2;
pub const ZOOM_FACTOR: f64 = 2.0;

/// Width to height ratio of one plane unit on screen.
pub const ASPECT: f64 = 1.0;

pub const GRADIENT: [Colour; 5] = [
    Colour::new(0, 0, 0),       // black
    Colour::new(0, 0, 255),     // blue
    Colour::new(255, 0, 0),     // red
    Colour::new(255, 255, 0),   // yellow
    Colour::new(255, 255, 255), // white
];
