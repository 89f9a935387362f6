use std::error::Error;
use std::fmt;
use crate::core::actions::render_plane::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;

const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Outcome of iterating one plane coordinate.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EscapeTime {
    pub iterations: u32,
    pub z: Complex,
}

/// Iterates `z <- z² + c` from `z = 0`, checking `|z| >= 2` before each update.
///
/// Points inside the set report `max_depth` iterations. Because the first check
/// always sees `z = 0`, a point outside radius 2 escapes with one iteration.
#[must_use]
pub fn escape_time(c: Complex, max_depth: u32) -> EscapeTime {
    let mut z = Complex::new(0.0, 0.0);

    for iteration in 0..max_depth {
        if z.magnitude_squared() >= ESCAPE_RADIUS_SQUARED {
            return EscapeTime { iterations: iteration, z };
        }
        z = z * z + c;
    }

    EscapeTime { iterations: max_depth, z }
}

#[derive(Debug, PartialEq)]
pub enum MandelbrotAlgorithmError {
    ZeroMaxIterations,
}

impl fmt::Display for MandelbrotAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterations => {
                write!(f, "Maximum iterations must be greater than zero")
            }
        }
    }
}

impl Error for MandelbrotAlgorithmError {}

#[derive(Debug, Clone, Copy)]
pub struct MandelbrotAlgorithm {
    max_iterations: u32,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = EscapeTime;

    fn compute(&self, c: Complex) -> EscapeTime {
        escape_time(c, self.max_iterations)
    }
}

impl MandelbrotAlgorithm {
    pub fn new(max_iterations: u32) -> Result<Self, MandelbrotAlgorithmError> {
        if max_iterations == 0 {
            return Err(MandelbrotAlgorithmError::ZeroMaxIterations);
        }

        Ok(Self { max_iterations })
    }
}
