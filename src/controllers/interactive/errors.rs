use std::error::Error;
use std::fmt;
use std::io;

use crate::core::data::raster_geometry::GeometryError;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithmError;

#[derive(Debug)]
pub enum ControllerError {
    Geometry(GeometryError),
    Render(MandelbrotAlgorithmError),
    Input(io::Error),
    Output(io::Error),
}

impl fmt::Display for ControllerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Geometry(err) => write!(f, "raster geometry unavailable: {}", err),
            Self::Render(err) => write!(f, "render error: {}", err),
            Self::Input(err) => write!(f, "input error: {}", err),
            Self::Output(err) => write!(f, "output error: {}", err),
        }
    }
}

impl Error for ControllerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Geometry(err) => Some(err),
            Self::Render(err) => Some(err),
            Self::Input(err) | Self::Output(err) => Some(err),
        }
    }
}

impl From<GeometryError> for ControllerError {
    fn from(err: GeometryError) -> Self {
        Self::Geometry(err)
    }
}

impl From<MandelbrotAlgorithmError> for ControllerError {
    fn from(err: MandelbrotAlgorithmError) -> Self {
        Self::Render(err)
    }
}
