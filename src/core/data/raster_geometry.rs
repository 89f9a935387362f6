use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// The terminal reported zero character rows or columns.
    NoCells { rows: u16, cols: u16 },
    /// The terminal did not report its size in pixels.
    PixelSizeUnavailable { width: u16, height: u16 },
    /// Cells are too small, or there are too few of them, to leave a drawable image.
    EmptyImage { width: u32, height: u32 },
    Query(String),
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCells { rows, cols } => {
                write!(f, "terminal reports {} rows and {} columns", rows, cols)
            }
            Self::PixelSizeUnavailable { width, height } => {
                write!(
                    f,
                    "terminal reports a pixel size of {}x{}; a terminal with inline image support is required",
                    width, height
                )
            }
            Self::EmptyImage { width, height } => {
                write!(f, "terminal too small to draw an image: {}x{} pixels", width, height)
            }
            Self::Query(message) => write!(f, "failed to query terminal size: {}", message),
        }
    }
}

impl Error for GeometryError {}

/// Cell size in pixels and the image raster, which spans one row and one
/// column fewer than the terminal so the image never forces a scroll.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RasterGeometry {
    pub cell_width: u32,
    pub cell_height: u32,
    pixel_rect: PixelRect,
}

impl RasterGeometry {
    pub fn from_terminal(
        rows: u16,
        cols: u16,
        pixel_width: u16,
        pixel_height: u16,
    ) -> Result<Self, GeometryError> {
        if rows == 0 || cols == 0 {
            return Err(GeometryError::NoCells { rows, cols });
        }
        if pixel_width == 0 || pixel_height == 0 {
            return Err(GeometryError::PixelSizeUnavailable {
                width: pixel_width,
                height: pixel_height,
            });
        }

        let cell_width = u32::from(pixel_width) / u32::from(cols);
        let cell_height = u32::from(pixel_height) / u32::from(rows);
        let width = u32::from(cols - 1) * cell_width;
        let height = u32::from(rows - 1) * cell_height;

        let pixel_rect = PixelRect::new(width, height)
            .map_err(|_| GeometryError::EmptyImage { width, height })?;

        Ok(Self {
            cell_width,
            cell_height,
            pixel_rect,
        })
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    /// Pixel at the top-left corner of a character cell.
    #[must_use]
    pub fn cell_to_pixel(&self, column: u16, row: u16) -> Point {
        Point {
            x: (u32::from(column) * self.cell_width) as i32,
            y: (u32::from(row) * self.cell_height) as i32,
        }
    }
}
