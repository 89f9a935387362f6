use std::error::Error;
use std::fmt;
use crate::core::data::point::Point;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PixelRectError {
    InvalidSize { width: u32, height: u32 },
}

impl fmt::Display for PixelRectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "pixel rect size must be positive: {}x{}", width, height)
            }
        }
    }
}

impl Error for PixelRectError {}

/// Raster dimensions anchored at the origin, rows growing downwards.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelRect {
    width: u32,
    height: u32,
}

impl PixelRect {
    pub fn new(width: u32, height: u32) -> Result<Self, PixelRectError> {
        if width == 0 || height == 0 {
            return Err(PixelRectError::InvalidSize { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn centre(&self) -> Point {
        Point {
            x: (self.width / 2) as i32,
            y: (self.height / 2) as i32,
        }
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as u32) < self.width
            && (point.y as u32) < self.height
    }

    #[must_use]
    pub fn size(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_rect_new_valid() {
        let pixel_rect = PixelRect::new(100, 50).unwrap();

        assert_eq!(pixel_rect.width(), 100);
        assert_eq!(pixel_rect.height(), 50);
        assert_eq!(pixel_rect.size(), 5000);
    }

    #[test]
    fn test_pixel_rect_rejects_zero_width() {
        assert_eq!(
            PixelRect::new(0, 10),
            Err(PixelRectError::InvalidSize { width: 0, height: 10 })
        );
    }

    #[test]
    fn test_pixel_rect_rejects_zero_height() {
        assert!(PixelRect::new(10, 0).is_err());
    }

    #[test]
    fn test_single_pixel_rect_is_valid() {
        assert!(PixelRect::new(1, 1).is_ok());
    }

    #[test]
    fn test_centre_uses_integer_halving() {
        let pixel_rect = PixelRect::new(101, 7).unwrap();

        assert_eq!(pixel_rect.centre(), Point { x: 50, y: 3 });
    }

    #[test]
    fn test_contains_point() {
        let pixel_rect = PixelRect::new(10, 5).unwrap();

        assert!(pixel_rect.contains_point(Point { x: 0, y: 0 }));
        assert!(pixel_rect.contains_point(Point { x: 9, y: 4 }));
        assert!(!pixel_rect.contains_point(Point { x: 10, y: 4 }));
        assert!(!pixel_rect.contains_point(Point { x: 9, y: 5 }));
        assert!(!pixel_rect.contains_point(Point { x: -1, y: 0 }));
    }
}
