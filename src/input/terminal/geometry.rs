use crossterm::terminal;

use crate::controllers::interactive::ports::GeometryProvider;
use crate::core::data::raster_geometry::{GeometryError, RasterGeometry};

/// Reads the controlling terminal's size in cells and pixels on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalGeometry;

impl GeometryProvider for TerminalGeometry {
    fn raster_geometry(&self) -> Result<RasterGeometry, GeometryError> {
        let size = terminal::window_size().map_err(|err| GeometryError::Query(err.to_string()))?;

        RasterGeometry::from_terminal(size.rows, size.columns, size.width, size.height)
    }
}
