use crate::core::data::raster_geometry::{GeometryError, RasterGeometry};

pub trait GeometryProvider {
    fn raster_geometry(&self) -> Result<RasterGeometry, GeometryError>;
}
