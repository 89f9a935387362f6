use std::io;

use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::raster_geometry::RasterGeometry;
use crate::core::data::view_state::ViewState;

/// Destination for finished frames.
pub trait FrameSink {
    /// Replaces whatever is on screen with `frame`, starting at the top-left cell.
    fn present_frame(&mut self, frame: &PixelBuffer, geometry: &RasterGeometry) -> io::Result<()>;

    /// Draws the help/info layer for `view` on top of the last frame.
    fn present_overlay(&mut self, view: &ViewState) -> io::Result<()>;
}
