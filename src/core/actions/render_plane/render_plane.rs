use rayon::prelude::*;

use crate::core::actions::render_plane::ports::colour_map::ColourMap;
use crate::core::actions::render_plane::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer};
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::view_state::ViewState;
use crate::core::fractals::mandelbrot::algorithm::{MandelbrotAlgorithm, MandelbrotAlgorithmError};
use crate::core::fractals::mandelbrot::colour_map::SmoothGradient;
use crate::core::util::plane_mapping::PlaneMapping;

/// Renders every pixel of `mapping`'s raster, one rayon task per row.
///
/// Rows are disjoint slices of the output buffer, so tasks share nothing
/// mutable. The call returns only after every row has been written.
pub fn render_plane<Alg, CMap>(mapping: &PlaneMapping, algorithm: &Alg, colour_map: &CMap) -> PixelBuffer
where
    Alg: FractalAlgorithm + Sync,
    CMap: ColourMap<Alg::Success> + Sync,
{
    let mut pixel_buffer = PixelBuffer::new(mapping.pixel_rect());
    let row_size = pixel_buffer.row_size();

    pixel_buffer
        .buffer_mut()
        .par_chunks_mut(row_size)
        .enumerate()
        .for_each(|(y, row)| render_row(mapping, y as i32, algorithm, colour_map, row));

    pixel_buffer
}

/// Builds the Mandelbrot evaluator and colour map for `view` and renders it.
pub fn render_view(view: &ViewState, pixel_rect: PixelRect) -> Result<PixelBuffer, MandelbrotAlgorithmError> {
    let algorithm = MandelbrotAlgorithm::new(view.depth())?;
    let colour_map = SmoothGradient::new(view.depth(), view.decompose);
    let mapping = PlaneMapping::from_view(view, pixel_rect);

    Ok(render_plane(&mapping, &algorithm, &colour_map))
}

pub(crate) fn render_row<Alg, CMap>(
    mapping: &PlaneMapping,
    y: i32,
    algorithm: &Alg,
    colour_map: &CMap,
    row: &mut [u8],
) where
    Alg: FractalAlgorithm,
    CMap: ColourMap<Alg::Success>,
{
    for (x, pixel) in row.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
        let c = mapping.pixel_to_complex(Point { x: x as i32, y });
        let colour = colour_map.map(algorithm.compute(c));

        pixel.copy_from_slice(&[colour.r, colour.g, colour.b]);
    }
}
