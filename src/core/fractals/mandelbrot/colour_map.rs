use crate::core::actions::render_plane::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::algorithm::EscapeTime;
use crate::core::fractals::mandelbrot::mandelbrot_config::GRADIENT;

const DECOMPOSE_MASK: u8 = 0x10;

/// Continuous escape-time colouring over [`GRADIENT`].
///
/// Interior points are black. Escaped points get a fractional iteration
/// count from the escape magnitude, normalised by the depth and
/// interpolated between the two surrounding gradient stops. In decompose
/// mode, points whose orbit escaped below the real axis have bit 0x10 of
/// the blue channel flipped.
#[derive(Debug, Clone, Copy)]
pub struct SmoothGradient {
    max_iterations: u32,
    decompose: bool,
}

impl SmoothGradient {
    #[must_use]
    pub fn new(max_iterations: u32, decompose: bool) -> Self {
        Self { max_iterations, decompose }
    }

    fn normalised(&self, escape: EscapeTime) -> f64 {
        let log_modulus = escape.z.magnitude().ln().max(f64::MIN_POSITIVE);
        let smooth = escape.iterations as f64 + 1.0 - log_modulus.ln() / std::f64::consts::LN_2;
        let t = smooth / self.max_iterations as f64;

        if t.is_nan() { 1.0 } else { t.clamp(0.0, 1.0) }
    }
}

fn interpolate(t: f64) -> Colour {
    let last = GRADIENT.len() - 1;
    let scaled = t * last as f64;
    let idx = (scaled as usize).min(last);
    let frac = scaled - idx as f64;

    let lower = GRADIENT[idx];
    let upper = GRADIENT[(idx + 1).min(last)];
    let channel = |a: u8, b: u8| (a as f64 * (1.0 - frac) + b as f64 * frac) as u8;

    Colour {
        r: channel(lower.r, upper.r),
        g: channel(lower.g, upper.g),
        b: channel(lower.b, upper.b),
    }
}

impl ColourMap<EscapeTime> for SmoothGradient {
    fn map(&self, escape: EscapeTime) -> Colour {
        if escape.iterations >= self.max_iterations {
            return Colour::BLACK;
        }

        let mut colour = interpolate(self.normalised(escape));

        if self.decompose && escape.z.imag < 0.0 {
            colour.b ^= DECOMPOSE_MASK;
        }

        colour
    }
}
