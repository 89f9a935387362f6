use crate::core::data::colour::Colour;
use crate::core::data::view_state::ViewState;
use crate::presenters::overlay::font::{GLYPH_HEIGHT, GLYPH_WIDTH, glyph_3x5};

pub const OVERLAY_WIDTH: u32 = 600;
pub const OVERLAY_HEIGHT: u32 = 300;
const LINE_HEIGHT: i32 = 22;
const MARGIN: i32 = 10;
const GLYPH_SCALE: i32 = 3;

const HELP_TITLE: &str = "Terminal Mandelbrot";
const HELP_LINES: [&str; 7] = [
    "* arrows to pan",
    "* +/- or left/right click to zoom",
    "* [/] to change depth",
    "* h/i toggle help/info",
    "* d toggle binary decompose",
    "* q/esc/ctrl-c to quit",
    "* r to reset",
];

const WHITE: Colour = Colour::new(255, 255, 255);
const INFO_BLUE: Colour = Colour::new(128, 128, 255);
const OPAQUE: u8 = 255;
const DIMMED: u8 = 204;

/// Straight-alpha RGBA raster, transparent where nothing is drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaImage {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RgbaImage {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * 4],
        }
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
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    #[must_use]
    pub fn alpha_at(&self, x: u32, y: u32) -> u8 {
        self.data[(y as usize * self.width as usize + x as usize) * 4 + 3]
    }

    fn set(&mut self, x: i32, y: i32, colour: Colour, alpha: u8) {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return;
        }

        let idx = (y as usize * self.width as usize + x as usize) * 4;
        self.data[idx..idx + 4].copy_from_slice(&[colour.r, colour.g, colour.b, alpha]);
    }

    /// Draws `text` with its baseline at `baseline`.
    pub fn draw_text(&mut self, x: i32, baseline: i32, text: &str, colour: Colour, alpha: u8) {
        let top = baseline - GLYPH_HEIGHT * GLYPH_SCALE;
        let advance = (GLYPH_WIDTH + 1) * GLYPH_SCALE;

        for (i, ch) in text.chars().enumerate() {
            self.draw_char(x + i as i32 * advance, top, ch, colour, alpha);
        }
    }

    fn draw_char(&mut self, x: i32, y: i32, ch: char, colour: Colour, alpha: u8) {
        for (ry, row_bits) in glyph_3x5(ch).iter().enumerate() {
            for rx in 0..GLYPH_WIDTH {
                if row_bits & (1u8 << (GLYPH_WIDTH - 1 - rx)) == 0 {
                    continue;
                }
                let px = x + rx * GLYPH_SCALE;
                let py = y + ry as i32 * GLYPH_SCALE;
                for oy in 0..GLYPH_SCALE {
                    for ox in 0..GLYPH_SCALE {
                        self.set(px + ox, py + oy, colour, alpha);
                    }
                }
            }
        }
    }
}

/// Renders the help and info text for `view` into a transparent layer.
#[must_use]
pub fn compose_overlay(view: &ViewState) -> RgbaImage {
    let (height, info_y) = if view.show_help {
        (OVERLAY_HEIGHT, LINE_HEIGHT * 10)
    } else {
        (7 * LINE_HEIGHT as u32, LINE_HEIGHT)
    };
    let mut image = RgbaImage::new(OVERLAY_WIDTH, height);

    if view.show_help {
        image.draw_text(MARGIN, LINE_HEIGHT, HELP_TITLE, WHITE, OPAQUE);
        for (i, line) in HELP_LINES.iter().enumerate() {
            image.draw_text(MARGIN, LINE_HEIGHT * (i as i32 + 2), line, WHITE, DIMMED);
        }
    }

    if view.show_info {
        let lines = [
            format!("* Center {}", view.center),
            format!("* Radius {}", format_general(view.radius())),
            format!("* Depth {}", view.depth()),
            format!("* Time {:.1}ms", view.last_render_duration.as_secs_f64() * 1e3),
        ];
        for (i, line) in lines.iter().enumerate() {
            image.draw_text(MARGIN, info_y + LINE_HEIGHT * i as i32, line, INFO_BLUE, DIMMED);
        }
    }

    image
}

/// Plain decimal for moderate magnitudes, scientific notation otherwise.
fn format_general(value: f64) -> String {
    let magnitude = value.abs();

    if magnitude != 0.0 && !(1e-4..1e6).contains(&magnitude) {
        format!("{:e}", value)
    } else {
        format!("{}", value)
    }
}
