use std::io::{self, Write};

use crate::controllers::interactive::ports::FrameSink;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::raster_geometry::RasterGeometry;
use crate::core::data::view_state::ViewState;
use crate::presenters::kitty::transport::{DELETE_ALL_IMAGES, PixelFormat, write_image};
use crate::presenters::overlay::compose_overlay;

const CURSOR_HOME: &[u8] = b"\x1b[H";

/// Streams frames to a kitty-graphics capable terminal.
///
/// Frames go out as strips one character cell high, each followed by a line
/// break, so the picture lines up with the text grid as it arrives.
pub struct KittyPresenter<W: Write> {
    out: W,
}

impl<W: Write> KittyPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> FrameSink for KittyPresenter<W> {
    fn present_frame(&mut self, frame: &PixelBuffer, geometry: &RasterGeometry) -> io::Result<()> {
        let width = frame.pixel_rect().width();
        let height = frame.pixel_rect().height();
        let strip_height = geometry.cell_height.max(1);

        self.out.write_all(CURSOR_HOME)?;
        self.out.write_all(DELETE_ALL_IMAGES)?;

        let mut y = 0;
        while y < height {
            let rows = strip_height.min(height - y);
            write_image(&mut self.out, PixelFormat::Rgb, frame.rows(y, rows), width, rows)?;
            self.out.write_all(b"\r\n")?;
            y += rows;
        }

        self.out.flush()
    }

    fn present_overlay(&mut self, view: &ViewState) -> io::Result<()> {
        let overlay = compose_overlay(view);

        self.out.write_all(CURSOR_HOME)?;
        write_image(
            &mut self.out,
            PixelFormat::Rgba,
            overlay.data(),
            overlay.width(),
            overlay.height(),
        )?;

        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::pixel_rect::PixelRect;

    fn strip_headers(out: &str) -> Vec<&str> {
        out.split("\x1b_G")
            .filter(|s| s.starts_with("f="))
            .map(|s| s.split(';').next().unwrap())
            .collect()
    }

    #[test]
    fn test_frame_is_sent_in_cell_high_strips() {
        // 10x4 cells of 4x5 pixels leave a 36x15 image in three strips.
        let geometry = RasterGeometry::from_terminal(4, 10, 40, 20).unwrap();
        let frame = PixelBuffer::new(geometry.pixel_rect());
        let mut presenter = KittyPresenter::new(Vec::new());

        presenter.present_frame(&frame, &geometry).unwrap();

        let out = String::from_utf8(presenter.into_inner()).unwrap();
        assert!(out.starts_with("\x1b[H\x1b_Ga=d,d=A,q=2\x1b\\"));
        assert_eq!(
            strip_headers(&out),
            vec!["f=24,a=T,s=36,v=5,q=2,m=0"; 3]
        );
        assert_eq!(out.matches("\r\n").count(), 3);
    }

    #[test]
    fn test_last_strip_is_clipped_to_frame_height() {
        let geometry = RasterGeometry::from_terminal(4, 10, 40, 20).unwrap();
        let frame = PixelBuffer::new(PixelRect::new(36, 12).unwrap());
        let mut presenter = KittyPresenter::new(Vec::new());

        presenter.present_frame(&frame, &geometry).unwrap();

        let out = String::from_utf8(presenter.into_inner()).unwrap();
        assert_eq!(
            strip_headers(&out),
            vec![
                "f=24,a=T,s=36,v=5,q=2,m=0",
                "f=24,a=T,s=36,v=5,q=2,m=0",
                "f=24,a=T,s=36,v=2,q=2,m=0",
            ]
        );
    }

    #[test]
    fn test_overlay_is_rgba_at_home_position() {
        let mut presenter = KittyPresenter::new(Vec::new());

        presenter.present_overlay(&ViewState::default()).unwrap();

        let out = String::from_utf8(presenter.into_inner()).unwrap();
        assert!(out.starts_with("\x1b[H\x1b_Gf=32,a=T,s=600,v=300,q=2,m=1;"));
        assert!(out.ends_with("\x1b\\"));
    }
}
