use base64::Engine;
use std::io::{self, Write};

/// Maximum base64 payload per escape sequence.
pub const CHUNK_SIZE: usize = 4096;

/// Deletes every image placement and frees the image data.
pub const DELETE_ALL_IMAGES: &[u8] = b"\x1b_Ga=d,d=A,q=2\x1b\\";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    Rgb,
    Rgba,
}

impl PixelFormat {
    fn code(self) -> u8 {
        match self {
            Self::Rgb => 24,
            Self::Rgba => 32,
        }
    }
}

/// Transmits and displays raw pixels at the cursor using the kitty graphics
/// protocol, split into base64 chunks of at most [`CHUNK_SIZE`] bytes.
pub fn write_image(
    out: &mut dyn Write,
    format: PixelFormat,
    pixels: &[u8],
    width: u32,
    height: u32,
) -> io::Result<()> {
    if pixels.is_empty() {
        return Ok(());
    }

    let encoded = base64::engine::general_purpose::STANDARD.encode(pixels);
    let mut chunks = encoded.as_bytes().chunks(CHUNK_SIZE).peekable();
    let mut first = true;

    while let Some(chunk) = chunks.next() {
        let more = u8::from(chunks.peek().is_some());

        if first {
            write!(
                out,
                "\x1b_Gf={},a=T,s={},v={},q=2,m={};",
                format.code(),
                width,
                height,
                more
            )?;
            first = false;
        } else {
            write!(out, "\x1b_Gq=2,m={};", more)?;
        }
        out.write_all(chunk)?;
        out.write_all(b"\x1b\\")?;
    }

    Ok(())
}
