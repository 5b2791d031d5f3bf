//! PNG encoding of framebuffers.
//!
//! Wraps the `png` crate to serialize a [`Framebuffer`] as an 8-bit RGBA
//! image, either straight to a file or into an in-memory byte stream.

use crate::error::Result;
use crate::framebuffer::Framebuffer;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Encodes framebuffers as 8-bit RGBA PNG images.
pub struct PngEncoder;

impl PngEncoder {
    /// Write a framebuffer to `path` as a PNG file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or encoding fails.
    pub fn write_to_file<P: AsRef<Path>>(fb: &Framebuffer, path: P) -> Result<()> {
        let file = File::create(path)?;
        Self::encode_into(fb, BufWriter::new(file))
    }

    /// Encode a framebuffer into an in-memory PNG byte stream.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding fails.
    pub fn to_bytes(fb: &Framebuffer) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        Self::encode_into(fb, &mut buffer)?;
        Ok(buffer)
    }

    fn encode_into<W: std::io::Write>(fb: &Framebuffer, writer: W) -> Result<()> {
        let mut encoder = png::Encoder::new(writer, fb.width(), fb.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        let mut png_writer = encoder.write_header()?;
        png_writer.write_image_data(fb.pixels())?;
        Ok(())
    }
}
