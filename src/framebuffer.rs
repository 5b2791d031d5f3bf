//! Pixel surface shared by the canvas and the output encoders.
//!
//! Provides a row-major RGBA buffer that the grid canvas paints into and
//! the output encoders read from.

use crate::color::Rgba;
use crate::error::{Error, Result};

/// RGBA framebuffer with tightly packed row-major storage.
///
/// Each pixel occupies 4 bytes in `[r, g, b, a]` order and rows carry no
/// padding, so the raw buffer can be handed to encoders as-is.
#[derive(Debug, Clone)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Framebuffer {
    /// Allocate a framebuffer of the given dimensions, all pixels
    /// transparent black.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use rasterviz::framebuffer::Framebuffer;
    ///
    /// let fb = Framebuffer::new(640, 480).unwrap();
    /// assert_eq!(fb.pixel_count(), 640 * 480);
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        Ok(Self {
            width,
            height,
            pixels: vec![0; (width as usize) * (height as usize) * 4],
        })
    }

    /// Surface width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Surface height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Total number of pixels.
    #[must_use]
    pub const fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// The raw RGBA bytes in row-major order.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Flood the whole surface with one color.
    pub fn clear(&mut self, color: Rgba) {
        let bytes = color.to_array();
        for chunk in self.pixels.chunks_exact_mut(4) {
            chunk.copy_from_slice(&bytes);
        }
    }

    /// Paint a solid rectangle.
    ///
    /// The rectangle may extend past any edge (including negative
    /// coordinates); only its intersection with the surface is painted.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Rgba) {
        let x_lo = x.max(0) as usize;
        let y_lo = y.max(0) as usize;
        let x_hi = x.saturating_add_unsigned(w).clamp(0, self.width as i32) as usize;
        let y_hi = y.saturating_add_unsigned(h).clamp(0, self.height as i32) as usize;

        if x_lo >= x_hi || y_lo >= y_hi {
            return;
        }

        let bytes = color.to_array();
        let row_pixels = self.width as usize;
        for row in y_lo..y_hi {
            let start = (row * row_pixels + x_lo) * 4;
            let end = (row * row_pixels + x_hi) * 4;
            for chunk in self.pixels[start..end].chunks_exact_mut(4) {
                chunk.copy_from_slice(&bytes);
            }
        }
    }

    /// The color at a pixel coordinate, or `None` outside the surface.
    #[must_use]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let idx = self.pixel_index(x, y);
        let mut bytes = [0; 4];
        bytes.copy_from_slice(&self.pixels[idx..idx + 4]);
        Some(Rgba::from_array(bytes))
    }

    /// Set the color at a pixel coordinate. Writes outside the surface are
    /// ignored.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if x >= self.width || y >= self.height {
            return;
        }

        let idx = self.pixel_index(x, y);
        self.pixels[idx..idx + 4].copy_from_slice(&color.to_array());
    }

    /// Byte offset of a pixel coordinate.
    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width as usize) + (x as usize)) * 4
    }
}
