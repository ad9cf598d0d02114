//! Off-screen RGBA pixel buffer.

use crate::color::Color;
use crate::error::{Result, UmbraError};

/// Largest pixmap edge accepted by [`Pixmap::new`].
pub const MAX_PIXMAP_DIM: u32 = 8192;

/// An in-memory RGBA8 pixel buffer, row-major, not tied to any visible
/// surface. Used as an intermediate rendering target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pixmap {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Pixmap {
    /// Allocate a fully transparent pixmap.
    ///
    /// Dimensions above [`MAX_PIXMAP_DIM`] are rejected with
    /// [`UmbraError::Allocation`]. Zero-sized pixmaps are valid.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width > MAX_PIXMAP_DIM || height > MAX_PIXMAP_DIM {
            return Err(UmbraError::Allocation {
                width,
                height,
                reason: format!("exceeds the {MAX_PIXMAP_DIM} pixel dimension limit"),
            });
        }
        let len = width as usize * height as usize * 4;
        Ok(Self {
            width,
            height,
            data: vec![0; len],
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Raw RGBA data, 4 bytes per pixel, row-major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Read the pixel at (x, y). Panics if out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Color {
        let i = self.index(x, y);
        Color::rgba(
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        )
    }

    /// Write the pixel at (x, y). Panics if out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        let i = self.index(x, y);
        self.data[i] = color.r;
        self.data[i + 1] = color.g;
        self.data[i + 2] = color.b;
        self.data[i + 3] = color.a;
    }

    /// Set every pixel to the given color.
    pub fn fill(&mut self, color: Color) {
        for px in self.data.chunks_exact_mut(4) {
            px[0] = color.r;
            px[1] = color.g;
            px[2] = color.b;
            px[3] = color.a;
        }
    }

    /// First pixel with nonzero alpha in row-major scan order, if any.
    pub fn first_visible_pixel(&self) -> Option<(u32, u32)> {
        for y in 0..self.height {
            for x in 0..self.width {
                if self.data[self.index(x, y) + 3] != 0 {
                    return Some((x, y));
                }
            }
        }
        None
    }

    fn index(&self, x: u32, y: u32) -> usize {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        (y as usize * self.width as usize + x as usize) * 4
    }
}
