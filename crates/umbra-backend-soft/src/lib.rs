//! Software rendering surface for Umbra.
//!
//! Implements [`Surface`] over an in-memory [`Pixmap`]: source-over
//! blending, nearest-neighbor scaled compositing, and a save/translate/
//! restore transform stack. Used for headless rendering, tests, and the
//! screenshot tool -- no windowing system required.

use umbra_types::color::Color;
use umbra_types::error::{Result, UmbraError};
use umbra_types::pixmap::Pixmap;
use umbra_types::surface::Surface;

/// A pixmap-backed drawing surface.
pub struct SoftSurface {
    pixels: Pixmap,
    translate: (i32, i32),
    saved: Vec<(i32, i32)>,
}

impl SoftSurface {
    /// Create a surface with the given dimensions, cleared to transparent.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let pixels = Pixmap::new(width, height)?;
        log::info!("soft surface initialized: {width}x{height}");
        Ok(Self {
            pixels,
            translate: (0, 0),
            saved: Vec::new(),
        })
    }

    /// Direct access to the backing pixmap.
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixels
    }

    /// Blend one pixel if it lands inside the surface.
    fn blend_pixel(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 || x >= self.pixels.width() as i32 || y >= self.pixels.height() as i32 {
            return;
        }
        let (ux, uy) = (x as u32, y as u32);
        let dst = self.pixels.pixel(ux, uy);
        self.pixels.set_pixel(ux, uy, color.over(dst));
    }

    /// Shared body of the plain and tinted pixmap composites.
    fn composite(
        &mut self,
        pixmap: &Pixmap,
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        tint: Option<Color>,
    ) -> Result<()> {
        if w == 0 || h == 0 || pixmap.is_empty() {
            return Ok(());
        }
        let (dx0, dy0) = (x + self.translate.0, y + self.translate.1);
        for row in 0..h {
            let sy = (row as u64 * pixmap.height() as u64 / h as u64) as u32;
            for col in 0..w {
                let sx = (col as u64 * pixmap.width() as u64 / w as u64) as u32;
                let mut src = pixmap.pixel(sx, sy);
                if let Some(tint) = tint {
                    src = src.modulate(tint);
                }
                if src.a == 0 {
                    continue;
                }
                self.blend_pixel(dx0 + col as i32, dy0 + row as i32, src);
            }
        }
        Ok(())
    }
}

impl Surface for SoftSurface {
    fn width(&self) -> u32 {
        self.pixels.width()
    }

    fn height(&self) -> u32 {
        self.pixels.height()
    }

    fn clear(&mut self, color: Color) -> Result<()> {
        self.pixels.fill(color);
        Ok(())
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Color) -> Result<()> {
        let (x0, y0) = (x + self.translate.0, y + self.translate.1);
        for row in 0..h as i32 {
            for col in 0..w as i32 {
                self.blend_pixel(x0 + col, y0 + row, color);
            }
        }
        Ok(())
    }

    fn draw_pixmap(&mut self, pixmap: &Pixmap, x: i32, y: i32, w: u32, h: u32) -> Result<()> {
        self.composite(pixmap, x, y, w, h, None)
    }

    fn draw_pixmap_tinted(
        &mut self,
        pixmap: &Pixmap,
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        tint: Color,
    ) -> Result<()> {
        self.composite(pixmap, x, y, w, h, Some(tint))
    }

    fn save(&mut self) -> Result<()> {
        self.saved.push(self.translate);
        Ok(())
    }

    fn translate(&mut self, dx: i32, dy: i32) -> Result<()> {
        self.translate.0 += dx;
        self.translate.1 += dy;
        Ok(())
    }

    fn restore(&mut self) -> Result<()> {
        match self.saved.pop() {
            Some(t) => {
                self.translate = t;
                Ok(())
            }
            None => Err(UmbraError::Surface("restore without matching save".into())),
        }
    }

    fn read_pixels(&self, x: i32, y: i32, w: u32, h: u32) -> Result<Vec<u8>> {
        let mut out = vec![0u8; w as usize * h as usize * 4];
        for row in 0..h as i32 {
            for col in 0..w as i32 {
                let (sx, sy) = (x + col, y + row);
                if sx < 0
                    || sy < 0
                    || sx >= self.pixels.width() as i32
                    || sy >= self.pixels.height() as i32
                {
                    continue;
                }
                let c = self.pixels.pixel(sx as u32, sy as u32);
                let i = (row as usize * w as usize + col as usize) * 4;
                out[i] = c.r;
                out[i + 1] = c.g;
                out[i + 2] = c.b;
                out[i + 3] = c.a;
            }
        }
        Ok(out)
    }
}
