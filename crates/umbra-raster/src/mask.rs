//! Single-channel coverage masks and anti-aliased rounded-rectangle fills.

use umbra_types::error::{Result, UmbraError};
use umbra_types::pixmap::MAX_PIXMAP_DIM;

/// A single-channel coverage plane, one byte per pixel (255 = full
/// coverage). Serves as the blur input for shadow silhouettes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Mask {
    /// Allocate a zero-coverage mask. Same dimension limits as pixmaps.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width > MAX_PIXMAP_DIM || height > MAX_PIXMAP_DIM {
            return Err(UmbraError::Allocation {
                width,
                height,
                reason: format!("exceeds the {MAX_PIXMAP_DIM} pixel dimension limit"),
            });
        }
        Ok(Self {
            width,
            height,
            data: vec![0; width as usize * height as usize],
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Coverage at (x, y). Panics if out of bounds.
    pub fn coverage(&self, x: u32, y: u32) -> u8 {
        assert!(x < self.width && y < self.height, "mask ({x}, {y}) out of bounds");
        self.data[y as usize * self.width as usize + x as usize]
    }

    /// Paint an anti-aliased rounded rectangle into the mask.
    ///
    /// The rectangle spans `(x, y)` to `(x + w, y + h)` with corners rounded
    /// by `corner_radius` (clamped to half the smaller dimension). Coverage
    /// is evaluated at pixel centers from the signed distance to the
    /// silhouette boundary, giving a one-pixel anti-aliased edge. Repeated
    /// paints accumulate with a saturating max, so overlaps do not darken.
    pub fn fill_rounded_rect(&mut self, x: i32, y: i32, w: u32, h: u32, corner_radius: f32) {
        if w == 0 || h == 0 || self.width == 0 || self.height == 0 {
            return;
        }
        let wf = w as f32;
        let hf = h as f32;
        let r = corner_radius.min(wf * 0.5).min(hf * 0.5).max(0.0);

        // One pixel of slack on each side for the anti-aliased edge.
        let x0 = (x - 1).max(0);
        let y0 = (y - 1).max(0);
        let x1 = (x + w as i32 + 1).min(self.width as i32);
        let y1 = (y + h as i32 + 1).min(self.height as i32);

        for iy in y0..y1 {
            let py = (iy as f32 + 0.5) - y as f32;
            let row = iy as usize * self.width as usize;
            for ix in x0..x1 {
                let px = (ix as f32 + 0.5) - x as f32;
                let d = rounded_rect_distance(px, py, wf, hf, r);
                let cov = (0.5 - d).clamp(0.0, 1.0);
                let v = (cov * 255.0 + 0.5) as u8;
                let cell = &mut self.data[row + ix as usize];
                *cell = (*cell).max(v);
            }
        }
    }
}

/// Signed distance from a point to the boundary of a rounded rectangle
/// spanning (0, 0)-(w, h) with corner radius `r`. Negative inside.
fn rounded_rect_distance(px: f32, py: f32, w: f32, h: f32, r: f32) -> f32 {
    let hx = w * 0.5;
    let hy = h * 0.5;
    let qx = (px - hx).abs() - (hx - r);
    let qy = (py - hy).abs() - (hy - r);
    let ox = qx.max(0.0);
    let oy = qy.max(0.0);
    (ox * ox + oy * oy).sqrt() + qx.max(qy).min(0.0) - r
}
