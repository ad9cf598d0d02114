//! Drawing-surface trait.
//!
//! Every rendering host implements [`Surface`]. Widgets dispatch all drawing
//! through this trait boundary -- they never touch a concrete framebuffer.

use crate::color::Color;
use crate::error::Result;
use crate::pixmap::Pixmap;

/// A 2D immediate-mode drawing surface.
///
/// # Core methods (required)
///
/// All surfaces must implement `width`, `height`, `clear`, `fill_rect`,
/// `draw_pixmap`, `save`, `translate`, `restore`, and `read_pixels`.
///
/// # Extended methods (optional, with defaults)
///
/// Surfaces may override the extended methods for richer rendering. Default
/// implementations approximate using the core methods, so minimal surfaces
/// (including test doubles) work without changes.
pub trait Surface {
    /// Surface width in pixels.
    fn width(&self) -> u32;

    /// Surface height in pixels.
    fn height(&self) -> u32;

    /// Clear the whole surface to a solid color, replacing existing pixels.
    fn clear(&mut self, color: Color) -> Result<()>;

    /// Fill an axis-aligned rectangle, alpha-blended over existing pixels.
    /// Coordinates are subject to the current translation.
    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Color) -> Result<()>;

    /// Composite a pixmap, sampling its full extent into the destination
    /// rectangle `(x, y, w, h)`. The pixmap is stretched or squashed to fit.
    fn draw_pixmap(&mut self, pixmap: &Pixmap, x: i32, y: i32, w: u32, h: u32) -> Result<()>;

    /// Push the current transform state onto the save stack.
    fn save(&mut self) -> Result<()>;

    /// Offset the surface origin. Applies to all subsequent draw calls until
    /// the enclosing `save` is restored.
    fn translate(&mut self, dx: i32, dy: i32) -> Result<()>;

    /// Pop the most recently saved transform state. Restoring with an empty
    /// save stack is a surface error.
    fn restore(&mut self) -> Result<()>;

    /// Read back RGBA pixel data for the given region. Pixels outside the
    /// surface read as transparent.
    fn read_pixels(&self, x: i32, y: i32, w: u32, h: u32) -> Result<Vec<u8>>;

    // -----------------------------------------------------------------------
    // Extended methods (optional, with defaults)
    // -----------------------------------------------------------------------

    /// Fill a rectangle with rounded corners.
    ///
    /// `radius` is the corner radius in pixels; 0 is equivalent to
    /// `fill_rect`.
    fn fill_rounded_rect(
        &mut self,
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        _radius: u16,
        color: Color,
    ) -> Result<()> {
        // Default: fall back to sharp corners.
        self.fill_rect(x, y, w, h, color)
    }

    /// Composite a pixmap modulated by a tint color (per channel, including
    /// alpha).
    fn draw_pixmap_tinted(
        &mut self,
        pixmap: &Pixmap,
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        tint: Color,
    ) -> Result<()> {
        // Default: ignore the tint.
        let _ = tint;
        self.draw_pixmap(pixmap, x, y, w, h)
    }

    /// Composite a pixmap at its natural size.
    fn draw_pixmap_at(&mut self, pixmap: &Pixmap, x: i32, y: i32) -> Result<()> {
        self.draw_pixmap(pixmap, x, y, pixmap.width(), pixmap.height())
    }
}
