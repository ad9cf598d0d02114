//! Widget trait definition.

use umbra_types::error::Result;
use umbra_types::surface::Surface;

/// Minimum interface for a host-driven UI element.
///
/// The host layout pass reports the element's final measured size through
/// `set_bounds`; the host paint pass then calls `draw` any number of times.
/// `set_bounds` may run several times per layout pass and must be idempotent
/// in effect. Both callbacks arrive on the host's single rendering thread,
/// never concurrently.
pub trait Widget {
    /// Accept the widget's final measured size for this layout pass.
    fn set_bounds(&mut self, width: u32, height: u32) -> Result<()>;

    /// Draw the widget at the given position and size.
    fn draw(&self, surface: &mut dyn Surface, x: i32, y: i32, w: u32, h: u32) -> Result<()>;
}
