//! Standalone drop-shadow widget.

use umbra_types::error::Result;
use umbra_types::style::ShadowStyle;
use umbra_types::surface::Surface;

use crate::renderer::ShadowRenderer;
use crate::widget::Widget;

/// A widget that renders a soft drop shadow behind its rectangular bounds.
///
/// The view owns a [`ShadowRenderer`] and forwards the host's layout and
/// paint callbacks to it. Place it beneath the content it should shadow; the
/// shadow lands down-right of the content by the style offsets.
pub struct ShadowView {
    renderer: ShadowRenderer,
}

impl ShadowView {
    /// Create a view with the default style (5px blur, 10px down-right
    /// offset, 2px corner rounding, black at 70% alpha).
    pub fn new() -> Self {
        Self {
            renderer: ShadowRenderer::default(),
        }
    }

    /// Create a view with a custom style.
    pub fn with_style(style: ShadowStyle) -> Result<Self> {
        Ok(Self {
            renderer: ShadowRenderer::new(style)?,
        })
    }

    pub fn style(&self) -> &ShadowStyle {
        self.renderer.style()
    }

    pub fn renderer(&self) -> &ShadowRenderer {
        &self.renderer
    }
}

impl Default for ShadowView {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for ShadowView {
    fn set_bounds(&mut self, width: u32, height: u32) -> Result<()> {
        self.renderer.set_bounds(width, height)
    }

    fn draw(&self, surface: &mut dyn Surface, x: i32, y: i32, w: u32, h: u32) -> Result<()> {
        self.renderer.draw(surface, x, y, w, h)
    }
}
