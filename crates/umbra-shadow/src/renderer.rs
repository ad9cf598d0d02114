//! Cached drop-shadow rendering.
//!
//! [`ShadowRenderer`] owns a pixmap holding a blurred rounded rectangle
//! sized to the widget bounds plus blur padding. The pixmap is rebuilt on
//! every bounds change and composited with the configured offset beneath the
//! widget content on every draw.

use umbra_raster::blur::box_blur;
use umbra_raster::mask::Mask;
use umbra_types::error::{Result, UmbraError};
use umbra_types::pixmap::Pixmap;
use umbra_types::style::ShadowStyle;
use umbra_types::surface::Surface;

/// Box-blur passes applied to the silhouette mask.
const BLUR_PASSES: u32 = 2;

/// The built pixmap plus the widget bounds it was built for.
struct CachedShadow {
    pixmap: Pixmap,
    width: u32,
    height: u32,
}

/// Renders a soft drop shadow for a rectangular widget.
///
/// Two states only: uninitialized (no pixmap, before the first bounds
/// change) and ready (pixmap present and matching the last known bounds).
/// The host must report bounds through [`set_bounds`](Self::set_bounds)
/// before the first [`draw`](Self::draw).
pub struct ShadowRenderer {
    style: ShadowStyle,
    cached: Option<CachedShadow>,
}

impl Default for ShadowRenderer {
    fn default() -> Self {
        Self {
            style: ShadowStyle::default(),
            cached: None,
        }
    }
}

impl ShadowRenderer {
    /// Create a renderer with the given style.
    ///
    /// Rejects unusable styles (non-finite or negative corner radius,
    /// oversized blur radius) with [`UmbraError::Style`].
    pub fn new(style: ShadowStyle) -> Result<Self> {
        style.validate()?;
        Ok(Self {
            style,
            cached: None,
        })
    }

    pub fn style(&self) -> &ShadowStyle {
        &self.style
    }

    /// Bounds the cached pixmap was built for, if any.
    pub fn cached_bounds(&self) -> Option<(u32, u32)> {
        self.cached.as_ref().map(|c| (c.width, c.height))
    }

    /// The cached shadow pixmap, if built.
    pub fn pixmap(&self) -> Option<&Pixmap> {
        self.cached.as_ref().map(|c| &c.pixmap)
    }

    /// Rebuild the cached shadow pixmap for the given widget bounds.
    ///
    /// Runs on every layout pass, unconditionally; repeated calls with the
    /// same bounds produce a pixel-identical pixmap. The pixmap spans the
    /// widget plus `radius` padding on each side so the blur has border
    /// room. On failure the previous pixmap stays in place.
    pub fn set_bounds(&mut self, width: u32, height: u32) -> Result<()> {
        let pixmap = self.build_pixmap(width, height)?;
        log::debug!(
            "shadow pixmap rebuilt: {}x{} for {width}x{height} bounds",
            pixmap.width(),
            pixmap.height()
        );
        self.cached = Some(CachedShadow {
            pixmap,
            width,
            height,
        });
        Ok(())
    }

    /// Composite the cached shadow beneath the widget content region.
    ///
    /// Saves the surface transform, translates the origin by
    /// `(left + offset_x, top + offset_y)`, composites the pixmap's full
    /// extent into the destination rectangle `(0, 0, width, height)`
    /// modulated by the shadow tint, then restores the transform. The
    /// restore runs even if compositing fails.
    ///
    /// Errors with [`UmbraError::NotInitialized`] if no bounds change has
    /// succeeded yet.
    pub fn draw(
        &self,
        surface: &mut dyn Surface,
        left: i32,
        top: i32,
        width: u32,
        height: u32,
    ) -> Result<()> {
        let cached = self.cached.as_ref().ok_or(UmbraError::NotInitialized)?;
        surface.save()?;
        let drawn = surface
            .translate(left + self.style.offset_x, top + self.style.offset_y)
            .and_then(|_| {
                surface.draw_pixmap_tinted(&cached.pixmap, 0, 0, width, height, self.style.color)
            });
        let restored = surface.restore();
        drawn.and(restored)
    }

    fn build_pixmap(&self, width: u32, height: u32) -> Result<Pixmap> {
        let pad = self.style.radius;
        let pm_w = width.saturating_add(2 * pad);
        let pm_h = height.saturating_add(2 * pad);

        let mut mask = Mask::new(pm_w, pm_h)?;
        mask.fill_rounded_rect(pad as i32, pad as i32, width, height, self.style.corner_radius);
        box_blur(&mut mask, self.style.radius, BLUR_PASSES);

        let mut pixmap = Pixmap::new(pm_w, pm_h)?;
        let color = self.style.color;
        for y in 0..pm_h {
            for x in 0..pm_w {
                let cov = mask.coverage(x, y) as u32;
                if cov == 0 {
                    continue;
                }
                let a = (cov * color.a as u32 / 255) as u8;
                pixmap.set_pixel(x, y, color.with_alpha(a));
            }
        }
        Ok(pixmap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{MockSurface, SurfaceCall};
    use umbra_types::color::Color;

    fn default_renderer() -> ShadowRenderer {
        ShadowRenderer::new(ShadowStyle::default()).unwrap()
    }

    #[test]
    fn new_rejects_bad_corner_radius() {
        let style = ShadowStyle {
            corner_radius: -3.0,
            ..ShadowStyle::default()
        };
        assert!(matches!(
            ShadowRenderer::new(style),
            Err(UmbraError::Style(_))
        ));
    }

    #[test]
    fn pixmap_padded_by_radius_on_each_side() {
        let mut r = default_renderer();
        r.set_bounds(100, 50).unwrap();
        let pm = r.pixmap().unwrap();
        assert_eq!((pm.width(), pm.height()), (110, 60));
        assert_eq!(r.cached_bounds(), Some((100, 50)));
    }

    #[test]
    fn interior_holds_full_style_alpha() {
        let mut r = default_renderer();
        r.set_bounds(100, 50).unwrap();
        let pm = r.pixmap().unwrap();
        let center = pm.pixel(55, 30);
        assert_eq!(center, Color::rgba(0, 0, 0, 178));
        // The padded corner carries less alpha than the interior.
        assert!(pm.pixel(0, 0).a < center.a);
    }

    #[test]
    fn zero_radius_means_no_padding_and_sharp_edges() {
        let style = ShadowStyle {
            radius: 0,
            ..ShadowStyle::default()
        };
        let mut r = ShadowRenderer::new(style).unwrap();
        r.set_bounds(40, 20).unwrap();
        let pm = r.pixmap().unwrap();
        assert_eq!((pm.width(), pm.height()), (40, 20));
        // Unblurred: edge midpoints carry the full tint alpha.
        assert_eq!(pm.pixel(20, 0).a, 178);
        assert_eq!(pm.pixel(0, 10).a, 178);
        assert_eq!(pm.pixel(20, 10).a, 178);
    }

    #[test]
    fn rebuild_replaces_previous_pixmap() {
        let mut r = default_renderer();
        r.set_bounds(100, 50).unwrap();
        r.set_bounds(200, 80).unwrap();
        let pm = r.pixmap().unwrap();
        assert_eq!((pm.width(), pm.height()), (210, 90));
        assert_eq!(r.cached_bounds(), Some((200, 80)));
    }

    #[test]
    fn failed_rebuild_keeps_previous_pixmap() {
        let mut r = default_renderer();
        r.set_bounds(100, 50).unwrap();
        let err = r.set_bounds(9000, 50).unwrap_err();
        assert!(matches!(err, UmbraError::Allocation { .. }));
        assert_eq!(r.cached_bounds(), Some((100, 50)));
    }

    #[test]
    fn draw_before_set_bounds_is_not_initialized() {
        let r = default_renderer();
        let mut surface = MockSurface::new();
        let err = r.draw(&mut surface, 0, 0, 100, 50).unwrap_err();
        assert!(matches!(err, UmbraError::NotInitialized));
        assert!(surface.calls.is_empty());
    }

    #[test]
    fn draw_translates_composites_and_restores() {
        let mut r = default_renderer();
        r.set_bounds(100, 50).unwrap();
        let mut surface = MockSurface::new();
        r.draw(&mut surface, 3, 4, 100, 50).unwrap();

        assert_eq!(surface.calls.len(), 4);
        assert_eq!(surface.calls[0], SurfaceCall::Save);
        assert_eq!(surface.calls[1], SurfaceCall::Translate { dx: 13, dy: 14 });
        assert_eq!(
            surface.calls[2],
            SurfaceCall::DrawPixmap {
                x: 0,
                y: 0,
                w: 100,
                h: 50,
                src_w: 110,
                src_h: 60,
                tint: Some(Color::rgba(0, 0, 0, 178)),
            }
        );
        assert_eq!(surface.calls[3], SurfaceCall::Restore);
        assert!(surface.save_restore_balanced());
    }

    #[test]
    fn draw_destination_tracks_current_bounds_not_cached_ones() {
        // The host may pass a size differing from the last layout pass; the
        // destination rect always follows the draw arguments.
        let mut r = default_renderer();
        r.set_bounds(100, 50).unwrap();
        let mut surface = MockSurface::new();
        r.draw(&mut surface, 0, 0, 64, 32).unwrap();
        // A zero origin leaves only the style offset in the translation.
        assert_eq!(surface.translate_before_pixmap(), Some((10, 10)));
        match surface.pixmap_calls()[0] {
            SurfaceCall::DrawPixmap { w, h, .. } => {
                assert_eq!((*w, *h), (64, 32));
            }
            other => panic!("unexpected call: {other:?}"),
        }
    }

    #[test]
    fn negative_offsets_shift_up_left() {
        let style = ShadowStyle {
            offset_x: -4,
            offset_y: -6,
            ..ShadowStyle::default()
        };
        let mut r = ShadowRenderer::new(style).unwrap();
        r.set_bounds(10, 10).unwrap();
        let mut surface = MockSurface::new();
        r.draw(&mut surface, 20, 20, 10, 10).unwrap();
        assert_eq!(surface.translate_before_pixmap(), Some((16, 14)));
    }

    #[test]
    fn empty_bounds_are_accepted() {
        let mut r = default_renderer();
        r.set_bounds(0, 0).unwrap();
        let pm = r.pixmap().unwrap();
        assert_eq!((pm.width(), pm.height()), (10, 10));
        assert_eq!(pm.first_visible_pixel(), None);
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn pixmap_dims_are_bounds_plus_twice_radius(
                w in 0u32..96,
                h in 0u32..96,
                radius in 0u32..12,
            ) {
                let style = ShadowStyle { radius, ..ShadowStyle::default() };
                let mut r = ShadowRenderer::new(style).unwrap();
                r.set_bounds(w, h).unwrap();
                let pm = r.pixmap().unwrap();
                prop_assert_eq!(pm.width(), w + 2 * radius);
                prop_assert_eq!(pm.height(), h + 2 * radius);
            }

            #[test]
            fn rebuild_is_pixel_identical(
                w in 1u32..64,
                h in 1u32..64,
            ) {
                let mut r = ShadowRenderer::new(ShadowStyle::default()).unwrap();
                r.set_bounds(w, h).unwrap();
                let first = r.pixmap().unwrap().clone();
                r.set_bounds(w, h).unwrap();
                prop_assert_eq!(r.pixmap().unwrap(), &first);
            }
        }
    }
}
