//! Shadow style parameters.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{Result, UmbraError};

/// Largest accepted blur radius. Bounds the padding a shadow pixmap adds
/// around the widget silhouette.
pub const MAX_BLUR_RADIUS: u32 = 256;

/// Default shadow tint: black at 70% opacity.
pub const DEFAULT_SHADOW_COLOR: Color = Color::rgba(0, 0, 0, 178);

/// Style parameters for a drop shadow.
///
/// Immutable once handed to a renderer. All fields have serde defaults, so
/// partial TOML tables deserialize cleanly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadowStyle {
    /// Blur spread in pixels. Also the padding added on each side of the
    /// silhouette so the blur has border room.
    pub radius: u32,
    /// Horizontal shadow shift in pixels. Positive shifts right.
    pub offset_x: i32,
    /// Vertical shadow shift in pixels. Positive shifts down.
    pub offset_y: i32,
    /// Corner rounding of the shadow silhouette in pixels.
    pub corner_radius: f32,
    /// Shadow tint.
    pub color: Color,
}

impl Default for ShadowStyle {
    fn default() -> Self {
        Self {
            radius: 5,
            offset_x: 10,
            offset_y: 10,
            corner_radius: 2.0,
            color: DEFAULT_SHADOW_COLOR,
        }
    }
}

impl ShadowStyle {
    /// Check the style for unusable parameters.
    pub fn validate(&self) -> Result<()> {
        if !self.corner_radius.is_finite() || self.corner_radius < 0.0 {
            return Err(UmbraError::Style(format!(
                "corner radius must be finite and non-negative, got {}",
                self.corner_radius
            )));
        }
        if self.radius > MAX_BLUR_RADIUS {
            return Err(UmbraError::Style(format!(
                "blur radius {} exceeds the {MAX_BLUR_RADIUS} pixel limit",
                self.radius
            )));
        }
        Ok(())
    }

    /// Padding added on each side of the silhouette for blur border room.
    pub fn padding(&self) -> u32 {
        self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_reference_widget() {
        let s = ShadowStyle::default();
        assert_eq!(s.radius, 5);
        assert_eq!(s.offset_x, 10);
        assert_eq!(s.offset_y, 10);
        assert_eq!(s.corner_radius, 2.0);
        assert_eq!(s.color, Color::rgba(0, 0, 0, 178));
        assert!(s.validate().is_ok());
    }

    #[test]
    fn negative_corner_radius_rejected() {
        let s = ShadowStyle {
            corner_radius: -1.0,
            ..ShadowStyle::default()
        };
        assert!(matches!(s.validate(), Err(UmbraError::Style(_))));
    }

    #[test]
    fn nan_corner_radius_rejected() {
        let s = ShadowStyle {
            corner_radius: f32::NAN,
            ..ShadowStyle::default()
        };
        assert!(matches!(s.validate(), Err(UmbraError::Style(_))));
    }

    #[test]
    fn oversized_blur_radius_rejected() {
        let s = ShadowStyle {
            radius: MAX_BLUR_RADIUS + 1,
            ..ShadowStyle::default()
        };
        assert!(matches!(s.validate(), Err(UmbraError::Style(_))));
    }

    #[test]
    fn zero_radius_is_valid() {
        let s = ShadowStyle {
            radius: 0,
            ..ShadowStyle::default()
        };
        assert!(s.validate().is_ok());
        assert_eq!(s.padding(), 0);
    }

    #[test]
    fn deserializes_from_partial_toml() {
        let s: ShadowStyle = toml::from_str("radius = 8\noffset_x = -2").unwrap();
        assert_eq!(s.radius, 8);
        assert_eq!(s.offset_x, -2);
        assert_eq!(s.offset_y, 10);
        assert_eq!(s.color, DEFAULT_SHADOW_COLOR);
    }
}
