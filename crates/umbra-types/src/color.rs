//! RGBA color type.

use serde::{Deserialize, Serialize};

/// A color in RGBA format (0-255 per channel, straight alpha).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Return the same color with a different alpha value.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }

    /// Source-over blend of `self` onto `dst`.
    ///
    /// Straight (non-premultiplied) alpha on both sides.
    pub fn over(self, dst: Color) -> Color {
        let sa = self.a as u32;
        if sa == 255 {
            return self;
        }
        if sa == 0 {
            return dst;
        }
        let da = dst.a as u32;
        let inv = 255 - sa;
        let out_a = sa + da * inv / 255;
        if out_a == 0 {
            return Color::TRANSPARENT;
        }
        let blend = |s: u8, d: u8| -> u8 {
            let contrib = s as u32 * sa + d as u32 * da * inv / 255;
            (contrib / out_a).min(255) as u8
        };
        Color::rgba(
            blend(self.r, dst.r),
            blend(self.g, dst.g),
            blend(self.b, dst.b),
            out_a as u8,
        )
    }

    /// Multiply each channel (including alpha) by the matching tint channel.
    pub fn modulate(self, tint: Color) -> Color {
        let mul = |c: u8, t: u8| -> u8 { (c as u32 * t as u32 / 255) as u8 };
        Color::rgba(
            mul(self.r, tint.r),
            mul(self.g, tint.g),
            mul(self.b, tint.b),
            mul(self.a, tint.a),
        )
    }

    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);
}
