//! Shared test utilities for umbra-shadow tests.
//!
//! Provides a [`MockSurface`] that records all surface calls for assertion.

use umbra_types::color::Color;
use umbra_types::error::{Result, UmbraError};
use umbra_types::pixmap::Pixmap;
use umbra_types::surface::Surface;

/// A recorded call from the mock surface.
#[derive(Debug, Clone, PartialEq)]
#[allow(dead_code)]
pub enum SurfaceCall {
    Clear {
        color: Color,
    },
    FillRect {
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        color: Color,
    },
    DrawPixmap {
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        src_w: u32,
        src_h: u32,
        tint: Option<Color>,
    },
    Save,
    Translate {
        dx: i32,
        dy: i32,
    },
    Restore,
}

/// A mock surface that records all calls for test assertions.
pub struct MockSurface {
    pub calls: Vec<SurfaceCall>,
    saved: usize,
}

impl MockSurface {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            saved: 0,
        }
    }

    /// The translation in effect when the first pixmap composite happened.
    pub fn translate_before_pixmap(&self) -> Option<(i32, i32)> {
        let mut translate = None;
        for call in &self.calls {
            match call {
                SurfaceCall::Translate { dx, dy } => translate = Some((*dx, *dy)),
                SurfaceCall::DrawPixmap { .. } => return translate,
                _ => {}
            }
        }
        None
    }

    /// Return only the `DrawPixmap` entries.
    pub fn pixmap_calls(&self) -> Vec<&SurfaceCall> {
        self.calls
            .iter()
            .filter(|c| matches!(c, SurfaceCall::DrawPixmap { .. }))
            .collect()
    }

    /// Check that every `Save` was matched by a later `Restore`.
    pub fn save_restore_balanced(&self) -> bool {
        let saves = self
            .calls
            .iter()
            .filter(|c| matches!(c, SurfaceCall::Save))
            .count();
        let restores = self
            .calls
            .iter()
            .filter(|c| matches!(c, SurfaceCall::Restore))
            .count();
        saves == restores
    }
}

impl Surface for MockSurface {
    fn width(&self) -> u32 {
        512
    }

    fn height(&self) -> u32 {
        512
    }

    fn clear(&mut self, color: Color) -> Result<()> {
        self.calls.push(SurfaceCall::Clear { color });
        Ok(())
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Color) -> Result<()> {
        self.calls.push(SurfaceCall::FillRect { x, y, w, h, color });
        Ok(())
    }

    fn draw_pixmap(&mut self, pixmap: &Pixmap, x: i32, y: i32, w: u32, h: u32) -> Result<()> {
        self.calls.push(SurfaceCall::DrawPixmap {
            x,
            y,
            w,
            h,
            src_w: pixmap.width(),
            src_h: pixmap.height(),
            tint: None,
        });
        Ok(())
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
        self.calls.push(SurfaceCall::DrawPixmap {
            x,
            y,
            w,
            h,
            src_w: pixmap.width(),
            src_h: pixmap.height(),
            tint: Some(tint),
        });
        Ok(())
    }

    fn save(&mut self) -> Result<()> {
        self.calls.push(SurfaceCall::Save);
        self.saved += 1;
        Ok(())
    }

    fn translate(&mut self, dx: i32, dy: i32) -> Result<()> {
        self.calls.push(SurfaceCall::Translate { dx, dy });
        Ok(())
    }

    fn restore(&mut self) -> Result<()> {
        if self.saved == 0 {
            return Err(UmbraError::Surface("restore without matching save".into()));
        }
        self.saved -= 1;
        self.calls.push(SurfaceCall::Restore);
        Ok(())
    }

    fn read_pixels(&self, _x: i32, _y: i32, w: u32, h: u32) -> Result<Vec<u8>> {
        Ok(vec![0; w as usize * h as usize * 4])
    }
}
