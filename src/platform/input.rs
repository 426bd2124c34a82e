//! Pointer tracking
//!
//! The window reports cursor positions in physical pixels; the session works
//! in logical 800x600 pixels.

use glam::Vec2;

#[derive(Debug, Clone)]
pub struct PointerState {
    position: Option<Vec2>,
    scale_factor: f64,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            position: None,
            scale_factor: 1.0,
        }
    }
}

impl PointerState {
    pub fn set_scale_factor(&mut self, scale_factor: f64) {
        if scale_factor > 0.0 {
            self.scale_factor = scale_factor;
        }
    }

    /// Cursor moved to a physical pixel position
    pub fn moved(&mut self, x: f64, y: f64) {
        self.position = Some(Vec2::new(
            (x / self.scale_factor) as f32,
            (y / self.scale_factor) as f32,
        ));
    }

    /// Cursor left the window
    pub fn left(&mut self) {
        self.position = None;
    }

    /// Logical cursor position, if inside the window
    pub fn position(&self) -> Option<Vec2> {
        self.position
    }
}
