//! Clickable circle targets
//!
//! A target lives on the session clock (seconds). Once clicked it is inert:
//! never drawn, never clickable, never expires.

use glam::{IVec2, Vec2};
use rand::Rng;

use crate::Rgb;
use crate::consts::*;

/// Fixed target palette (soft pastels)
pub const PALETTE: [Rgb; 5] = [
    Rgb(173, 216, 230), // Light blue
    Rgb(144, 238, 144), // Light green
    Rgb(255, 182, 193), // Light pink
    Rgb(221, 160, 221), // Light purple
    Rgb(255, 228, 181), // Light orange
];

/// A clickable circle
#[derive(Debug, Clone, PartialEq)]
pub struct Target {
    pub id: u32,
    /// Center in logical screen pixels
    pub center: IVec2,
    pub radius: i32,
    pub color: Rgb,
    /// Spawn time on the session clock
    pub created: f64,
    pub clicked: bool,
}

impl Target {
    /// Spawn a target fully inside the screen
    pub fn spawn<R: Rng + ?Sized>(id: u32, rng: &mut R, now: f64) -> Self {
        let radius = rng.random_range(MIN_RADIUS..=MAX_RADIUS);
        let x = rng.random_range(radius..=SCREEN_WIDTH - radius);
        let y = rng.random_range(radius..=SCREEN_HEIGHT - radius);
        let color = PALETTE[rng.random_range(0..PALETTE.len())];
        Self {
            id,
            center: IVec2::new(x, y),
            radius,
            color,
            created: now,
            clicked: false,
        }
    }

    /// Point-in-circle test (boundary counts as inside)
    pub fn contains(&self, point: Vec2) -> bool {
        point.distance(self.center.as_vec2()) <= self.radius as f32
    }

    /// Seconds since spawn
    #[inline]
    pub fn age(&self, now: f64) -> f64 {
        now - self.created
    }

    pub fn is_expired(&self, now: f64) -> bool {
        self.age(now) > TARGET_LIFETIME && !self.clicked
    }

    /// Clicked targets are not drawn
    #[inline]
    pub fn is_visible(&self) -> bool {
        !self.clicked
    }
}
