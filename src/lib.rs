//! Mindless Meditation - click the circles, hear the bells
//!
//! Core modules:
//! - `sim`: Deterministic session simulation (targets, scoring, reaction times)
//! - `synth`: Procedural bell and ambience waveforms
//! - `audio`: Device output and mixing of the synthesized buffers
//! - `renderer`: Draw command lists and the wgpu pipeline that draws them
//! - `platform`: Frame pacing and pointer input
//! - `settings`: Presentation preferences (volumes, mute)

pub mod audio;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod synth;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Window size in logical pixels
    pub const SCREEN_WIDTH: i32 = 800;
    pub const SCREEN_HEIGHT: i32 = 600;
    /// Window caption
    pub const WINDOW_TITLE: &str = "Mindless Meditation";

    /// Target frame rate (no catch-up when a frame runs long)
    pub const TARGET_FPS: u32 = 60;

    /// Target radius bounds (inclusive, pixels)
    pub const MIN_RADIUS: i32 = 20;
    pub const MAX_RADIUS: i32 = 60;
    /// Seconds an unclicked target stays alive
    pub const TARGET_LIFETIME: f64 = 3.0;
    /// Seconds between spawns
    pub const SPAWN_INTERVAL: f64 = 1.5;

    /// Number of reaction times kept for the rolling average
    pub const REACTION_HISTORY: usize = 100;

    /// Bell pitches: A4, C5, E5
    pub const BELL_FREQUENCIES: [f64; 3] = [440.0, 523.25, 659.25];
    /// Bell length in seconds
    pub const BELL_DURATION: f64 = 0.5;
    /// Ambience loop length in seconds
    pub const AMBIENCE_DURATION: f64 = 10.0;
    /// Sample rate used when no device rate is known
    pub const DEFAULT_SAMPLE_RATE: u32 = 22_050;
}

/// 8-bit sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Linear-space RGBA for an sRGB render target
    pub fn to_linear(self, alpha: f32) -> [f32; 4] {
        [
            srgb_to_linear(self.0),
            srgb_to_linear(self.1),
            srgb_to_linear(self.2),
            alpha,
        ]
    }
}

#[inline]
fn srgb_to_linear(c: u8) -> f32 {
    let c = c as f32 / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}
