//! Per-frame draw command lists
//!
//! `Frame::build` is the render pass: it reads the session and describes
//! what to draw without touching the GPU. Shapes are tessellated into
//! triangles for the scene pipeline; text goes to the HUD overlay.

use glam::Vec2;

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::Rgb;
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::sim::SessionState;

/// Inner highlight ring: outer edge this far inside the rim
const HIGHLIGHT_INSET: f32 = 5.0;
const HIGHLIGHT_WIDTH: f32 = 2.0;

pub const INSTRUCTIONS: &str = "Click the circles to meditate";

/// HUD font sizes in logical pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSize {
    /// Score and instructions
    Large,
    /// Reaction time
    Small,
}

impl TextSize {
    pub fn pixels(self) -> f32 {
        match self {
            TextSize::Large => 32.0,
            TextSize::Small => 24.0,
        }
    }
}

/// Which point of the text box `position` names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    /// Top-left corner
    TopLeft,
    /// Middle of the top edge
    TopCenter,
}

/// One thing to draw, in logical screen pixels
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Circle {
        center: Vec2,
        radius: f32,
        color: Rgb,
    },
    Ring {
        center: Vec2,
        inner_radius: f32,
        outer_radius: f32,
        color: Rgb,
    },
    Text {
        text: String,
        position: Vec2,
        align: TextAlign,
        size: TextSize,
        color: Rgb,
    },
}

/// Everything drawn for one tick, back to front
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub clear: Rgb,
    pub commands: Vec<DrawCommand>,
}

pub fn score_label(score: u64) -> String {
    format!("Score: {}", score)
}

pub fn reaction_label(avg_ms: Option<u64>) -> String {
    match avg_ms {
        Some(ms) => format!("Avg Reaction: {} ms", ms),
        None => "Avg Reaction: -".to_string(),
    }
}

impl Frame {
    /// Describe the current session: unclicked targets, then the HUD
    pub fn build(state: &SessionState) -> Self {
        let mut commands = Vec::new();

        for target in state.visible_targets() {
            let center = target.center.as_vec2();
            let radius = target.radius as f32;
            commands.push(DrawCommand::Circle {
                center,
                radius,
                color: target.color,
            });
            let outer = radius - HIGHLIGHT_INSET;
            commands.push(DrawCommand::Ring {
                center,
                inner_radius: outer - HIGHLIGHT_WIDTH,
                outer_radius: outer,
                color: colors::HIGHLIGHT,
            });
        }

        commands.push(DrawCommand::Text {
            text: score_label(state.score),
            position: Vec2::new(20.0, 20.0),
            align: TextAlign::TopLeft,
            size: TextSize::Large,
            color: colors::HUD_TEXT,
        });
        commands.push(DrawCommand::Text {
            text: reaction_label(state.reaction_times.average_ms()),
            position: Vec2::new(20.0, 60.0),
            align: TextAlign::TopLeft,
            size: TextSize::Small,
            color: colors::HUD_TEXT,
        });
        commands.push(DrawCommand::Text {
            text: INSTRUCTIONS.to_string(),
            position: Vec2::new(SCREEN_WIDTH as f32 / 2.0, SCREEN_HEIGHT as f32 - 50.0),
            align: TextAlign::TopCenter,
            size: TextSize::Large,
            color: colors::HINT_TEXT,
        });

        Self {
            clear: colors::BACKGROUND,
            commands,
        }
    }

    /// Filled circles in draw order
    pub fn circles(&self) -> impl Iterator<Item = (Vec2, f32, Rgb)> + '_ {
        self.commands.iter().filter_map(|cmd| match *cmd {
            DrawCommand::Circle {
                center,
                radius,
                color,
            } => Some((center, radius, color)),
            _ => None,
        })
    }

    /// Text overlays in draw order
    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Triangle list for the shapes (text is drawn by the overlay)
    pub fn tessellate(&self) -> Vec<Vertex> {
        let mut vertices = Vec::new();
        for cmd in &self.commands {
            match cmd {
                DrawCommand::Circle {
                    center,
                    radius,
                    color,
                } => vertices.extend(shapes::circle(
                    *center,
                    *radius,
                    color.to_linear(1.0),
                    shapes::segments_for_radius(*radius),
                )),
                DrawCommand::Ring {
                    center,
                    inner_radius,
                    outer_radius,
                    color,
                } => vertices.extend(shapes::ring(
                    *center,
                    *inner_radius,
                    *outer_radius,
                    color.to_linear(1.0),
                    shapes::segments_for_radius(*outer_radius),
                )),
                DrawCommand::Text { .. } => {}
            }
        }
        vertices
    }
}
