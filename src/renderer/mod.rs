//! wgpu rendering module
//!
//! The session is described as a `Frame` of draw commands. Shapes are
//! tessellated into colored triangles; the HUD text is laid out by egui and
//! painted over them in a second pass.

pub mod frame;
pub mod overlay;
pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use frame::{DrawCommand, Frame, TextAlign, TextSize};
pub use overlay::HudOverlay;
pub use pipeline::{RenderError, RenderState};
pub use vertex::Vertex;
