//! Platform abstraction layer
//!
//! Handles the windowing-side concerns the simulation stays out of:
//! - Frame pacing
//! - Pointer input

pub mod input;
pub mod pacing;

pub use input::PointerState;
pub use pacing::FramePacer;
