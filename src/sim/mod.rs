//! Deterministic session simulation
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Time comes in as an explicit session clock value
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod reaction;
pub mod state;
pub mod target;
pub mod tick;

pub use reaction::ReactionTimes;
pub use state::{SessionEvent, SessionState, SessionSummary};
pub use target::{PALETTE, Target};
pub use tick::{TickInput, handle_click, sweep, tick};
