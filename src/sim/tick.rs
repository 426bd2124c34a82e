//! Per-frame session update
//!
//! Advances the session to `now` on the session clock. Order within a tick:
//! spawn, clicks, sweep. A quit request still lets the tick finish.

use glam::Vec2;
use rand::Rng;

use super::state::{SessionEvent, SessionState};
use crate::consts::{BELL_FREQUENCIES, SPAWN_INTERVAL};

/// Input gathered since the previous tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Click positions in logical pixels, in arrival order
    pub clicks: Vec<Vec2>,
    /// Quit requested (window close / Escape)
    pub quit: bool,
}

impl TickInput {
    pub fn click(&mut self, pos: Vec2) {
        self.clicks.push(pos);
    }

    /// Clear one-shot input after a tick consumed it
    pub fn clear(&mut self) {
        self.clicks.clear();
    }
}

/// Advance the session by one frame
///
/// Returns `false` once the input asks to quit.
pub fn tick(state: &mut SessionState, input: &TickInput, now: f64) -> bool {
    if now - state.last_spawn > SPAWN_INTERVAL {
        state.spawn_target(now);
    }

    for &click in &input.clicks {
        handle_click(state, click, now);
    }

    sweep(state, now);

    if input.quit {
        log::info!("Quit requested, score {}", state.score);
    }
    !input.quit
}

/// Consume the earliest-spawned unclicked target under `pos`
///
/// Returns the consumed target's ID.
pub fn handle_click(state: &mut SessionState, pos: Vec2, now: f64) -> Option<u32> {
    let target = state
        .targets
        .iter_mut()
        .find(|t| !t.clicked && t.contains(pos))?;

    target.clicked = true;
    let id = target.id;
    let reaction = target.age(now);

    state.score += 1;
    state.reaction_times.push(reaction);

    let voice = state.rng.random_range(0..BELL_FREQUENCIES.len());
    state.events.push(SessionEvent::Bell { voice });

    log::debug!("Target {} hit after {:.0} ms", id, reaction * 1000.0);
    Some(id)
}

/// Drop expired targets and targets already consumed by a click
pub fn sweep(state: &mut SessionState, now: f64) {
    let before = state.targets.len();
    let mut expired = 0;
    state.targets.retain(|t| {
        if t.is_expired(now) {
            expired += 1;
            false
        } else {
            !t.clicked
        }
    });
    state.expired += expired;

    if before != state.targets.len() {
        log::trace!(
            "Swept {} targets ({} expired), {} live",
            before - state.targets.len(),
            expired,
            state.targets.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::target::{PALETTE, Target};
    use glam::IVec2;

    fn place(state: &mut SessionState, x: i32, y: i32, radius: i32, created: f64) -> u32 {
        let id = state.next_target_id();
        state.targets.push(Target {
            id,
            center: IVec2::new(x, y),
            radius,
            color: PALETTE[2],
            created,
            clicked: false,
        });
        id
    }

    #[test]
    fn test_no_spawn_before_interval() {
        let mut state = SessionState::new(1, 0.0);
        let input = TickInput::default();
        tick(&mut state, &input, 0.0);
        tick(&mut state, &input, 1.0);
        tick(&mut state, &input, 1.5);
        assert!(state.targets.is_empty());

        tick(&mut state, &input, 1.51);
        assert_eq!(state.targets.len(), 1);
        assert_eq!(state.last_spawn, 1.51);
    }

    #[test]
    fn test_click_scores_and_emits_bell() {
        let mut state = SessionState::new(1, 0.0);
        place(&mut state, 200, 200, 40, 0.5);

        let mut input = TickInput::default();
        input.click(Vec2::new(210.0, 190.0));
        tick(&mut state, &input, 0.75);

        assert_eq!(state.score, 1);
        assert_eq!(state.reaction_times.len(), 1);
        assert!((state.reaction_times.average().unwrap() - 0.25).abs() < 1e-9);
        assert!(state.targets.is_empty());

        let events = state.drain_events();
        assert_eq!(events.len(), 1);
        let SessionEvent::Bell { voice } = events[0];
        assert!(voice < BELL_FREQUENCIES.len());
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_miss_changes_nothing() {
        let mut state = SessionState::new(1, 0.0);
        place(&mut state, 200, 200, 20, 0.0);

        assert_eq!(handle_click(&mut state, Vec2::new(400.0, 400.0), 0.1), None);
        assert_eq!(state.score, 0);
        assert!(state.events.is_empty());
        assert!(!state.targets[0].clicked);
    }

    #[test]
    fn test_overlap_earliest_wins_once() {
        let mut state = SessionState::new(1, 0.0);
        let a = place(&mut state, 300, 300, 50, 0.0);
        let b = place(&mut state, 320, 300, 50, 0.2);

        let p = Vec2::new(310.0, 300.0);
        assert_eq!(handle_click(&mut state, p, 0.5), Some(a));
        assert_eq!(state.score, 1);
        assert!(!state.targets[1].clicked);

        // Second click at the same point falls through to B
        assert_eq!(handle_click(&mut state, p, 0.6), Some(b));
        assert_eq!(state.score, 2);
    }

    #[test]
    fn test_two_clicks_in_one_tick() {
        let mut state = SessionState::new(1, 0.0);
        place(&mut state, 100, 100, 30, 0.0);
        place(&mut state, 600, 400, 30, 0.0);

        let input = TickInput {
            clicks: vec![Vec2::new(100.0, 100.0), Vec2::new(600.0, 400.0)],
            quit: false,
        };
        tick(&mut state, &input, 0.3);
        assert_eq!(state.score, 2);
        assert_eq!(state.drain_events().len(), 2);
    }

    #[test]
    fn test_quit_stops_after_finishing_tick() {
        let mut state = SessionState::new(1, 0.0);
        place(&mut state, 100, 100, 30, 0.0);

        let mut input = TickInput::default();
        assert!(tick(&mut state, &input, 0.1));

        input.click(Vec2::new(100.0, 100.0));
        input.quit = true;
        assert!(!tick(&mut state, &input, 0.2));
        // Clicks in the quitting tick still count
        assert_eq!(state.score, 1);

        // Clearing one-shot input keeps the quit request
        input.clear();
        assert!(input.clicks.is_empty());
        assert!(!tick(&mut state, &input, 0.3));
    }

    #[test]
    fn test_sweep_counts_expired_only() {
        let mut state = SessionState::new(1, 0.0);
        place(&mut state, 100, 100, 30, 0.0);
        place(&mut state, 400, 300, 30, 2.0);
        state.targets[1].clicked = true;

        sweep(&mut state, 3.5);
        assert!(state.targets.is_empty());
        assert_eq!(state.expired, 1);
    }
}
