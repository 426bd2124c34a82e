//! Session state and core simulation types
//!
//! Everything the frame loop mutates lives in `SessionState`.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use super::reaction::ReactionTimes;
use super::target::Target;

/// Side effects produced by a tick, drained by the platform layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// A target was consumed; play bell `voice` (index into the bell set)
    Bell { voice: usize },
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct SessionState {
    /// Seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    /// Live targets in spawn order
    pub targets: Vec<Target>,
    pub score: u64,
    pub reaction_times: ReactionTimes,
    /// Session clock time of the last spawn
    pub last_spawn: f64,
    /// Session clock time the session started
    pub started: f64,
    /// Targets spawned so far
    pub spawned: u64,
    /// Targets that aged out unclicked
    pub expired: u64,
    /// Pending events (oldest first)
    pub events: Vec<SessionEvent>,
    next_id: u32,
}

impl SessionState {
    /// Create a session starting at `now` on the session clock
    pub fn new(seed: u64, now: f64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            targets: Vec::new(),
            score: 0,
            reaction_times: ReactionTimes::default(),
            last_spawn: now,
            started: now,
            spawned: 0,
            expired: 0,
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new target ID
    pub fn next_target_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Append a freshly spawned target and restart the spawn timer
    pub fn spawn_target(&mut self, now: f64) -> u32 {
        let id = self.next_target_id();
        let target = Target::spawn(id, &mut self.rng, now);
        self.targets.push(target);
        self.last_spawn = now;
        self.spawned += 1;
        id
    }

    /// Targets that should be drawn, in spawn order
    pub fn visible_targets(&self) -> impl Iterator<Item = &Target> {
        self.targets.iter().filter(|t| t.is_visible())
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn summary(&self, now: f64) -> SessionSummary {
        SessionSummary {
            seed: self.seed,
            duration_secs: (now - self.started).max(0.0),
            score: self.score,
            spawned: self.spawned,
            expired: self.expired,
            avg_reaction_ms: self.reaction_times.average_ms(),
        }
    }
}

/// End-of-session statistics, logged as JSON on exit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSummary {
    pub seed: u64,
    pub duration_secs: f64,
    pub score: u64,
    pub spawned: u64,
    pub expired: u64,
    pub avg_reaction_ms: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_empty() {
        let state = SessionState::new(1, 5.0);
        assert!(state.targets.is_empty());
        assert_eq!(state.score, 0);
        assert_eq!(state.last_spawn, 5.0);
        assert!(state.reaction_times.is_empty());
    }

    #[test]
    fn test_spawn_assigns_increasing_ids() {
        let mut state = SessionState::new(1, 0.0);
        let a = state.spawn_target(1.0);
        let b = state.spawn_target(2.0);
        assert!(b > a);
        assert_eq!(state.last_spawn, 2.0);
        assert_eq!(state.spawned, 2);
        assert_eq!(state.targets[0].id, a);
        assert_eq!(state.targets[1].id, b);
    }

    #[test]
    fn test_same_seed_same_targets() {
        let mut s1 = SessionState::new(42, 0.0);
        let mut s2 = SessionState::new(42, 0.0);
        for i in 0..10 {
            s1.spawn_target(i as f64);
            s2.spawn_target(i as f64);
        }
        assert_eq!(s1.targets, s2.targets);
    }

    #[test]
    fn test_summary_json() {
        let mut state = SessionState::new(9, 0.0);
        state.score = 3;
        state.reaction_times.push(0.25);
        let json = serde_json::to_value(state.summary(12.0)).unwrap();
        assert_eq!(json["score"], 3);
        assert_eq!(json["seed"], 9);
        assert_eq!(json["avg_reaction_ms"], 250);
        assert_eq!(json["duration_secs"], 12.0);
    }
}
