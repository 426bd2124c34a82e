//! End-to-end session scenarios driven through the public tick API

use glam::{IVec2, Vec2};
use mindless_meditation::Settings;
use mindless_meditation::audio::{AudioError, AudioManager};
use mindless_meditation::renderer::Frame;
use mindless_meditation::sim::{PALETTE, SessionState, Target, TickInput, tick};

/// Tick at 60 Hz from `from` up to and including `to`
fn run(state: &mut SessionState, from: f64, to: f64) {
    let input = TickInput::default();
    let mut now = from;
    while now <= to {
        tick(state, &input, now);
        now += 1.0 / 60.0;
    }
}

#[test]
fn test_spawn_schedule() {
    let mut state = SessionState::new(11, 0.0);
    let input = TickInput::default();

    tick(&mut state, &input, 0.0);
    assert!(state.targets.is_empty());
    tick(&mut state, &input, 1.5);
    assert!(state.targets.is_empty());

    tick(&mut state, &input, 1.51);
    assert_eq!(state.targets.len(), 1);
    let first = state.targets[0].id;

    // At 3.0 s the first target is still alive and no second one exists yet:
    // lifetime counts from its own spawn, and the next spawn needs a full
    // interval after 1.51
    tick(&mut state, &input, 3.0);
    assert_eq!(state.targets.len(), 1);
    assert_eq!(state.targets[0].id, first);
    assert!(!state.targets[0].is_expired(3.0));
    assert_eq!(state.spawned, 1);
    tick(&mut state, &input, 3.02);
    assert_eq!(state.targets.len(), 2);

    // First target ages out a little after 1.51 + 3.0
    tick(&mut state, &input, 4.5);
    assert!(state.targets.iter().any(|t| t.id == first));
    tick(&mut state, &input, 4.52);
    assert!(state.targets.iter().all(|t| t.id != first));
    assert_eq!(state.expired, 1);
    assert_eq!(state.score, 0);
}

#[test]
fn test_idle_session_never_scores() {
    let mut state = SessionState::new(5, 0.0);
    run(&mut state, 0.0, 30.0);
    assert_eq!(state.score, 0);
    assert!(state.reaction_times.is_empty());
    // At most two targets can be alive at once
    assert!(state.targets.len() <= 2);
    for t in &state.targets {
        assert!(t.age(30.0) <= 3.0 + 1.0 / 60.0);
    }
}

#[test]
fn test_immediate_click_on_new_target() {
    let mut state = SessionState::new(21, 0.0);
    let mut input = TickInput::default();
    tick(&mut state, &input, 1.6);
    assert_eq!(state.targets.len(), 1);
    let center = state.targets[0].center.as_vec2();

    input.click(center);
    tick(&mut state, &input, 1.6);
    input.clear();

    assert_eq!(state.score, 1);
    assert!(state.reaction_times.average().unwrap_or(1.0).abs() < 1e-9);
    assert_eq!(state.reaction_times.average_ms(), Some(0));

    let frame = Frame::build(&state);
    assert_eq!(frame.circles().count(), 0);
    assert!(frame.texts().any(|t| t == "Score: 1"));
    assert!(frame.texts().any(|t| t == "Avg Reaction: 0 ms"));
}

#[test]
fn test_overlapping_targets_click_earliest() {
    let mut state = SessionState::new(3, 0.0);
    for (x, created) in [(300, 0.0), (330, 0.5)] {
        let id = state.next_target_id();
        state.targets.push(Target {
            id,
            center: IVec2::new(x, 300),
            radius: 50,
            color: PALETTE[0],
            created,
            clicked: false,
        });
    }
    let later = state.targets[1].id;

    let mut input = TickInput::default();
    input.click(Vec2::new(315.0, 300.0));
    tick(&mut state, &input, 1.0);

    assert_eq!(state.score, 1);
    assert_eq!(state.targets.len(), 1);
    assert_eq!(state.targets[0].id, later);
    assert!((state.reaction_times.average().unwrap_or(0.0) - 1.0).abs() < 1e-9);
    assert_eq!(state.drain_events().len(), 1);
}

#[test]
fn test_session_runs_without_audio() {
    let audio = AudioManager::from_output(Err(AudioError::NoOutputDevice), &Settings::default());
    assert!(audio.is_muted());

    let mut state = SessionState::new(8, 0.0);
    let mut input = TickInput::default();
    tick(&mut state, &input, 0.0);

    let frame = Frame::build(&state);
    let texts: Vec<&str> = frame.texts().collect();
    assert_eq!(texts[0], "Score: 0");

    tick(&mut state, &input, 2.0);
    let center = state.targets[0].center.as_vec2();
    input.click(center);
    tick(&mut state, &input, 2.1);
    for event in state.drain_events() {
        audio.play(event);
    }
    assert_eq!(state.score, 1);
}

#[test]
fn test_seeded_sessions_repeat() {
    let mut a = SessionState::new(1234, 0.0);
    let mut b = SessionState::new(1234, 0.0);
    run(&mut a, 0.0, 20.0);
    run(&mut b, 0.0, 20.0);
    assert_eq!(a.targets, b.targets);
    assert_eq!(a.spawned, b.spawned);
}
