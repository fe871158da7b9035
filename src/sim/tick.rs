//! Fixed-rate simulation tick
//!
//! One call per frame. Order inside `Playing`:
//! paddles -> ball (walls, goal lines) -> paddle collisions -> scoring ->
//! state transition. Rendering reads the state afterwards.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::collision::resolve_collisions;
use super::paddle::{Intent, Side};
use super::state::{GameEvent, GameState, MatchState};
use crate::platform::Clock;

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    /// Left paddle direction
    pub left: Intent,
    /// Right paddle direction
    pub right: Intent,
    /// Leave the intro screen
    pub start: bool,
    /// Play again from the match-over screen
    pub restart: bool,
    /// Leave from the match-over screen
    pub quit_choice: bool,
    /// End the session from any state
    pub quit: bool,
}

impl TickInput {
    pub fn intent(&self, side: Side) -> Intent {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// Advance the session by one tick and report what happened
pub fn tick<C: Clock + ?Sized>(
    state: &mut GameState,
    input: &TickInput,
    clock: &C,
) -> Vec<GameEvent> {
    let mut events = Vec::new();

    // Global quit overrides every transition, including the post-point pause
    if input.quit && state.is_running() {
        log::info!("Quit requested during {}", state.phase.name());
        state.phase = MatchState::Exited;
        events.push(GameEvent::SessionEnded);
        return events;
    }

    match state.phase {
        MatchState::Intro => tick_intro(state, input, &mut events),
        MatchState::Playing {
            stall_until: Some(deadline),
        } => tick_stalled(state, deadline, clock.now(), &mut events),
        MatchState::Playing { stall_until: None } => {
            tick_playing(state, input, clock.now(), &mut events)
        }
        MatchState::MatchOver { winner } => tick_match_over(state, input, winner, &mut events),
        MatchState::Exited => {}
    }

    events
}

fn tick_intro(state: &mut GameState, input: &TickInput, events: &mut Vec<GameEvent>) {
    if input.start {
        log::info!("Match started (first to {})", state.config().winning_score);
        state.phase = MatchState::Playing { stall_until: None };
        events.push(GameEvent::MatchStarted);
    }
}

/// Dead time after a point: no input, no movement until the deadline
fn tick_stalled(
    state: &mut GameState,
    deadline: Duration,
    now: Duration,
    events: &mut Vec<GameEvent>,
) {
    if now < deadline {
        return;
    }
    state.ball.reset();
    state.phase = MatchState::Playing { stall_until: None };
    events.push(GameEvent::ServeResumed);
    log::debug!("Serve resumed, ball heading x_fac={}", state.ball.x_fac());
}

fn tick_playing(
    state: &mut GameState,
    input: &TickInput,
    now: Duration,
    events: &mut Vec<GameEvent>,
) {
    state.time_ticks += 1;

    for paddle in &mut state.paddles {
        paddle.update(input.intent(paddle.side()));
    }

    let y_fac_before = state.ball.y_fac();
    let signal = state.ball.update();
    if state.ball.y_fac() != y_fac_before {
        events.push(GameEvent::WallBounce);
    }

    for side in resolve_collisions(&mut state.ball, &state.paddles) {
        events.push(GameEvent::PaddleHit(side));
    }

    if let Some(scorer) = signal.scorer() {
        score_point(state, scorer, now, events);
    }
}

fn score_point(state: &mut GameState, scorer: Side, now: Duration, events: &mut Vec<GameEvent>) {
    state.score.apply_score(scorer);
    events.push(GameEvent::PointScored(scorer));
    log::info!(
        "{} scores ({} - {})",
        scorer.label(),
        state.score.left(),
        state.score.right()
    );

    if let Some(winner) = state.score.has_winner(state.config().winning_score) {
        log::info!("{} wins the match", winner.label());
        state.phase = MatchState::MatchOver { winner };
        events.push(GameEvent::MatchWon(winner));
    } else {
        state.phase = MatchState::Playing {
            stall_until: Some(now + state.config().point_pause()),
        };
    }
}

/// Restart takes priority if both choices arrive on the same tick
fn tick_match_over(
    state: &mut GameState,
    input: &TickInput,
    winner: Side,
    events: &mut Vec<GameEvent>,
) {
    if input.restart {
        log::info!("Restarting after {} won", winner.label());
        state.score.reset();
        state.ball.reset();
        state.phase = MatchState::Playing { stall_until: None };
        events.push(GameEvent::MatchRestarted);
    } else if input.quit_choice {
        log::info!("Leaving after {} won", winner.label());
        state.phase = MatchState::Exited;
        events.push(GameEvent::SessionEnded);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::platform::ManualClock;
    use crate::sim::ScoreTracker;
    use glam::Vec2;

    const PAUSE: Duration = Duration::from_millis(700);

    fn started() -> (GameState, ManualClock) {
        let mut state = GameState::new(GameConfig::default()).unwrap();
        let clock = ManualClock::new();
        let start = TickInput {
            start: true,
            ..Default::default()
        };
        tick(&mut state, &start, &clock);
        (state, clock)
    }

    /// Put the ball just short of the right goal and let the left side score
    fn score_left(state: &mut GameState, clock: &ManualClock) -> Vec<GameEvent> {
        state.ball.set_motion(Vec2::new(889.0, 300.0), 1.0, 0.0);
        let events = tick(state, &TickInput::default(), clock);
        if state.phase().is_stalled() {
            clock.advance(PAUSE);
            tick(state, &TickInput::default(), clock);
        }
        events
    }

    #[test]
    fn test_tick_intro_to_playing() {
        let mut state = GameState::new(GameConfig::default()).unwrap();
        let clock = ManualClock::new();

        // Intents alone don't start the match or move anything
        let input = TickInput {
            left: Intent::Down,
            ..Default::default()
        };
        assert!(tick(&mut state, &input, &clock).is_empty());
        assert_eq!(state.phase(), MatchState::Intro);
        assert_eq!(state.paddle(Side::Left).y(), 250.0);
        assert_eq!(state.ball.pos(), Vec2::new(450.0, 300.0));
        assert_eq!(state.time_ticks, 0);

        let input = TickInput {
            start: true,
            ..Default::default()
        };
        assert_eq!(tick(&mut state, &input, &clock), vec![GameEvent::MatchStarted]);
        assert_eq!(state.phase(), MatchState::Playing { stall_until: None });
    }

    #[test]
    fn test_playing_moves_paddles_and_ball() {
        let (mut state, clock) = started();
        let input = TickInput {
            left: Intent::Up,
            right: Intent::Down,
            ..Default::default()
        };
        tick(&mut state, &input, &clock);
        assert_eq!(state.paddle(Side::Left).y(), 240.0);
        assert_eq!(state.paddle(Side::Right).y(), 260.0);
        assert_eq!(state.ball.pos(), Vec2::new(454.0, 296.0));
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_paddle_hit_event() {
        let (mut state, clock) = started();
        state.ball.set_motion(Vec2::new(38.0, 300.0), -1.0, 0.0);
        let events = tick(&mut state, &TickInput::default(), &clock);
        assert_eq!(events, vec![GameEvent::PaddleHit(Side::Left)]);
        assert_eq!(state.ball.x_fac(), 1.0);
    }

    #[test]
    fn test_wall_bounce_event() {
        let (mut state, clock) = started();
        state.ball.set_motion(Vec2::new(450.0, 11.0), 1.0, -1.0);
        let events = tick(&mut state, &TickInput::default(), &clock);
        assert_eq!(events, vec![GameEvent::WallBounce]);
        assert_eq!(state.ball.y_fac(), 1.0);
    }

    #[test]
    fn test_point_stalls_then_serves() {
        let (mut state, clock) = started();
        state.ball.set_motion(Vec2::new(10.0, 300.0), -1.0, 0.0);

        let events = tick(&mut state, &TickInput::default(), &clock);
        assert_eq!(events, vec![GameEvent::PointScored(Side::Right)]);
        assert_eq!(state.score.right(), 1);
        assert_eq!(
            state.phase(),
            MatchState::Playing {
                stall_until: Some(PAUSE)
            }
        );

        // Dead time: input ignored, nothing moves
        let frozen_ball = state.ball.clone();
        let frozen_ticks = state.time_ticks;
        let input = TickInput {
            left: Intent::Down,
            start: true,
            ..Default::default()
        };
        for _ in 0..10 {
            clock.advance(Duration::from_millis(50));
            assert!(tick(&mut state, &input, &clock).is_empty());
        }
        assert_eq!(state.ball, frozen_ball);
        assert_eq!(state.paddle(Side::Left).y(), 250.0);
        assert_eq!(state.time_ticks, frozen_ticks);

        clock.set(PAUSE);
        let events = tick(&mut state, &TickInput::default(), &clock);
        assert_eq!(events, vec![GameEvent::ServeResumed]);
        assert_eq!(state.ball.pos(), Vec2::new(450.0, 300.0));
        assert_eq!(state.ball.x_fac(), 1.0);
        assert!(!state.ball.has_scored());
        assert_eq!(state.score.right(), 1);
    }

    #[test]
    fn test_scoring_to_threshold_ends_match() {
        let (mut state, clock) = started();
        for _ in 0..4 {
            let events = score_left(&mut state, &clock);
            assert_eq!(events, vec![GameEvent::PointScored(Side::Left)]);
            assert!(state.phase().is_playing());
        }

        let events = score_left(&mut state, &clock);
        assert_eq!(
            events,
            vec![
                GameEvent::PointScored(Side::Left),
                GameEvent::MatchWon(Side::Left)
            ]
        );
        assert_eq!(state.phase(), MatchState::MatchOver { winner: Side::Left });
        assert_eq!(state.score.left(), 5);

        // Waiting for a choice: plain ticks do nothing
        assert!(tick(&mut state, &TickInput::default(), &clock).is_empty());

        let restart = TickInput {
            restart: true,
            ..Default::default()
        };
        assert_eq!(
            tick(&mut state, &restart, &clock),
            vec![GameEvent::MatchRestarted]
        );
        assert_eq!(state.phase(), MatchState::Playing { stall_until: None });
        assert_eq!(state.score, ScoreTracker::default());
        assert_eq!(state.ball.pos(), Vec2::new(450.0, 300.0));
        assert!(!state.ball.has_scored());
    }

    #[test]
    fn test_match_over_quit_choice_exits() {
        let config = GameConfig {
            winning_score: 1,
            ..GameConfig::default()
        };
        let mut state = GameState::new(config).unwrap();
        let clock = ManualClock::new();
        let start = TickInput {
            start: true,
            ..Default::default()
        };
        tick(&mut state, &start, &clock);
        score_left(&mut state, &clock);
        assert_eq!(state.phase().winner(), Some(Side::Left));

        let quit = TickInput {
            quit_choice: true,
            ..Default::default()
        };
        assert_eq!(tick(&mut state, &quit, &clock), vec![GameEvent::SessionEnded]);
        assert!(!state.is_running());
    }

    #[test]
    fn test_restart_wins_over_quit_choice_on_same_tick() {
        let config = GameConfig {
            winning_score: 1,
            ..GameConfig::default()
        };
        let mut state = GameState::new(config).unwrap();
        let clock = ManualClock::new();
        let start = TickInput {
            start: true,
            ..Default::default()
        };
        tick(&mut state, &start, &clock);
        score_left(&mut state, &clock);
        assert_eq!(state.phase().winner(), Some(Side::Left));

        let both = TickInput {
            restart: true,
            quit_choice: true,
            ..Default::default()
        };
        assert_eq!(tick(&mut state, &both, &clock), vec![GameEvent::MatchRestarted]);
        assert_eq!(state.phase(), MatchState::Playing { stall_until: None });
        assert_eq!(state.score, ScoreTracker::default());
        assert!(state.is_running());
    }

    #[test]
    fn test_quit_choice_ignored_while_playing() {
        let (mut state, clock) = started();
        let quit = TickInput {
            quit_choice: true,
            ..Default::default()
        };
        tick(&mut state, &quit, &clock);
        assert!(state.phase().is_playing());
    }

    #[test]
    fn test_global_quit_from_every_state() {
        let quit = TickInput {
            quit: true,
            ..Default::default()
        };

        // Intro
        let mut state = GameState::new(GameConfig::default()).unwrap();
        let clock = ManualClock::new();
        assert_eq!(tick(&mut state, &quit, &clock), vec![GameEvent::SessionEnded]);
        assert_eq!(state.phase(), MatchState::Exited);

        // Playing
        let (mut state, clock) = started();
        tick(&mut state, &quit, &clock);
        assert_eq!(state.phase(), MatchState::Exited);

        // Post-point stall
        let (mut state, clock) = started();
        state.ball.set_motion(Vec2::new(10.0, 300.0), -1.0, 0.0);
        tick(&mut state, &TickInput::default(), &clock);
        assert!(state.phase().is_stalled());
        tick(&mut state, &quit, &clock);
        assert_eq!(state.phase(), MatchState::Exited);

        // Exited is terminal
        let anything = TickInput {
            start: true,
            restart: true,
            quit: true,
            ..Default::default()
        };
        assert!(tick(&mut state, &anything, &clock).is_empty());
        assert_eq!(state.phase(), MatchState::Exited);
    }

    #[test]
    fn test_determinism() {
        // Two sessions fed the same inputs end up identical
        let clock = ManualClock::new();
        let mut state1 = GameState::new(GameConfig::default()).unwrap();
        let mut state2 = GameState::new(GameConfig::default()).unwrap();

        let inputs = [
            TickInput {
                start: true,
                ..Default::default()
            },
            TickInput {
                left: Intent::Up,
                ..Default::default()
            },
            TickInput {
                right: Intent::Down,
                ..Default::default()
            },
            TickInput::default(),
        ];

        for _ in 0..300 {
            for input in &inputs {
                tick(&mut state1, input, &clock);
                tick(&mut state2, input, &clock);
            }
            clock.advance(Duration::from_millis(16));
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.ball, state2.ball);
        assert_eq!(state1.paddles, state2.paddles);
        assert_eq!(state1.score, state2.score);
    }
}
