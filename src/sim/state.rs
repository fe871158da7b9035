//! Match state and the session object that owns every entity

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::paddle::{Paddle, Side};
use super::score::ScoreTracker;
use crate::config::GameConfig;
use crate::error::ConfigError;

/// Lifecycle of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchState {
    /// Title screen, waiting for a start signal
    Intro,
    /// Active play. `stall_until` is set during the dead time after a point
    /// and holds the clock time at which the ball is served again.
    Playing { stall_until: Option<Duration> },
    /// A side reached the winning score; waiting for restart or quit
    MatchOver { winner: Side },
    /// Session ended; nothing else happens
    Exited,
}

impl MatchState {
    pub fn is_playing(&self) -> bool {
        matches!(self, MatchState::Playing { .. })
    }

    /// True during the post-point dead time
    pub fn is_stalled(&self) -> bool {
        matches!(self, MatchState::Playing { stall_until: Some(_) })
    }

    pub fn is_exited(&self) -> bool {
        matches!(self, MatchState::Exited)
    }

    pub fn winner(&self) -> Option<Side> {
        match self {
            MatchState::MatchOver { winner } => Some(*winner),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            MatchState::Intro => "Intro",
            MatchState::Playing { .. } => "Playing",
            MatchState::MatchOver { .. } => "MatchOver",
            MatchState::Exited => "Exited",
        }
    }
}

/// Things that happened during a tick, for audio/UI adapters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    MatchStarted,
    PaddleHit(Side),
    WallBounce,
    PointScored(Side),
    /// Post-point pause ended and the ball was recentered
    ServeResumed,
    MatchWon(Side),
    MatchRestarted,
    SessionEnded,
}

/// Complete session state
///
/// Owns both paddles, the ball, the score and the current `MatchState`.
/// Nothing here holds a reference back to the session; `tick` receives it
/// explicitly each frame.
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    config: GameConfig,
    /// Left paddle first, right paddle second
    pub paddles: [Paddle; 2],
    pub ball: Ball,
    pub score: ScoreTracker,
    pub(crate) phase: MatchState,
    /// Simulated ticks (stalled and idle ticks excluded)
    pub time_ticks: u64,
}

impl GameState {
    /// Create a session in `Intro`; rejects invalid configuration
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        if let Err(err) = config.validate() {
            log::warn!("Rejected game config: {err}");
            return Err(err);
        }

        Ok(Self {
            paddles: [
                Paddle::new(Side::Left, &config),
                Paddle::new(Side::Right, &config),
            ],
            ball: Ball::new(&config),
            score: ScoreTracker::new(),
            phase: MatchState::Intro,
            time_ticks: 0,
            config,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> MatchState {
        self.phase
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.paddles[0],
            Side::Right => &self.paddles[1],
        }
    }

    /// Still accepting ticks
    pub fn is_running(&self) -> bool {
        !self.phase.is_exited()
    }
}
