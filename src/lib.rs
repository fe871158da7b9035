//! Classic Pong - two paddles, one ball, first to the target score wins
//!
//! Core modules:
//! - `sim`: Deterministic simulation (paddles, ball, collisions, match state)
//! - `platform`: Clock, frame pacing and keyboard-to-intent mapping
//! - `config`: Session configuration, validated before a match starts
//! - `error`: Error types surfaced at session construction

pub mod config;
pub mod error;
pub mod platform;
pub mod sim;

pub use config::GameConfig;
pub use error::ConfigError;

/// Game configuration constants (reference defaults)
pub mod consts {
    /// Target simulation rate (one tick per rendered frame)
    pub const TICK_RATE_HZ: u32 = 60;

    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 900.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Distance between a paddle's outer face and its goal line
    pub const PADDLE_MARGIN: f32 = 20.0;
    /// Units per tick
    pub const PADDLE_SPEED: f32 = 10.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 8.0;
    /// Units per tick along each axis factor
    pub const BALL_SPEED: f32 = 4.0;

    /// Points needed to win a match
    pub const WINNING_SCORE: u32 = 5;

    /// Dead time after each point, in milliseconds
    pub const POINT_PAUSE_MS: u64 = 700;
}
