//! Session configuration
//!
//! Fixed when a session is created and never mutated afterwards. Loaded from
//! JSON; any missing field falls back to the defaults in
//! [`crate::consts`].

use std::path::Path;
use std::time::Duration;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::sim::Side;

/// Arena, entity and rule settings for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Arena ===
    pub arena_width: f32,
    pub arena_height: f32,

    // === Paddles ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Gap between the goal line and the paddle's outer face
    pub paddle_margin: f32,
    /// Units moved per tick at full intent
    pub paddle_speed: f32,

    // === Ball ===
    pub ball_radius: f32,
    /// Units moved per tick along each direction factor
    pub ball_speed: f32,

    // === Rules ===
    pub winning_score: u32,
    /// Target ticks per second
    pub tick_rate: u32,
    /// Dead time after a point before the ball is served again
    pub point_pause_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_margin: PADDLE_MARGIN,
            paddle_speed: PADDLE_SPEED,

            ball_radius: BALL_RADIUS,
            ball_speed: BALL_SPEED,

            winning_score: WINNING_SCORE,
            tick_rate: TICK_RATE_HZ,
            point_pause_ms: POINT_PAUSE_MS,
        }
    }
}

impl GameConfig {
    /// Check every field; the first failure wins
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("arena_width", self.arena_width)?;
        positive("arena_height", self.arena_height)?;
        positive("paddle_width", self.paddle_width)?;
        positive("paddle_height", self.paddle_height)?;
        positive("paddle_speed", self.paddle_speed)?;
        positive("ball_radius", self.ball_radius)?;
        positive("ball_speed", self.ball_speed)?;

        if !self.paddle_margin.is_finite() || self.paddle_margin < 0.0 {
            return Err(ConfigError::invalid(
                "paddle_margin",
                format!("must be finite and >= 0, got {}", self.paddle_margin),
            ));
        }
        if self.paddle_height > self.arena_height {
            return Err(ConfigError::invalid(
                "paddle_height",
                format!(
                    "{} does not fit in arena height {}",
                    self.paddle_height, self.arena_height
                ),
            ));
        }
        if 2.0 * (self.paddle_margin + self.paddle_width) >= self.arena_width {
            return Err(ConfigError::invalid(
                "paddle_margin",
                "paddles overlap across the arena width",
            ));
        }
        if 2.0 * self.ball_radius >= self.arena_height.min(self.arena_width) {
            return Err(ConfigError::invalid(
                "ball_radius",
                format!("ball of radius {} does not fit the arena", self.ball_radius),
            ));
        }
        if self.winning_score == 0 {
            return Err(ConfigError::invalid("winning_score", "must be at least 1"));
        }
        if self.tick_rate == 0 {
            return Err(ConfigError::invalid("tick_rate", "must be at least 1"));
        }
        Ok(())
    }

    /// Parse a config from JSON (fields not present keep their defaults)
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load and validate a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&json)?;
        config.validate()?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Post-point dead time
    pub fn point_pause(&self) -> Duration {
        Duration::from_millis(self.point_pause_ms)
    }

    /// Wall-clock length of one tick at the target rate
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.tick_rate.max(1)))
    }

    /// Center of the arena (ball serve point)
    pub fn arena_center(&self) -> Vec2 {
        Vec2::new(self.arena_width / 2.0, self.arena_height / 2.0)
    }

    /// Fixed x position (left edge) of a side's paddle
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_margin,
            Side::Right => self.arena_width - self.paddle_margin - self.paddle_width,
        }
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(
            field,
            format!("must be finite and > 0, got {value}"),
        ))
    }
}
