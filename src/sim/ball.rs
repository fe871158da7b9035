//! The ball: movement, wall bounces, goal detection and paddle deflection

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::paddle::{Paddle, Side};
use crate::config::GameConfig;

/// Result of a ball update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreSignal {
    None,
    /// Ball reached the right goal line
    LeftScores,
    /// Ball reached the left goal line
    RightScores,
}

impl ScoreSignal {
    /// Side awarded the point, if any
    pub fn scorer(self) -> Option<Side> {
        match self {
            ScoreSignal::None => None,
            ScoreSignal::LeftScores => Some(Side::Left),
            ScoreSignal::RightScores => Some(Side::Right),
        }
    }
}

/// The ball
///
/// Velocity is `speed * (x_fac, y_fac)`. The factors are not normalized:
/// paddle hits set `y_fac` straight from the contact offset, so the effective
/// speed varies with the angle of the last hit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ball {
    pos: Vec2,
    radius: f32,
    speed: f32,
    x_fac: f32,
    y_fac: f32,
    /// Set when a goal crossing has been reported; cleared only by `reset`
    scored: bool,
    arena: Vec2,
}

impl Ball {
    /// Ball at the arena center heading up and to the right
    pub fn new(config: &GameConfig) -> Self {
        Self {
            pos: config.arena_center(),
            radius: config.ball_radius,
            speed: config.ball_speed,
            x_fac: 1.0,
            y_fac: -1.0,
            scored: false,
            arena: Vec2::new(config.arena_width, config.arena_height),
        }
    }

    /// Advance one tick
    ///
    /// Walls flip `y_fac` when the ball's edge reaches them while moving
    /// toward them. Position is not pushed back inside, so a bounce can
    /// overshoot by up to one step. At most one score is reported per
    /// crossing until `reset` is called.
    pub fn update(&mut self) -> ScoreSignal {
        self.pos += Vec2::new(self.x_fac, self.y_fac) * self.speed;

        let hit_top = self.pos.y - self.radius <= 0.0 && self.y_fac < 0.0;
        let hit_bottom = self.pos.y + self.radius >= self.arena.y && self.y_fac > 0.0;
        if hit_top || hit_bottom {
            self.y_fac = -self.y_fac;
        }

        if self.scored {
            return ScoreSignal::None;
        }
        if self.pos.x - self.radius <= 0.0 {
            self.scored = true;
            ScoreSignal::RightScores
        } else if self.pos.x + self.radius >= self.arena.x {
            self.scored = true;
            ScoreSignal::LeftScores
        } else {
            ScoreSignal::None
        }
    }

    /// Recenter and serve toward the other side
    pub fn reset(&mut self) {
        self.pos = self.arena / 2.0;
        self.x_fac = -self.x_fac;
        self.y_fac = if self.y_fac < 0.0 { -1.0 } else { 1.0 };
        self.scored = false;
    }

    /// Deflect off a paddle
    ///
    /// The contact point along the paddle picks the new vertical factor:
    /// top edge -> -1, center -> 0, bottom edge -> +1.
    pub fn on_paddle_collision(&mut self, paddle: &Paddle) {
        self.y_fac = (self.pos.y - paddle.center_y()) / paddle.height() * 2.0;
        self.x_fac = -self.x_fac;
    }

    /// Square bounding box around the ball
    pub fn bounding_box(&self) -> Rect {
        Rect::from_center(self.pos, Vec2::splat(self.radius))
    }

    /// Place the ball explicitly (replays, scripted scenarios)
    ///
    /// The scoring latch is left as is: a ball that already reported a goal
    /// stays silent until `reset`.
    pub fn set_motion(&mut self, pos: Vec2, x_fac: f32, y_fac: f32) {
        self.pos = pos;
        self.x_fac = x_fac;
        self.y_fac = y_fac;
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn x_fac(&self) -> f32 {
        self.x_fac
    }

    pub fn y_fac(&self) -> f32 {
        self.y_fac
    }

    /// Per-tick displacement
    pub fn velocity(&self) -> Vec2 {
        Vec2::new(self.x_fac, self.y_fac) * self.speed
    }

    pub fn has_scored(&self) -> bool {
        self.scored
    }
}
