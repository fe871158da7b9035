//! Collision detection between the ball and the paddles
//!
//! Discrete, once per tick: the ball's bounding box is tested against each
//! paddle rectangle. A ball fast enough to pass a paddle between two ticks
//! goes through it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::paddle::{Paddle, Side};

/// Axis-aligned rectangle (top-left corner + size)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    /// Rectangle of half-extent `half` around `center`
    pub fn from_center(center: Vec2, half: Vec2) -> Self {
        Self {
            min: center - half,
            size: half * 2.0,
        }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.min + self.size / 2.0
    }

    /// Strict overlap: rectangles that only share an edge do not collide
    pub fn overlaps(&self, other: &Rect) -> bool {
        let (a_max, b_max) = (self.max(), other.max());
        self.min.x < b_max.x && a_max.x > other.min.x && self.min.y < b_max.y && a_max.y > other.min.y
    }
}

/// Check whether the ball's bounding box overlaps a paddle
#[inline]
pub fn ball_paddle_overlap(ball: &Ball, paddle: &Paddle) -> bool {
    ball.bounding_box().overlaps(&paddle.bounding_box())
}

/// Resolve ball-paddle contacts for this tick
///
/// Paddles are visited in the order given; each overlapping paddle deflects
/// the ball exactly once. Returns the sides whose paddle was hit.
pub fn resolve_collisions(ball: &mut Ball, paddles: &[Paddle]) -> Vec<Side> {
    let mut hits = Vec::new();
    for paddle in paddles {
        if ball_paddle_overlap(ball, paddle) {
            ball.on_paddle_collision(paddle);
            log::debug!(
                "Ball hit {:?} paddle at y={:.1} (y_fac now {:.3})",
                paddle.side(),
                ball.pos().y,
                ball.y_fac()
            );
            hits.push(paddle.side());
        }
    }
    hits
}
