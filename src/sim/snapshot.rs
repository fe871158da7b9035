//! Read-only view of a session for render adapters
//!
//! Built fresh each frame; nothing in here feeds back into the simulation.

use glam::Vec2;
use serde::Serialize;

use super::collision::Rect;
use super::paddle::Side;
use super::state::GameState;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaddleView {
    pub side: Side,
    pub rect: Rect,
    pub color: [u8; 3],
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BallView {
    pub center: Vec2,
    pub radius: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreView {
    pub left: u32,
    pub right: u32,
}

/// Everything a renderer needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderSnapshot {
    pub arena: Vec2,
    /// `Intro`, `Playing`, `MatchOver` or `Exited`
    pub phase: &'static str,
    pub paddles: [PaddleView; 2],
    pub ball: BallView,
    pub score: ScoreView,
    /// Set only on the match-over screen
    pub winner: Option<Side>,
    /// True during the post-point pause
    pub stalled: bool,
}

impl RenderSnapshot {
    /// Scoreboard text, e.g. `"Green: 3"`
    pub fn score_label(&self, side: Side) -> String {
        let points = match side {
            Side::Left => self.score.left,
            Side::Right => self.score.right,
        };
        format!("{}: {}", side.label(), points)
    }
}

impl GameState {
    pub fn snapshot(&self) -> RenderSnapshot {
        let config = self.config();
        let phase = self.phase();
        RenderSnapshot {
            arena: Vec2::new(config.arena_width, config.arena_height),
            phase: phase.name(),
            paddles: self.paddles.clone().map(|paddle| PaddleView {
                side: paddle.side(),
                rect: paddle.bounding_box(),
                color: paddle.side().color(),
            }),
            ball: BallView {
                center: self.ball.pos(),
                radius: self.ball.radius(),
            },
            score: ScoreView {
                left: self.score.left(),
                right: self.score.right(),
            },
            winner: phase.winner(),
            stalled: phase.is_stalled(),
        }
    }
}
