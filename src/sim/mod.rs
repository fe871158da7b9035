//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick
//! - Time only through an injected `Clock`
//! - Fixed update order (paddles, ball, collisions, score, transition)
//! - No rendering or platform dependencies

pub mod ball;
pub mod collision;
pub mod paddle;
pub mod score;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use ball::{Ball, ScoreSignal};
pub use collision::{Rect, ball_paddle_overlap, resolve_collisions};
pub use paddle::{Intent, Paddle, Side};
pub use score::ScoreTracker;
pub use snapshot::{BallView, PaddleView, RenderSnapshot, ScoreView};
pub use state::{GameEvent, GameState, MatchState};
pub use tick::{TickInput, tick};
