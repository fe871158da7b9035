//! Paddles and the sides they defend

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::config::GameConfig;

/// Which edge of the arena a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    pub fn opponent(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Color tag used by renderers (RGB)
    pub fn color(self) -> [u8; 3] {
        match self {
            Side::Left => [0, 255, 0],
            Side::Right => [255, 0, 0],
        }
    }

    /// Scoreboard label
    pub fn label(self) -> &'static str {
        match self {
            Side::Left => "Green",
            Side::Right => "Red",
        }
    }
}

/// Abstract vertical movement request for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Intent {
    Up,
    #[default]
    Neutral,
    Down,
}

impl Intent {
    /// Direction factor in screen space (y grows downward)
    #[inline]
    pub fn factor(self) -> f32 {
        match self {
            Intent::Up => -1.0,
            Intent::Neutral => 0.0,
            Intent::Down => 1.0,
        }
    }
}

/// A player's paddle
///
/// `pos` is the top-left corner. x never changes after construction; y is
/// kept inside `[0, arena_height - height]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Paddle {
    side: Side,
    pos: Vec2,
    size: Vec2,
    speed: f32,
    arena_height: f32,
}

impl Paddle {
    /// Paddle for `side`, vertically centered
    pub fn new(side: Side, config: &GameConfig) -> Self {
        let y = (config.arena_height - config.paddle_height) / 2.0;
        Self {
            side,
            pos: Vec2::new(config.paddle_x(side), y),
            size: Vec2::new(config.paddle_width, config.paddle_height),
            speed: config.paddle_speed,
            arena_height: config.arena_height,
        }
    }

    /// Move by `speed * intent`, then clamp into the arena
    pub fn update(&mut self, intent: Intent) {
        let max_y = self.arena_height - self.size.y;
        self.pos.y = (self.pos.y + self.speed * intent.factor()).clamp(0.0, max_y);
    }

    pub fn bounding_box(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn x(&self) -> f32 {
        self.pos.x
    }

    /// Top edge
    pub fn y(&self) -> f32 {
        self.pos.y
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_paddle_starts_centered() {
        let config = GameConfig::default();
        let left = Paddle::new(Side::Left, &config);
        let right = Paddle::new(Side::Right, &config);
        assert_eq!(left.y(), 250.0);
        assert_eq!(left.x(), 20.0);
        assert_eq!(right.x(), 870.0);
        assert_eq!(left.center_y(), 300.0);
    }

    #[test]
    fn test_paddle_moves_by_speed() {
        let config = GameConfig::default();
        let mut paddle = Paddle::new(Side::Left, &config);
        paddle.update(Intent::Up);
        assert_eq!(paddle.y(), 240.0);
        paddle.update(Intent::Down);
        paddle.update(Intent::Down);
        assert_eq!(paddle.y(), 260.0);
        paddle.update(Intent::Neutral);
        assert_eq!(paddle.y(), 260.0);
    }

    #[test]
    fn test_paddle_clamps_not_reflects() {
        let config = GameConfig::default();
        let mut paddle = Paddle::new(Side::Right, &config);
        for _ in 0..100 {
            paddle.update(Intent::Up);
        }
        assert_eq!(paddle.y(), 0.0);
        for _ in 0..100 {
            paddle.update(Intent::Down);
        }
        assert_eq!(paddle.y(), 500.0);
    }

    #[test]
    fn test_bounding_box_follows_paddle() {
        let config = GameConfig::default();
        let mut paddle = Paddle::new(Side::Left, &config);
        paddle.update(Intent::Down);
        let rect = paddle.bounding_box();
        assert_eq!(rect.min, Vec2::new(20.0, 260.0));
        assert_eq!(rect.max(), Vec2::new(30.0, 360.0));
    }

    #[test]
    fn test_side_helpers() {
        assert_eq!(Side::Left.opponent(), Side::Right);
        assert_eq!(Side::Right.opponent(), Side::Left);
        assert_eq!(Side::Left.label(), "Green");
        assert_eq!(Side::Right.color(), [255, 0, 0]);
    }

    fn intent_strategy() -> impl Strategy<Value = Intent> {
        prop_oneof![Just(Intent::Up), Just(Intent::Neutral), Just(Intent::Down)]
    }

    proptest! {
        #[test]
        fn prop_paddle_stays_in_arena(
            intents in prop::collection::vec(intent_strategy(), 0..400),
            speed in 0.5f32..80.0,
            height in 10.0f32..600.0,
        ) {
            let config = GameConfig {
                paddle_speed: speed,
                paddle_height: height,
                ..GameConfig::default()
            };
            let mut paddle = Paddle::new(Side::Left, &config);
            for intent in intents {
                paddle.update(intent);
                prop_assert!(paddle.y() >= 0.0);
                prop_assert!(paddle.y() <= config.arena_height - height);
            }
        }
    }
}
