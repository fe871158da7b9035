//! Per-side score counters

use serde::{Deserialize, Serialize};

use super::paddle::Side;

/// Points for each side
///
/// Counters only grow during a match; `reset` is the only way down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTracker {
    left: u32,
    right: u32,
}

impl ScoreTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply_score(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    /// Side that has reached `threshold`, if any
    ///
    /// Only one counter moves per point, so both sides can never reach the
    /// threshold on the same point.
    pub fn has_winner(&self, threshold: u32) -> Option<Side> {
        if self.left >= threshold {
            Some(Side::Left)
        } else if self.right >= threshold {
            Some(Side::Right)
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn left(&self) -> u32 {
        self.left
    }

    pub fn right(&self) -> u32 {
        self.right
    }
}
