//! Keyboard to tick-input mapping
//!
//! Controls:
//! - Left (green): W up, S down
//! - Right (red): Up arrow up, Down arrow down
//! - Space / Enter: start the match
//! - R: restart after a match, Q: quit after a match
//! - Escape or closing the window: quit immediately
//!
//! Movement keys latch: pressing sets the paddle's intent, releasing either
//! key of the pair returns it to neutral. Discrete signals are one-shot and
//! cleared each time a tick input is taken.

use serde::{Deserialize, Serialize};

use crate::sim::{Intent, TickInput};

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    W,
    S,
    Up,
    Down,
    Space,
    Enter,
    R,
    Q,
    Escape,
}

/// Host input event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyEvent {
    Pressed(Key),
    Released(Key),
    /// Window close button
    CloseRequested,
}

/// Accumulates host events between ticks
#[derive(Debug, Clone, Default)]
pub struct InputMapper {
    left: Intent,
    right: Intent,
    pending: TickInput,
}

impl InputMapper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(&mut self, event: KeyEvent) {
        match event {
            KeyEvent::Pressed(key) => self.press(key),
            KeyEvent::Released(key) => self.release(key),
            KeyEvent::CloseRequested => self.pending.quit = true,
        }
    }

    fn press(&mut self, key: Key) {
        match key {
            Key::W => self.left = Intent::Up,
            Key::S => self.left = Intent::Down,
            Key::Up => self.right = Intent::Up,
            Key::Down => self.right = Intent::Down,
            Key::Space | Key::Enter => self.pending.start = true,
            Key::R => self.pending.restart = true,
            Key::Q => self.pending.quit_choice = true,
            Key::Escape => self.pending.quit = true,
        }
    }

    fn release(&mut self, key: Key) {
        match key {
            Key::W | Key::S => self.left = Intent::Neutral,
            Key::Up | Key::Down => self.right = Intent::Neutral,
            _ => {}
        }
    }

    /// Input for the next tick; one-shot signals are consumed
    pub fn take_tick_input(&mut self) -> TickInput {
        let signals = std::mem::take(&mut self.pending);
        TickInput {
            left: self.left,
            right: self.right,
            ..signals
        }
    }
}
