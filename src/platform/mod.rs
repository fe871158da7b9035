//! Platform abstraction layer
//!
//! Everything that touches the host environment sits behind this module:
//! - Time (injectable clock, fixed-rate frame pacing)
//! - Input events (keyboard state mapped to per-tick intents)

pub mod clock;
pub mod input;

pub use clock::{Clock, FramePacer, ManualClock, SystemClock};
pub use input::{InputMapper, Key, KeyEvent};
