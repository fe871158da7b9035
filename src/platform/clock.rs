//! Time sources and frame pacing
//!
//! The simulation never reads the wall clock directly. `tick` takes a
//! [`Clock`], so the post-point pause can run against real time in the game
//! loop and against a [`ManualClock`] in tests and replays.

use std::cell::Cell;
use std::time::{Duration, Instant};

/// Monotonic time source
pub trait Clock {
    /// Time elapsed since the clock's origin
    fn now(&self) -> Duration;
}

/// Wall-clock time measured from construction
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Clock that only moves when told to
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Cell<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    pub fn set(&self, to: Duration) {
        self.now.set(to);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Duration {
        (**self).now()
    }
}

/// Holds the game loop to a fixed frame rate
///
/// `wait` sleeps until the next frame boundary. If a frame overran, the
/// schedule restarts from now instead of trying to catch up.
#[derive(Debug)]
pub struct FramePacer {
    interval: Duration,
    next: Instant,
    frames: u64,
}

impl FramePacer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next: Instant::now() + interval,
            frames: 0,
        }
    }

    /// Block until the next frame is due
    pub fn wait(&mut self) {
        let now = Instant::now();
        if let Some(remaining) = self.next.checked_duration_since(now) {
            std::thread::sleep(remaining);
            self.next += self.interval;
        } else {
            log::trace!("Frame {} overran by {:?}", self.frames, now - self.next);
            self.next = now + self.interval;
        }
        self.frames += 1;
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Frames paced so far
    pub fn frames(&self) -> u64 {
        self.frames
    }
}
