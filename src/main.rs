//! Classic Pong headless runner
//!
//! Drives a full session without a window: key events come from an optional
//! JSON script, the loop is paced at the configured tick rate, and the final
//! render snapshot is printed as JSON.
//!
//! Usage:
//!   RUST_LOG=info cargo run -- --config pong.json --script keys.json

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;

use classic_pong::GameConfig;
use classic_pong::platform::{FramePacer, InputMapper, Key, KeyEvent, SystemClock};
use classic_pong::sim::{GameEvent, GameState, tick};

#[derive(Parser)]
#[command(name = "classic-pong")]
#[command(about = "Run a headless Pong session and print the final state")]
struct Args {
    /// JSON config file (missing fields use defaults)
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON list of `{ "tick": n, "event": ... }` key events
    #[arg(long)]
    script: Option<PathBuf>,

    /// Stop after this many frames even if the match is still running
    #[arg(long, default_value_t = 36_000)]
    max_frames: u64,

    /// Don't sleep between frames
    #[arg(long)]
    unpaced: bool,

    /// Start another match instead of quitting when one ends
    #[arg(long)]
    rematch: bool,
}

#[derive(Debug, Deserialize)]
struct ScriptedEvent {
    tick: u64,
    event: KeyEvent,
}

fn load_script(path: Option<&PathBuf>) -> Result<Vec<ScriptedEvent>> {
    let Some(path) = path else {
        // Default: press start on the first frame and leave the paddles idle
        return Ok(vec![ScriptedEvent {
            tick: 0,
            event: KeyEvent::Pressed(Key::Space),
        }]);
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read script {}", path.display()))?;
    let mut events: Vec<ScriptedEvent> = serde_json::from_str(&json)
        .with_context(|| format!("failed to parse script {}", path.display()))?;
    events.sort_by_key(|e| e.tick);
    log::info!("Loaded {} scripted key events", events.len());
    Ok(events)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    let script = load_script(args.script.as_ref())?;

    let mut state = GameState::new(config).context("cannot start a match")?;
    let clock = SystemClock::new();
    let mut pacer = FramePacer::new(state.config().tick_interval());
    let mut mapper = InputMapper::new();
    let mut script = script.into_iter().peekable();

    log::info!(
        "Classic Pong (headless) starting at {} Hz",
        state.config().tick_rate
    );

    let mut frame = 0u64;
    while state.is_running() && frame < args.max_frames {
        while let Some(scripted) = script.next_if(|e| e.tick <= frame) {
            mapper.handle(scripted.event);
        }

        let input = mapper.take_tick_input();
        for event in tick(&mut state, &input, &clock) {
            if let GameEvent::MatchWon(_) = event {
                let key = if args.rematch { Key::R } else { Key::Q };
                mapper.handle(KeyEvent::Pressed(key));
            }
        }

        frame += 1;
        if !args.unpaced {
            pacer.wait();
        }
    }

    if state.is_running() {
        log::warn!("Frame limit {} reached, match still running", args.max_frames);
    }
    log::info!(
        "Session over after {frame} frames ({} simulated ticks)",
        state.time_ticks
    );

    let snapshot = serde_json::to_string_pretty(&state.snapshot())?;
    println!("{snapshot}");
    Ok(())
}
