//! Terminal runner (default binary).
//!
//! Drives the core at a fixed frame rate. Time is milliseconds since startup;
//! crossterm key events are folded into held-key signals before each tick.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use log::{info, Log};

use blockfall::core::{GameSnapshot, GameState, RandomSource, RngSource, SimpleRng};
use blockfall::input::{should_quit, KeyboardState};
use blockfall::logging;
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::FRAME_MS;

/// Falling-block puzzle in the terminal.
///
/// Arrows / WASD / HJKL move, Up rotates, Space toggles automatic descent,
/// Enter or F2 starts a game, Esc / Q / Ctrl-C quits.
#[derive(Debug, Parser)]
#[command(about, version)]
struct Args {
    /// Seed for a reproducible piece sequence (default: OS randomness)
    #[arg(long)]
    seed: Option<u32>,

    /// Write log records to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Include debug records in the log
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.log_file.as_deref(), args.verbose)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &args);

    // Always try to restore terminal state.
    let _ = term.exit();
    log::logger().flush();
    result
}

fn random_source(seed: Option<u32>) -> Box<dyn RandomSource> {
    match seed {
        Some(seed) => {
            info!("seeded run, seed {}", seed);
            Box::new(SimpleRng::new(seed))
        }
        None => Box::new(RngSource(rand::thread_rng())),
    }
}

fn run(term: &mut TerminalRenderer, args: &Args) -> Result<()> {
    let mut game = GameState::with_rng(random_source(args.seed));
    let mut keyboard = KeyboardState::new();

    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let clock = Instant::now();
    let now_ms = || clock.elapsed().as_secs_f64() * 1000.0;
    let frame = Duration::from_millis(FRAME_MS);
    let mut next_frame = Instant::now();

    loop {
        // Input until the next frame is due.
        loop {
            let timeout = next_frame.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                break;
            }
            match event::read()? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Release && should_quit(key) {
                        return Ok(());
                    }
                    keyboard.handle_key_event(key, now_ms());
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        next_frame += frame;
        // Don't try to catch up after a stall.
        let now = Instant::now();
        if next_frame + frame < now {
            next_frame = now + frame;
        }

        let t = now_ms();
        let signals = keyboard.signals(t);
        game.tick(t, &signals);

        game.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;
    }
}
