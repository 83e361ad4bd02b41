//! Stellar Blocks terminal runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from the term crate.

use std::path::PathBuf;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event};

use stellar_blocks::app::{App, AppConfig};
use stellar_blocks::clock::FrameClock;
use stellar_blocks::input::{should_quit, HeldKeys};
use stellar_blocks::store::DEFAULT_SCORES_FILE;
use stellar_blocks::term::{FrameBuffer, TerminalRenderer, Viewport};

/// Falling-block puzzle game for the terminal.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Seed for the piece generator (random when omitted).
    #[arg(long)]
    seed: Option<u32>,

    /// Frames per second of the game loop.
    #[arg(short, long, default_value_t = 60)]
    fps: u32,

    /// High-score file.
    #[arg(long, default_value = DEFAULT_SCORES_FILE)]
    scores: PathBuf,

    /// Pre-fill the player name.
    #[arg(short, long)]
    name: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, args);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer, args: Args) -> Result<()> {
    let config = AppConfig {
        seed: args.seed.unwrap_or_else(clock_seed),
        scores_path: args.scores,
        player_name: args.name,
    };

    let mut held = HeldKeys::new();
    if term.reports_key_release() {
        // Releases arrive as events; the timeout only guards against a lost one.
        held = held.with_key_release_timeout_ms(2_000);
    }
    let mut app = App::new(config).with_held_keys(held);

    let tick_duration = Duration::from_micros(1_000_000 / args.fps.clamp(1, 1000) as u64);
    let mut fb = FrameBuffer::new(0, 0);
    let mut clock = FrameClock::new(Instant::now());

    while !app.should_quit() {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        app.render_into(Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input until the next tick is due.
        let timeout = tick_duration.saturating_sub(clock.pending(Instant::now()));
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if should_quit(key) => return Ok(()),
                Event::Key(key) => app.handle_key(key),
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        let now = Instant::now();
        if clock.pending(now) >= tick_duration {
            app.tick(clock.take_elapsed_ms(now));
        }
    }

    Ok(())
}
