//! Terminal blockfall runner (default binary).
//!
//! Fixed-timestep loop: poll the keyboard with a timeout until the next
//! tick, forward commands to the engine, advance gravity, and paint the
//! snapshot. The high-score file is read once at startup and rewritten
//! whenever the session score exceeds the stored best.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::{Engine, Snapshot};
use blockfall::input::{map_key_event, should_quit};
use blockfall::persist::{default_store_path, HighScoreStore};
use blockfall::term::{GameView, TerminalRenderer, Viewport};
use blockfall::types::{Command, GamePhase, TICK_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore the terminal, even when the loop errored.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1)
        .wrapping_add(std::process::id());
    let mut engine = Engine::new(seed);
    let mut store = HighScoreStore::open(default_store_path());
    let view = GameView::default();
    let mut snapshot = Snapshot::default();

    let tick = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        engine.snapshot_into(&mut snapshot);

        // A new best is persisted the moment the score exceeds it; failures
        // here must not end the game.
        if snapshot.score > store.best() {
            let _ = store.record(snapshot.score);
        }

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&snapshot, store.best(), Viewport::new(w, h));
        term.draw(&fb)?;

        let timeout = tick
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(command) = map_key_event(key) {
                        apply_command(&mut engine, command);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick {
            last_tick = Instant::now();
            engine.tick(TICK_MS);
        }
    }
}

/// Forward a command, smoothing one lifecycle edge: the engine's machine
/// requires GameOver -> reset -> Idle -> start, while the original game's
/// "play again" button does both. Enter on the game-over screen gets the
/// same one-press restart.
fn apply_command(engine: &mut Engine, command: Command) {
    if command == Command::Start && engine.phase() == GamePhase::GameOver {
        engine.apply(Command::Reset);
    }
    engine.apply(command);
}
