//! Terminal game runner.
//!
//! Owns the event loop: a fixed 500ms gravity tick plus key events, both
//! handled one at a time on this single thread. Input redraws only when the
//! action actually changed something; every tick redraws.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_blockfall::core::Game;
use tui_blockfall::input::{handle_key_event, should_quit};
use tui_blockfall::term::{BoardView, TerminalRenderer};
use tui_blockfall::types::TICK_MS;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1);

    let mut game = Game::new(seed);
    let mut view = BoardView::new();

    // First piece is on the board; paint it before the first gravity step.
    game.render(&mut view);
    term.draw(view.frame())?;

    let tick = Duration::from_millis(TICK_MS);
    let mut last_tick = Instant::now();

    loop {
        let timeout = tick
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        if game.apply(action) {
                            game.render(&mut view);
                            term.draw(view.frame())?;
                        }
                    }
                }
            }
        }

        if last_tick.elapsed() >= tick {
            last_tick = Instant::now();
            game.tick();
            game.render(&mut view);
            term.draw(view.frame())?;
        }
    }
}
