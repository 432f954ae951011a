//! Terminal falling-block game (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from `tui_blockfall::term`.
//! One loop iteration is one frame: render, poll input until the frame deadline,
//! then advance gravity by the real elapsed time.

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event};

use tui_blockfall::config::{Args, RunConfig};
use tui_blockfall::core::GameState;
use tui_blockfall::input::{handle_key_event, is_press, should_quit};
use tui_blockfall::journal::{EventJournal, FileJournal, JournalEntry};
use tui_blockfall::term::{restore_terminal, FrameBuffer, GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let config = RunConfig::from_args(Args::parse());

    let mut journal = match &config.log_path {
        Some(path) => Some(EventJournal::open(path)?),
        None => None,
    };
    if let Some(journal) = journal.as_mut() {
        journal.record(JournalEntry::SessionStart { seed: config.seed })?;
    }

    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_terminal();
        default_hook(info);
    }));

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let mut game_state = GameState::new(config.seed);
    let result = run(&mut term, &mut game_state, &config, journal.as_mut());

    // Always try to restore terminal state.
    let _ = term.exit();

    if let Some(journal) = journal.as_mut() {
        journal.record(JournalEntry::session_end(&game_state))?;
    }
    if result.is_ok() {
        println!(
            "score {}  level {}  lines {}",
            game_state.score(),
            game_state.level(),
            game_state.lines()
        );
    }
    result
}

fn run(
    term: &mut TerminalRenderer,
    game_state: &mut GameState,
    config: &RunConfig,
    mut journal: Option<&mut FileJournal>,
) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = game_state.snapshot();

    let frame = config.frame;
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game_state.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input until the frame deadline.
        let timeout = frame
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if is_press(key) => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        game_state.apply_action(action);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Gravity.
        let elapsed = last_tick.elapsed();
        if elapsed >= frame {
            last_tick = Instant::now();
            let elapsed_ms = u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX);
            game_state.tick(elapsed_ms);
        }

        match journal.as_deref_mut() {
            Some(journal) => journal.record_events(game_state)?,
            None => {
                game_state.take_events();
            }
        }
    }
}
