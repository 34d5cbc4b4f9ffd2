//! Terminal Tetris runner (default binary).
//!
//! Polls crossterm input until the next frame is due, dispatches frames to the
//! game shell, and redraws through the diffing framebuffer renderer.

use std::fs::File;
use std::io::BufWriter;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use arena_tetris::core::{GameConfig, GameShell, Session};
use arena_tetris::input::{handle_key_event, should_quit};
use arena_tetris::term::{ArenaView, FrameBuffer, TerminalRenderer, Viewport};
use arena_tetris::types::FRAME_MS;
use arena_tetris::EventLog;

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    config.validate()?;

    let mut log = match config.event_log_path.as_deref() {
        Some(path) => Some(EventLog::open(path)?),
        None => None,
    };

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let mut log_errors = Vec::new();
    let result = run(&mut term, &config, &mut log, &mut log_errors);

    // Always try to restore terminal state.
    let _ = term.exit();

    if let Some(log) = log.as_mut() {
        if let Err(e) = log.flush() {
            log_errors.push(e);
        }
    }
    for e in &log_errors {
        eprintln!("[EventLog] write failed: {:#}", e);
    }
    result
}

fn run(
    term: &mut TerminalRenderer,
    config: &GameConfig,
    log: &mut Option<EventLog<BufWriter<File>>>,
    log_errors: &mut Vec<anyhow::Error>,
) -> Result<()> {
    let mut shell = GameShell::new(Session::new(config));
    shell.start();

    let view = ArenaView::new();
    let mut fb = FrameBuffer::new(0, 0);
    let started = Instant::now();
    let frame = Duration::from_millis(FRAME_MS as u64);
    let mut next_frame = started + frame;

    loop {
        drain_events(&mut shell, started, log, log_errors);

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&shell, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        let timeout = next_frame.saturating_duration_since(Instant::now());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        drain_events(&mut shell, started, log, log_errors);
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        shell.apply(action);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        let now = Instant::now();
        if now >= next_frame {
            shell.on_frame(now.duration_since(started).as_millis() as u64);
            next_frame = now + frame;
        }
    }
}

fn drain_events(
    shell: &mut GameShell,
    started: Instant,
    log: &mut Option<EventLog<BufWriter<File>>>,
    log_errors: &mut Vec<anyhow::Error>,
) {
    let events = shell.take_events();
    let Some(log) = log.as_mut() else { return };
    // Stop logging after the first failure; report it once the screen is back.
    if !log_errors.is_empty() {
        return;
    }

    let ts_ms = started.elapsed().as_millis() as u64;
    for event in &events {
        if let Err(e) = log.record(ts_ms, event) {
            log_errors.push(e);
            return;
        }
    }
}
