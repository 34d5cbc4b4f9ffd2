//! Game shell - lifecycle controls around a session
//!
//! The shell owns the [`Session`] and the [`FrameLoop`]. It maps the start,
//! pause and reset controls onto the frame loop and forwards piece actions to
//! the session. When the session reports game over the shell stops the loop
//! and raises the game-over display flag.
//!
//! Hosts drive it with two calls: [`GameShell::apply`] for each input command
//! and [`GameShell::on_frame`] whenever a display frame is due.

use crate::event::{Lifecycle, SessionEvent};
use crate::frame::FrameLoop;
use crate::session::Session;
use crate::types::GameAction;

#[derive(Debug, Clone)]
pub struct GameShell {
    session: Session,
    frames: FrameLoop,
    /// Host timestamp of the previous frame; `None` right after start/reset
    last_frame_ms: Option<u64>,
    game_over_visible: bool,
    events: Vec<SessionEvent>,
}

impl GameShell {
    /// Wrap a session. The frame loop starts disarmed.
    pub fn new(session: Session) -> Self {
        let mut shell = Self {
            session,
            frames: FrameLoop::new(),
            last_frame_ms: None,
            game_over_visible: false,
            events: Vec::new(),
        };
        shell.collect_events();
        shell
    }

    /// Arm the frame loop if it is not running.
    ///
    /// Starting a finished game begins a new one.
    pub fn start(&mut self) -> bool {
        if self.session.game_over() {
            self.reset();
            return true;
        }
        if self.frames.is_armed() {
            return false;
        }

        self.game_over_visible = false;
        self.last_frame_ms = None;
        self.session.set_paused(false);
        self.frames.request();
        self.events.push(SessionEvent::Lifecycle {
            control: Lifecycle::Start,
        });
        true
    }

    /// Disarm the frame loop and freeze gravity. No-op when not running.
    pub fn pause(&mut self) -> bool {
        if !self.frames.cancel() {
            return false;
        }
        self.session.set_paused(true);
        self.events.push(SessionEvent::Lifecycle {
            control: Lifecycle::Pause,
        });
        true
    }

    /// Clear the arena, respawn, and (re)arm the frame loop
    pub fn reset(&mut self) {
        self.events.push(SessionEvent::Lifecycle {
            control: Lifecycle::Reset,
        });
        self.session.reset();
        self.game_over_visible = false;
        self.last_frame_ms = None;
        self.frames.request();
        self.collect_events();
    }

    /// Dispatch a due frame at host time `now_ms`.
    ///
    /// Returns false when no frame was armed. The loop re-arms itself after
    /// each frame unless the game ended during it.
    pub fn on_frame(&mut self, now_ms: u64) -> bool {
        if self.frames.take().is_none() {
            return false;
        }

        let elapsed = self
            .last_frame_ms
            .map(|last| now_ms.saturating_sub(last))
            .unwrap_or(0);
        self.last_frame_ms = Some(now_ms);

        self.session
            .tick(u32::try_from(elapsed).unwrap_or(u32::MAX));
        self.collect_events();

        if !self.session.game_over() {
            self.frames.request();
        }
        true
    }

    /// Apply an input command
    pub fn apply(&mut self, action: GameAction) -> bool {
        let changed = match action {
            GameAction::Start => self.start(),
            GameAction::Pause => self.pause(),
            GameAction::Reset => {
                self.reset();
                true
            }
            _ => self.session.apply_action(action),
        };
        self.collect_events();
        changed
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// True while the frame loop is armed
    pub fn is_running(&self) -> bool {
        self.frames.is_armed()
    }

    pub fn game_over_visible(&self) -> bool {
        self.game_over_visible
    }

    /// Drain session and lifecycle events in order
    pub fn take_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    fn collect_events(&mut self) {
        for event in self.session.take_events() {
            if event.is_game_over() {
                self.frames.cancel();
                self.game_over_visible = true;
            }
            self.events.push(event);
        }
    }
}
