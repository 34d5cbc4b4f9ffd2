//! Session module - the single owner of all mutable game state
//!
//! A [`Session`] owns the grid, the active piece, the randomizer and the drop
//! timing. The placement operations (move, drop, rotate) live in
//! [`crate::controller`]; this module covers construction, spawning, reset and
//! the time-driven tick.

use std::mem;

use crate::collision::collides;
use crate::config::GameConfig;
use crate::event::SessionEvent;
use crate::grid::Grid;
use crate::piece::{self, ActivePiece, Position};
use crate::rng::PieceRandomizer;
use crate::types::{GameAction, PieceKind};

/// Events queue up until drained with [`Session::take_events`]; hosts that
/// drive a session directly must drain it regularly. [`crate::GameShell`]
/// does so after every call.
#[derive(Debug, Clone)]
pub struct Session {
    pub(crate) grid: Grid,
    pub(crate) active: ActivePiece,
    pub(crate) randomizer: PieceRandomizer,
    /// Time accumulated toward the next automatic drop
    pub(crate) drop_counter_ms: u32,
    pub(crate) drop_interval_ms: u32,
    pub(crate) paused: bool,
    pub(crate) game_over: bool,
    /// Placeholder score: total rows cleared
    pub(crate) score: u32,
    pub(crate) pieces_locked: u32,
    pub(crate) events: Vec<SessionEvent>,
}

impl Session {
    /// New session on an empty arena sized by `config`
    pub fn new(config: &GameConfig) -> Self {
        let randomizer = match config.seed {
            Some(seed) => PieceRandomizer::new(seed),
            None => PieceRandomizer::from_entropy(),
        };
        Self::with_grid(
            Grid::new(config.width, config.height),
            randomizer,
            config.drop_interval_ms,
        )
    }

    /// New session on an existing grid.
    ///
    /// The grid is kept as-is and the first piece spawns on top of it, so a
    /// crowded grid can end the game immediately.
    pub fn with_grid(grid: Grid, mut randomizer: PieceRandomizer, drop_interval_ms: u32) -> Self {
        let kind = randomizer.next_kind();
        let mut session = Self {
            grid,
            active: ActivePiece::new(kind, Position::default()),
            randomizer,
            drop_counter_ms: 0,
            drop_interval_ms,
            paused: false,
            game_over: false,
            score: 0,
            pieces_locked: 0,
            events: Vec::new(),
        };
        session.spawn(kind);
        session
    }

    /// Clear the arena and counters and spawn a fresh piece
    pub fn reset(&mut self) {
        self.grid.clear();
        self.drop_counter_ms = 0;
        self.paused = false;
        self.game_over = false;
        self.score = 0;
        self.pieces_locked = 0;
        self.spawn_next();
    }

    /// Replace the active piece with a fresh `kind` at top-center.
    ///
    /// Returns false and ends the game if the piece does not fit. The
    /// colliding piece stays active (for display) but is never merged.
    /// After game over this does nothing until [`Session::reset`].
    pub fn spawn(&mut self, kind: PieceKind) -> bool {
        if self.game_over {
            return false;
        }

        let matrix = piece::spawn(kind);
        let x = (self.grid.width() / 2) as i32 - (matrix.width() / 2) as i32;
        self.active = ActivePiece {
            kind,
            matrix,
            pos: Position::new(x, 0),
        };

        if self.active_collides() {
            self.game_over = true;
            self.events.push(SessionEvent::GameOver {
                score: self.score,
                pieces_locked: self.pieces_locked,
            });
            return false;
        }

        self.events.push(SessionEvent::Spawned {
            kind,
            x: self.active.pos.x,
            y: self.active.pos.y,
        });
        true
    }

    pub(crate) fn spawn_next(&mut self) -> bool {
        let kind = self.randomizer.next_kind();
        self.spawn(kind)
    }

    /// Advance the drop timer by `elapsed_ms`.
    ///
    /// Does nothing while paused or after game over. Returns true when the
    /// accumulated time exceeded the drop interval and a soft drop ran.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.paused || self.game_over {
            return false;
        }

        self.drop_counter_ms = self.drop_counter_ms.saturating_add(elapsed_ms);
        if self.drop_counter_ms > self.drop_interval_ms {
            self.soft_drop();
            return true;
        }
        false
    }

    /// Apply one of the four piece actions.
    ///
    /// Lifecycle actions are handled by the shell and are ignored here.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_horizontal(-1),
            GameAction::MoveRight => self.move_horizontal(1),
            GameAction::SoftDrop => self.soft_drop().changed(),
            GameAction::Rotate => self.rotate(),
            GameAction::Start | GameAction::Pause | GameAction::Reset => false,
        }
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn active(&self) -> &ActivePiece {
        &self.active
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    pub fn drop_counter_ms(&self) -> u32 {
        self.drop_counter_ms
    }

    /// Drain queued events in the order they happened
    pub fn take_events(&mut self) -> Vec<SessionEvent> {
        mem::take(&mut self.events)
    }

    pub(crate) fn active_collides(&self) -> bool {
        collides(&self.grid, &self.active.matrix, self.active.pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(width: usize, height: usize) -> Session {
        Session::with_grid(Grid::new(width, height), PieceRandomizer::new(1), 1000)
    }

    #[test]
    fn test_new_session_spawns_top_center() {
        let session = seeded(12, 20);
        let active = session.active();
        let expected_x = 6 - (active.matrix.width() / 2) as i32;
        assert_eq!(active.pos, Position::new(expected_x, 0));
        assert!(!session.game_over());
        assert!(!session.paused());
    }

    #[test]
    fn test_spawn_centers_each_kind() {
        let mut session = seeded(12, 20);
        session.spawn(PieceKind::I);
        assert_eq!(session.active().pos.x, 4);
        session.spawn(PieceKind::O);
        assert_eq!(session.active().pos.x, 5);
        session.spawn(PieceKind::T);
        assert_eq!(session.active().pos.x, 5);
    }

    #[test]
    fn test_spawn_emits_event() {
        let mut session = seeded(12, 20);
        session.take_events();
        session.spawn(PieceKind::Z);
        assert_eq!(
            session.take_events(),
            vec![SessionEvent::Spawned {
                kind: PieceKind::Z,
                x: 5,
                y: 0
            }]
        );
        assert!(session.take_events().is_empty());
    }

    #[test]
    fn test_tick_accumulates_until_interval_exceeded() {
        let mut session = seeded(12, 20);
        session.spawn(PieceKind::O);
        let y0 = session.active().pos.y;

        assert!(!session.tick(600));
        assert!(!session.tick(400));
        assert_eq!(session.drop_counter_ms(), 1000);
        assert_eq!(session.active().pos.y, y0);

        assert!(session.tick(1));
        assert_eq!(session.active().pos.y, y0 + 1);
        assert_eq!(session.drop_counter_ms(), 0);
    }

    #[test]
    fn test_tick_paused_is_noop() {
        let mut session = seeded(12, 20);
        session.set_paused(true);
        assert!(!session.tick(5000));
        assert_eq!(session.drop_counter_ms(), 0);
    }

    #[test]
    fn test_reset_clears_state() {
        let mut session = seeded(12, 20);
        session.spawn(PieceKind::O);
        while session.pieces_locked() == 0 {
            session.soft_drop();
        }
        assert!(session.grid().filled_count() > 0);
        session.tick(400);
        assert_eq!(session.drop_counter_ms(), 400);

        session.set_paused(true);
        session.reset();
        assert_eq!(session.drop_counter_ms(), 0);
        assert_eq!(session.grid().filled_count(), 0);
        assert_eq!(session.pieces_locked(), 0);
        assert!(!session.paused());
        assert!(!session.game_over());
        assert_eq!(session.active().pos.y, 0);
    }

    #[test]
    fn test_spawn_after_game_over_reports_once() {
        let mut rows = vec![vec![0; 12]; 20];
        rows[0] = vec![2; 12];
        rows[1] = vec![2; 12];
        let mut session =
            Session::with_grid(Grid::from_rows(rows).unwrap(), PieceRandomizer::new(1), 1000);
        assert!(session.game_over());
        assert_eq!(session.take_events().len(), 1);

        let before = session.active().clone();
        assert!(!session.spawn(PieceKind::I));
        assert!(session.take_events().is_empty());
        assert_eq!(session.active(), &before);
    }

    #[test]
    fn test_lifecycle_actions_ignored_by_session() {
        let mut session = seeded(12, 20);
        assert!(!session.apply_action(GameAction::Pause));
        assert!(!session.paused());
    }
}
