//! Placement controller - move, drop and rotate the active piece
//!
//! Every action is tentative: apply it, test for collision, and roll back if
//! the new state is invalid. Rejected actions are silent; they are a normal
//! part of play, not errors.

use crate::event::SessionEvent;
use crate::lock::{merge, sweep};
use crate::session::Session;
use crate::transform::{rotate, rotate_back};

/// Result of a single soft drop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The piece fell one row
    Moved,
    /// The piece could not fall, was locked, and the next piece spawned
    Locked { rows_cleared: u32 },
    /// The session is over; nothing happened
    Ignored,
}

impl DropOutcome {
    pub fn changed(&self) -> bool {
        !matches!(self, DropOutcome::Ignored)
    }
}

impl Session {
    /// Shift the piece one column (`dir` is -1 or +1); reverted on collision
    pub fn move_horizontal(&mut self, dir: i32) -> bool {
        if self.game_over {
            return false;
        }

        self.active.pos.x += dir;
        if self.active_collides() {
            self.active.pos.x -= dir;
            return false;
        }
        true
    }

    /// Drop the piece one row, locking it when it cannot fall further.
    ///
    /// Resets the drop timer either way.
    pub fn soft_drop(&mut self) -> DropOutcome {
        if self.game_over {
            return DropOutcome::Ignored;
        }

        self.active.pos.y += 1;
        let outcome = if self.active_collides() {
            self.active.pos.y -= 1;
            let rows_cleared = self.lock_active();
            DropOutcome::Locked { rows_cleared }
        } else {
            DropOutcome::Moved
        };

        self.drop_counter_ms = 0;
        outcome
    }

    /// Rotate clockwise, nudging sideways to escape walls and the stack.
    ///
    /// Tries x offsets +1, -2, +3, -4, ... cumulatively, so the piece visits
    /// x+1, x-1, x+2, x-2, ... The search stops once the next offset exceeds
    /// the matrix width, at which point the rotation is undone.
    pub fn rotate(&mut self) -> bool {
        if self.game_over {
            return false;
        }

        let origin_x = self.active.pos.x;
        let width = self.active.matrix.width() as i32;
        rotate(&mut self.active.matrix);

        let mut offset: i32 = 1;
        while self.active_collides() {
            self.active.pos.x += offset;
            offset = -(offset + offset.signum());
            if offset > width {
                rotate_back(&mut self.active.matrix);
                self.active.pos.x = origin_x;
                return false;
            }
        }
        true
    }

    /// Merge the active piece, sweep full rows, and spawn the next piece
    fn lock_active(&mut self) -> u32 {
        merge(&mut self.grid, &self.active);
        let rows_cleared = sweep(&mut self.grid) as u32;

        self.score += rows_cleared;
        self.pieces_locked += 1;
        self.events.push(SessionEvent::Locked {
            kind: self.active.kind,
            x: self.active.pos.x,
            y: self.active.pos.y,
            rows_cleared,
        });

        self.spawn_next();
        rows_cleared
    }
}
