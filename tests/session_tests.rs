//! End-to-end session scenarios

use arena_tetris::core::{DropOutcome, GameConfig, Grid, PieceRandomizer, Session, SessionEvent};
use arena_tetris::types::GameAction;

fn empty_session(seed: u64) -> Session {
    Session::with_grid(Grid::new(12, 20), PieceRandomizer::new(seed), 1000)
}

#[test]
fn test_spawn_into_seeded_content_ends_game() {
    // Top four rows filled except the far-left column: no row is full, and
    // no piece fits at top-center.
    let mut rows = vec![vec![0; 12]; 20];
    for row in rows.iter_mut().take(4) {
        *row = vec![3; 12];
        row[0] = 0;
    }
    let grid = Grid::from_rows(rows).unwrap();

    let mut session = Session::with_grid(grid.clone(), PieceRandomizer::new(42), 1000);
    assert!(session.game_over());
    assert_eq!(session.grid(), &grid);

    let events = session.take_events();
    assert_eq!(
        events,
        vec![SessionEvent::GameOver {
            score: 0,
            pieces_locked: 0
        }]
    );

    // Nothing moves after game over, and the grid stays untouched.
    assert!(!session.apply_action(GameAction::SoftDrop));
    assert!(!session.tick(5000));
    assert_eq!(session.grid(), &grid);
}

#[test]
fn test_moves_stop_at_the_walls() {
    let mut session = empty_session(11);

    for _ in 0..20 {
        session.apply_action(GameAction::MoveLeft);
    }
    let min_x = session.active().cells().map(|(x, _, _)| x).min().unwrap();
    assert_eq!(min_x, 0);
    assert!(!session.apply_action(GameAction::MoveLeft));

    for _ in 0..20 {
        session.apply_action(GameAction::MoveRight);
    }
    let max_x = session.active().cells().map(|(x, _, _)| x).max().unwrap();
    assert_eq!(max_x, 11);
    assert!(!session.apply_action(GameAction::MoveRight));
}

#[test]
fn test_soft_drops_lock_at_floor_and_respawn_top_center() {
    let mut session = empty_session(3);
    session.take_events();

    let mut last = session.active().clone();
    let mut drops = 0;
    loop {
        match session.soft_drop() {
            DropOutcome::Moved => last = session.active().clone(),
            DropOutcome::Locked { rows_cleared } => {
                assert_eq!(rows_cleared, 0);
                break;
            }
            DropOutcome::Ignored => panic!("session ended on an empty grid"),
        }
        drops += 1;
        assert!(drops < 40);
    }

    // Locked exactly where the piece last fit, resting on the floor.
    for (x, y, tag) in last.cells() {
        assert_eq!(session.grid().get(x, y), Some(tag));
    }
    assert_eq!(last.cells().map(|(_, y, _)| y).max(), Some(19));
    assert_eq!(session.grid().filled_count(), 4);

    let next = session.active();
    assert_eq!(next.pos.y, 0);
    assert_eq!(next.pos.x, 6 - (next.matrix.width() / 2) as i32);

    let events = session.take_events();
    assert!(matches!(events[0], SessionEvent::Locked { kind, .. } if kind == last.kind));
    assert!(matches!(events[1], SessionEvent::Spawned { y: 0, .. }));
}

#[test]
fn test_gravity_from_config() {
    let config = GameConfig {
        drop_interval_ms: 100,
        seed: Some(8),
        ..GameConfig::default()
    };
    let mut session = Session::new(&config);
    let y0 = session.active().pos.y;

    assert!(!session.tick(100));
    assert!(session.tick(1));
    assert_eq!(session.active().pos.y, y0 + 1);
}

#[test]
fn test_same_seed_same_game() {
    let play = |seed| {
        let mut s = empty_session(seed);
        let mut kinds = Vec::new();
        while s.pieces_locked() < 10 && !s.game_over() {
            kinds.push(s.active().kind);
            while s.pieces_locked() == kinds.len() as u32 - 1 && !s.game_over() {
                s.soft_drop();
            }
        }
        (kinds, s.grid().clone())
    };
    assert_eq!(play(77), play(77));
}

#[test]
fn test_paused_session_still_accepts_input() {
    let mut session = empty_session(5);
    session.set_paused(true);
    let x = session.active().pos.x;

    assert!(session.apply_action(GameAction::MoveRight));
    assert_eq!(session.active().pos.x, x + 1);
    assert!(!session.tick(10_000));
}
