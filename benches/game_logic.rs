use criterion::{black_box, criterion_group, criterion_main, Criterion};
use arena_tetris::core::{rotate, spawn, sweep, Grid, PieceRandomizer, Session};
use arena_tetris::types::{PieceKind, FRAME_MS};

fn session() -> Session {
    Session::with_grid(Grid::new(12, 20), PieceRandomizer::new(12345), 1000)
}

fn bench_tick(c: &mut Criterion) {
    let mut s = session();

    c.bench_function("session_tick_16ms", |b| {
        b.iter(|| {
            if s.game_over() {
                s.reset();
            }
            s.tick(black_box(FRAME_MS));
            s.take_events();
        })
    });
}

fn bench_sweep(c: &mut Criterion) {
    let mut rows = vec![vec![0; 12]; 20];
    for row in rows.iter_mut().skip(16) {
        *row = vec![1; 12];
    }
    let full = Grid::from_rows(rows).unwrap();

    c.bench_function("sweep_4_rows", |b| {
        b.iter(|| {
            let mut grid = full.clone();
            sweep(black_box(&mut grid))
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut m = spawn(PieceKind::I);

    c.bench_function("rotate_matrix_4x4", |b| {
        b.iter(|| rotate(black_box(&mut m)))
    });

    let mut s = session();
    s.soft_drop();
    s.soft_drop();
    c.bench_function("session_rotate_with_kicks", |b| {
        b.iter(|| {
            s.rotate();
            s.take_events();
        })
    });
}

fn bench_move(c: &mut Criterion) {
    let mut s = session();
    let mut dir = 1;

    c.bench_function("move_horizontal", |b| {
        b.iter(|| {
            if !s.move_horizontal(black_box(dir)) {
                dir = -dir;
            }
            s.take_events();
        })
    });
}

criterion_group!(benches, bench_tick, bench_sweep, bench_rotate, bench_move);
criterion_main!(benches);
