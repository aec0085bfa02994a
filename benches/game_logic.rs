use std::time::{Duration, Instant};

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use duel_sweeper::core::{Board, Match, SimpleRng};
use duel_sweeper::types::{GameConfig, PointerButton, BOARD_COLS, BOARD_ROWS, BOMB_COUNT};

fn bench_generate(c: &mut Criterion) {
    let mut rng = SimpleRng::new(12345);

    c.bench_function("generate_16x16_40", |b| {
        b.iter(|| Board::generate(BOARD_ROWS, BOARD_COLS, BOMB_COUNT, black_box(&mut rng)))
    });
}

fn bench_flood_fill(c: &mut Criterion) {
    // One mine in the corner: revealing the far corner floods the board.
    let template = Board::from_mines(BOARD_ROWS, BOARD_COLS, &[(0, 0)]).unwrap();

    c.bench_function("flood_fill_open_board", |b| {
        b.iter(|| {
            let mut board = template.clone();
            board.reveal(black_box(BOARD_ROWS - 1), black_box(BOARD_COLS - 1))
        })
    });
}

fn bench_tick(c: &mut Criterion) {
    let start = Instant::now();
    let mut game = Match::new(GameConfig::default(), 12345).unwrap();
    let (row, col) = (0..BOARD_ROWS * BOARD_COLS)
        .map(|i| (i / BOARD_COLS, i % BOARD_COLS))
        .find(|&(r, c)| !game.board()[(r, c)].is_mine())
        .unwrap();
    game.click(row, col, PointerButton::Right, start);
    let now = start + Duration::from_secs(3);

    c.bench_function("match_tick", |b| b.iter(|| game.tick(black_box(now))));
}

fn bench_snapshot(c: &mut Criterion) {
    let game = Match::new(GameConfig::default(), 12345).unwrap();
    let mut snap = game.snapshot(Instant::now());

    c.bench_function("snapshot_into", |b| {
        b.iter(|| game.snapshot_into(black_box(Instant::now()), &mut snap))
    });
}

criterion_group!(
    benches,
    bench_generate,
    bench_flood_fill,
    bench_tick,
    bench_snapshot
);
criterion_main!(benches);
