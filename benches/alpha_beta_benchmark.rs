use gomoku::alpha_beta_searcher::AlphaBetaSearcher;
use gomoku::board::Action;
use gomoku::gomoku_position;
use gomoku::state::GameState;

use criterion::{criterion_group, criterion_main, Criterion};

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("alpha beta depth 2 midgame", |b| {
        b.iter(|| search_midgame(2))
    });
    c.bench_function("alpha beta depth 3 midgame", |b| {
        b.iter(|| search_midgame(3))
    });
    c.bench_function("apply undo opening", |b| b.iter(apply_undo_opening));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

fn midgame() -> GameState {
    gomoku_position! {
        ...... /
        ..XO.. /
        .OXX.. /
        ..OX.. /
        ...O..
    }
}

fn search_midgame(depth: u8) -> Action {
    let mut state = midgame();
    let mut searcher = AlphaBetaSearcher::new(depth);
    searcher
        .next_action(&mut state)
        .expect("midgame position has legal moves")
}

fn apply_undo_opening() -> usize {
    let mut state = GameState::default();
    let moves = [(0, 0), (1, 1), (1, 0), (2, 0), (0, 1), (-1, -1), (0, 2), (0, 3)];
    for &(x, y) in moves.iter() {
        state.apply(Action::new(x, y));
    }
    let legal = state.legal_actions().len();
    for _ in moves.iter() {
        state.undo();
    }
    legal
}
