use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use common::games::SessionRng;
use common::games::tictactoe::{Board, DEFAULT_SEARCH_DEPTH, MAX_SEARCH_DEPTH, Mark, choose_move};

fn play_full_game(depth: u32) {
    let mut board = Board::new();
    let mut rng = SessionRng::new(0);
    let mut mark = Mark::X;

    while let Some(opponent) = mark.opponent() {
        let Some(index) = choose_move(&board, depth, mark, opponent, &mut rng) else {
            break;
        };
        if board.apply_move(index, mark).is_err() {
            break;
        }
        if common::games::tictactoe::has_line(&board, mark) {
            break;
        }
        mark = opponent;
    }
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group.bench_function("reply_to_center_default_depth", |b| {
        let mut board = Board::new();
        let _ = board.apply_move(4, Mark::X);
        let mut rng = SessionRng::new(0);
        b.iter(|| choose_move(black_box(&board), DEFAULT_SEARCH_DEPTH, Mark::O, Mark::X, &mut rng))
    });

    group.bench_function("empty_board_full_depth", |b| {
        let board = Board::new();
        let mut rng = SessionRng::new(0);
        b.iter(|| choose_move(black_box(&board), MAX_SEARCH_DEPTH, Mark::X, Mark::O, &mut rng))
    });

    group.bench_function("self_play_default_depth", |b| {
        b.iter(|| play_full_game(DEFAULT_SEARCH_DEPTH))
    });

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
