use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lib::chess::{GameState, Side};

fn legal_moves(c: &mut Criterion) {
    let game = GameState::new();
    c.benchmark_group("benches")
        .bench_function("legal_moves/start", |b| {
            b.iter(|| black_box(&game).legal_moves().count())
        });
}

fn checkmate(c: &mut Criterion) {
    let fixtures = [
        ("back_rank", "R5k1/5ppp/8/8/8/8/8/6K1", 1),
        ("escape", "R5k1/5pp1/8/8/8/8/8/6K1", 1),
        ("quiet", "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR", 0),
    ];

    let mut group = c.benchmark_group("benches");
    for (name, placement, turn) in fixtures {
        let game = GameState::with_board(placement.parse().unwrap(), turn).unwrap();

        let side = Side::on_turn(turn);
        group.bench_function(format!("is_checkmate/{name}"), |b| {
            b.iter(|| black_box(&game).is_checkmate(side))
        });
    }
}

criterion_group!(benches, legal_moves, checkmate);
criterion_main!(benches);
