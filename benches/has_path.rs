use boggle_engine::Board;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_has_path(c: &mut Criterion) {
    let board = Board::create(5, &mut StdRng::seed_from_u64(17)).unwrap();
    // worst case: every cell matches but the word cannot be finished
    let uniform = Board::from_rows(&["AAAA", "AAAA", "AAAA", "AAAB"]).unwrap();

    c.bench_function("has_path random 5x5", |b| {
        b.iter(|| {
            for word in ["STARE", "RATES", "TEARS", "QUIZ", "EAT"] {
                black_box(board.has_path(black_box(word)));
            }
        })
    });

    c.bench_function("has_path uniform miss", |b| {
        b.iter(|| black_box(uniform.has_path(black_box("AAAAAAAC"))))
    });

    c.bench_function("has_path_parallel uniform miss", |b| {
        b.iter(|| black_box(uniform.has_path_parallel(black_box("AAAAAAAC"))))
    });
}

criterion_group!(benches, bench_has_path);
criterion_main!(benches);
