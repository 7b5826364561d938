use criterion::{criterion_group, criterion_main, Criterion};
use wordhunt_solver::{Board, BoardGenerator, Dictionary};

const WORDFILE: &str = "wordlists/words.txt";
const TEST_BOARD: &[&str] = &["stra", "enit", "oter", "sare"];

fn bench_solve(c: &mut Criterion, name: &str, board: &Board) {
    let dictionary = Dictionary::from_file(WORDFILE).unwrap();
    c.bench_function(&format!("dictionary.solve.{}", name), |b| {
        b.iter(|| dictionary.solve(board))
    });
}

fn criterion_benchmark(c: &mut Criterion) {
    let board = Board::from_rows(TEST_BOARD).unwrap();
    bench_solve(c, "1", &board);
}

fn slow_benchmarks(c: &mut Criterion) {
    let dictionary = Dictionary::from_file(WORDFILE).unwrap();
    let boards: Vec<Board> = BoardGenerator::new(1).take(100).collect();
    c.bench_function("dictionary.solve_many.100", |b| {
        b.iter(|| dictionary.solve_many(&boards))
    });
    c.bench_function("dictionary.generate_playable", |b| {
        b.iter(|| dictionary.generate_playable(7, 2000))
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(60);
    targets = criterion_benchmark
}

criterion_group! {
    name = slow;
    config = Criterion::default()
        .sample_size(10);
    targets = slow_benchmarks
}

criterion_main!(benches, slow);
