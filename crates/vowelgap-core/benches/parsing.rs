use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use vowelgap_core::parser::parse_word_list;
use vowelgap_core::quiz::QuizSession;

const STEMS: [&str; 8] = [
    "корова", "молоко", "привет", "дорога", "берёза", "карандаш", "собака", "посуда",
];

fn generate_word_list(lines: usize) -> String {
    let mut s = String::new();
    for i in 0..lines {
        let stem = STEMS[i % STEMS.len()];
        s.push_str(&format!("{stem}, {stem}ми, {stem}х\n"));
        if i % 10 == 0 {
            s.push_str("брр\n\n");
        }
    }
    s
}

fn bench_parse_word_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_word_list");

    let small = generate_word_list(10);
    let medium = generate_word_list(500);
    let large = generate_word_list(10_000);

    for (name, text) in [("10_lines", &small), ("500_lines", &medium), ("10k_lines", &large)] {
        group.bench_function(name, |b| {
            let mut rng = ChaCha8Rng::seed_from_u64(0);
            b.iter(|| parse_word_list(black_box(text), &mut rng))
        });
    }

    group.finish();
}

fn bench_initialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("quiz_initialize");

    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let records = parse_word_list(&generate_word_list(10_000), &mut rng).records;

    group.bench_function("shuffle_30k_records", |b| {
        b.iter(|| QuizSession::initialize(black_box(records.clone()), &mut rng))
    });

    group.finish();
}

criterion_group!(benches, bench_parse_word_list, bench_initialize);
criterion_main!(benches);
