use criterion::{criterion_group, criterion_main, Criterion};
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

use autocomplete::wordlist::trie::Trie;

fn random_words(count: usize) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..count)
        .map(|_| {
            let len = rng.gen_range(3..12);
            (0..len).map(|_| rng.gen_range('a'..='z')).collect()
        })
        .collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let words = random_words(100_000);
    let trie: Trie = words.iter().map(|x| x.as_str()).collect();

    c.bench_function("add 100k", |b| b.iter(|| {
        let trie: Trie = words.iter().map(|x| x.as_str()).collect();
        trie.len()
    }));

    { let mut group = c.benchmark_group("lookup");
        group.bench_function("contains", |b| b.iter(|| trie.contains(&words[777])));
        group.bench_function("prefix len 1", |b| b.iter(|| trie.words_with_prefix("q").len()));
        group.bench_function("prefix len 3", |b| b.iter(|| trie.words_with_prefix("qua").len()));
        group.bench_function("first 10 of len 1", |b| b.iter(|| trie.completions("q").take(10).count()));
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
