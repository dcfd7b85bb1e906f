use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tf_idf_similarity::{rank, TFIDFVectorizer};

/// deterministic synthetic corpus, skewed so a few terms are very common
fn synthetic_corpus(docs: usize, doc_len: usize, vocab: u32) -> Vec<Vec<String>> {
    let mut state = 0x1234_5678_u32;
    let mut next = move || {
        // xorshift32
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        state
    };
    (0..docs)
        .map(|_| {
            (0..doc_len)
                .map(|_| {
                    let r = next() % vocab;
                    format!("t{}", r * r / vocab)
                })
                .collect()
        })
        .collect()
}

fn fit_and_rank_benchmark(c: &mut Criterion) {
    let corpus = synthetic_corpus(2_000, 120, 5_000);
    let query: Vec<String> = corpus[7][..10].to_vec();

    c.bench_function("fit", |b| {
        b.iter(|| TFIDFVectorizer::<f64>::fit(black_box(&corpus)).unwrap())
    });

    let (vectorizer, vectors) = TFIDFVectorizer::<f32>::fit_transform(&corpus).unwrap();

    c.bench_function("transform_batch", |b| {
        b.iter(|| vectorizer.transform_batch(black_box(&corpus)))
    });

    c.bench_function("search", |b| {
        b.iter(|| {
            let q = vectorizer.transform(black_box(&query));
            rank(q.as_slice(), &vectors).unwrap().top_k(10)
        })
    });
}

criterion_group!(benches, fit_and_rank_benchmark);
criterion_main!(benches);
