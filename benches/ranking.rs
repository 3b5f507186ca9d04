use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wordle_ranker::word::remove_non_nrl;
use wordle_ranker::{Feedback, FilterMode, Metric, SearchEngine, Word};

/// Deterministic pseudo-word list so the benchmark needs no data files.
fn synthetic_words(n: usize) -> Vec<Word> {
    const LETTERS: &[u8] = b"AEIORSTLNCDUPMHGBYFKW";
    let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
    let mut words = Vec::with_capacity(n);
    while words.len() < n {
        let mut s = String::with_capacity(5);
        for _ in 0..5 {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            s.push(LETTERS[(state % LETTERS.len() as u64) as usize] as char);
        }
        if let Ok(word) = Word::parse(&s) {
            if !words.contains(&word) {
                words.push(word);
            }
        }
    }
    words
}

fn bench_feedback(c: &mut Criterion) {
    let words = synthetic_words(500);
    c.bench_function("feedback 500x500", |b| {
        b.iter(|| {
            for guess in &words {
                for hidden in &words {
                    black_box(Feedback::calculate(guess, hidden));
                }
            }
        })
    });
}

fn bench_rank(c: &mut Criterion) {
    let words = synthetic_words(400);
    let nrl = remove_non_nrl(&words);

    let general =
        SearchEngine::new(words.clone(), words.clone(), words.clone(), FilterMode::General)
            .unwrap();
    c.bench_function("rank 400 general", |b| {
        b.iter(|| black_box(general.rank(Metric::Mean)))
    });

    let restricted =
        SearchEngine::new(words, nrl.clone(), nrl, FilterMode::NoRepeatedLetters).unwrap();
    c.bench_function("rank 400 restricted", |b| {
        b.iter(|| black_box(restricted.rank(Metric::Mean)))
    });
}

criterion_group!(benches, bench_feedback, bench_rank);
criterion_main!(benches);
