use criterion::{black_box, criterion_group, criterion_main, Criterion as Bench};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rs_wordle_approx::*;

/// Builds `n` distinct five letter words from a small alphabet so that patterns collide.
fn generated_words(n: usize) -> Vec<String> {
    let alphabet: Vec<char> = "aeioulnrst".chars().collect();
    (0..n)
        .map(|mut i| {
            (0..5)
                .map(|_| {
                    let letter = alphabet[i % alphabet.len()];
                    i /= alphabet.len();
                    letter
                })
                .collect()
        })
        .collect()
}

fn bench_judge(c: &mut Bench) {
    c.bench_function("judge_partial", |b| {
        b.iter(|| judge(black_box("sassy"), black_box("mesas")))
    });
}

fn bench_evaluate(c: &mut Bench) {
    let vocabulary = Vocabulary::new(generated_words(2000)).unwrap();
    let full = ApproxEvaluator::new(
        vocabulary.clone(),
        EvaluatorConfig::default().with_word_pair_limit(5_000_000),
    )
    .unwrap();
    let sampled = ApproxEvaluator::new(
        vocabulary,
        EvaluatorConfig::default()
            .with_word_pair_limit(200_000)
            .with_candidate_samplesize(200),
    )
    .unwrap();
    let mut rng = StdRng::seed_from_u64(0);

    c.bench_function("evaluate_full_2000", |b| {
        b.iter(|| full.evaluate(20, Criterion::MeanEntropy, None, &mut rng))
    });
    c.bench_function("evaluate_sampled_2000", |b| {
        b.iter(|| sampled.evaluate(20, Criterion::MeanEntropy, None, &mut rng))
    });
}

criterion_group!(benches, bench_judge, bench_evaluate);
criterion_main!(benches);
