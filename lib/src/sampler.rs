use log::debug;
use rand::seq::index;
use rand::Rng;
use std::sync::Arc;

/// How the word universes were reduced to fit within the pair limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleStrategy {
    /// Every input word is scored against every answer word.
    Full,
    /// Every input word is kept, but the answer words are sampled.
    Answers,
    /// The input words are sampled, and every answer word is kept.
    Inputs,
    /// Both the input words and the answer words are sampled.
    InputsAndAnswers,
}

/// The words to use for one evaluation.
#[derive(Debug, Clone)]
pub struct SamplePlan {
    pub strategy: SampleStrategy,
    /// Words to score as guesses.
    pub input_words: Vec<Arc<str>>,
    /// Words to treat as possible answers.
    pub answer_words: Vec<Arc<str>>,
}

impl SamplePlan {
    /// Number of (input word, answer word) pairs in this plan.
    pub fn num_pairs(&self) -> usize {
        self.input_words.len() * self.answer_words.len()
    }
}

/// Chooses input and answer words so that `inputs * answers` stays within `word_pair_limit`
/// where possible.
///
/// This is a best-effort uniform sample, not a stratified one. The sampled words keep their
/// original relative order.
pub fn plan_sample<R: Rng + ?Sized>(
    input_words: &[Arc<str>],
    answer_words: &[Arc<str>],
    word_pair_limit: usize,
    candidate_samplesize: usize,
    rng: &mut R,
) -> SamplePlan {
    let n_words = input_words.len();
    let n_candidates = answer_words.len();
    let samplesize = candidate_samplesize.min(n_candidates);

    if n_words.saturating_mul(n_candidates) <= word_pair_limit {
        debug!(
            "No approximation needed (input words: {}, candidates: {})",
            n_words, n_candidates
        );
        return SamplePlan {
            strategy: SampleStrategy::Full,
            input_words: input_words.to_vec(),
            answer_words: answer_words.to_vec(),
        };
    }

    if n_words.saturating_mul(samplesize) <= word_pair_limit {
        let n_candidates2 = word_pair_limit / n_words;
        debug!(
            "Approximation with candidate sampling (input words: {}, candidates: {} -> {})",
            n_words, n_candidates, n_candidates2
        );
        return SamplePlan {
            strategy: SampleStrategy::Answers,
            input_words: input_words.to_vec(),
            answer_words: sample_words(answer_words, n_candidates2, rng),
        };
    }

    let n_words2 = word_pair_limit / samplesize;
    let sampled_inputs = sample_words(input_words, n_words2, rng);
    if samplesize == n_candidates {
        debug!(
            "Approximation with input word sampling (input words: {} -> {}, candidates: {})",
            n_words, n_words2, n_candidates
        );
        SamplePlan {
            strategy: SampleStrategy::Inputs,
            input_words: sampled_inputs,
            answer_words: answer_words.to_vec(),
        }
    } else {
        debug!(
            "Approximation with input word and candidate sampling \
             (input words: {} -> {}, candidates: {} -> {})",
            n_words, n_words2, n_candidates, samplesize
        );
        SamplePlan {
            strategy: SampleStrategy::InputsAndAnswers,
            input_words: sampled_inputs,
            answer_words: sample_words(answer_words, samplesize, rng),
        }
    }
}

/// Uniformly samples `amount` words without replacement, keeping their relative order.
fn sample_words<R: Rng + ?Sized>(words: &[Arc<str>], amount: usize, rng: &mut R) -> Vec<Arc<str>> {
    if amount >= words.len() {
        return words.to_vec();
    }
    let mut indices = index::sample(rng, words.len(), amount).into_vec();
    indices.sort_unstable();
    indices.into_iter().map(|i| Arc::clone(&words[i])).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn words(n: usize) -> Vec<Arc<str>> {
        (0..n).map(|i| Arc::from(format!("w{:03}", i))).collect()
    }

    #[test]
    fn full_when_within_limit() {
        let all = words(10);
        let mut rng = StdRng::seed_from_u64(1);

        let plan = plan_sample(&all, &all, 100, 5, &mut rng);

        assert_eq!(plan.strategy, SampleStrategy::Full);
        assert_eq!(plan.input_words, all);
        assert_eq!(plan.answer_words, all);
    }

    #[test]
    fn samples_answers_only() {
        let all = words(10);
        let mut rng = StdRng::seed_from_u64(1);

        let plan = plan_sample(&all, &all, 60, 5, &mut rng);

        assert_eq!(plan.strategy, SampleStrategy::Answers);
        assert_eq!(plan.input_words.len(), 10);
        assert_eq!(plan.answer_words.len(), 6);
        assert!(plan.num_pairs() <= 60);
    }

    #[test]
    fn samples_inputs_and_answers() {
        let all = words(10);
        let mut rng = StdRng::seed_from_u64(1);

        let plan = plan_sample(&all, &all, 9, 3, &mut rng);

        assert_eq!(plan.strategy, SampleStrategy::InputsAndAnswers);
        assert_eq!(plan.input_words.len(), 3);
        assert_eq!(plan.answer_words.len(), 3);
    }

    #[test]
    fn samples_inputs_only_when_answers_are_small() {
        let all = words(10);
        let answers = words(4);
        let mut rng = StdRng::seed_from_u64(1);

        let plan = plan_sample(&all, &answers, 30, 8, &mut rng);

        assert_eq!(plan.strategy, SampleStrategy::Inputs);
        assert_eq!(plan.input_words.len(), 7);
        assert_eq!(plan.answer_words, answers);
    }

    #[test]
    fn sample_is_unique_and_ordered() {
        let all = words(50);
        let mut rng = StdRng::seed_from_u64(3);

        let sample = sample_words(&all, 20, &mut rng);

        let unique: HashSet<&Arc<str>> = sample.iter().collect();
        assert_eq!(unique.len(), 20);
        assert!(sample.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
