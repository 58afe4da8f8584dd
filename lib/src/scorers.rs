use crate::results::judge;
use crate::results::Pattern;
use crate::results::WordleError;
use rayon::prelude::*;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which statistic of a [`WordEvaluation`] to rank guesses by. Lower is always better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Criterion {
    /// The size of the largest bucket, i.e. the worst case number of remaining answers.
    MaxN,
    /// The expected number of remaining answers.
    MeanN,
    /// The expected log2 size of the remaining answers.
    MeanEntropy,
}

impl Criterion {
    pub const ALL: [Criterion; 3] = [Criterion::MaxN, Criterion::MeanN, Criterion::MeanEntropy];

    pub fn as_str(&self) -> &'static str {
        match self {
            Criterion::MaxN => "max_n",
            Criterion::MeanN => "mean_n",
            Criterion::MeanEntropy => "mean_entropy",
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Criterion {
    type Err = WordleError;

    fn from_str(s: &str) -> Result<Criterion, WordleError> {
        Criterion::ALL
            .into_iter()
            .find(|criterion| criterion.as_str() == s)
            .ok_or_else(|| {
                WordleError::InvalidConfig(format!(
                    "unknown criterion '{}', expected max_n, mean_n or mean_entropy",
                    s
                ))
            })
    }
}

/// Aggregated statistics for a single guess.
///
/// Each answer word falls into the bucket of the pattern it would produce for this guess.
/// With bucket sizes `n_i`:
///
/// * `max_n` is `max(n_i)`.
/// * `mean_n` is `Σ n_i² / Σ n_i`, the expected bucket size when every answer is equally likely.
/// * `mean_entropy` is `Σ n_i·log2(n_i) / Σ n_i`, the expected log2 size of the remaining answers.
///   This is not the Shannon entropy of the bucket distribution, but it ranks guesses the same
///   way, since the Shannon entropy equals `log2(Σ n_i) - mean_entropy`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WordEvaluation {
    pub word: Arc<str>,
    pub max_n: usize,
    pub mean_n: f64,
    pub mean_entropy: f64,
    /// Whether this word may still be the answer.
    pub is_candidate: bool,
}

impl WordEvaluation {
    /// The worst possible evaluation against `n_candidates` answers. Used for words that were not
    /// evaluated.
    pub fn worst(word: Arc<str>, n_candidates: usize, is_candidate: bool) -> WordEvaluation {
        WordEvaluation {
            word,
            max_n: n_candidates,
            mean_n: n_candidates as f64,
            mean_entropy: (n_candidates as f64).log2(),
            is_candidate,
        }
    }

    /// Returns the value of the given statistic.
    pub fn score(&self, criterion: Criterion) -> f64 {
        match criterion {
            Criterion::MaxN => self.max_n as f64,
            Criterion::MeanN => self.mean_n,
            Criterion::MeanEntropy => self.mean_entropy,
        }
    }
}

/// Counts how many answers produce each pattern for the given guess.
pub fn bucket_sizes(
    guess: &str,
    answer_words: &[Arc<str>],
) -> Result<HashMap<Pattern, usize>, WordleError> {
    let mut buckets: HashMap<Pattern, usize> = HashMap::new();
    for answer in answer_words {
        *buckets.entry(judge(guess, answer)?).or_insert(0) += 1;
    }
    Ok(buckets)
}

/// Computes the statistics for `guess` against every answer word.
///
/// `answer_words` must not be empty.
pub fn evaluate_word(
    guess: &Arc<str>,
    answer_words: &[Arc<str>],
    is_candidate: bool,
) -> Result<WordEvaluation, WordleError> {
    let buckets = bucket_sizes(guess, answer_words)?;
    let mut max_n = 0;
    let mut sum_n = 0.0;
    let mut sum_n_squared = 0.0;
    let mut sum_n_log_n = 0.0;
    for n in buckets.into_values() {
        max_n = max_n.max(n);
        let n = n as f64;
        sum_n += n;
        sum_n_squared += n * n;
        sum_n_log_n += n * n.log2();
    }
    Ok(WordEvaluation {
        word: Arc::clone(guess),
        max_n,
        mean_n: sum_n_squared / sum_n,
        mean_entropy: sum_n_log_n / sum_n,
        is_candidate,
    })
}

/// Evaluates every input word against the answer words, in parallel.
///
/// The output keeps the order of `input_words`. `candidates` of `None` marks every word as a
/// candidate.
pub fn evaluate_words(
    input_words: &[Arc<str>],
    answer_words: &[Arc<str>],
    candidates: Option<&HashSet<Arc<str>>>,
) -> Result<Vec<WordEvaluation>, WordleError> {
    input_words
        .par_iter()
        .map(|word| {
            let is_candidate = candidates.map_or(true, |set| set.contains(word));
            evaluate_word(word, answer_words, is_candidate)
        })
        .collect()
}

/// Appends worst-case evaluations for words in `all_words` that have not been evaluated, until
/// there are at least `top_k` evaluations or no words are left.
pub fn pad_evaluations(
    evaluations: &mut Vec<WordEvaluation>,
    all_words: &[Arc<str>],
    top_k: usize,
    n_candidates: usize,
    candidates: Option<&HashSet<Arc<str>>>,
) {
    if evaluations.len() >= top_k {
        return;
    }
    let evaluated: HashSet<Arc<str>> = evaluations
        .iter()
        .map(|evaluation| Arc::clone(&evaluation.word))
        .collect();
    for word in all_words {
        if evaluations.len() >= top_k {
            break;
        }
        if evaluated.contains(word) {
            continue;
        }
        let is_candidate = candidates.map_or(true, |set| set.contains(word));
        evaluations.push(WordEvaluation::worst(
            Arc::clone(word),
            n_candidates,
            is_candidate,
        ));
    }
}

/// Sorts by the given criterion, lowest first, preferring candidates on ties, and keeps the best
/// `top_k`.
pub fn rank(evaluations: &mut Vec<WordEvaluation>, criterion: Criterion, top_k: usize) {
    evaluations.sort_by(|a, b| compare(a, b, criterion));
    evaluations.truncate(top_k);
}

fn compare(a: &WordEvaluation, b: &WordEvaluation, criterion: Criterion) -> Ordering {
    a.score(criterion)
        .total_cmp(&b.score(criterion))
        .then_with(|| b.is_candidate.cmp(&a.is_candidate))
}
