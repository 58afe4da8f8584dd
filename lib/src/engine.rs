use crate::config::EvaluatorConfig;
use crate::data::Vocabulary;
use crate::results::judge;
use crate::results::Pattern;
use crate::results::WordleError;
use crate::sampler::plan_sample;
use crate::scorers::*;
use log::debug;
use log::warn;
use rand::distributions::Distribution;
use rand::distributions::WeightedIndex;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;
use std::collections::HashSet;
use std::result::Result;
use std::sync::Arc;

/// Ranks guesses by how they split the possible answers, sampling words when the full
/// computation would exceed [`EvaluatorConfig::word_pair_limit`].
#[derive(Debug, Clone)]
pub struct ApproxEvaluator {
    vocabulary: Vocabulary,
    config: EvaluatorConfig,
}

impl ApproxEvaluator {
    /// Constructs an evaluator, failing if the config is invalid.
    pub fn new(vocabulary: Vocabulary, config: EvaluatorConfig) -> Result<Self, WordleError> {
        config.validate()?;
        Ok(ApproxEvaluator { vocabulary, config })
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// Evaluates the words in the vocabulary and returns the best `top_k` by `criterion`.
    ///
    /// `candidates` restricts the possible answers, e.g. to the words still consistent with
    /// previous feedback. Words outside the vocabulary are ignored. When `None`, every word is a
    /// possible answer.
    ///
    /// If sampling leaves fewer than `top_k` evaluated words, the result is padded with other
    /// vocabulary words given the worst possible scores, so the result has
    /// `min(top_k, vocabulary.len())` entries.
    ///
    /// ```
    /// use rand::rngs::StdRng;
    /// use rand::SeedableRng;
    /// use rs_wordle_approx::*;
    ///
    /// let vocabulary = Vocabulary::new(vec!["abcde", "abcdf", "xyzzy"]).unwrap();
    /// let evaluator = ApproxEvaluator::new(vocabulary, EvaluatorConfig::default()).unwrap();
    /// let mut rng = StdRng::seed_from_u64(0);
    ///
    /// let top = evaluator.evaluate(2, Criterion::MaxN, None, &mut rng).unwrap();
    ///
    /// assert_eq!(top.len(), 2);
    /// assert_eq!(top[0].max_n, 1);
    /// assert_eq!(top[1].max_n, 1);
    /// ```
    pub fn evaluate<R: Rng + ?Sized>(
        &self,
        top_k: usize,
        criterion: Criterion,
        candidates: Option<&[Arc<str>]>,
        rng: &mut R,
    ) -> Result<Vec<WordEvaluation>, WordleError> {
        let all_words = self.vocabulary.words();
        let answer_words: Vec<Arc<str>> = match candidates {
            Some(subset) => self.vocabulary.candidates(subset),
            None => all_words.to_vec(),
        };
        let n_candidates = answer_words.len();
        if n_candidates == 0 {
            warn!("No candidate words remain, nothing to evaluate");
            return Ok(Vec::new());
        }
        let candidate_set: Option<HashSet<Arc<str>>> =
            candidates.map(|_| answer_words.iter().map(Arc::clone).collect());

        let plan = plan_sample(
            all_words,
            &answer_words,
            self.config.word_pair_limit,
            self.config.candidate_samplesize,
            rng,
        );
        let mut evaluations = evaluate_words(
            &plan.input_words,
            &plan.answer_words,
            candidate_set.as_ref(),
        )?;
        pad_evaluations(
            &mut evaluations,
            all_words,
            top_k,
            n_candidates,
            candidate_set.as_ref(),
        );
        rank(&mut evaluations, criterion, top_k);
        Ok(evaluations)
    }
}

/// Tracks the possible answers over the course of one game, and picks guesses from them.
pub struct Session {
    evaluator: ApproxEvaluator,
    candidates: Vec<Arc<str>>,
    history: Vec<(Arc<str>, Pattern)>,
    rng: StdRng,
}

impl Session {
    /// Starts a session where every vocabulary word may be the answer.
    ///
    /// The random number generator is seeded from [`EvaluatorConfig::seed`] if set.
    pub fn new(evaluator: ApproxEvaluator) -> Session {
        let rng = evaluator
            .config
            .seed
            .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
        Session {
            candidates: evaluator.vocabulary.words().to_vec(),
            evaluator,
            history: Vec::new(),
            rng,
        }
    }

    pub fn evaluator(&self) -> &ApproxEvaluator {
        &self.evaluator
    }

    /// The words that may still be the answer, in vocabulary order.
    pub fn candidates(&self) -> &[Arc<str>] {
        &self.candidates
    }

    /// The guesses and their feedback so far.
    pub fn history(&self) -> &[(Arc<str>, Pattern)] {
        &self.history
    }

    /// Makes every vocabulary word a candidate again and forgets the history.
    pub fn reset(&mut self) {
        self.candidates = self.evaluator.vocabulary.words().to_vec();
        self.history.clear();
    }

    /// Replaces the candidates with the vocabulary words in `words`.
    pub fn set_candidates<S: AsRef<str>>(&mut self, words: &[S]) -> Result<(), WordleError> {
        let candidates = self.evaluator.vocabulary.candidates(words);
        if candidates.is_empty() {
            return Err(WordleError::NotFound);
        }
        self.candidates = candidates;
        Ok(())
    }

    /// Narrows the candidates to the words that would give `result` for the guess `word`.
    ///
    /// `result` is one digit per letter: `0` not present, `1` present elsewhere, `2` correct.
    pub fn update(&mut self, word: &str, result: &str) -> Result<(), WordleError> {
        let word_length = self.evaluator.vocabulary.word_length();
        let pattern: Pattern = result.parse()?;
        if pattern.len() != word_length || word.chars().count() != word_length {
            return Err(WordleError::WordLength(word_length));
        }
        let mut remaining = Vec::with_capacity(self.candidates.len());
        for candidate in &self.candidates {
            if judge(word, candidate)? == pattern {
                remaining.push(Arc::clone(candidate));
            }
        }
        debug!(
            "'{}' with result {} leaves {} of {} candidates",
            word,
            pattern,
            remaining.len(),
            self.candidates.len()
        );
        self.candidates = remaining;
        self.history.push((Arc::from(word), pattern));
        Ok(())
    }

    /// Evaluates guesses against the current candidates.
    pub fn evaluate(
        &mut self,
        top_k: usize,
        criterion: Criterion,
    ) -> Result<Vec<WordEvaluation>, WordleError> {
        self.evaluator
            .evaluate(top_k, criterion, Some(self.candidates.as_slice()), &mut self.rng)
    }

    /// Picks the next word to guess.
    ///
    /// Each word is scored by the configured decision metric, minus the candidate weight if the
    /// word may be the answer. A word is then drawn with probability proportional to
    /// `exp(-(score - best) / noise)`, where the noise shrinks as the strength grows.
    pub fn pick_word(&mut self) -> Result<Arc<str>, WordleError> {
        match self.candidates.len() {
            0 => return Err(WordleError::NotFound),
            1 => return Ok(Arc::clone(&self.candidates[0])),
            _ => {}
        }
        let config = self.evaluator.config.clone();
        let num_words = self.evaluator.vocabulary.len();
        let evaluations = self.evaluate(num_words, config.decision_metric)?;
        let scores: Vec<f64> = evaluations
            .iter()
            .map(|evaluation| {
                let bonus = if evaluation.is_candidate {
                    config.candidate_weight
                } else {
                    0.0
                };
                evaluation.score(config.decision_metric) - bonus
            })
            .collect();
        let best = scores.iter().copied().fold(f64::INFINITY, f64::min);
        let noise = config.decision_noise();
        let weights: Vec<f64> = scores
            .iter()
            .map(|score| (-(score - best) / noise).exp())
            .collect();
        let distribution = WeightedIndex::new(&weights).map_err(|e| {
            WordleError::InvalidConfig(format!("cannot weight words for picking: {}", e))
        })?;
        let index = distribution.sample(&mut self.rng);
        evaluations
            .get(index)
            .map(|evaluation| Arc::clone(&evaluation.word))
            .ok_or(WordleError::NotFound)
    }
}
