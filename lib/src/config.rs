use crate::results::WordleError;
use crate::scorers::Criterion;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Settings for an [`ApproxEvaluator`](crate::ApproxEvaluator) and the
/// [`Session`](crate::Session) built on top of it.
///
/// ```
/// use rs_wordle_approx::Criterion;
/// use rs_wordle_approx::EvaluatorConfig;
///
/// let config = EvaluatorConfig::default()
///     .with_word_pair_limit(10_000)
///     .with_candidate_samplesize(100)
///     .with_decision_metric(Criterion::MaxN)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EvaluatorConfig {
    /// Upper bound on `input words * answer words` computed in one evaluation. The larger, the
    /// more accurate the approximation.
    pub word_pair_limit: usize,
    /// Number of answer words to sample when the input words must be sampled too.
    pub candidate_samplesize: usize,
    /// Criterion used by [`Session::pick_word`](crate::Session::pick_word).
    pub decision_metric: Criterion,
    /// Amount subtracted from the score of words that may still be the answer when picking.
    pub candidate_weight: f64,
    /// Strength in `[0, 10]`. Values outside the range are clamped.
    pub strength: f64,
    /// Seed for the session's random number generator. Uses entropy when `None`.
    pub seed: Option<u64>,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        EvaluatorConfig {
            word_pair_limit: 500_000,
            candidate_samplesize: 500,
            decision_metric: Criterion::MeanEntropy,
            candidate_weight: 0.3,
            strength: 6.0,
            seed: None,
        }
    }
}

impl EvaluatorConfig {
    pub fn with_word_pair_limit(mut self, word_pair_limit: usize) -> Self {
        self.word_pair_limit = word_pair_limit;
        self
    }

    pub fn with_candidate_samplesize(mut self, candidate_samplesize: usize) -> Self {
        self.candidate_samplesize = candidate_samplesize;
        self
    }

    pub fn with_decision_metric(mut self, decision_metric: Criterion) -> Self {
        self.decision_metric = decision_metric;
        self
    }

    pub fn with_candidate_weight(mut self, candidate_weight: f64) -> Self {
        self.candidate_weight = candidate_weight;
        self
    }

    pub fn with_strength(mut self, strength: f64) -> Self {
        self.strength = strength;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks that the sample size is positive and smaller than the pair limit, and that the
    /// strength and candidate weight are finite.
    pub fn validate(&self) -> Result<(), WordleError> {
        if self.candidate_samplesize == 0 {
            return Err(WordleError::InvalidConfig(
                "candidate_samplesize must be positive".to_string(),
            ));
        }
        if self.word_pair_limit <= self.candidate_samplesize {
            return Err(WordleError::InvalidConfig(format!(
                "word_pair_limit ({}) must be larger than candidate_samplesize ({})",
                self.word_pair_limit, self.candidate_samplesize
            )));
        }
        if !self.strength.is_finite() {
            return Err(WordleError::InvalidConfig(format!(
                "strength must be finite, got {}",
                self.strength
            )));
        }
        if !self.candidate_weight.is_finite() {
            return Err(WordleError::InvalidConfig(format!(
                "candidate_weight must be finite, got {}",
                self.candidate_weight
            )));
        }
        Ok(())
    }

    /// The strength clamped to `[0, 10]`.
    pub fn clamped_strength(&self) -> f64 {
        self.strength.clamp(0.0, 10.0)
    }

    /// Temperature for picking words. Strength 0 gives `1e5` (close to uniform), strength 10
    /// gives `1e-5` (close to always picking the best score).
    pub fn decision_noise(&self) -> f64 {
        10f64.powf(5.0 - self.clamped_strength())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(EvaluatorConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_zero_samplesize() {
        let config = EvaluatorConfig::default().with_candidate_samplesize(0);

        assert!(matches!(
            config.validate(),
            Err(WordleError::InvalidConfig(_))
        ));
    }

    #[test]
    fn rejects_limit_not_above_samplesize() {
        let config = EvaluatorConfig::default()
            .with_word_pair_limit(100)
            .with_candidate_samplesize(100);

        assert!(matches!(
            config.validate(),
            Err(WordleError::InvalidConfig(_))
        ));
    }

    #[test]
    fn rejects_non_finite_decision_knobs() {
        for config in [
            EvaluatorConfig::default().with_strength(f64::NAN),
            EvaluatorConfig::default().with_strength(f64::INFINITY),
            EvaluatorConfig::default().with_candidate_weight(f64::INFINITY),
            EvaluatorConfig::default().with_candidate_weight(f64::NEG_INFINITY),
        ] {
            assert!(
                matches!(config.validate(), Err(WordleError::InvalidConfig(_))),
                "{:?}",
                config
            );
        }
    }

    #[test]
    fn strength_is_clamped() {
        let config = EvaluatorConfig::default().with_strength(42.0);

        assert_eq!(config.clamped_strength(), 10.0);
        assert!((config.decision_noise() - 1e-5).abs() < 1e-12);
    }
}
