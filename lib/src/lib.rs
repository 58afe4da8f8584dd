//! Approximate evaluation of Wordle guesses.
//!
//! Every guess in a [`Vocabulary`] is scored by how it splits the possible answers into feedback
//! buckets. When scoring every guess against every answer would exceed the configured pair limit,
//! the guesses and/or answers are sampled first, so the result is an approximation.
//!
//! ```
//! use rs_wordle_approx::*;
//!
//! let vocabulary = Vocabulary::from_iterator(vec!["alpha", "allot", "begot", "below"]).unwrap();
//! let evaluator = ApproxEvaluator::new(vocabulary, EvaluatorConfig::default().with_seed(1)).unwrap();
//! let mut session = Session::new(evaluator);
//!
//! let suggestions = session.evaluate(2, Criterion::MeanEntropy).unwrap();
//! assert_eq!(suggestions.len(), 2);
//!
//! session.update("begot", "22020").unwrap();
//! assert_eq!(session.candidates().len(), 1);
//! assert_eq!(session.pick_word().unwrap().as_ref(), "below");
//! ```

mod config;
mod data;
mod engine;
mod results;
pub mod sampler;
pub mod scorers;

pub use config::EvaluatorConfig;
pub use data::Vocabulary;
pub use engine::*;
pub use results::*;
pub use scorers::Criterion;
pub use scorers::WordEvaluation;
