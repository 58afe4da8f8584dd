#[cfg(test)]
mod tests {

    use std::error::Error;

    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use ron;
    use rs_wordle_approx::*;

    #[test]
    fn evaluator_config_serde() -> Result<(), Box<dyn Error>> {
        let config = EvaluatorConfig::default()
            .with_word_pair_limit(10_000)
            .with_decision_metric(Criterion::MaxN)
            .with_seed(9);

        let ser = ron::to_string(&config)?;
        let deser = ron::from_str::<EvaluatorConfig>(&ser)?;

        assert_eq!(deser, config);
        Ok(())
    }

    #[test]
    fn word_evaluations_serde() -> Result<(), Box<dyn Error>> {
        let vocabulary = Vocabulary::new(vec!["abcde", "abcdf", "xyzzy"])?;
        let evaluator = ApproxEvaluator::new(vocabulary, EvaluatorConfig::default())?;
        let evaluations =
            evaluator.evaluate(3, Criterion::MeanEntropy, None, &mut StdRng::seed_from_u64(0))?;

        let ser = ron::to_string(&evaluations)?;
        let deser = ron::from_str::<Vec<WordEvaluation>>(&ser)?;

        assert_eq!(deser, evaluations);
        Ok(())
    }
}
