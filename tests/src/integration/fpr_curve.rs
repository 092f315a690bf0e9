//! # False-Positive Curve Tests
//!
//! Drives `FprEvaluator` end to end with seeded and random key sources and
//! checks the measured curve against the analytical estimate.

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use bloom_probe::{
        BloomFilter, EvaluatorConfig, FprCurve, FprEvaluator, FprEvaluatorApi, JsonLinesReporter,
        KeyGenerator, SeededKeyGenerator, TracingReporter, UuidKeyGenerator,
    };

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    const SEEDS: [u64; 5] = [1, 2, 3, 4, 5];

    fn seeded_curve(config: &EvaluatorConfig, seed: u64) -> FprCurve {
        let mut evaluator = FprEvaluator::new(
            config.clone(),
            SeededKeyGenerator::new(seed),
            TracingReporter,
        )
        .expect("Valid evaluator");
        evaluator.run().expect("Run should succeed")
    }

    /// Rate at each fill level averaged over `SEEDS`
    fn averaged_rates(config: &EvaluatorConfig) -> Vec<f64> {
        let curves: Vec<FprCurve> = SEEDS.iter().map(|&s| seeded_curve(config, s)).collect();
        (0..config.fill_levels())
            .map(|level| curves.iter().map(|c| c[level].rate).sum::<f64>() / curves.len() as f64)
            .collect()
    }

    fn mean(values: &[f64]) -> f64 {
        values.iter().sum::<f64>() / values.len() as f64
    }

    // =============================================================================
    // CURVE SHAPE
    // =============================================================================

    #[test]
    fn test_rate_grows_with_fill_on_average() {
        let config = EvaluatorConfig::new(100, 3, 400).unwrap();
        let rates = averaged_rates(&config);

        let deciles: Vec<f64> = rates.chunks(20).map(mean).collect();
        assert_eq!(deciles.len(), 10);

        for pair in deciles.windows(2) {
            assert!(
                pair[1] >= pair[0] - 0.02,
                "Decile mean dropped: {:.4} -> {:.4}",
                pair[0],
                pair[1]
            );
        }
        assert!(
            deciles[9] > deciles[0] + 0.3,
            "Full filter should be far noisier than an empty one: {:?}",
            deciles
        );
    }

    #[test]
    fn test_measured_rate_tracks_expected_rate() {
        let config = EvaluatorConfig::new(100, 3, 400).unwrap();
        let rates = averaged_rates(&config);

        let measured = mean(&rates[150..200]);
        let expected: Vec<f64> = (150..200)
            .map(|n| bloom_probe::domain::expected_fpr(100, 3, n))
            .collect();
        let expected = mean(&expected);

        assert!(
            (measured - expected).abs() < 0.1,
            "Measured {:.4} too far from expected {:.4}",
            measured,
            expected
        );
    }

    #[test]
    fn test_flagged_keys_stay_flagged_as_filter_fills() {
        let mut generator = SeededKeyGenerator::new(77);
        let dataset: Vec<String> = (0..300).map(|_| generator.next_key()).collect();
        let mut filter = BloomFilter::new(60, 3).unwrap();
        let mut previous: BTreeSet<usize> = BTreeSet::new();

        for pos in 0..dataset.len() / 2 {
            for key in &dataset[..pos] {
                filter.add(key.as_bytes());
            }
            let flagged: BTreeSet<usize> = (pos..dataset.len())
                .filter(|&i| filter.exists(dataset[i].as_bytes()))
                .collect();

            // Set slots only grow with the prefix, so a false positive that is
            // still probed must remain one
            for i in previous.iter().filter(|&&i| i >= pos) {
                assert!(flagged.contains(i), "Key {} unflagged at fill {}", i, pos);
            }

            previous = flagged;
            filter.reset();
        }
    }

    // =============================================================================
    // END TO END
    // =============================================================================

    #[test]
    fn test_default_configuration_with_random_keys() {
        let config = EvaluatorConfig::default();
        let mut evaluator =
            FprEvaluator::new(config, UuidKeyGenerator::new(), TracingReporter).unwrap();

        let curve = evaluator.run().unwrap();

        assert_eq!(curve.len(), 500);
        assert_eq!(curve[0].rate, 0.0, "Nothing added, nothing matches");
        assert_eq!(curve[499].probes, 501);
        assert!(
            curve[499].rate < 0.05,
            "Expected ~1% at half fill, got {}",
            curve[499].rate
        );
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let config = EvaluatorConfig::new(80, 4, 120).unwrap();

        let run = |seed: u64| {
            let reporter = JsonLinesReporter::new(Vec::new());
            let mut evaluator =
                FprEvaluator::new(config.clone(), SeededKeyGenerator::new(seed), reporter)
                    .unwrap();
            let curve = evaluator.run().unwrap();
            (curve, evaluator.into_reporter().into_inner())
        };

        let (curve_a, output_a) = run(2024);
        let (curve_b, output_b) = run(2024);

        assert_eq!(curve_a, curve_b);
        assert_eq!(output_a, output_b, "Reporter output must match byte for byte");
        assert_eq!(output_a.iter().filter(|&&b| b == b'\n').count(), 60);
    }

    #[test]
    fn test_unique_keys_run_succeeds_with_uuid_source() {
        let config = EvaluatorConfig::new(50, 2, 100)
            .unwrap()
            .with_unique_keys(true);
        let mut evaluator =
            FprEvaluator::new(config, UuidKeyGenerator::new(), TracingReporter).unwrap();

        let dataset = evaluator.generate_dataset().unwrap();
        let distinct: BTreeSet<&String> = dataset.iter().collect();
        assert_eq!(distinct.len(), 100);

        let curve = evaluator.run_with_dataset(&dataset).unwrap();
        assert_eq!(curve.len(), 50);
    }
}
