//! Property tests for beliefnet-inference.

use proptest::prelude::*;

use beliefnet_core::config::InferenceConfig;
use beliefnet_core::constants::PROBABILITY_EPSILON;
use beliefnet_core::{Evidence, Truth};
use beliefnet_inference::{Completions, Network, NodeSpec};
use test_fixtures::{naive_bayes, naive_bayes_nodes};

fn truth() -> impl Strategy<Value = Truth> {
    any::<bool>().prop_map(Truth::from)
}

fn key(width: usize) -> String {
    (0..width).map(|_| 't').collect()
}

/// Naive-bayes evidence: each feature is observed with its value or hidden.
fn observations(features: usize) -> impl Strategy<Value = Vec<Option<Truth>>> {
    prop::collection::vec(prop::option::of(truth()), features)
}

fn to_evidence(observed: &[Option<Truth>]) -> Evidence {
    observed
        .iter()
        .enumerate()
        .filter_map(|(i, v)| v.map(|v| (format!("x{i}"), v)))
        .collect()
}

fn assert_relative_eq(a: f64, b: f64) -> Result<(), TestCaseError> {
    let scale = a.abs().max(b.abs()).max(1e-300);
    prop_assert!((a - b).abs() / scale < PROBABILITY_EPSILON, "{a} vs {b}");
    Ok(())
}

// =============================================================================
// Complementary probabilities
// =============================================================================
proptest! {
    #[test]
    fn true_and_false_probabilities_sum_to_one(
        p in 0.0f64..=1.0,
        parents in prop::collection::vec(truth(), 1..6),
    ) {
        let width = parents.len();
        let labels: Vec<String> = (0..width).map(|i| format!("p{i}")).collect();
        let mut builder = Network::builder("child");
        for label in &labels {
            builder = builder.node(NodeSpec::root(label.clone(), 0.5));
        }
        let symbols: String = parents.iter().map(|t| t.symbol()).collect();
        let network = builder
            .node(NodeSpec::new("child", labels).entry(symbols, p).entry(key(width), p))
            .build()
            .unwrap();

        let child = network.node("child").unwrap();
        let t = child.conditional_probability(Truth::True, &parents).unwrap();
        let f = child.conditional_probability(Truth::False, &parents).unwrap();
        prop_assert!((t + f - 1.0).abs() < PROBABILITY_EPSILON);
    }
}

// =============================================================================
// Completion space
// =============================================================================
proptest! {
    #[test]
    fn completion_count_is_two_to_the_hidden(k in 0usize..10) {
        let base = Evidence::new().with("fixed", Truth::True);
        let unknowns: Vec<String> = (0..k).map(|i| format!("u{i}")).collect();
        let completions = Completions::new(&base, &unknowns, 20).unwrap();
        prop_assert_eq!(completions.len(), 1u64 << k);
        prop_assert_eq!(completions.iter().count() as u64, 1u64 << k);
        for completion in &completions {
            prop_assert_eq!(completion.len(), k + 1);
        }
    }

    #[test]
    fn classify_reports_completions_for_hidden_features(observed in observations(8)) {
        prop_assume!(observed.iter().any(Option::is_some));
        let network = naive_bayes(8);
        let hidden = observed.iter().filter(|v| v.is_none()).count();
        let scores = network.scores(&to_evidence(&observed)).unwrap();
        prop_assert_eq!(scores.completions, 1u64 << hidden);
    }
}

// =============================================================================
// Parallel and sequential scoring agree
// =============================================================================
proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn parallel_matches_sequential(observed in observations(10)) {
        prop_assume!(observed.iter().any(Option::is_some));
        let sequential = naive_bayes(10);
        let parallel = Network::builder("class")
            .nodes(naive_bayes_nodes(10))
            .config(InferenceConfig {
                parallel: Some(true),
                parallel_min_hidden: Some(0),
                ..Default::default()
            })
            .build()
            .unwrap();

        let query = to_evidence(&observed);
        let a = sequential.scores(&query).unwrap();
        let b = parallel.scores(&query).unwrap();
        prop_assert_eq!(a.completions, b.completions);
        assert_relative_eq(a.true_score, b.true_score)?;
        assert_relative_eq(a.false_score, b.false_score)?;
    }
}

// =============================================================================
// Hidden leaves marginalize out
// =============================================================================
proptest! {
    #[test]
    fn hidden_leaf_features_do_not_change_scores(observed in observations(6)) {
        prop_assume!(observed.iter().any(Option::is_some));
        let network = naive_bayes(6);
        let scores = network.scores(&to_evidence(&observed)).unwrap();

        // Each hidden leaf sums P(t|c) + P(f|c) = 1, so only observed features count.
        let (mut t, mut f) = (1.0, 1.0);
        for (i, value) in observed.iter().enumerate() {
            if let Some(value) = value {
                let node = network.node(&format!("x{i}")).unwrap();
                t *= node.conditional_probability(*value, &[Truth::True]).unwrap();
                f *= node.conditional_probability(*value, &[Truth::False]).unwrap();
            }
        }
        assert_relative_eq(scores.true_score, t)?;
        assert_relative_eq(scores.false_score, f)?;
    }
}
