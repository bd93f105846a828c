//! End-to-end classification tests against the heart-disease network.

use beliefnet_core::config::InferenceConfig;
use beliefnet_core::errors::{BeliefErrorCode, InferenceError};
use beliefnet_core::{Evidence, Truth};
use beliefnet_inference::{EvidencePath, Network};
use test_fixtures::{heart_disease, heart_disease_cases, heart_disease_nodes, heart_disease_spec};

fn evidence(pairs: &[(&str, &str)]) -> Evidence {
    Evidence::from_symbols(pairs.iter().copied()).unwrap()
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

// =============================================================================
// Full evidence
// =============================================================================
#[test]
fn full_evidence_scores_both_target_values() {
    let network = heart_disease();
    let query = evidence(&[("e", "f"), ("d", "t"), ("cp", "t"), ("bp", "t")]);

    let scores = network.scores(&query).unwrap();
    assert_close(scores.true_score, 0.55 * 0.8 * 0.85);
    assert_close(scores.false_score, 0.45 * 0.01 * 0.2);
    assert_eq!(scores.completions, 1);
    assert_eq!(scores.path, EvidencePath::FullEvidence);
    assert!(network.classify(&query).unwrap());
    assert_eq!(scores.to_string(), "hd: True");
}

#[test]
fn full_evidence_can_pick_false() {
    let network = heart_disease();
    let query = evidence(&[("e", "t"), ("d", "f"), ("cp", "f"), ("bp", "f")]);
    let scores = network.scores(&query).unwrap();
    assert!(!scores.target_is_true());
    assert_eq!(scores.predicted(), Truth::False);
    assert_eq!(scores.to_string(), "hd: False");
}

// =============================================================================
// Partial evidence
// =============================================================================
#[test]
fn hidden_diet_is_summed_over_both_values() {
    let network = heart_disease();
    let query = evidence(&[("e", "f"), ("cp", "t"), ("bp", "t")]);

    let scores = network.scores(&query).unwrap();
    assert_eq!(scores.completions, 2);
    assert_eq!(scores.path, EvidencePath::PartialEvidence);
    assert_close(scores.true_score, 0.55 * 0.8 * 0.85 + 0.75 * 0.8 * 0.85);
    assert_close(scores.false_score, 0.45 * 0.01 * 0.2 + 0.25 * 0.01 * 0.2);
    assert!(network.classify(&query).unwrap());
}

#[test]
fn completions_double_per_hidden_variable() {
    let network = heart_disease();
    let cases = [
        (evidence(&[("e", "t"), ("d", "t"), ("cp", "t"), ("bp", "t")]), 1),
        (evidence(&[("e", "t"), ("d", "t"), ("cp", "t")]), 2),
        (evidence(&[("e", "t"), ("cp", "t")]), 4),
        (evidence(&[("cp", "t")]), 8),
    ];
    for (query, expected) in cases {
        assert_eq!(network.scores(&query).unwrap().completions, expected);
    }
}

#[test]
fn fixture_cases_match_expected_scores() {
    let network = heart_disease();
    for case in heart_disease_cases() {
        let scores = network.scores(&case.evidence).unwrap();
        assert!(
            (scores.true_score - case.true_score).abs() < 1e-9,
            "{}: true score {}",
            case.name,
            scores.true_score
        );
        assert!(
            (scores.false_score - case.false_score).abs() < 1e-9,
            "{}: false score {}",
            case.name,
            scores.false_score
        );
        assert_eq!(scores.completions, case.completions, "{}", case.name);
        assert_eq!(scores.target_is_true(), case.expected, "{}", case.name);
    }
}

#[test]
fn json_spec_and_builder_agree() {
    let from_json = heart_disease_spec().build().unwrap();
    let from_code = heart_disease();
    for case in heart_disease_cases() {
        assert_eq!(
            from_json.scores(&case.evidence).unwrap(),
            from_code.scores(&case.evidence).unwrap(),
            "{}",
            case.name
        );
    }
}

// =============================================================================
// Errors
// =============================================================================
#[test]
fn empty_query_is_rejected() {
    let network = heart_disease();
    let err = network.classify(&Evidence::new()).unwrap_err();
    assert_eq!(err, InferenceError::EmptyQuery);
    assert_eq!(err.error_code(), "EMPTY_QUERY");
}

#[test]
fn unknown_variable_is_rejected() {
    let network = heart_disease();
    let err = network
        .classify(&evidence(&[("Z", "t")]))
        .unwrap_err();
    assert_eq!(err, InferenceError::UnknownVariable { label: "Z".into() });
    assert!(err.coded_string().starts_with("[UNKNOWN_VARIABLE]"));
}

#[test]
fn network_is_reusable_after_a_failed_call() {
    let network = heart_disease();
    assert!(network.classify(&Evidence::new()).is_err());
    let query = evidence(&[("e", "f"), ("d", "t"), ("cp", "t"), ("bp", "t")]);
    assert!(network.classify(&query).unwrap());
}

#[test]
fn target_binding_in_query_is_ignored() {
    let network = heart_disease();
    let with_target = evidence(&[("e", "f"), ("d", "t"), ("cp", "t"), ("bp", "t"), ("hd", "f")]);
    let without = evidence(&[("e", "f"), ("d", "t"), ("cp", "t"), ("bp", "t")]);
    assert_eq!(
        network.scores(&with_target).unwrap(),
        network.scores(&without).unwrap()
    );
}

#[test]
fn query_of_only_the_target_enumerates_everything_else() {
    let network = heart_disease();
    let scores = network.scores(&evidence(&[("hd", "t")])).unwrap();
    assert_eq!(scores.completions, 16);
}

// =============================================================================
// Configured limits
// =============================================================================
#[test]
fn configured_hidden_cap_fails_fast() {
    let network = Network::builder("hd")
        .nodes(heart_disease_nodes())
        .config(InferenceConfig {
            max_hidden_variables: Some(2),
            ..Default::default()
        })
        .build()
        .unwrap();

    let err = network.classify(&evidence(&[("cp", "t")])).unwrap_err();
    assert_eq!(
        err,
        InferenceError::TooManyHiddenVariables { count: 3, max: 2 }
    );
    assert_eq!(err.error_code(), "TOO_MANY_HIDDEN_VARIABLES");

    let scores = network
        .scores(&evidence(&[("cp", "t"), ("e", "t")]))
        .unwrap();
    assert_eq!(scores.completions, 4);
}

#[test]
fn json_spec_built_with_config_applies_it() {
    let config = InferenceConfig {
        max_hidden_variables: Some(1),
        parallel: Some(true),
        parallel_min_hidden: Some(1),
        ..Default::default()
    };
    let network = heart_disease_spec().build_with(config.clone()).unwrap();
    assert_eq!(network.config(), &config);
    assert!(network.config().use_parallel(1));

    let err = network
        .scores(&evidence(&[("e", "f"), ("cp", "t")]))
        .unwrap_err();
    assert_eq!(
        err,
        InferenceError::TooManyHiddenVariables { count: 2, max: 1 }
    );

    // One hidden variable is within the cap and takes the parallel path.
    let query = evidence(&[("e", "f"), ("cp", "t"), ("bp", "t")]);
    let scores = network.scores(&query).unwrap();
    let sequential = heart_disease().scores(&query).unwrap();
    assert_eq!(scores.completions, 2);
    assert_close(scores.true_score, sequential.true_score);
    assert_close(scores.false_score, sequential.false_score);
}

// =============================================================================
// Batch
// =============================================================================
#[test]
fn batch_keeps_input_order() {
    let network = heart_disease();
    let queries = vec![
        evidence(&[("e", "f"), ("d", "t"), ("cp", "t"), ("bp", "t")]),
        Evidence::new(),
        evidence(&[("e", "t"), ("d", "f"), ("cp", "f"), ("bp", "f")]),
    ];
    let results = network.classify_batch(&queries);
    assert_eq!(results.len(), 3);
    assert_eq!(results[0], Ok(true));
    assert_eq!(results[1], Err(InferenceError::EmptyQuery));
    assert_eq!(results[2], Ok(false));
}
