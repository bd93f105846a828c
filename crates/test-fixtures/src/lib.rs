//! Test fixture loader for beliefnet networks and classification cases.
//!
//! Provides typed deserialization of the fixture JSON files and builder-based
//! reference networks for tests and benches across crates.

use std::path::PathBuf;

use beliefnet_core::Evidence;
use beliefnet_inference::{Network, NetworkSpec, NodeSpec};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Root directory of the fixture files.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("networks")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// One expected classification from a cases file.
#[derive(Debug, Clone, Deserialize)]
pub struct ClassificationCase {
    pub name: String,
    pub evidence: Evidence,
    pub true_score: f64,
    pub false_score: f64,
    pub completions: u64,
    pub expected: bool,
}

/// The heart-disease network as a spec, loaded from JSON.
pub fn heart_disease_spec() -> NetworkSpec {
    load_fixture("heart_disease.json")
}

/// Expected results for the heart-disease network.
pub fn heart_disease_cases() -> Vec<ClassificationCase> {
    load_fixture("heart_disease_cases.json")
}

/// The heart-disease network, built in code.
///
/// Exercise (`e`) and diet (`d`) are roots; heart disease (`hd`) depends on
/// both; chest pain (`cp`) and blood pressure (`bp`) depend on `hd`.
pub fn heart_disease() -> Network {
    Network::builder("hd")
        .nodes(heart_disease_nodes())
        .build()
        .expect("heart disease fixture is well formed")
}

pub fn heart_disease_nodes() -> Vec<NodeSpec> {
    vec![
        NodeSpec::root("e", 0.7),
        NodeSpec::root("d", 0.25),
        NodeSpec::new("hd", ["e", "d"])
            .entry("tt", 0.25)
            .entry("tf", 0.45)
            .entry("ft", 0.55)
            .entry("ff", 0.75),
        NodeSpec::new("cp", ["hd"]).entry("t", 0.8).entry("f", 0.01),
        NodeSpec::new("bp", ["hd"]).entry("t", 0.85).entry("f", 0.2),
    ]
}

/// A naive-Bayes shaped network: root target `class` with `features`
/// children `x0..`, each with its own likelihoods.
pub fn naive_bayes_nodes(features: usize) -> Vec<NodeSpec> {
    let mut nodes = vec![NodeSpec::root("class", 0.3)];
    for i in 0..features {
        let step = (i % 10) as f64 / 20.0;
        nodes.push(
            NodeSpec::new(format!("x{i}"), ["class"])
                .entry("t", 0.9 - step)
                .entry("f", 0.1 + step),
        );
    }
    nodes
}

pub fn naive_bayes(features: usize) -> Network {
    Network::builder("class")
        .nodes(naive_bayes_nodes(features))
        .build()
        .expect("naive bayes fixture is well formed")
}
