//! # beliefnet-inference
//!
//! Exact inference over binary Bayesian belief networks. A [`Network`] is
//! built once from [`NodeSpec`]s, then answers [`Network::classify`] queries:
//! given partial evidence, is the target variable more probably true or false?
//!
//! ```rust
//! use beliefnet_core::{Evidence, Truth};
//! use beliefnet_inference::{Network, NodeSpec};
//!
//! let network = Network::builder("rain")
//!     .node(NodeSpec::root("cloudy", 0.5))
//!     .node(NodeSpec::new("rain", ["cloudy"]).entry("t", 0.8).entry("f", 0.1))
//!     .node(NodeSpec::new("wet", ["rain"]).entry("t", 0.9).entry("f", 0.2))
//!     .build()
//!     .unwrap();
//!
//! let query = Evidence::new().with("cloudy", Truth::True).with("wet", Truth::True);
//! assert!(network.classify(&query).unwrap());
//! ```

pub mod assignment;
pub mod classify;
pub mod cpt;
pub mod enumeration;
pub mod joint;
pub mod network;
pub mod node;
pub mod spec;

pub use assignment::{Assignment, NodeIndex};
pub use classify::{ClassScores, EvidencePath};
pub use cpt::Cpt;
pub use enumeration::{Bindings, CompletionIter, Completions};
pub use joint::JointEvaluator;
pub use network::{Network, NetworkBuilder};
pub use node::Node;
pub use spec::{NetworkSpec, NodeSpec};
