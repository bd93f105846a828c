//! Value types shared across beliefnet crates.

pub mod collections;
pub mod evidence;
pub mod parent_key;
pub mod truth;

pub use evidence::Evidence;
pub use parent_key::{ParentKey, ParseParentKeyError};
pub use truth::{ParseTruthError, Truth};
