//! Re-exports of performance-oriented collection types.

pub use rustc_hash::FxHashMap;
pub use smallvec::SmallVec;

/// SmallVec for parent lists and parent values (usually <4).
pub type SmallVec4<T> = SmallVec<[T; 4]>;

/// SmallVec for full assignments of small networks (usually <16 variables).
pub type SmallVec16<T> = SmallVec<[T; 16]>;
