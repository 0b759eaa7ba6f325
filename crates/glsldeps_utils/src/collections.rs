use std::hash::BuildHasherDefault;

use indexmap::IndexMap;
use rustc_hash::FxHasher;

pub use rustc_hash::FxHashMap;

/// Insertion-ordered map, used wherever the order entries were discovered in is observable.
pub type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;
