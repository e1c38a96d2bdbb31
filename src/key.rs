use std::collections::{HashMap, VecDeque};

/// Positions of every previous occurrence of a key, oldest first.
pub(crate) type KeyIndexMap<K> = HashMap<K, VecDeque<usize>>;

/// Identity keys produced by a `track_by` function.
#[doc(hidden)]
pub trait TrackKey: core::hash::Hash + Eq + Clone {}
impl<K: core::hash::Hash + Eq + Clone> TrackKey for K {}
