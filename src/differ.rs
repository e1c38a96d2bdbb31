use alloc::vec::Vec;

use crate::key::{KeyIndexMap, TrackKey};

/// One step of an edit script produced by [`IterableDiffer::diff`].
///
/// Operations are meant to be applied in order to the previous sequence. Every index refers to
/// the sequence as it is *after* all earlier operations were applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DiffOperation {
    Insert { index: usize },
    Remove { index: usize },
    /// Remove the entry at `from`, then insert it at `to`. The entry keeps its identity.
    Move { from: usize, to: usize },
}

/// Keyed sequence differ.
///
/// Remembers the keys of the last sequence it saw and turns the next one into removals,
/// insertions and moves. Duplicate keys are matched in order of appearance.
#[derive(Clone, Debug)]
pub struct IterableDiffer<K> {
    previous: Vec<K>,
}

impl<K: TrackKey> IterableDiffer<K> {
    pub fn new() -> Self {
        Self {
            previous: Vec::new(),
        }
    }

    /// Keys of the last diffed sequence.
    pub fn keys(&self) -> &[K] {
        &self.previous
    }

    pub fn reset(&mut self) {
        self.previous.clear();
    }

    /// Diffs `next` against the previous sequence and remembers `next`.
    ///
    /// Removals come first, in descending index order, followed by one insert or move per
    /// target position that is not already in place, in ascending target order.
    pub fn diff(&mut self, next: Vec<K>) -> Vec<DiffOperation> {
        if next == self.previous {
            return Vec::new();
        }

        let mut positions: KeyIndexMap<K> = KeyIndexMap::with_capacity(self.previous.len());
        for (i, key) in self.previous.iter().enumerate() {
            positions.entry(key.clone()).or_default().push_back(i);
        }

        let mut kept = alloc::vec![false; self.previous.len()];
        let matched: Vec<Option<usize>> = next
            .iter()
            .map(|key| {
                let old = positions.get_mut(key).and_then(|queue| queue.pop_front());
                if let Some(old) = old {
                    kept[old] = true;
                }
                old
            })
            .collect();

        let mut ops = Vec::new();
        for (old, kept) in kept.iter().enumerate().rev() {
            if !kept {
                ops.push(DiffOperation::Remove { index: old });
            }
        }

        // Entries are identified by their previous position; `None` marks an inserted entry.
        let mut working: Vec<Option<usize>> = kept
            .iter()
            .enumerate()
            .filter_map(|(old, kept)| kept.then_some(Some(old)))
            .collect();

        for (target, old) in matched.iter().enumerate() {
            match old {
                Some(old) => {
                    let found = working[target..]
                        .iter()
                        .position(|entry| *entry == Some(*old))
                        .map(|offset| offset + target);
                    if let Some(from) = found
                        && from != target
                    {
                        let entry = working.remove(from);
                        working.insert(target, entry);
                        ops.push(DiffOperation::Move { from, to: target });
                    }
                }
                None => {
                    working.insert(target, None);
                    ops.push(DiffOperation::Insert { index: target });
                }
            }
        }

        self.previous = next;
        ops
    }
}

impl<K: TrackKey> Default for IterableDiffer<K> {
    fn default() -> Self {
        Self::new()
    }
}
