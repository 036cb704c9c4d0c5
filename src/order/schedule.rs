//! Round-based dependency ordering.
//!
//! Each round scans the still-pending items in input order and emits every item
//! whose dependencies were all emitted in earlier rounds. Keys emitted during a
//! round only unblock items from the next round on. A round that emits nothing
//! while items remain means a cycle or a dependency on a key nobody provides.
//!
//! Example, input order [C, A, B(A)]:
//! round 1 => C, A
//! round 2 => B

use std::collections::{HashSet, VecDeque};
use std::fmt;
use std::hash::Hash;
use std::iter::FusedIterator;
use tracing::{debug, trace};

/// An item the scheduler could not place, with the keys still blocking it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pending<T, K> {
    pub item: T,
    /// Blocking keys in the order the item declared them, without repeats.
    pub unresolved: Vec<K>,
}

/// Scheduling stalled: every pending item waits on a key that is never emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CyclicOrMissingDependency<T, K> {
    /// Still-pending items in input order.
    pub pending: Vec<Pending<T, K>>,
}

impl<T: fmt::Debug, K: fmt::Debug> fmt::Display for CyclicOrMissingDependency<T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("cyclic or missing dependency detected:")?;
        for p in &self.pending {
            write!(f, " {:?} waits on {:?};", p.item, p.unresolved)?;
        }
        Ok(())
    }
}

impl<T: fmt::Debug, K: fmt::Debug> std::error::Error for CyclicOrMissingDependency<T, K> {}

/// Order `items` so that every item comes after the items whose keys it depends on.
///
/// The returned iterator is lazy and single-pass. It yields `Err` once if
/// scheduling stalls and is exhausted afterwards.
pub fn schedule<I, T, K, FK, FD, D>(items: I, key: FK, mut deps: FD) -> Schedule<T, K, FK>
where
    I: IntoIterator<Item = T>,
    K: Eq + Hash,
    FK: FnMut(&T) -> K,
    FD: FnMut(&T) -> D,
    D: IntoIterator<Item = K>,
{
    let pending = items
        .into_iter()
        .map(|item| {
            let mut unresolved = Vec::new();
            for k in deps(&item) {
                if !unresolved.contains(&k) {
                    unresolved.push(k);
                }
            }
            Pending { item, unresolved }
        })
        .collect();

    Schedule {
        key,
        pending,
        blocked: Vec::new(),
        emitted: HashSet::new(),
        round_keys: Vec::new(),
        round: 1,
        done: false,
    }
}

/// Lazy iterator returned by [`schedule`].
pub struct Schedule<T, K, FK> {
    key: FK,
    /// Items not yet examined in the current round.
    pending: VecDeque<Pending<T, K>>,
    /// Items examined in the current round and still blocked.
    blocked: Vec<Pending<T, K>>,
    /// Keys emitted in all completed rounds.
    emitted: HashSet<K>,
    /// Keys emitted in the current round.
    round_keys: Vec<K>,
    round: usize,
    done: bool,
}

impl<T, K, FK> Schedule<T, K, FK>
where
    K: Eq + Hash,
{
    /// Close the current round. Returns the stall error if nothing was emitted.
    fn finish_round(&mut self) -> Option<CyclicOrMissingDependency<T, K>> {
        if self.round_keys.is_empty() {
            self.done = true;
            let pending = std::mem::take(&mut self.blocked);
            debug!(
                round = self.round,
                pending = pending.len(),
                "dependency scheduling stalled"
            );
            return Some(CyclicOrMissingDependency { pending });
        }

        debug!(
            round = self.round,
            emitted = self.round_keys.len(),
            remaining = self.blocked.len(),
            "dependency round complete"
        );
        self.emitted.extend(self.round_keys.drain(..));
        self.pending = self.blocked.drain(..).collect();
        self.round += 1;
        None
    }
}

impl<T, K, FK> Iterator for Schedule<T, K, FK>
where
    K: Eq + Hash,
    FK: FnMut(&T) -> K,
{
    type Item = Result<T, CyclicOrMissingDependency<T, K>>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            let Some(mut entry) = self.pending.pop_front() else {
                if self.blocked.is_empty() {
                    self.done = true;
                    return None;
                }
                if let Some(err) = self.finish_round() {
                    return Some(Err(err));
                }
                continue;
            };

            let emitted = &self.emitted;
            entry.unresolved.retain(|k| !emitted.contains(k));

            if entry.unresolved.is_empty() {
                let k = (self.key)(&entry.item);
                trace!(round = self.round, "item ready");
                self.round_keys.push(k);
                return Some(Ok(entry.item));
            }
            self.blocked.push(entry);
        }
        None
    }
}

impl<T, K, FK> FusedIterator for Schedule<T, K, FK>
where
    K: Eq + Hash,
    FK: FnMut(&T) -> K,
{
}
