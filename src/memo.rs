//! Compute-once cache around a pure function.
//!
//! The wrapped function must be deterministic and free of side effects with
//! respect to its argument: a cached value is returned for every later call
//! with the same key, without calling the function again.
//!
//! The cache is unbounded and lives as long as the [`Memoized`] value; there
//! is no eviction. It needs `&mut self`, so sharing it across threads means
//! wrapping it in a lock.

use std::collections::HashMap;
use std::hash::Hash;

pub struct Memoized<A, K, V, F, KF> {
    func: F,
    key: KF,
    cache: HashMap<K, V>,
    _arg: std::marker::PhantomData<fn(&A)>,
}

impl<A, V, F> Memoized<A, A, V, F, fn(&A) -> A>
where
    A: Clone + Eq + Hash,
    F: FnMut(&A) -> V,
{
    /// Cache keyed by the argument itself.
    pub fn new(func: F) -> Self {
        Self::with_key(func, A::clone)
    }
}

impl<A, K, V, F, KF> Memoized<A, K, V, F, KF>
where
    K: Eq + Hash,
    F: FnMut(&A) -> V,
    KF: Fn(&A) -> K,
{
    /// Cache keyed by `key(arg)`. Arguments with equal keys share one result.
    pub fn with_key(func: F, key: KF) -> Self {
        Self {
            func,
            key,
            cache: HashMap::new(),
            _arg: std::marker::PhantomData,
        }
    }

    /// Cached result for `arg`, computing it on first use.
    pub fn call(&mut self, arg: &A) -> &V {
        let func = &mut self.func;
        self.cache
            .entry((self.key)(arg))
            .or_insert_with(|| func(arg))
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    pub fn clear(&mut self) {
        self.cache.clear();
    }
}
