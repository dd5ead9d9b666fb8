//! # Disjoint Sets (Union-Find)
//!
//! Keyed union-find with path compression and union by size.
//!
//! Keys are mapped to dense indices in insertion order, so the index of a
//! set's representative is stable for a fixed sequence of operations. Room
//! detection keys it by [`Coord`](crate::Coord); the spanning-tree pass keys
//! it by room id.

use std::collections::HashMap;
use std::hash::Hash;

/// Union-find over arbitrary hashable keys.
///
/// # Example
///
/// ```
/// use hollow_core::DisjointSets;
///
/// let mut sets = DisjointSets::new();
/// sets.add("a");
/// sets.add("b");
/// sets.add("c");
/// assert!(sets.union(&"a", &"b"));
/// assert!(sets.same_set(&"a", &"b"));
/// assert!(!sets.same_set(&"a", &"c"));
/// assert_eq!(sets.set_count(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSets<K> {
    /// Key to dense index.
    index: HashMap<K, usize>,
    /// Parent links; a root points at itself.
    parent: Vec<usize>,
    /// Set size, only meaningful at roots.
    size: Vec<usize>,
    /// Number of distinct sets.
    sets: usize,
}

impl<K: Hash + Eq + Clone> Default for DisjointSets<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq + Clone> DisjointSets<K> {
    /// Creates an empty structure.
    #[must_use]
    pub fn new() -> Self {
        Self {
            index: HashMap::new(),
            parent: Vec::new(),
            size: Vec::new(),
            sets: 0,
        }
    }

    /// Creates an empty structure with room for `capacity` keys.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            index: HashMap::with_capacity(capacity),
            parent: Vec::with_capacity(capacity),
            size: Vec::with_capacity(capacity),
            sets: 0,
        }
    }

    /// Adds `key` as a singleton set and returns its index.
    ///
    /// Adding a key twice is a no-op that returns the existing index.
    pub fn add(&mut self, key: K) -> usize {
        if let Some(&i) = self.index.get(&key) {
            return i;
        }
        let i = self.parent.len();
        self.index.insert(key, i);
        self.parent.push(i);
        self.size.push(1);
        self.sets += 1;
        i
    }

    /// Number of keys added.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// True if no keys have been added.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets.
    #[inline]
    #[must_use]
    pub const fn set_count(&self) -> usize {
        self.sets
    }

    /// Representative index of the set holding `key`, if the key is known.
    pub fn find(&mut self, key: &K) -> Option<usize> {
        let i = *self.index.get(key)?;
        Some(self.find_root(i))
    }

    /// Joins the sets holding `a` and `b`.
    ///
    /// Returns true if two distinct sets were merged, false if they were
    /// already one set or either key is unknown.
    pub fn union(&mut self, a: &K, b: &K) -> bool {
        match (self.find(a), self.find(b)) {
            (Some(ra), Some(rb)) => self.link(ra, rb),
            _ => false,
        }
    }

    /// True if both keys are known and share a set.
    pub fn same_set(&mut self, a: &K, b: &K) -> bool {
        match (self.find(a), self.find(b)) {
            (Some(ra), Some(rb)) => ra == rb,
            _ => false,
        }
    }

    /// Root lookup with full path compression.
    fn find_root(&mut self, mut i: usize) -> usize {
        let mut root = i;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        while self.parent[i] != root {
            let next = self.parent[i];
            self.parent[i] = root;
            i = next;
        }
        root
    }

    /// Links two roots, smaller set under larger. Ties keep `a` as root.
    fn link(&mut self, a: usize, b: usize) -> bool {
        if a == b {
            return false;
        }
        let (big, small) = if self.size[a] < self.size[b] { (b, a) } else { (a, b) };
        self.parent[small] = big;
        self.size[big] += self.size[small];
        self.sets -= 1;
        true
    }
}
