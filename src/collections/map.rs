//! Chained-hashing map with resize-on-load-factor.
//!
//! Buckets are plain vectors of `(key, value)` pairs; keys are hashed with
//! `FxHasher` and assigned to a bucket by modulo. When the entry count
//! crosses 3/4 of the bucket count, every entry is rehashed into a bucket
//! array of twice the size. Insertion order is irrelevant; iteration order
//! is unspecified but stable between mutations.

use std::borrow::Borrow;
use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;

const INITIAL_BUCKETS: usize = 16;

/// A chained-hash map over `K: Hash + Eq`.
#[derive(Debug, Clone)]
pub struct ChainedHashMap<K, V> {
    buckets: Vec<Vec<(K, V)>>,
    len: usize,
}

impl<K: Hash + Eq, V> ChainedHashMap<K, V> {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty map sized to hold `capacity` entries without
    /// resizing.
    pub fn with_capacity(capacity: usize) -> Self {
        let buckets = (capacity * 4 / 3 + 1)
            .next_power_of_two()
            .max(INITIAL_BUCKETS);
        Self {
            buckets: (0..buckets).map(|_| Vec::new()).collect(),
            len: 0,
        }
    }

    /// Number of entries in the map.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check whether the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Insert or replace the value for `key`, returning the previous value
    /// if one was present. Amortized O(1).
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if (self.len + 1) * 4 > self.buckets.len() * 3 {
            self.grow();
        }
        let idx = Self::bucket_index(&key, self.buckets.len());
        let bucket = &mut self.buckets[idx];
        for entry in bucket.iter_mut() {
            if entry.0 == key {
                return Some(std::mem::replace(&mut entry.1, value));
            }
        }
        bucket.push((key, value));
        self.len += 1;
        None
    }

    /// Look up the value for `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let idx = Self::bucket_index(key, self.buckets.len());
        self.buckets[idx]
            .iter()
            .find(|(k, _)| k.borrow() == key)
            .map(|(_, v)| v)
    }

    /// Look up the value for `key` mutably.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let idx = Self::bucket_index(key, self.buckets.len());
        self.buckets[idx]
            .iter_mut()
            .find(|(k, _)| k.borrow() == key)
            .map(|(_, v)| v)
    }

    /// Check whether `key` is present.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Iterate over all entries. The iterator is lazy and can be restarted
    /// by calling `iter` again; order is stable as long as the map is not
    /// mutated in between.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.buckets
            .iter()
            .flat_map(|bucket| bucket.iter().map(|(k, v)| (k, v)))
    }

    /// Iterate over all keys.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(k, _)| k)
    }

    /// Iterate over all values.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, v)| v)
    }

    fn bucket_index<Q>(key: &Q, bucket_count: usize) -> usize
    where
        Q: Hash + ?Sized,
    {
        let mut hasher = FxHasher::default();
        key.hash(&mut hasher);
        (hasher.finish() as usize) % bucket_count
    }

    /// Rehash every entry into a bucket array of twice the size.
    fn grow(&mut self) {
        let new_count = self.buckets.len() * 2;
        let old = std::mem::replace(
            &mut self.buckets,
            (0..new_count).map(|_| Vec::new()).collect(),
        );
        for bucket in old {
            for (key, value) in bucket {
                let idx = Self::bucket_index(&key, new_count);
                self.buckets[idx].push((key, value));
            }
        }
    }
}

impl<K: Hash + Eq, V> Default for ChainedHashMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
