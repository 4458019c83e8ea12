use alloc::vec;
use alloc::vec::Vec;

use super::arena::Arena;
use super::entry::Entry;
use super::handle::Handle;

/// Bucket count of a freshly materialized table.
pub(crate) const DEFAULT_BUCKETS: usize = 16;

/// Maximum load factor, expressed as the ratio 3/4 (0.75) to keep the
/// threshold check in integer arithmetic.
const MAX_LOAD_NUM: usize = 3;
const MAX_LOAD_DEN: usize = 4;

/// The chaining hash table backing `LongKeyedMap`.
///
/// Entries live in the arena and are linked into per-bucket chains through
/// their `next` handles. The bucket for a key is `key.rem_euclid(bucket
/// count)`; floor modulo keeps negative keys in bounds. The bucket vector
/// starts empty (so `new` is const and allocation-free), is materialized at
/// [`DEFAULT_BUCKETS`] on first insertion, and from then on only ever doubles.
#[derive(Clone)]
pub(crate) struct RawLongKeyedMap<V> {
    /// Arena storing all entries.
    entries: Arena<Entry<V>>,
    /// Head of each bucket's chain, if the bucket is non-empty.
    buckets: Vec<Option<Handle>>,
}

impl<V> RawLongKeyedMap<V> {
    /// Creates a new, empty table.
    pub(crate) const fn new() -> Self {
        Self {
            entries: Arena::new(),
            buckets: Vec::new(),
        }
    }

    /// Creates a table that can hold `capacity` entries without growing.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        let mut bucket_count = DEFAULT_BUCKETS;
        while capacity * MAX_LOAD_DEN > bucket_count * MAX_LOAD_NUM {
            bucket_count *= 2;
        }
        Self {
            entries: Arena::with_capacity(capacity),
            buckets: vec![None; bucket_count],
        }
    }

    /// Returns the number of entries in the table. The arena's live slot
    /// count is exactly the number of entries reachable through the buckets.
    pub(crate) const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table contains no entries.
    pub(crate) const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of entries the arena can hold without reallocating.
    pub(crate) fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// Returns the current bucket count. Zero until the first insertion.
    pub(crate) fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the head of a bucket's chain, if any.
    pub(crate) fn bucket_head(&self, bucket: usize) -> Option<Handle> {
        self.buckets[bucket]
    }

    /// Returns a reference to an entry by handle.
    pub(crate) fn entry(&self, handle: Handle) -> &Entry<V> {
        self.entries.get(handle)
    }

    /// Removes every entry, keeping the bucket vector at its current length.
    /// The table never shrinks, including here.
    pub(crate) fn clear(&mut self) {
        self.entries.clear();
        for head in &mut self.buckets {
            *head = None;
        }
    }

    /// Drains all key-value pairs in bucket-traversal order, leaving the
    /// table empty. O(n) chain walk, no per-entry unlinking.
    pub(crate) fn drain_to_vec(&mut self) -> Vec<(i64, V)> {
        let mut result = Vec::with_capacity(self.len());

        for bucket in 0..self.buckets.len() {
            let mut cursor = self.buckets[bucket].take();
            while let Some(handle) = cursor {
                let entry = self.entries.take(handle);
                cursor = entry.next;
                result.push((entry.key, entry.value));
            }
        }

        self.entries.clear();
        result
    }

    /// Computes the bucket for a key against the current bucket count.
    ///
    /// Floor modulo (`rem_euclid`) normalizes negative keys to a non-negative
    /// index; a plain `%` would walk off the front of the table for them.
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    fn bucket_index(&self, key: i64) -> usize {
        debug_assert!(!self.buckets.is_empty());
        key.rem_euclid(self.buckets.len() as i64) as usize
    }

    /// Returns the handle of the entry holding `key`, if present.
    fn find(&self, key: i64) -> Option<Handle> {
        if self.buckets.is_empty() {
            return None;
        }

        let mut cursor = self.buckets[self.bucket_index(key)];
        while let Some(handle) = cursor {
            let entry = self.entries.get(handle);
            if entry.key == key {
                return Some(handle);
            }
            cursor = entry.next;
        }
        None
    }

    /// Returns a reference to the value for `key`, if present.
    pub(crate) fn get(&self, key: i64) -> Option<&V> {
        self.find(key).map(|handle| &self.entries.get(handle).value)
    }

    /// Returns a mutable reference to the value for `key`, if present.
    pub(crate) fn get_mut(&mut self, key: i64) -> Option<&mut V> {
        let handle = self.find(key)?;
        Some(&mut self.entries.get_mut(handle).value)
    }

    /// Returns true if the table holds an entry for `key`.
    pub(crate) fn contains_key(&self, key: i64) -> bool {
        self.find(key).is_some()
    }

    /// Inserts a key-value pair, returning the previous value if the key was
    /// already present.
    ///
    /// A replacement mutates the existing entry in place and never triggers
    /// growth. For a brand-new key the table grows *before* the bucket index
    /// is computed, so the entry is prepended against the up-to-date table.
    pub(crate) fn insert(&mut self, key: i64, value: V) -> Option<V> {
        if self.buckets.is_empty() {
            self.buckets.resize(DEFAULT_BUCKETS, None);
        }

        if let Some(handle) = self.find(key) {
            return Some(core::mem::replace(&mut self.entries.get_mut(handle).value, value));
        }

        if self.len() * MAX_LOAD_DEN >= self.buckets.len() * MAX_LOAD_NUM {
            self.grow();
        }

        let bucket = self.bucket_index(key);
        let head = self.buckets[bucket];
        let handle = self.entries.alloc(Entry {
            key,
            value,
            next: head,
        });
        self.buckets[bucket] = Some(handle);
        None
    }

    /// Unlinks and returns the value for `key`, if present. Handles head,
    /// interior, and tail positions by relinking the predecessor (or the
    /// bucket head) to the successor.
    pub(crate) fn remove(&mut self, key: i64) -> Option<V> {
        if self.buckets.is_empty() {
            return None;
        }

        let bucket = self.bucket_index(key);
        let mut prev: Option<Handle> = None;
        let mut cursor = self.buckets[bucket];

        while let Some(handle) = cursor {
            let entry = self.entries.get(handle);
            let next = entry.next;
            if entry.key == key {
                match prev {
                    None => self.buckets[bucket] = next,
                    Some(p) => self.entries.get_mut(p).next = next,
                }
                return Some(self.entries.take(handle).value);
            }
            prev = Some(handle);
            cursor = next;
        }
        None
    }

    /// Keeps only the entries for which the predicate returns true, unlinking
    /// the rest chain by chain.
    pub(crate) fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(i64, &mut V) -> bool,
    {
        for bucket in 0..self.buckets.len() {
            let mut prev: Option<Handle> = None;
            let mut cursor = self.buckets[bucket];

            while let Some(handle) = cursor {
                let entry = self.entries.get_mut(handle);
                let next = entry.next;
                if f(entry.key, &mut entry.value) {
                    prev = Some(handle);
                } else {
                    match prev {
                        None => self.buckets[bucket] = next,
                        Some(p) => self.entries.get_mut(p).next = next,
                    }
                    self.entries.free(handle);
                }
                cursor = next;
            }
        }
    }

    /// Doubles the bucket vector and rehashes every entry into it.
    ///
    /// Entries stay where the arena placed them; only their `next` links are
    /// rewired, each entry prepended to its new bucket head as the old table
    /// is walked in traversal order. The new vector is fully allocated before
    /// any link changes, so an allocation failure aborts with the original
    /// table intact.
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    fn grow(&mut self) {
        let new_count = self.buckets.len() * 2;
        let mut new_buckets: Vec<Option<Handle>> = vec![None; new_count];

        let modulus = new_count as i64;
        for bucket in 0..self.buckets.len() {
            let mut cursor = self.buckets[bucket];
            while let Some(handle) = cursor {
                let entry = self.entries.get_mut(handle);
                cursor = entry.next;
                let index = entry.key.rem_euclid(modulus) as usize;
                entry.next = new_buckets[index];
                new_buckets[index] = Some(handle);
            }
        }

        self.buckets = new_buckets;
    }
}

impl<V: PartialEq> RawLongKeyedMap<V> {
    /// Linear scan over every chain for a matching value.
    pub(crate) fn contains_value(&self, value: &V) -> bool {
        for head in &self.buckets {
            let mut cursor = *head;
            while let Some(handle) = cursor {
                let entry = self.entries.get(handle);
                if entry.value == *value {
                    return true;
                }
                cursor = entry.next;
            }
        }
        false
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn buckets_materialize_on_first_insert() {
        let mut map: RawLongKeyedMap<u32> = RawLongKeyedMap::new();
        assert_eq!(map.bucket_count(), 0);
        map.insert(7, 1);
        assert_eq!(map.bucket_count(), DEFAULT_BUCKETS);
    }

    #[test]
    fn grows_at_three_quarters_load() {
        let mut map: RawLongKeyedMap<i64> = RawLongKeyedMap::new();
        // 12 == 16 * 0.75; the 13th distinct key must find a doubled table.
        for key in 0..12 {
            map.insert(key, key);
        }
        assert_eq!(map.bucket_count(), 16);
        map.insert(12, 12);
        assert_eq!(map.bucket_count(), 32);
        for key in 0..13 {
            assert_eq!(map.get(key), Some(&key));
        }
    }

    #[test]
    fn replacement_never_grows() {
        let mut map: RawLongKeyedMap<i64> = RawLongKeyedMap::new();
        for key in 0..12 {
            map.insert(key, key);
        }
        assert_eq!(map.insert(5, -5), Some(5));
        assert_eq!(map.bucket_count(), 16);
        assert_eq!(map.len(), 12);
    }

    #[test]
    fn negative_keys_use_floor_modulo() {
        let mut map: RawLongKeyedMap<&str> = RawLongKeyedMap::new();
        map.insert(-1, "minus one");
        map.insert(i64::MIN, "min");
        map.insert(i64::MAX, "max");
        assert_eq!(map.get(-1), Some(&"minus one"));
        assert_eq!(map.get(i64::MIN), Some(&"min"));
        assert_eq!(map.get(i64::MAX), Some(&"max"));
        // -1 mod 16 is 15 under floor modulo, not -1.
        assert_eq!(map.bucket_head(15).map(|h| map.entry(h).key), Some(-1));
    }

    #[test]
    fn unlinks_head_interior_and_tail() {
        let mut map: RawLongKeyedMap<i64> = RawLongKeyedMap::new();
        // All hash to bucket 3 of a 16-bucket table; chain order is reverse
        // insertion order, so the chain reads 51 -> 35 -> 19 -> 3.
        for key in [3, 19, 35, 51] {
            map.insert(key, key * 10);
        }

        assert_eq!(map.remove(51), Some(510)); // head
        assert_eq!(map.remove(19), Some(190)); // interior
        assert_eq!(map.remove(3), Some(30)); // tail
        assert_eq!(map.remove(3), None);
        assert_eq!(map.get(35), Some(&350));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn clear_keeps_bucket_count() {
        let mut map: RawLongKeyedMap<i64> = RawLongKeyedMap::new();
        for key in 0..100 {
            map.insert(key, key);
        }
        let buckets = map.bucket_count();
        map.clear();
        assert!(map.is_empty());
        assert_eq!(map.bucket_count(), buckets);
        assert_eq!(map.get(42), None);
    }

    #[test]
    fn with_capacity_skips_early_growth() {
        let mut map: RawLongKeyedMap<i64> = RawLongKeyedMap::with_capacity(100);
        let buckets = map.bucket_count();
        assert!(100 * MAX_LOAD_DEN <= buckets * MAX_LOAD_NUM);
        assert!(map.capacity() >= 100);
        for key in 0..100 {
            map.insert(key, key);
        }
        assert_eq!(map.bucket_count(), buckets);
    }
}
