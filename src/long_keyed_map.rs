use alloc::vec;
use alloc::vec::Vec;

use core::fmt;
use core::iter::FusedIterator;
use core::ops::Index;

use crate::raw::{Handle, RawLongKeyedMap};

/// A hash map keyed by 64-bit signed integers.
///
/// `LongKeyedMap` is a separate-chaining hash table built from scratch: an
/// array of buckets, each holding a singly-linked chain of entries, with the
/// key's bucket chosen by floor modulo over the bucket count. There is no
/// hasher; the key *is* the hash. Insert, lookup, removal, and membership
/// tests take constant time on average and O(chain length) in the worst case.
///
/// The table starts with 16 buckets and doubles whenever the number of
/// entries reaches 3/4 of the bucket count. Growth relinks the existing
/// entries into the larger table without moving or copying them. The table
/// never shrinks, not even on [`clear`](LongKeyedMap::clear).
///
/// Iteration visits buckets in ascending index order and each chain from its
/// head (most recently inserted first). That order is an artifact of the
/// chaining structure and changes across insertions, removals, and resizes;
/// callers must not rely on it. The one guarantee is that [`keys`] and
/// [`values`] taken at the same map state are index-aligned.
///
/// [`keys`]: LongKeyedMap::keys
/// [`values`]: LongKeyedMap::values
///
/// # Examples
///
/// ```
/// use long_keyed_map::LongKeyedMap;
///
/// // type inference lets us omit an explicit type signature (which
/// // would be `LongKeyedMap<&str>` in this example).
/// let mut reviews = LongKeyedMap::new();
///
/// // review some movies, by catalogue id.
/// reviews.insert(1994, "Deals with real issues in the workplace.");
/// reviews.insert(1972, "Very enjoyable.");
/// reviews.insert(1980, "Eye lyked it a lot.");
///
/// // check for a specific one.
/// if !reviews.contains_key(2012) {
///     println!("We've got {} reviews, but 2012 ain't one.", reviews.len());
/// }
///
/// // oops, this review has a lot of spelling mistakes, let's delete it.
/// reviews.remove(1980);
///
/// // look up the values associated with some keys.
/// for id in [1994, 1980] {
///     match reviews.get(id) {
///         Some(review) => println!("{id}: {review}"),
///         None => println!("{id} is unreviewed."),
///     }
/// }
///
/// // iterate over everything.
/// for (id, review) in &reviews {
///     println!("{id}: \"{review}\"");
/// }
/// ```
///
/// A `LongKeyedMap` with a known list of entries can be initialized from an
/// array:
///
/// ```
/// use long_keyed_map::LongKeyedMap;
///
/// let solar_distance = LongKeyedMap::from([
///     (1, 0.4),
///     (2, 0.7),
///     (3, 1.0),
///     (4, 1.5),
/// ]);
/// assert_eq!(solar_distance[3], 1.0);
/// ```
pub struct LongKeyedMap<V> {
    raw: RawLongKeyedMap<V>,
}

/// An iterator over the entries of a `LongKeyedMap` in bucket order.
///
/// This `struct` is created by the [`iter`] method on [`LongKeyedMap`]. See
/// its documentation for more.
///
/// [`iter`]: LongKeyedMap::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, V> {
    raw: &'a RawLongKeyedMap<V>,
    /// Next bucket to load once the current chain is exhausted.
    bucket: usize,
    /// Position within the current chain.
    cursor: Option<Handle>,
    remaining: usize,
}

/// An iterator over the keys of a `LongKeyedMap`.
///
/// This `struct` is created by the [`keys`] method on [`LongKeyedMap`]. See
/// its documentation for more.
///
/// [`keys`]: LongKeyedMap::keys
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Keys<'a, V> {
    inner: Iter<'a, V>,
}

/// An iterator over the values of a `LongKeyedMap`.
///
/// This `struct` is created by the [`values`] method on [`LongKeyedMap`]. See
/// its documentation for more.
///
/// [`values`]: LongKeyedMap::values
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Values<'a, V> {
    inner: Iter<'a, V>,
}

/// An owning iterator over the entries of a `LongKeyedMap`.
///
/// This `struct` is created by the [`into_iter`] method on [`LongKeyedMap`]
/// (provided by the [`IntoIterator`] trait). See its documentation for more.
///
/// [`into_iter`]: IntoIterator::into_iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct IntoIter<V> {
    inner: vec::IntoIter<(i64, V)>,
}

/// An owning iterator over the keys of a `LongKeyedMap`.
///
/// This `struct` is created by the [`into_keys`] method on [`LongKeyedMap`].
/// See its documentation for more.
///
/// [`into_keys`]: LongKeyedMap::into_keys
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct IntoKeys<V> {
    inner: IntoIter<V>,
}

/// An owning iterator over the values of a `LongKeyedMap`.
///
/// This `struct` is created by the [`into_values`] method on
/// [`LongKeyedMap`]. See its documentation for more.
///
/// [`into_values`]: LongKeyedMap::into_values
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct IntoValues<V> {
    inner: IntoIter<V>,
}

impl<V> LongKeyedMap<V> {
    /// Makes a new, empty `LongKeyedMap`.
    ///
    /// Does not allocate anything on its own; the 16-bucket table is
    /// materialized on the first insertion.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```
    /// use long_keyed_map::LongKeyedMap;
    ///
    /// let mut map = LongKeyedMap::new();
    ///
    /// // entries can now be inserted into the empty map
    /// map.insert(1, "a");
    /// ```
    #[must_use]
    pub const fn new() -> LongKeyedMap<V> {
        LongKeyedMap {
            raw: RawLongKeyedMap::new(),
        }
    }

    /// Makes a new, empty `LongKeyedMap` that can hold at least `capacity`
    /// entries before the table grows.
    ///
    /// # Examples
    ///
    /// ```
    /// use long_keyed_map::LongKeyedMap;
    ///
    /// let mut map = LongKeyedMap::with_capacity(1000);
    /// for i in 0..1000 {
    ///     map.insert(i, i);
    /// }
    /// assert_eq!(map.len(), 1000);
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize) -> LongKeyedMap<V> {
        LongKeyedMap {
            raw: RawLongKeyedMap::with_capacity(capacity),
        }
    }

    /// Returns the number of entries in the map.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```
    /// use long_keyed_map::LongKeyedMap;
    ///
    /// let mut a = LongKeyedMap::new();
    /// assert_eq!(a.len(), 0);
    /// a.insert(1, "a");
    /// assert_eq!(a.len(), 1);
    /// ```
    #[must_use]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the map contains no entries.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```
    /// use long_keyed_map::LongKeyedMap;
    ///
    /// let mut a = LongKeyedMap::new();
    /// assert!(a.is_empty());
    /// a.insert(1, "a");
    /// assert!(!a.is_empty());
    /// ```
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Returns the number of entries the map can hold without reallocating
    /// entry storage.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }

    /// Clears the map, removing all entries. The bucket table keeps its
    /// current size.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```
    /// use long_keyed_map::LongKeyedMap;
    ///
    /// let mut a = LongKeyedMap::new();
    /// a.insert(1, "a");
    /// a.clear();
    /// assert!(a.is_empty());
    /// assert_eq!(a.get(1), None);
    /// ```
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Returns a reference to the value corresponding to the key.
    ///
    /// # Complexity
    ///
    /// O(1) average, O(chain length) worst case.
    ///
    /// # Examples
    ///
    /// ```
    /// use long_keyed_map::LongKeyedMap;
    ///
    /// let mut map = LongKeyedMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.get(1), Some(&"a"));
    /// assert_eq!(map.get(2), None);
    /// ```
    #[must_use]
    pub fn get(&self, key: i64) -> Option<&V> {
        self.raw.get(key)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    ///
    /// # Complexity
    ///
    /// O(1) average, O(chain length) worst case.
    ///
    /// # Examples
    ///
    /// ```
    /// use long_keyed_map::LongKeyedMap;
    ///
    /// let mut map = LongKeyedMap::new();
    /// map.insert(1, "a");
    /// if let Some(x) = map.get_mut(1) {
    ///     *x = "b";
    /// }
    /// assert_eq!(map[1], "b");
    /// ```
    #[must_use]
    pub fn get_mut(&mut self, key: i64) -> Option<&mut V> {
        self.raw.get_mut(key)
    }

    /// Returns `true` if the map contains a value for the specified key.
    ///
    /// # Complexity
    ///
    /// O(1) average, O(chain length) worst case.
    ///
    /// # Examples
    ///
    /// ```
    /// use long_keyed_map::LongKeyedMap;
    ///
    /// let mut map = LongKeyedMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.contains_key(1), true);
    /// assert_eq!(map.contains_key(2), false);
    /// ```
    #[must_use]
    pub fn contains_key(&self, key: i64) -> bool {
        self.raw.contains_key(key)
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map did not have this key present, `None` is returned.
    ///
    /// If the map did have this key present, the value is updated in place
    /// and the old value is returned. A replacement never grows the table;
    /// only the insertion of a brand-new key can trigger growth, and the new
    /// entry's bucket is computed against the grown table.
    ///
    /// # Complexity
    ///
    /// O(1) average, amortized over growth.
    ///
    /// # Examples
    ///
    /// ```
    /// use long_keyed_map::LongKeyedMap;
    ///
    /// let mut map = LongKeyedMap::new();
    /// assert_eq!(map.insert(37, "a"), None);
    /// assert_eq!(map.is_empty(), false);
    ///
    /// map.insert(37, "b");
    /// assert_eq!(map.insert(37, "c"), Some("b"));
    /// assert_eq!(map[37], "c");
    /// ```
    pub fn insert(&mut self, key: i64, value: V) -> Option<V> {
        self.raw.insert(key, value)
    }

    /// Removes a key from the map, returning the value at the key if the key
    /// was previously in the map.
    ///
    /// # Complexity
    ///
    /// O(1) average, O(chain length) worst case.
    ///
    /// # Examples
    ///
    /// ```
    /// use long_keyed_map::LongKeyedMap;
    ///
    /// let mut map = LongKeyedMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.remove(1), Some("a"));
    /// assert_eq!(map.remove(1), None);
    /// ```
    pub fn remove(&mut self, key: i64) -> Option<V> {
        self.raw.remove(key)
    }

    /// Retains only the entries specified by the predicate.
    ///
    /// In other words, remove all pairs `(k, v)` for which `f(k, &mut v)`
    /// returns `false`. Entries are visited in bucket order.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```
    /// use long_keyed_map::LongKeyedMap;
    ///
    /// let mut map: LongKeyedMap<i64> = (0..8).map(|x| (x, x * 10)).collect();
    /// // Keep only the entries with even keys.
    /// map.retain(|k, _| k % 2 == 0);
    /// assert_eq!(map.len(), 4);
    /// assert!(map.contains_key(6));
    /// assert!(!map.contains_key(7));
    /// ```
    pub fn retain<F>(&mut self, f: F)
    where
        F: FnMut(i64, &mut V) -> bool,
    {
        self.raw.retain(f);
    }

    /// Gets an iterator over the entries of the map in bucket order, yielding
    /// `(i64, &V)` pairs.
    ///
    /// # Complexity
    ///
    /// O(1) to create the iterator; O(bucket count + n) to exhaust it.
    ///
    /// # Examples
    ///
    /// ```
    /// use long_keyed_map::LongKeyedMap;
    ///
    /// let mut map = LongKeyedMap::new();
    /// map.insert(3, "c");
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    ///
    /// for (key, value) in map.iter() {
    ///     println!("{key}: {value}");
    /// }
    /// assert_eq!(map.iter().count(), 3);
    /// ```
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            raw: &self.raw,
            bucket: 0,
            cursor: None,
            remaining: self.raw.len(),
        }
    }

    /// Gets an iterator over the keys of the map in bucket order.
    ///
    /// The iterator yields exactly [`len`](LongKeyedMap::len) keys and is
    /// index-aligned with a [`values`](LongKeyedMap::values) call made at the
    /// same map state.
    ///
    /// # Examples
    ///
    /// ```
    /// use long_keyed_map::LongKeyedMap;
    ///
    /// let mut a = LongKeyedMap::new();
    /// a.insert(2, "b");
    /// a.insert(1, "a");
    ///
    /// let mut keys: Vec<i64> = a.keys().collect();
    /// keys.sort_unstable();
    /// assert_eq!(keys, [1, 2]);
    /// ```
    pub fn keys(&self) -> Keys<'_, V> {
        Keys {
            inner: self.iter(),
        }
    }

    /// Gets an iterator over the values of the map in bucket order,
    /// index-aligned with [`keys`](LongKeyedMap::keys) at the same map state.
    ///
    /// # Examples
    ///
    /// ```
    /// use long_keyed_map::LongKeyedMap;
    ///
    /// let mut a = LongKeyedMap::new();
    /// a.insert(1, "hello");
    /// a.insert(2, "goodbye");
    ///
    /// assert_eq!(a.values().count(), 2);
    /// ```
    pub fn values(&self) -> Values<'_, V> {
        Values {
            inner: self.iter(),
        }
    }

    /// Creates a consuming iterator visiting all the keys in bucket order.
    /// The map cannot be used after calling this.
    ///
    /// # Examples
    ///
    /// ```
    /// use long_keyed_map::LongKeyedMap;
    ///
    /// let mut a = LongKeyedMap::new();
    /// a.insert(2, "b");
    /// a.insert(1, "a");
    ///
    /// let mut keys: Vec<i64> = a.into_keys().collect();
    /// keys.sort_unstable();
    /// assert_eq!(keys, [1, 2]);
    /// ```
    pub fn into_keys(self) -> IntoKeys<V> {
        IntoKeys {
            inner: self.into_iter(),
        }
    }

    /// Creates a consuming iterator visiting all the values in bucket order.
    /// The map cannot be used after calling this.
    ///
    /// # Examples
    ///
    /// ```
    /// use long_keyed_map::LongKeyedMap;
    ///
    /// let mut a = LongKeyedMap::new();
    /// a.insert(1, "hello");
    /// a.insert(2, "goodbye");
    ///
    /// let values: Vec<&str> = a.into_values().collect();
    /// assert_eq!(values.len(), 2);
    /// ```
    pub fn into_values(self) -> IntoValues<V> {
        IntoValues {
            inner: self.into_iter(),
        }
    }
}

impl<V: PartialEq> LongKeyedMap<V> {
    /// Returns `true` if the map contains an entry with the specified value.
    ///
    /// Values are compared with `PartialEq` over a linear scan of every
    /// chain. When the value type is itself an `Option`, a stored `None`
    /// matches a queried `None` like any other value; there is no in-band
    /// "no value" sentinel.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```
    /// use long_keyed_map::LongKeyedMap;
    ///
    /// let mut map = LongKeyedMap::new();
    /// map.insert(1, Some("a"));
    /// map.insert(2, None);
    ///
    /// assert!(map.contains_value(&Some("a")));
    /// assert!(map.contains_value(&None));
    ///
    /// map.remove(2);
    /// assert!(!map.contains_value(&None));
    /// ```
    #[must_use]
    pub fn contains_value(&self, value: &V) -> bool {
        self.raw.contains_value(value)
    }
}

impl<V: Clone> Clone for LongKeyedMap<V> {
    fn clone(&self) -> Self {
        LongKeyedMap {
            raw: self.raw.clone(),
        }
    }
}

impl<V: PartialEq> PartialEq for LongKeyedMap<V> {
    /// Order-independent equality: two maps are equal when they hold the same
    /// key-value pairs, regardless of bucket layout or insertion history.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl<V: Eq> Eq for LongKeyedMap<V> {}

impl<V: fmt::Debug> fmt::Debug for LongKeyedMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<V> Default for LongKeyedMap<V> {
    fn default() -> Self {
        LongKeyedMap::new()
    }
}

impl<V> Extend<(i64, V)> for LongKeyedMap<V> {
    fn extend<T: IntoIterator<Item = (i64, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<'a, V: Copy> Extend<(i64, &'a V)> for LongKeyedMap<V> {
    fn extend<T: IntoIterator<Item = (i64, &'a V)>>(&mut self, iter: T) {
        for (k, &v) in iter {
            self.insert(k, v);
        }
    }
}

impl<V> FromIterator<(i64, V)> for LongKeyedMap<V> {
    fn from_iter<T: IntoIterator<Item = (i64, V)>>(iter: T) -> Self {
        let mut map = LongKeyedMap::new();
        map.extend(iter);
        map
    }
}

impl<V, const N: usize> From<[(i64, V); N]> for LongKeyedMap<V> {
    fn from(arr: [(i64, V); N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<V> Index<i64> for LongKeyedMap<V> {
    type Output = V;

    fn index(&self, key: i64) -> &V {
        self.get(key).expect("no entry found for key")
    }
}

impl<'a, V> IntoIterator for &'a LongKeyedMap<V> {
    type Item = (i64, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Iter<'a, V> {
        self.iter()
    }
}

impl<V> IntoIterator for LongKeyedMap<V> {
    type Item = (i64, V);
    type IntoIter = IntoIter<V>;

    /// Gets an owning iterator over the entries of the map in bucket order.
    ///
    /// # Examples
    ///
    /// ```
    /// use long_keyed_map::LongKeyedMap;
    ///
    /// let map = LongKeyedMap::from([(1, "a"), (2, "b")]);
    /// let mut entries: Vec<(i64, &str)> = map.into_iter().collect();
    /// entries.sort_unstable();
    /// assert_eq!(entries, [(1, "a"), (2, "b")]);
    /// ```
    fn into_iter(mut self) -> IntoIter<V> {
        let entries = self.raw.drain_to_vec();
        IntoIter {
            inner: entries.into_iter(),
        }
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (i64, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        loop {
            if let Some(handle) = self.cursor {
                let entry = self.raw.entry(handle);
                self.cursor = entry.next;
                self.remaining -= 1;
                return Some((entry.key, &entry.value));
            }

            // Chain exhausted; load the next bucket head. `remaining > 0`
            // guarantees a non-empty bucket is still ahead.
            if self.bucket >= self.raw.bucket_count() {
                return None;
            }
            self.cursor = self.raw.bucket_head(self.bucket);
            self.bucket += 1;
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<V> FusedIterator for Iter<'_, V> {}

impl<V: fmt::Debug> fmt::Debug for Iter<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter").field("remaining", &self.remaining).finish()
    }
}

impl<V> Clone for Iter<'_, V> {
    fn clone(&self) -> Self {
        Iter {
            raw: self.raw,
            bucket: self.bucket,
            cursor: self.cursor,
            remaining: self.remaining,
        }
    }
}

impl<V> Iterator for Keys<'_, V> {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for Keys<'_, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<V> FusedIterator for Keys<'_, V> {}

impl<V> fmt::Debug for Keys<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keys").field("remaining", &self.inner.remaining).finish()
    }
}

impl<V> Clone for Keys<'_, V> {
    fn clone(&self) -> Self {
        Keys {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, V> Iterator for Values<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for Values<'_, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<V> FusedIterator for Values<'_, V> {}

impl<V: fmt::Debug> fmt::Debug for Values<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Values").field("remaining", &self.inner.remaining).finish()
    }
}

impl<V> Clone for Values<'_, V> {
    fn clone(&self) -> Self {
        Values {
            inner: self.inner.clone(),
        }
    }
}

impl<V> Iterator for IntoIter<V> {
    type Item = (i64, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for IntoIter<V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<V> FusedIterator for IntoIter<V> {}

impl<V: fmt::Debug> fmt::Debug for IntoIter<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter").field("len", &self.inner.len()).finish()
    }
}

impl<V> Default for IntoIter<V> {
    /// Creates an empty `long_keyed_map::IntoIter`.
    ///
    /// ```
    /// let iter: long_keyed_map::long_keyed_map::IntoIter<u8> = Default::default();
    /// assert_eq!(iter.len(), 0);
    /// ```
    fn default() -> Self {
        IntoIter {
            inner: Vec::new().into_iter(),
        }
    }
}

impl<V> Iterator for IntoKeys<V> {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for IntoKeys<V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<V> FusedIterator for IntoKeys<V> {}

impl<V> fmt::Debug for IntoKeys<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoKeys").field("len", &self.inner.len()).finish()
    }
}

impl<V> Default for IntoKeys<V> {
    /// Creates an empty `long_keyed_map::IntoKeys`.
    ///
    /// ```
    /// let iter: long_keyed_map::long_keyed_map::IntoKeys<u8> = Default::default();
    /// assert_eq!(iter.len(), 0);
    /// ```
    fn default() -> Self {
        IntoKeys {
            inner: IntoIter::default(),
        }
    }
}

impl<V> Iterator for IntoValues<V> {
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for IntoValues<V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<V> FusedIterator for IntoValues<V> {}

impl<V: fmt::Debug> fmt::Debug for IntoValues<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoValues").field("len", &self.inner.len()).finish()
    }
}

impl<V> Default for IntoValues<V> {
    /// Creates an empty `long_keyed_map::IntoValues`.
    ///
    /// ```
    /// let iter: long_keyed_map::long_keyed_map::IntoValues<u8> = Default::default();
    /// assert_eq!(iter.len(), 0);
    /// ```
    fn default() -> Self {
        IntoValues {
            inner: IntoIter::default(),
        }
    }
}
