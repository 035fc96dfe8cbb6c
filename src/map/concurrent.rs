//! Concurrent map implementation
//!
//! This module implements a string-keyed map guarded by a single
//! reader/writer lock. The design trades fine-grained parallelism for
//! simplicity and an API in which every operation is total: nothing here
//! can fail, block indefinitely, or observe a torn container.
//!
//! ## Design
//!
//! The map uses:
//! - One `parking_lot::RwLock` over the whole container, scoped to the
//!   instance (no process-wide state)
//! - An `FxHashMap` as the underlying container, keyed by `String`
//! - RAII lock guards, so the lock is released on every exit path
//!
//! ## Locking
//!
//! - `get` and `has` take the shared (read) side and may run concurrently
//!   with each other
//! - `add`, `set` and `delete` take the exclusive (write) side and are
//!   mutually exclusive with all other operations
//! - No operation holds the lock across a call to another public operation,
//!   so composing calls (e.g. `has` then `add`) is NOT atomic
//!
//! ## Performance Characteristics
//!
//! - **Get/Has**: O(1) average case, shared lock
//! - **Add/Set/Delete**: O(1) average case, exclusive lock
//! - Writes serialize on the single lock; contention grows with writer count
//!
//! ## Example
//!
//! ```rust
//! use locmap::map::ConcurrentMap;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let map = Arc::new(ConcurrentMap::new());
//!
//! // Writer thread
//! let writer = thread::spawn({
//!     let map = Arc::clone(&map);
//!     move || {
//!         for i in 0..1000 {
//!             map.set(format!("key_{}", i), i * 2);
//!         }
//!     }
//! });
//!
//! // Reader thread
//! let reader = thread::spawn({
//!     let map = Arc::clone(&map);
//!     move || {
//!         let mut sum = 0;
//!         for i in 0..1000 {
//!             if let Some(value) = map.get(&format!("key_{}", i)) {
//!                 sum += value;
//!             }
//!         }
//!         sum
//!     }
//! });
//!
//! writer.join().unwrap();
//! reader.join().unwrap();
//! assert_eq!(map.get("key_999"), Some(1998));
//! ```

use fxhash::FxHashMap;
use parking_lot::RwLock;

/// A thread-safe map from string keys to opaque values
///
/// This map provides atomic, race-free access to a key-value mapping through
/// a single reader/writer lock. Readers proceed concurrently; writers are
/// exclusive. The value type is opaque: the map never inspects what it
/// holds, and a present-but-"empty" value (empty string, `None` when
/// `V = Option<_>`) counts as present just like any other.
///
/// # Type Parameters
///
/// * `V` - The value type. Unconstrained for writes; retrieval by value
///   (`get`, `Clone`) requires `V: Clone`.
///
/// # Safety
///
/// Share the map across threads behind an `Arc`; every method takes `&self`
/// and performs its own locking. Operations never fail and never return
/// errors: absence is signaled by `None`/`false`, not by an error value.
///
/// # Examples
///
/// ```rust
/// use locmap::map::ConcurrentMap;
///
/// let map: ConcurrentMap<String> = ConcurrentMap::new();
/// map.set("greeting", "hello".to_string());
/// assert_eq!(map.get("greeting"), Some("hello".to_string()));
/// assert!(map.has("greeting"));
/// map.delete("greeting");
/// assert!(!map.has("greeting"));
/// ```
#[derive(Debug)]
pub struct ConcurrentMap<V> {
    // The single lock guarding all access to the container.
    inner: RwLock<FxHashMap<String, V>>,
}

impl<V> Default for ConcurrentMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> ConcurrentMap<V> {
    /// Create a new, empty map
    ///
    /// # Examples
    ///
    /// ```rust
    /// use locmap::map::ConcurrentMap;
    ///
    /// let map: ConcurrentMap<i32> = ConcurrentMap::new();
    /// assert!(map.is_empty());
    /// ```
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(FxHashMap::default()),
        }
    }

    /// Create a new map pre-sized for at least `capacity` entries
    ///
    /// The map still grows without bound as entries are added; the capacity
    /// only avoids early rehashing.
    ///
    /// # Arguments
    ///
    /// * `capacity` - Number of entries to reserve space for
    ///
    /// # Examples
    ///
    /// ```rust
    /// use locmap::map::ConcurrentMap;
    ///
    /// let map: ConcurrentMap<i32> = ConcurrentMap::with_capacity(100);
    /// assert!(map.is_empty());
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: RwLock::new(FxHashMap::with_capacity_and_hasher(
                capacity,
                Default::default(),
            )),
        }
    }

    /// Insert a key-value pair only if the key is not already present
    ///
    /// If the key exists the call is a no-op and the stored value is left
    /// untouched, regardless of what that value is. Presence, not the
    /// value's content, decides: a key holding an empty string or `None`
    /// is present and will not be overwritten.
    ///
    /// # Arguments
    ///
    /// * `key` - The key to insert under
    /// * `value` - The value to associate if the key is absent
    ///
    /// # Examples
    ///
    /// ```rust
    /// use locmap::map::ConcurrentMap;
    ///
    /// let map = ConcurrentMap::new();
    /// map.add("key", "first");
    /// map.add("key", "second"); // no-op, key already present
    /// assert_eq!(map.get("key"), Some("first"));
    /// ```
    pub fn add(&self, key: impl Into<String>, value: V) {
        let mut inner = self.inner.write();
        inner.entry(key.into()).or_insert(value);
    }

    /// Insert or unconditionally overwrite the value for a key
    ///
    /// # Arguments
    ///
    /// * `key` - The key to insert under
    /// * `value` - The value to associate, replacing any existing one
    ///
    /// # Examples
    ///
    /// ```rust
    /// use locmap::map::ConcurrentMap;
    ///
    /// let map = ConcurrentMap::new();
    /// map.set("key", "first");
    /// map.set("key", "second");
    /// assert_eq!(map.get("key"), Some("second"));
    /// ```
    pub fn set(&self, key: impl Into<String>, value: V) {
        let mut inner = self.inner.write();
        inner.insert(key.into(), value);
    }

    /// Check whether a key is currently present
    ///
    /// Presence is independent of the stored value: a key holding an empty
    /// string or `None` still reports `true`.
    ///
    /// # Arguments
    ///
    /// * `key` - The key to look up
    ///
    /// # Returns
    ///
    /// `true` iff the key is present in the map
    ///
    /// # Examples
    ///
    /// ```rust
    /// use locmap::map::ConcurrentMap;
    ///
    /// let map = ConcurrentMap::new();
    /// map.set("empty", "");
    /// assert!(map.has("empty"));
    /// assert!(!map.has("missing"));
    /// ```
    pub fn has(&self, key: &str) -> bool {
        let inner = self.inner.read();
        inner.contains_key(key)
    }

    /// Remove the association for a key, if present
    ///
    /// Deleting an absent key is a no-op, not an error.
    ///
    /// # Arguments
    ///
    /// * `key` - The key to remove
    ///
    /// # Examples
    ///
    /// ```rust
    /// use locmap::map::ConcurrentMap;
    ///
    /// let map = ConcurrentMap::new();
    /// map.set("key", 1);
    /// map.delete("key");
    /// assert!(!map.has("key"));
    /// map.delete("key"); // absent, no-op
    /// ```
    pub fn delete(&self, key: &str) {
        let mut inner = self.inner.write();
        inner.remove(key);
    }

    /// Get the number of entries in the map
    ///
    /// The count is exact at the moment the shared lock is held, but may be
    /// stale by the time the caller observes it if writers are active.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use locmap::map::ConcurrentMap;
    ///
    /// let map = ConcurrentMap::new();
    /// assert_eq!(map.len(), 0);
    /// map.set("key", 1);
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        let inner = self.inner.read();
        inner.len()
    }

    /// Check if the map is empty
    ///
    /// # Examples
    ///
    /// ```rust
    /// use locmap::map::ConcurrentMap;
    ///
    /// let map: ConcurrentMap<i32> = ConcurrentMap::new();
    /// assert!(map.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<V: Clone> ConcurrentMap<V> {
    /// Get the value for a key
    ///
    /// Returns a clone of the stored value, or `None` if the key is absent.
    /// "Key not found" is a normal outcome, not an error. When the value
    /// type is itself `Option<T>`, a present-but-`None` entry yields
    /// `Some(None)`, which is distinct from the absent case.
    ///
    /// # Arguments
    ///
    /// * `key` - The key to look up
    ///
    /// # Returns
    ///
    /// * `Some(value)` if the key is present
    /// * `None` if the key is absent
    ///
    /// # Examples
    ///
    /// ```rust
    /// use locmap::map::ConcurrentMap;
    ///
    /// let map: ConcurrentMap<Option<i32>> = ConcurrentMap::new();
    /// map.set("present-but-none", None);
    /// assert_eq!(map.get("present-but-none"), Some(None));
    /// assert_eq!(map.get("missing"), None);
    /// ```
    pub fn get(&self, key: &str) -> Option<V> {
        let inner = self.inner.read();
        inner.get(key).cloned()
    }
}

impl<V: Clone> Clone for ConcurrentMap<V> {
    /// Snapshot the map under a shared lock
    ///
    /// The clone is an independent instance with its own lock; later
    /// mutations of either map do not affect the other.
    fn clone(&self) -> Self {
        let inner = self.inner.read();
        Self {
            inner: RwLock::new(inner.clone()),
        }
    }
}
