//! # locmap
//!
//! A minimal thread-safe in-memory map from string keys to opaque values.
//!
//! ## Features
//!
//! - **ConcurrentMap**: a string-keyed associative store guarded by a single
//!   reader/writer lock
//! - Concurrent readers, exclusive writers, RAII lock release on every path
//! - Distinct insert-if-absent (`add`) and insert-or-overwrite (`set`)
//!   operations
//!
//! ## Philosophy
//!
//! locmap focuses on providing:
//! - A small, total API: no operation can fail, and "key not found" is a
//!   normal result, never an error
//! - Opaque values: the store never inspects, validates, or serializes what
//!   it holds
//! - Predictable concurrency: one coarse lock per instance, no process-wide
//!   state, no lock held across public calls
//!
//! ## Quick Start
//!
//! ```rust
//! use locmap::ConcurrentMap;
//!
//! let map = ConcurrentMap::new();
//! map.set("answer", 42);
//! assert_eq!(map.get("answer"), Some(42));
//! ```
//!
//! ## Thread Safety
//!
//! [`ConcurrentMap`] is safe to share across threads behind an `Arc` without
//! additional synchronization. Reads (`get`, `has`) run concurrently with
//! each other; writes (`add`, `set`, `delete`) are mutually exclusive with
//! all other operations.
//!
//! ## What locmap is not
//!
//! There is no expiration, no eviction, no persistence, no capacity bound,
//! and no iteration API. An entry lives from its last `add`/`set` until an
//! explicit `delete` or the map is dropped.

#![warn(missing_docs, missing_debug_implementations, rust_2018_idioms)]

pub mod map;

pub use crate::map::ConcurrentMap;
