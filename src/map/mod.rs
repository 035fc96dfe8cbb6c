//! Map implementations
//!
//! This module provides the string-keyed concurrent map that is the heart of
//! the crate.
//!
//! ## Available Maps
//!
//! - [`ConcurrentMap`]: coarse-grained reader/writer locking over a single
//!   hash map
//!
//! ## Choosing a Map
//!
//! - Use `ConcurrentMap` whenever you need shared mutable key-value state
//!   and the working set fits in memory
//! - Reads are shared and cheap; writes serialize on one lock, so very
//!   write-heavy workloads on many cores may prefer a sharded design

pub mod concurrent;

pub use self::concurrent::ConcurrentMap;


#[cfg(test)]
mod proptests;
