//! A separate-chaining hash map over 64-bit integer keys.
//!
//! This crate provides [`LongKeyedMap`], a hash table built from scratch rather
//! than on top of `std::collections::HashMap`. Keys are always `i64`; values are
//! an arbitrary type parameter. The API mirrors the standard library's map types
//! where the two overlap:
//!
//! - [`insert`](LongKeyedMap::insert) / [`get`](LongKeyedMap::get) /
//!   [`remove`](LongKeyedMap::remove) - O(1) average
//! - [`contains_key`](LongKeyedMap::contains_key) /
//!   [`contains_value`](LongKeyedMap::contains_value) - membership tests
//! - [`keys`](LongKeyedMap::keys) / [`values`](LongKeyedMap::values) /
//!   [`iter`](LongKeyedMap::iter) - traversal in bucket order
//!
//! # Example
//!
//! ```
//! use long_keyed_map::LongKeyedMap;
//!
//! let mut sessions = LongKeyedMap::new();
//! sessions.insert(1001, "alice");
//! sessions.insert(1002, "bob");
//!
//! assert_eq!(sessions.get(1001), Some(&"alice"));
//! assert_eq!(sessions.len(), 2);
//!
//! // Replacing a value hands back the old one.
//! assert_eq!(sessions.insert(1002, "carol"), Some("bob"));
//! assert_eq!(sessions.remove(1001), Some("alice"));
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **Fixed-width keys** - `i64` keys hash by floor modulo, no hasher state
//! - **Arena-backed chains** - Entries live in a slot arena and are addressed by
//!   index; growth rewires chain links without moving or copying a single entry
//! - **No unsafe code** - The crate is `#![forbid(unsafe_code)]`
//!
//! # Implementation
//!
//! The table is an array of bucket heads, each the start of a singly-linked
//! chain of entries threaded through an arena. A key's bucket is
//! `key.rem_euclid(bucket_count)`, so negative keys land in bounds. The table
//! starts at 16 buckets and doubles whenever the entry count reaches 3/4 of the
//! bucket count; it never shrinks. New entries are prepended to their bucket's
//! chain, which makes iteration order an artifact of insertion history and
//! resizes - callers must not rely on it.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod raw;

pub mod long_keyed_map;

pub use long_keyed_map::LongKeyedMap;
