//! # Collection Assertions
//!
//! Minimal fluent assertions over sequences: `should()`, an optional reason,
//! and element-wise equality with either `PartialEq` or a custom predicate.
//!
//! ```rust
//! use comparer_assertions::assertions::Should;
//!
//! let actual = vec![1, 2, 3];
//! assert!(actual.should().equal([1, 2, 3]).is_ok());
//!
//! let failure = actual.should().because("the list is sorted").equal([1, 3, 2]).unwrap_err();
//! assert!(failure.message().starts_with("Expected collection to be equal to"));
//! ```

pub mod collection;

pub use collection::{AndConstraint, AssertionFailure, CollectionAssertions, Should};
