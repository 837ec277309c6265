#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Comparer Assertions
//!
//! Collection assertions that compare elements with a custom equality
//! definition instead of `PartialEq`, plus a thread-safe registry of default
//! comparers per element type.
//!
//! ## Resolution Rule
//!
//! - An explicitly supplied comparer always wins
//! - Without one, the comparer registered for the element type is used
//! - With neither, the call fails with [`ComparerError::ComparerNotRegistered`];
//!   there is no silent fallback to `PartialEq`
//!
//! ## Module Organization
//!
//! - [`comparer`] - The equality-comparer capability and closure adapter
//! - [`registry`] - Type-indexed comparer registry
//! - [`assertions`] - Minimal sequence assertions (`should()`, `equal`, `equal_by`)
//! - [`facade`] - `equal_with_comparer` and `equal_with_registered*`
//! - [`config`] - Environment-driven configuration
//! - [`error`] - Structured error handling
//! - [`logging`] - `tracing` subscriber setup
//!
//! ## Quick Start
//!
//! ```rust
//! use comparer_assertions::prelude::*;
//!
//! #[derive(Debug)]
//! struct Item {
//!     int_prop: i32,
//!     string_prop: String,
//! }
//!
//! #[derive(Default)]
//! struct ByAllProps;
//!
//! impl EqualityComparer<Item> for ByAllProps {
//!     fn equals(&self, x: &Item, y: &Item) -> bool {
//!         x.int_prop == y.int_prop && x.string_prop == y.string_prop
//!     }
//! }
//!
//! impl ElementComparer for ByAllProps {
//!     type Element = Item;
//! }
//!
//! # fn main() -> Result<(), ComparerError> {
//! let one = || Item { int_prop: 1, string_prop: "One".to_string() };
//! let actual = vec![one()];
//! let expected = vec![one()];
//!
//! let registry = ComparerRegistry::new();
//! registry.register_inferred::<ByAllProps>();
//!
//! actual.should().equal_with_registered_in(&expected, &registry)?;
//! # Ok(())
//! # }
//! ```

pub mod assertions;
pub mod comparer;
pub mod config;
pub mod error;
pub mod facade;
pub mod logging;
pub mod registry;
pub mod test_utils;

pub use assertions::{AndConstraint, AssertionFailure, CollectionAssertions, Should};
pub use comparer::{comparer_fn, ElementComparer, EqualityComparer, FnComparer};
pub use config::RegistryConfig;
pub use error::{ComparerError, ComparerResult};
pub use facade::EqualWithComparer;
pub use registry::{ComparerEntry, ComparerRegistry, ComparerValue, ElementType, RegistryStats};

/// Everything needed at a typical call site
pub mod prelude {
    pub use crate::assertions::Should;
    pub use crate::comparer::{comparer_fn, ElementComparer, EqualityComparer};
    pub use crate::error::{ComparerError, ComparerResult};
    pub use crate::facade::EqualWithComparer;
    pub use crate::registry::{ComparerEntry, ComparerRegistry, ComparerValue};
}
