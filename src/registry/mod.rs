//! # Registry Infrastructure
//!
//! Type-indexed registration and discovery of default equality comparers.
//!
//! ```text
//! Registry Infrastructure
//! ├── ElementType         (type identity used as the key)
//! ├── ComparerEntry       (element type + shared comparer + metadata)
//! └── ComparerRegistry    (one map, one lock)
//! ```

pub mod comparer_registry;
pub mod element_type;

// Re-export main types for easy access
pub use comparer_registry::{ComparerEntry, ComparerRegistry, ComparerValue, RegistryStats};
pub use element_type::ElementType;
