//! # Comparer Registry
//!
//! Type-indexed store of default equality comparers.
//!
//! ## Key Features
//!
//! - **One map, one lock**: a single `RwLock` guards every read and write
//! - **Last registration wins**: registering again for a type replaces the entry
//! - **Shared read-only comparers**: lookups hand out `Arc` clones
//! - **Injectable**: construct one per test session, or share [`ComparerRegistry::global`]
//!
//! ## Usage
//!
//! ```rust
//! use comparer_assertions::comparer::EqualityComparer;
//! use comparer_assertions::registry::ComparerRegistry;
//!
//! #[derive(Default)]
//! struct CaseInsensitive;
//!
//! impl EqualityComparer<String> for CaseInsensitive {
//!     fn equals(&self, x: &String, y: &String) -> bool {
//!         x.eq_ignore_ascii_case(y)
//!     }
//! }
//!
//! let registry = ComparerRegistry::new();
//! registry.register_comparer::<String, CaseInsensitive>();
//!
//! let comparer = registry.lookup::<String>().unwrap();
//! assert!(comparer.equals(&"abc".to_string(), &"ABC".to_string()));
//! assert!(registry.lookup::<u8>().is_err());
//! ```

use crate::comparer::{ElementComparer, EqualityComparer};
use crate::config::RegistryConfig;
use crate::error::{ComparerError, ComparerResult};
use crate::registry::element_type::{short_type_name, ElementType};
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock};
use tracing::{debug, info, warn};

static GLOBAL_REGISTRY: OnceLock<Arc<ComparerRegistry>> = OnceLock::new();

/// A comparer paired with the element type it compares.
///
/// The erased value is always an `Arc<dyn EqualityComparer<T>>` where `T` is
/// the entry's element type. Type-erased registration recognises this shape
/// only.
#[derive(Clone)]
pub struct ComparerEntry {
    element_type: ElementType,
    comparer_type: &'static str,
    registered_at: DateTime<Utc>,
    comparer: Arc<dyn Any + Send + Sync>,
}

impl ComparerEntry {
    pub fn new<T, C>(comparer: C) -> Self
    where
        T: ?Sized + 'static,
        C: EqualityComparer<T> + 'static,
    {
        let shared: Arc<dyn EqualityComparer<T>> = Arc::new(comparer);
        Self {
            element_type: ElementType::of::<T>(),
            comparer_type: std::any::type_name::<C>(),
            registered_at: Utc::now(),
            comparer: Arc::new(shared),
        }
    }

    /// Entry for a comparer that declares its own element type
    pub fn inferred<C>(comparer: C) -> Self
    where
        C: ElementComparer + EqualityComparer<C::Element>,
    {
        Self::new::<C::Element, C>(comparer)
    }

    pub fn element_type(&self) -> ElementType {
        self.element_type
    }

    pub fn comparer_type(&self) -> &'static str {
        self.comparer_type
    }

    pub fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }

    /// Recover the typed comparer.
    ///
    /// `new` pairs the element type with the comparer, so a lookup keyed by
    /// `TypeId::of::<T>()` always downcasts; the mismatch error guards that
    /// invariant instead of panicking.
    fn comparer_for<T: ?Sized + 'static>(&self) -> ComparerResult<Arc<dyn EqualityComparer<T>>> {
        self.comparer
            .downcast_ref::<Arc<dyn EqualityComparer<T>>>()
            .cloned()
            .ok_or_else(|| ComparerError::ComparerTypeMismatch {
                element_type: self.element_type.short_name(),
                comparer_type: short_type_name(self.comparer_type),
            })
    }
}

impl fmt::Debug for ComparerEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComparerEntry")
            .field("element_type", &self.element_type.name())
            .field("comparer_type", &self.comparer_type)
            .field("registered_at", &self.registered_at)
            .finish()
    }
}

mod sealed {
    pub trait Sealed {}
}

/// Values accepted by [`ComparerRegistry::register_comparer_value`]
pub trait ComparerValue: sealed::Sealed + Send + Sync + 'static {
    /// The entry to register, or `None` when the value holds no comparer
    fn into_entry(self) -> Option<ComparerEntry>;
}

impl sealed::Sealed for ComparerEntry {}

impl ComparerValue for ComparerEntry {
    fn into_entry(self) -> Option<ComparerEntry> {
        Some(self)
    }
}

impl<C> sealed::Sealed for C where C: ElementComparer + EqualityComparer<C::Element> {}

impl<C> ComparerValue for C
where
    C: ElementComparer + EqualityComparer<C::Element>,
{
    fn into_entry(self) -> Option<ComparerEntry> {
        Some(ComparerEntry::inferred(self))
    }
}

impl sealed::Sealed for Box<dyn Any + Send + Sync> {}

impl ComparerValue for Box<dyn Any + Send + Sync> {
    fn into_entry(self) -> Option<ComparerEntry> {
        self.downcast::<ComparerEntry>().ok().map(|entry| *entry)
    }
}

/// Snapshot of registry contents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistryStats {
    pub total_comparers: usize,
    pub element_types: Vec<String>,
    pub last_registered_at: Option<DateTime<Utc>>,
    pub thread_safe: bool,
}

/// Thread-safe registry of default comparers keyed by element type
pub struct ComparerRegistry {
    comparers: RwLock<HashMap<TypeId, ComparerEntry>>,
    config: RegistryConfig,
}

impl ComparerRegistry {
    /// Create an empty registry with default configuration
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        debug!(
            environment = %config.environment,
            warn_on_overwrite = config.warn_on_overwrite,
            "Creating new ComparerRegistry"
        );

        Self {
            comparers: RwLock::new(HashMap::new()),
            config,
        }
    }

    /// Process-wide shared registry.
    ///
    /// Configured from the environment on first use; falls back to defaults
    /// when the environment is invalid.
    pub fn global() -> Arc<ComparerRegistry> {
        GLOBAL_REGISTRY
            .get_or_init(|| {
                let config = RegistryConfig::from_env().unwrap_or_else(|e| {
                    warn!(error = %e, "Invalid registry configuration, using defaults");
                    RegistryConfig::default()
                });
                Arc::new(ComparerRegistry::with_config(config))
            })
            .clone()
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Register `comparer` as the default for `T`, replacing any previous one
    pub fn register<T, C>(&self, comparer: C)
    where
        T: ?Sized + 'static,
        C: EqualityComparer<T> + 'static,
    {
        self.register_entry(ComparerEntry::new::<T, C>(comparer));
    }

    /// Register a default-constructed `C` for the explicitly named `T`
    pub fn register_comparer<T, C>(&self)
    where
        T: ?Sized + 'static,
        C: EqualityComparer<T> + Default + 'static,
    {
        self.register::<T, C>(C::default());
    }

    /// Register a default-constructed `C` for the element type it declares
    pub fn register_inferred<C>(&self)
    where
        C: ElementComparer + EqualityComparer<C::Element> + Default,
    {
        self.register_entry(ComparerEntry::inferred(C::default()));
    }

    /// Register a comparer value whose element type is discovered from the
    /// value itself.
    ///
    /// Accepts a [`ComparerEntry`], any comparer that declares its element
    /// type through [`ElementComparer`], or a `Box<dyn Any + Send + Sync>`
    /// holding a [`ComparerEntry`]. A boxed value holding anything else is
    /// rejected with [`ComparerError::InvalidComparerArgument`].
    pub fn register_comparer_value<V>(&self, value: V) -> ComparerResult<ElementType>
    where
        V: ComparerValue,
    {
        match value.into_entry() {
            Some(entry) => {
                let element_type = entry.element_type();
                self.register_entry(entry);
                Ok(element_type)
            }
            None => {
                let type_name = short_type_name(std::any::type_name::<V>());
                warn!(value_type = %type_name, "Rejected registration of a non-comparer value");
                Err(ComparerError::InvalidComparerArgument { type_name })
            }
        }
    }

    pub fn register_entry(&self, entry: ComparerEntry) {
        let element_type = entry.element_type();
        let comparer_type = entry.comparer_type();

        let replaced = {
            let mut comparers = self.comparers.write();
            comparers.insert(element_type.id(), entry)
        };

        match replaced {
            Some(previous) if self.config.warn_on_overwrite => warn!(
                element_type = %element_type,
                previous = previous.comparer_type(),
                comparer = comparer_type,
                "Comparer already registered, replacing"
            ),
            Some(previous) => debug!(
                element_type = %element_type,
                previous = previous.comparer_type(),
                comparer = comparer_type,
                "Replacing registered comparer"
            ),
            None => info!(
                element_type = %element_type,
                comparer = comparer_type,
                "Registered comparer"
            ),
        }
    }

    /// The comparer registered for `T`
    pub fn lookup<T: ?Sized + 'static>(&self) -> ComparerResult<Arc<dyn EqualityComparer<T>>> {
        let element_type = ElementType::of::<T>();

        let found = {
            let comparers = self.comparers.read();
            comparers
                .get(&element_type.id())
                .map(ComparerEntry::comparer_for::<T>)
        };

        match found {
            Some(comparer) => {
                debug!(element_type = %element_type, "Resolved registered comparer");
                comparer
            }
            None => {
                warn!(element_type = %element_type, "No comparer registered");
                Err(ComparerError::ComparerNotRegistered {
                    element_type: element_type.short_name(),
                })
            }
        }
    }

    pub fn contains<T: ?Sized + 'static>(&self) -> bool {
        self.comparers.read().contains_key(&TypeId::of::<T>())
    }

    pub fn len(&self) -> usize {
        self.comparers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.comparers.read().is_empty()
    }

    pub fn registered_types(&self) -> Vec<ElementType> {
        self.comparers
            .read()
            .values()
            .map(ComparerEntry::element_type)
            .collect()
    }

    pub fn stats(&self) -> RegistryStats {
        let comparers = self.comparers.read();

        let mut element_types: Vec<String> = comparers
            .values()
            .map(|entry| entry.element_type().short_name())
            .collect();
        element_types.sort();

        RegistryStats {
            total_comparers: comparers.len(),
            element_types,
            last_registered_at: comparers.values().map(ComparerEntry::registered_at).max(),
            thread_safe: true,
        }
    }
}

impl Default for ComparerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ComparerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComparerRegistry")
            .field("comparers", &self.len())
            .field("config", &self.config)
            .finish()
    }
}
