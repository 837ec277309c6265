//! # Equality Comparers
//!
//! The capability every comparer offers: a two-argument equality test between
//! two instances of a fixed element type. Hashing is not part of it.
//!
//! ```rust
//! use comparer_assertions::comparer::{comparer_fn, EqualityComparer};
//!
//! let case_insensitive = comparer_fn(|a: &String, b: &String| a.eq_ignore_ascii_case(b));
//! assert!(case_insensitive.equals(&"Ok".to_string(), &"OK".to_string()));
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// Equality test between two values of `T`
pub trait EqualityComparer<T: ?Sized>: Send + Sync {
    fn equals(&self, x: &T, y: &T) -> bool;
}

/// Declares the element type a comparer is written for.
///
/// Lets [`ComparerRegistry::register_inferred`](crate::registry::ComparerRegistry::register_inferred)
/// work out the element type from the comparer type alone.
pub trait ElementComparer: Send + Sync + 'static {
    type Element: 'static;
}

impl<T: ?Sized, C: EqualityComparer<T> + ?Sized> EqualityComparer<T> for Arc<C> {
    fn equals(&self, x: &T, y: &T) -> bool {
        (**self).equals(x, y)
    }
}

impl<T: ?Sized, C: EqualityComparer<T> + ?Sized> EqualityComparer<T> for Box<C> {
    fn equals(&self, x: &T, y: &T) -> bool {
        (**self).equals(x, y)
    }
}

impl<T: ?Sized, C: EqualityComparer<T> + ?Sized> EqualityComparer<T> for &C {
    fn equals(&self, x: &T, y: &T) -> bool {
        (**self).equals(x, y)
    }
}

/// Comparer backed by a closure
pub struct FnComparer<T: ?Sized, F> {
    func: F,
    _element: PhantomData<fn(&T, &T)>,
}

impl<T: ?Sized, F> FnComparer<T, F>
where
    F: Fn(&T, &T) -> bool + Send + Sync,
{
    pub fn new(func: F) -> Self {
        Self {
            func,
            _element: PhantomData,
        }
    }
}

impl<T: ?Sized, F> EqualityComparer<T> for FnComparer<T, F>
where
    F: Fn(&T, &T) -> bool + Send + Sync,
{
    fn equals(&self, x: &T, y: &T) -> bool {
        (self.func)(x, y)
    }
}

impl<T: ?Sized, F> fmt::Debug for FnComparer<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnComparer")
            .field("element", &std::any::type_name::<T>())
            .finish()
    }
}

/// Wrap a closure as an [`EqualityComparer`]
pub fn comparer_fn<T: ?Sized, F>(func: F) -> FnComparer<T, F>
where
    F: Fn(&T, &T) -> bool + Send + Sync,
{
    FnComparer::new(func)
}
