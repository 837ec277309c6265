//! # Sequence Comparison with Comparers
//!
//! Extends [`CollectionAssertions`] with element equality supplied by an
//! [`EqualityComparer`], either passed explicitly or resolved from a
//! [`ComparerRegistry`].
//!
//! Resolution rule: an explicit comparer always wins. The registry is only
//! consulted by the `equal_with_registered*` operations, once per call and
//! before any element is read.
//!
//! ```rust
//! use comparer_assertions::prelude::*;
//!
//! #[derive(Debug)]
//! struct Item {
//!     id: u32,
//! }
//!
//! #[derive(Default)]
//! struct ById;
//!
//! impl EqualityComparer<Item> for ById {
//!     fn equals(&self, x: &Item, y: &Item) -> bool {
//!         x.id == y.id
//!     }
//! }
//!
//! let actual = vec![Item { id: 1 }, Item { id: 2 }];
//! let expected = vec![Item { id: 1 }, Item { id: 2 }];
//!
//! actual.should().equal_with_comparer(&expected, &ById).unwrap();
//!
//! let registry = ComparerRegistry::new();
//! assert!(actual.should().equal_with_registered_in(&expected, &registry).is_err());
//!
//! registry.register_comparer::<Item, ById>();
//! actual.should().equal_with_registered_in(&expected, &registry).unwrap();
//! ```

use crate::assertions::{AndConstraint, AssertionFailure, CollectionAssertions};
use crate::comparer::EqualityComparer;
use crate::error::ComparerResult;
use crate::registry::{ComparerRegistry, ElementType};
use std::borrow::Borrow;
use std::fmt::Debug;
use tracing::debug;

pub trait EqualWithComparer<'a, T> {
    /// Compare element-wise using `comparer.equals`
    fn equal_with_comparer<I, C>(
        self,
        expected: I,
        comparer: &C,
    ) -> Result<AndConstraint<'a, T>, AssertionFailure>
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
        C: EqualityComparer<T> + ?Sized;

    /// Compare element-wise using the comparer registered for `T` in `registry`
    fn equal_with_registered_in<I>(
        self,
        expected: I,
        registry: &ComparerRegistry,
    ) -> ComparerResult<AndConstraint<'a, T>>
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
        T: 'static;

    /// Compare element-wise using the comparer registered for `T` in the
    /// global registry
    fn equal_with_registered<I>(self, expected: I) -> ComparerResult<AndConstraint<'a, T>>
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
        T: 'static;
}

impl<'a, T: Debug> EqualWithComparer<'a, T> for CollectionAssertions<'a, T> {
    fn equal_with_comparer<I, C>(
        self,
        expected: I,
        comparer: &C,
    ) -> Result<AndConstraint<'a, T>, AssertionFailure>
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
        C: EqualityComparer<T> + ?Sized,
    {
        self.equal_by(expected, |actual, expected| comparer.equals(actual, expected))
    }

    fn equal_with_registered_in<I>(
        self,
        expected: I,
        registry: &ComparerRegistry,
    ) -> ComparerResult<AndConstraint<'a, T>>
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
        T: 'static,
    {
        let comparer = registry.lookup::<T>()?;

        debug!(
            element_type = %ElementType::of::<T>(),
            subject_len = self.subject().len(),
            "Comparing sequences with registered comparer"
        );

        Ok(self.equal_with_comparer(expected, comparer.as_ref())?)
    }

    fn equal_with_registered<I>(self, expected: I) -> ComparerResult<AndConstraint<'a, T>>
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
        T: 'static,
    {
        let registry = ComparerRegistry::global();
        self.equal_with_registered_in(expected, &registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assertions::Should;
    use crate::comparer::comparer_fn;
    use crate::error::ComparerError;

    #[derive(Debug, Clone, Copy)]
    struct Reading(f64);

    #[derive(Debug)]
    struct NeverRegistered;

    fn within_tenth() -> impl EqualityComparer<Reading> {
        comparer_fn(|a: &Reading, b: &Reading| (a.0 - b.0).abs() < 0.1)
    }

    #[test]
    fn test_explicit_comparer() {
        let actual = [Reading(1.0), Reading(2.04)];
        let expected = [Reading(1.05), Reading(2.0)];

        assert!(actual
            .should()
            .equal_with_comparer(expected, &within_tenth())
            .is_ok());
    }

    #[test]
    fn test_explicit_comparer_failure_comes_from_host() {
        let actual = [Reading(1.0)];
        let failure = actual
            .should()
            .equal_with_comparer([Reading(3.0)], &within_tenth())
            .unwrap_err();

        assert!(failure
            .message()
            .starts_with("Expected collection to be equal to [Reading(3.0)]"));
    }

    #[test]
    fn test_trait_object_comparer() {
        let comparer: Box<dyn EqualityComparer<Reading>> = Box::new(within_tenth());
        let actual = [Reading(0.0)];

        assert!(actual
            .should()
            .equal_with_comparer([Reading(0.01)], comparer.as_ref())
            .is_ok());
    }

    #[test]
    fn test_registered_comparer_in_injected_registry() {
        let registry = ComparerRegistry::new();
        registry.register::<Reading, _>(within_tenth());

        let actual = [Reading(5.0)];
        assert!(actual
            .should()
            .equal_with_registered_in([Reading(5.05)], &registry)
            .is_ok());
    }

    #[test]
    fn test_missing_registration_is_reported() {
        let registry = ComparerRegistry::new();
        let actual = [NeverRegistered];

        let err = actual
            .should()
            .equal_with_registered_in([NeverRegistered], &registry)
            .unwrap_err();

        assert_eq!(
            err,
            ComparerError::ComparerNotRegistered {
                element_type: "NeverRegistered".to_string()
            }
        );
    }

    #[test]
    fn test_registered_mismatch_wraps_assertion_failure() {
        let registry = ComparerRegistry::new();
        registry.register::<Reading, _>(within_tenth());

        let err = [Reading(1.0)]
            .should()
            .equal_with_registered_in([Reading(9.0)], &registry)
            .unwrap_err();

        let failure = err.assertion_failure().unwrap();
        assert!(failure.message().contains("differs at index 0"));
    }

    #[test]
    fn test_global_registry_lookup() {
        let err = [NeverRegistered]
            .should()
            .equal_with_registered([NeverRegistered])
            .unwrap_err();
        assert!(err.is_not_registered());
    }
}
