//! Error types for comparer registration, lookup and sequence comparison.

use crate::assertions::AssertionFailure;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ComparerError {
    /// A value handed to runtime registration holds no comparer
    #[error(
        "{type_name} is not a comparer value: expected a ComparerEntry or a comparer implementing ElementComparer and EqualityComparer<T>."
    )]
    InvalidComparerArgument { type_name: String },
    /// No default comparer has been registered for the element type
    #[error(
        "EqualityComparer<{element_type}> was not registered. Use ComparerRegistry::register_comparer to register a comparer first or call equal_with_comparer with an explicit comparer."
    )]
    ComparerNotRegistered { element_type: String },
    /// Stored comparer does not match the requested element type.
    ///
    /// Internal-invariant guard: entries are built with their element type
    /// and comparer together, so the public API never produces this.
    #[error("Comparer {comparer_type} stored for {element_type} has an unexpected type")]
    ComparerTypeMismatch {
        element_type: String,
        comparer_type: String,
    },
    #[error(transparent)]
    AssertionFailed(#[from] AssertionFailure),
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl ComparerError {
    /// True for the missing-registration case
    pub fn is_not_registered(&self) -> bool {
        matches!(self, ComparerError::ComparerNotRegistered { .. })
    }

    /// The assertion failure, if this error came from a failed comparison
    pub fn assertion_failure(&self) -> Option<&AssertionFailure> {
        match self {
            ComparerError::AssertionFailed(failure) => Some(failure),
            _ => None,
        }
    }
}

pub type ComparerResult<T> = std::result::Result<T, ComparerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_registered_message_names_type_and_remedies() {
        let err = ComparerError::ComparerNotRegistered {
            element_type: "Foo".to_string(),
        };
        let message = err.to_string();

        assert!(message.starts_with("EqualityComparer<Foo> was not registered."));
        assert!(message.contains("register_comparer"));
        assert!(message.contains("equal_with_comparer"));
        assert!(err.is_not_registered());
    }

    #[test]
    fn test_invalid_argument_message() {
        let err = ComparerError::InvalidComparerArgument {
            type_name: "Box<dyn Any + Send + Sync>".to_string(),
        };
        assert!(err
            .to_string()
            .starts_with("Box<dyn Any + Send + Sync> is not a comparer value: expected a ComparerEntry"));
        assert!(!err.is_not_registered());
        assert!(err.assertion_failure().is_none());
    }
}
