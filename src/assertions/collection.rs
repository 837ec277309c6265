use std::borrow::Borrow;
use std::fmt::{self, Debug};
use thiserror::Error;

/// Failed assertion with its diagnostic message
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AssertionFailure {
    message: String,
}

impl AssertionFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Entry point for assertions on a sequence
pub trait Should<T> {
    fn should(&self) -> CollectionAssertions<'_, T>;
}

impl<T> Should<T> for [T] {
    fn should(&self) -> CollectionAssertions<'_, T> {
        CollectionAssertions::new(self)
    }
}

/// Assertions over a borrowed sequence
pub struct CollectionAssertions<'a, T> {
    subject: &'a [T],
    because: Option<String>,
}

/// Successful assertion, chainable through [`AndConstraint::and`]
pub struct AndConstraint<'a, T> {
    assertions: CollectionAssertions<'a, T>,
}

impl<'a, T> AndConstraint<'a, T> {
    pub fn and(self) -> CollectionAssertions<'a, T> {
        self.assertions
    }
}

impl<T> Debug for AndConstraint<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AndConstraint")
            .field("subject_len", &self.assertions.subject.len())
            .finish()
    }
}

impl<'a, T> CollectionAssertions<'a, T> {
    pub fn new(subject: &'a [T]) -> Self {
        Self {
            subject,
            because: None,
        }
    }

    pub fn subject(&self) -> &'a [T] {
        self.subject
    }

    /// Reason included in failure messages
    pub fn because(mut self, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        self.because = (!reason.trim().is_empty()).then_some(reason);
        self
    }

    pub fn reason(&self) -> Option<&str> {
        self.because.as_deref()
    }

    /// Element-wise equality using `PartialEq`
    pub fn equal<I>(self, expected: I) -> Result<AndConstraint<'a, T>, AssertionFailure>
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
        T: PartialEq + Debug,
    {
        self.equal_by(expected, |actual, expected| actual == expected)
    }

    /// Element-wise equality using `predicate(actual, expected)`
    pub fn equal_by<I, F>(
        self,
        expected: I,
        mut predicate: F,
    ) -> Result<AndConstraint<'a, T>, AssertionFailure>
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
        F: FnMut(&T, &T) -> bool,
        T: Debug,
    {
        let expected: Vec<I::Item> = expected.into_iter().collect();
        let expected: Vec<&T> = expected
            .iter()
            .map(|item| <I::Item as Borrow<T>>::borrow(item))
            .collect();

        let actual_len = self.subject.len();
        let expected_len = expected.len();

        if actual_len < expected_len {
            return Err(self.failure(
                &expected,
                format!("contains {} item(s) less", expected_len - actual_len),
            ));
        }
        if actual_len > expected_len {
            return Err(self.failure(
                &expected,
                format!("contains {} item(s) too many", actual_len - expected_len),
            ));
        }

        let mismatch = self
            .subject
            .iter()
            .zip(expected.iter())
            .position(|(actual, expected)| !predicate(actual, *expected));

        if let Some(index) = mismatch {
            return Err(self.failure(
                &expected,
                format!(
                    "differs at index {index}: expected {:?}, found {:?}",
                    expected[index], self.subject[index]
                ),
            ));
        }

        Ok(AndConstraint { assertions: self })
    }

    fn failure(&self, expected: &[&T], detail: String) -> AssertionFailure
    where
        T: Debug,
    {
        let reason = match self.because.as_deref() {
            Some(reason) if reason.trim_start().starts_with("because") => format!(" {reason}"),
            Some(reason) => format!(" because {reason}"),
            None => String::new(),
        };

        AssertionFailure::new(format!(
            "Expected collection to be equal to {expected:?}{reason}, but {:?} {detail}.",
            self.subject
        ))
    }
}
