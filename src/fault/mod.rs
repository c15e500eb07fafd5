//! Faults: descriptions of would-be assertion failures.
//!
//! A [`Fault`] pairs a [`FaultKind`] with a resolved message. Assertions
//! raise faults through [`Fault::build`]; tests state the failure they expect
//! as a fault and compare it against what was raised.
//!
//! - [`builder`] - The shared [`FaultBuilder`] trait and the plain builder
//! - [`boolean`], [`optional`], [`collection`], [`stream`] - Typed builders
//!
//! # Example
//!
//! ```
//! use require::{fault, FaultBuilder, Require};
//!
//! let expected = fault(Some("abc")).is_null();
//! assert_eq!(expected.message(), Some("Required null, but found \"abc\""));
//!
//! let outcome = require::that("abc").is_null().map(|_| ());
//! assert!(expected.validate_result(outcome).is_ok());
//! ```

pub mod boolean;
pub mod builder;
pub mod collection;
pub mod optional;
pub mod stream;

use std::error::Error as StdError;
use std::fmt;

use crate::error::{AssertionError, Result};
use crate::output;
use crate::render::Rendered;

pub use boolean::BooleanFaultBuilder;
pub use builder::{FaultBuilder, RequireFaultBuilder};
pub use collection::CollectionFaultBuilder;
pub use optional::OptionalFaultBuilder;
pub use stream::StreamFaultBuilder;

/// The kind of error a fault raises.
///
/// Every assertion failure, including usage errors, uses the same kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaultKind {
    Assertion,
}

impl fmt::Display for FaultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FaultKind::Assertion => f.write_str("AssertionError"),
        }
    }
}

/// An immutable (kind, message) pair.
///
/// Equality is by value, so a fault built by an assertion equals a fault
/// built independently from the same inputs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fault {
    kind: FaultKind,
    message: Option<String>,
}

impl Fault {
    /// Create an assertion fault with the given message.
    pub fn assertion(message: impl Into<String>) -> Self {
        Self {
            kind: FaultKind::Assertion,
            message: Some(message.into()),
        }
    }

    /// Create an assertion fault without a message.
    pub fn bare() -> Self {
        Self {
            kind: FaultKind::Assertion,
            message: None,
        }
    }

    /// The kind of error this fault raises.
    pub fn kind(&self) -> FaultKind {
        self.kind
    }

    /// The resolved message, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Produce the error this fault describes.
    pub fn build(&self) -> AssertionError {
        AssertionError::new(self.kind, self.message.clone(), None)
    }

    /// Produce the error this fault describes, caused by `cause`.
    pub fn build_with_cause<E>(&self, cause: E) -> AssertionError
    where
        E: StdError + Send + Sync + 'static,
    {
        AssertionError::new(self.kind, self.message.clone(), Some(Box::new(cause)))
    }

    /// Check that `error` was raised from a fault equal to this one.
    ///
    /// # Errors
    ///
    /// Returns an `AssertionError` naming both messages if the kind or the
    /// message differ.
    pub fn validate(&self, error: &AssertionError) -> Result<()> {
        if error.kind() == self.kind && error.message() == self.message() {
            return Ok(());
        }
        Err(Fault::assertion(format!(
            "Expected {} with message {}, but found {} with message {}",
            self.kind,
            Rendered(self.message()),
            error.kind(),
            Rendered(error.message()),
        ))
        .build())
    }

    /// Check that `outcome` failed with exactly this fault.
    ///
    /// # Errors
    ///
    /// Returns an `AssertionError` if `outcome` succeeded or failed with a
    /// different fault.
    pub fn validate_result<T>(&self, outcome: Result<T>) -> Result<()> {
        match outcome {
            Ok(_) => Err(Fault::assertion(format!(
                "Expected {} with message {}, but the assertion passed",
                self.kind,
                Rendered(self.message()),
            ))
            .build()),
            Err(error) => self.validate(&error),
        }
    }

    /// Write this fault to the error output and hand it back unchanged.
    pub fn print(self) -> Self {
        output::write_error_line(&self.to_string());
        self
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => write!(f, "{}: {}", self.kind, message),
            None => write!(f, "{}", self.kind),
        }
    }
}
