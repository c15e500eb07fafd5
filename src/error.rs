//! Error types for assertion failures.
//!
//! This module defines [`AssertionError`], the single error type every
//! failing assertion produces, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Every failure, including misuse such as a missing required value, is an
//!   `AssertionError`; callers tell them apart by message only
//! - Errors are built from a [`Fault`](crate::fault::Fault), never by hand
//! - [`UnsupportedOperation`] is a signal, not a failure: the mutability
//!   probe turns it into a value and only attaches it as a cause

use std::error::Error as StdError;
use thiserror::Error;

use crate::fault::FaultKind;

/// A failed assertion.
///
/// The display form is the resolved fault message, or an empty string for a
/// bare [`fail`](crate::fail).
#[derive(Debug, Error)]
#[error("{}", .message.as_deref().unwrap_or_default())]
pub struct AssertionError {
    kind: FaultKind,
    message: Option<String>,
    #[source]
    cause: Option<Box<dyn StdError + Send + Sync + 'static>>,
}

impl AssertionError {
    pub(crate) fn new(
        kind: FaultKind,
        message: Option<String>,
        cause: Option<Box<dyn StdError + Send + Sync + 'static>>,
    ) -> Self {
        Self {
            kind,
            message,
            cause,
        }
    }

    /// The kind of fault this error was raised from.
    pub fn kind(&self) -> FaultKind {
        self.kind
    }

    /// The resolved message, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// The underlying error that triggered this failure, if any.
    pub fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.cause.as_deref()
    }
}

/// A collection refused a structural modification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{operation} is not supported by this collection")]
pub struct UnsupportedOperation {
    /// The rejected operation (e.g., "add", "remove").
    pub operation: &'static str,
}

impl UnsupportedOperation {
    /// Create a signal for the named operation.
    pub fn new(operation: &'static str) -> Self {
        Self { operation }
    }
}

/// Result type alias for assertion chains.
pub type Result<T> = std::result::Result<T, AssertionError>;
