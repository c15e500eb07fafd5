//! Fault builder for stream assertions.

use std::fmt::Debug;

use super::{Fault, FaultBuilder};
use crate::render::Rendered;

pub const IS_EMPTY: &str = "Required Stream to be empty";
const NULL_SUFFIX: &str = ", however it is null";

/// Renders faults for a materialized stream.
///
/// Equality uses the stream template instead of the shared one.
#[derive(Debug, Clone)]
pub struct StreamFaultBuilder<'a, E> {
    actual: Option<&'a [E]>,
    message: Option<String>,
}

impl<'a, E: Debug> StreamFaultBuilder<'a, E> {
    /// Create a builder for the stream content `actual`.
    pub fn new(actual: Option<&'a [E]>) -> Self {
        Self {
            actual,
            message: None,
        }
    }

    /// Fault for a failed `is_empty`.
    pub fn is_empty(&self) -> Fault {
        self.with_null_suffix(IS_EMPTY.to_string())
    }

    /// Fault for a failed `is_equal_to_set`.
    pub fn is_equal_to_set<S: ?Sized + Debug>(&self, expected: Option<&S>) -> Fault {
        self.same_values(&Rendered(expected))
    }

    fn same_values(&self, expected: &dyn Debug) -> Fault {
        self.with_null_suffix(format!(
            "Stream was required to contain same values as {expected:?}"
        ))
    }

    fn with_null_suffix(&self, mut message: String) -> Fault {
        if self.actual.is_none() {
            message.push_str(NULL_SUFFIX);
        }
        self.compose(message)
    }
}

impl<E: Debug> FaultBuilder for StreamFaultBuilder<'_, E> {
    type Actual = [E];

    fn actual(&self) -> Option<&[E]> {
        self.actual
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    fn set_message(&mut self, message: Option<String>) {
        self.message = message;
    }

    fn is_equal_to(&self, expected: Option<&[E]>) -> Fault {
        self.same_values(&Rendered(expected))
    }
}
