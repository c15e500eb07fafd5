//! Fault builder for `Option` assertions.
//!
//! An optional actual has three states (null, empty, populated); the
//! templates name which one was found.
//!
//! Contained values render with `Debug`, so a string keeps its quotes:
//! `it contains '"abc"'`.

use std::fmt::Debug;

use super::{Fault, FaultBuilder};
use crate::render::Rendered;

pub const IS_PRESENT: &str = "Required Optional to contain value, it is empty";
pub const IS_PRESENT_NULL: &str =
    "Required Optional to contain value, however is is null ( as opposed to empty )";
pub const IS_EMPTY: &str = "Required Optional to be empty";

/// Renders faults for `Option<T>` values.
#[derive(Debug, Clone)]
pub struct OptionalFaultBuilder<'a, T> {
    actual: Option<&'a Option<T>>,
    message: Option<String>,
}

impl<'a, T: Debug> OptionalFaultBuilder<'a, T> {
    /// Create a builder for `actual`.
    pub fn new(actual: Option<&'a Option<T>>) -> Self {
        Self {
            actual,
            message: None,
        }
    }

    /// Fault for a failed `is_present`.
    pub fn is_present(&self) -> Fault {
        let message = match self.actual {
            None => IS_PRESENT_NULL,
            Some(_) => IS_PRESENT,
        };
        self.compose(message.to_string())
    }

    /// Fault for a failed `is_empty`.
    pub fn is_empty(&self) -> Fault {
        let message = match self.actual {
            None => format!("{IS_EMPTY}, however it is null"),
            Some(Some(value)) => format!("{IS_EMPTY}, it contains '{value:?}'"),
            Some(None) => IS_EMPTY.to_string(),
        };
        self.compose(message)
    }

    /// Fault for a failed `contains`.
    pub fn contains(&self, expected: Option<&T>) -> Fault {
        let state = match self.actual {
            None => "is null".to_string(),
            Some(None) => "is empty".to_string(),
            Some(Some(value)) => format!("contains '{value:?}'"),
        };
        self.compose(format!(
            "Require Optional to contain {}, however it {state}",
            Rendered(expected)
        ))
    }
}

impl<T: Debug> FaultBuilder for OptionalFaultBuilder<'_, T> {
    type Actual = Option<T>;

    fn actual(&self) -> Option<&Option<T>> {
        self.actual
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    fn set_message(&mut self, message: Option<String>) {
        self.message = message;
    }
}
