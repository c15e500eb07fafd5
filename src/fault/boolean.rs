//! Fault builder for boolean assertions.

use super::{Fault, FaultBuilder};
use crate::render::Rendered;

/// Renders faults for `bool` values.
#[derive(Debug, Clone)]
pub struct BooleanFaultBuilder {
    actual: Option<bool>,
    message: Option<String>,
}

impl BooleanFaultBuilder {
    /// Create a builder for `actual`.
    pub fn new(actual: Option<bool>) -> Self {
        Self {
            actual,
            message: None,
        }
    }

    /// Fault for a failed `is_true`.
    pub fn is_true(&self) -> Fault {
        self.compose(format!(
            "Required True, but found {}",
            Rendered(self.actual())
        ))
    }

    /// Fault for a failed `is_false`.
    pub fn is_false(&self) -> Fault {
        self.compose(format!(
            "Required False, but found {}",
            Rendered(self.actual())
        ))
    }
}

impl FaultBuilder for BooleanFaultBuilder {
    type Actual = bool;

    fn actual(&self) -> Option<&bool> {
        self.actual.as_ref()
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    fn set_message(&mut self, message: Option<String>) {
        self.message = message;
    }
}
