//! Assertions over `bool`.

use super::Require;
use crate::error::Result;
use crate::fault::{BooleanFaultBuilder, FaultBuilder};

/// Assertion wrapper for a nullable `bool`.
///
/// Booleans are compared by value for identity checks too; two `true`s are
/// the same instance.
#[derive(Debug, Clone)]
pub struct RequireBoolean {
    actual: Option<bool>,
    message: Option<String>,
}

impl RequireBoolean {
    /// Wrap `actual`.
    pub fn new(actual: Option<bool>) -> Self {
        Self {
            actual,
            message: None,
        }
    }

    /// Require `true`. Null fails.
    pub fn is_true(self) -> Result<Self> {
        if self.actual == Some(true) {
            return Ok(self);
        }
        Err(self.faults().is_true().build())
    }

    /// Require `false`. Null fails.
    pub fn is_false(self) -> Result<Self> {
        if self.actual == Some(false) {
            return Ok(self);
        }
        Err(self.faults().is_false().build())
    }
}

impl Require for RequireBoolean {
    type Actual = bool;
    type Faults<'f> = BooleanFaultBuilder;
    type Done = Option<bool>;

    fn actual(&self) -> Option<&bool> {
        self.actual.as_ref()
    }

    fn faults(&self) -> BooleanFaultBuilder {
        let mut faults = BooleanFaultBuilder::new(self.actual);
        faults.set_message(self.message.clone());
        faults
    }

    fn message_slot(&mut self) -> &mut Option<String> {
        &mut self.message
    }

    fn done(self) -> Option<bool> {
        self.actual
    }

    fn same_instance(actual: &bool, expected: &bool) -> bool {
        actual == expected
    }
}
