//! Assertions over any referenced value.

use std::fmt::Debug;

use super::Require;
use crate::fault::{FaultBuilder, RequireFaultBuilder};

/// Assertion wrapper for a value behind a reference.
#[derive(Debug, Clone)]
pub struct RequirePointer<'a, T: ?Sized> {
    actual: Option<&'a T>,
    message: Option<String>,
}

impl<'a, T: ?Sized> RequirePointer<'a, T> {
    /// Wrap `actual`.
    pub fn new(actual: Option<&'a T>) -> Self {
        Self {
            actual,
            message: None,
        }
    }

    pub(crate) fn with_message_slot(mut self, message: Option<String>) -> Self {
        self.message = message;
        self
    }
}

impl<'a, T: ?Sized + PartialEq + Debug> Require for RequirePointer<'a, T> {
    type Actual = T;
    type Faults<'f>
        = RequireFaultBuilder<'f, T>
    where
        Self: 'f;
    type Done = Option<&'a T>;

    fn actual(&self) -> Option<&T> {
        self.actual
    }

    fn faults(&self) -> RequireFaultBuilder<'_, T> {
        let mut faults = RequireFaultBuilder::new(self.actual);
        faults.set_message(self.message.clone());
        faults
    }

    fn message_slot(&mut self) -> &mut Option<String> {
        &mut self.message
    }

    fn done(self) -> Option<&'a T> {
        self.actual
    }
}
