//! Assertions over `Option<T>`.
//!
//! The wrapper itself may be null (no `Option` at all), which is reported
//! differently from an empty `Option`.

use std::fmt::Debug;

use super::{Require, RequirePointer};
use crate::error::Result;
use crate::fault::{FaultBuilder, OptionalFaultBuilder};
use crate::util::not_null;

/// Assertion wrapper for a reference to an `Option<T>`.
#[derive(Debug, Clone)]
pub struct RequireOptional<'a, T> {
    actual: Option<&'a Option<T>>,
    message: Option<String>,
}

impl<'a, T: PartialEq + Debug> RequireOptional<'a, T> {
    /// Wrap `actual`.
    pub fn new(actual: Option<&'a Option<T>>) -> Self {
        Self {
            actual,
            message: None,
        }
    }

    /// Require a contained value.
    pub fn is_present(self) -> Result<Self> {
        if matches!(self.actual, Some(Some(_))) {
            return Ok(self);
        }
        Err(self.faults().is_present().build())
    }

    /// Require no contained value. A null wrapper fails.
    pub fn is_empty(self) -> Result<Self> {
        if matches!(self.actual, Some(None)) {
            return Ok(self);
        }
        Err(self.faults().is_empty().build())
    }

    /// Require the contained value to equal `expected`.
    ///
    /// An empty `Option` contains `None`, so `contains(None)` passes on it.
    /// A null wrapper contains nothing.
    pub fn contains<'e>(self, expected: impl Into<Option<&'e T>>) -> Result<Self>
    where
        T: 'e,
    {
        let expected = expected.into();
        if self.actual.is_some_and(|value| value.as_ref() == expected) {
            return Ok(self);
        }
        Err(self.faults().contains(expected).build())
    }

    /// Continue with an assertion over the contained value.
    ///
    /// # Errors
    ///
    /// Returns the not-null fault if the wrapper is null. An empty `Option`
    /// continues as a null pointer.
    pub fn value(self) -> Result<RequirePointer<'a, T>> {
        let option = not_null(self.actual)?;
        Ok(RequirePointer::new(option.as_ref()).with_message_slot(self.message))
    }
}

impl<'a, T: PartialEq + Debug> Require for RequireOptional<'a, T> {
    type Actual = Option<T>;
    type Faults<'f>
        = OptionalFaultBuilder<'f, T>
    where
        Self: 'f;
    type Done = Option<&'a Option<T>>;

    fn actual(&self) -> Option<&Option<T>> {
        self.actual
    }

    fn faults(&self) -> OptionalFaultBuilder<'_, T> {
        let mut faults = OptionalFaultBuilder::new(self.actual);
        faults.set_message(self.message.clone());
        faults
    }

    fn message_slot(&mut self) -> &mut Option<String> {
        &mut self.message
    }

    fn done(self) -> Option<&'a Option<T>> {
        self.actual
    }
}
