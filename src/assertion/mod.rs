//! Typed assertion wrappers.
//!
//! Every wrapper holds one actual value (possibly null) and an optional
//! custom message, and implements [`Require`] for the checks all of them
//! share. Checks consume the wrapper and hand it back on success, so they
//! chain with `?`:
//!
//! ```
//! use require::Require;
//!
//! # fn main() -> require::Result<()> {
//! let name = require::that("abc")
//!     .with_message("user name")
//!     .is_not_null()?
//!     .is_equal_to("abc")?
//!     .done();
//! assert_eq!(name, Some("abc"));
//! # Ok(())
//! # }
//! ```
//!
//! - [`pointer`] - Any value behind a reference
//! - [`boolean`] - `bool` with `is_true` / `is_false`
//! - [`optional`] - `Option<T>` with presence checks
//! - [`collection`] - Lists and sets, including the mutability probe
//! - [`stream`] - Any iterator, materialized once

pub mod boolean;
pub mod collection;
pub mod optional;
pub mod pointer;
pub mod stream;

use std::fmt::Debug;

use crate::diff;
use crate::error::Result;
use crate::fault::FaultBuilder;

pub use boolean::RequireBoolean;
pub use collection::{RequireCollection, RequireList, RequireSet};
pub use optional::RequireOptional;
pub use pointer::RequirePointer;
pub use stream::RequireStream;

/// Checks shared by every assertion wrapper.
///
/// Implementors give access to the actual value, the custom message, and a
/// fault builder over both; the checks themselves are provided.
pub trait Require: Sized {
    /// The type compared and rendered by the shared checks.
    type Actual: ?Sized + PartialEq + Debug;

    /// Fault builder paired with this wrapper.
    type Faults<'f>: FaultBuilder<Actual = Self::Actual>
    where
        Self: 'f;

    /// What [`done`](Require::done) hands back.
    type Done;

    /// Whether a failed `is_equal_to` writes a diff to the error output.
    const REPORTS_DIFF: bool = true;

    /// The actual value, `None` when null.
    fn actual(&self) -> Option<&Self::Actual>;

    /// A fault builder for the current actual value and custom message.
    fn faults(&self) -> Self::Faults<'_>;

    /// Storage for the custom message.
    fn message_slot(&mut self) -> &mut Option<String>;

    /// Finish the chain and take the actual value back.
    fn done(self) -> Self::Done;

    /// Whether two non-null values are the same instance.
    fn same_instance(actual: &Self::Actual, expected: &Self::Actual) -> bool {
        std::ptr::eq(actual, expected)
    }

    /// Prepend `message` to every failure raised from here on.
    fn with_message(mut self, message: impl Into<String>) -> Self {
        *self.message_slot() = Some(message.into());
        self
    }

    /// Drop the custom message.
    fn with_default_message(mut self) -> Self {
        *self.message_slot() = None;
        self
    }

    /// Require the actual value to be null.
    fn is_null(self) -> Result<Self> {
        if self.actual().is_none() {
            return Ok(self);
        }
        let fault = self.faults().is_null();
        Err(fault.build())
    }

    /// Require the actual value to be present.
    fn is_not_null(self) -> Result<Self> {
        if self.actual().is_some() {
            return Ok(self);
        }
        let fault = self.faults().is_not_null();
        Err(fault.build())
    }

    /// Require the actual value to be `expected` itself, not a copy.
    ///
    /// Null is the same as null.
    fn is_the_same_as<'e>(self, expected: impl Into<Option<&'e Self::Actual>>) -> Result<Self>
    where
        Self::Actual: 'e,
    {
        let expected = expected.into();
        let same = match (self.actual(), expected) {
            (None, None) => true,
            (Some(actual), Some(expected)) => Self::same_instance(actual, expected),
            _ => false,
        };
        if same {
            return Ok(self);
        }
        let fault = self.faults().is_the_same_as(expected);
        Err(fault.build())
    }

    /// Require the actual value not to be `expected` itself.
    fn is_not_the_same_as<'e>(
        self,
        expected: impl Into<Option<&'e Self::Actual>>,
    ) -> Result<Self>
    where
        Self::Actual: 'e,
    {
        let expected = expected.into();
        let same = match (self.actual(), expected) {
            (None, None) => true,
            (Some(actual), Some(expected)) => Self::same_instance(actual, expected),
            _ => false,
        };
        if !same {
            return Ok(self);
        }
        let fault = self.faults().is_not_the_same_as();
        Err(fault.build())
    }

    /// Require the actual value to equal `expected`.
    ///
    /// Null equals only null. On failure the active diff generator's output
    /// is written to the error output first, for wrappers that report diffs.
    fn is_equal_to<'e>(self, expected: impl Into<Option<&'e Self::Actual>>) -> Result<Self>
    where
        Self::Actual: 'e,
    {
        let expected = expected.into();
        if self.actual() == expected {
            return Ok(self);
        }
        if Self::REPORTS_DIFF {
            diff::report(self.actual(), expected);
        }
        let fault = self.faults().is_equal_to(expected);
        Err(fault.build())
    }

    /// Require the actual value to differ from `expected`.
    fn is_not_equal_to<'e>(self, expected: impl Into<Option<&'e Self::Actual>>) -> Result<Self>
    where
        Self::Actual: 'e,
    {
        let expected = expected.into();
        if self.actual() != expected {
            return Ok(self);
        }
        let fault = self.faults().is_not_equal_to(expected);
        Err(fault.build())
    }
}
