//! Fault builder for list and set assertions.

use std::fmt::Debug;

use super::{Fault, FaultBuilder};
use crate::collection::CollectionKind;
use crate::util::not_null_fault;

/// Renders faults for collections.
///
/// Templates name the collection by its kind label (`List` or `Set`).
/// Content checks against a null collection produce the plain not-null
/// fault.
#[derive(Debug, Clone)]
pub struct CollectionFaultBuilder<'a, T: ?Sized> {
    actual: Option<&'a T>,
    kind: CollectionKind,
    message: Option<String>,
}

impl<'a, T: ?Sized + Debug> CollectionFaultBuilder<'a, T> {
    /// Create a builder for `actual` of the given kind.
    pub fn new(actual: Option<&'a T>, kind: CollectionKind) -> Self {
        Self {
            actual,
            kind,
            message: None,
        }
    }

    /// The kind named in templates.
    pub fn kind(&self) -> CollectionKind {
        self.kind
    }

    /// Fault for a failed `is_empty`.
    pub fn is_empty(&self) -> Fault {
        match self.actual {
            None => not_null_fault(),
            Some(actual) => self.compose(format!(
                "Required {} to be empty, but contains {actual:?}",
                self.kind
            )),
        }
    }

    /// Fault for a failed `contains`.
    pub fn contains<E: ?Sized + Debug>(&self, element: &E) -> Fault {
        match self.actual {
            None => not_null_fault(),
            Some(actual) => self.compose(format!(
                "Required that {element:?} is an element of {actual:?}"
            )),
        }
    }

    /// Fault for a failed `does_not_contain`.
    pub fn does_not_contain<E: ?Sized + Debug>(&self, element: &E) -> Fault {
        match self.actual {
            None => not_null_fault(),
            Some(actual) => self.compose(format!(
                "Required that {element:?} is NOT an element of {actual:?}"
            )),
        }
    }

    /// Fault for a failed `is_mutable`.
    pub fn is_mutable(&self) -> Fault {
        self.compose(format!(
            "Required {} to be mutable, but is immutable",
            self.kind
        ))
    }

    /// Fault for a failed `is_immutable`.
    pub fn is_immutable(&self) -> Fault {
        self.compose(format!(
            "Required {} to be immutable, but is mutable",
            self.kind
        ))
    }
}

impl<T: ?Sized + Debug> FaultBuilder for CollectionFaultBuilder<'_, T> {
    type Actual = T;

    fn actual(&self) -> Option<&T> {
        self.actual
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    fn set_message(&mut self, message: Option<String>) {
        self.message = message;
    }
}
