//! Assertions over lists and sets.
//!
//! The wrapper owns what it is given. Pass `&mut collection` to probe a
//! collection in place and keep using it afterwards.

use tracing::debug;

use super::Require;
use crate::collection::probe::{probe, Mutability};
use crate::collection::Collection;
use crate::error::Result;
use crate::fault::{CollectionFaultBuilder, FaultBuilder};
use crate::util::not_null_fault;

/// Assertion wrapper for a nullable collection.
#[derive(Debug, Clone)]
pub struct RequireCollection<C> {
    actual: Option<C>,
    message: Option<String>,
}

/// A collection assertion created from a list.
pub type RequireList<C> = RequireCollection<C>;

/// A collection assertion created from a set.
pub type RequireSet<C> = RequireCollection<C>;

impl<C: Collection> RequireCollection<C> {
    /// Wrap `actual`.
    pub fn new(actual: Option<C>) -> Self {
        Self {
            actual,
            message: None,
        }
    }

    pub(crate) fn with_message_slot(mut self, message: Option<String>) -> Self {
        self.message = message;
        self
    }

    /// Require no elements. A null collection fails with the not-null fault.
    pub fn is_empty(self) -> Result<Self> {
        if self.actual.as_ref().is_some_and(|c| c.is_empty()) {
            return Ok(self);
        }
        Err(self.faults().is_empty().build())
    }

    /// Require `element` to be a member.
    pub fn contains(self, element: &C::Element) -> Result<Self> {
        if self
            .actual
            .as_ref()
            .is_some_and(|c| c.contains_element(element))
        {
            return Ok(self);
        }
        Err(self.faults().contains(element).build())
    }

    /// Require `element` not to be a member.
    pub fn does_not_contain(self, element: &C::Element) -> Result<Self> {
        let Some(collection) = self.actual.as_ref() else {
            return Err(not_null_fault().build());
        };
        if !collection.contains_element(element) {
            return Ok(self);
        }
        Err(self.faults().does_not_contain(element).build())
    }

    /// Require the collection to accept structural modification.
    ///
    /// `supplier` provides a probe element and is only called when the
    /// collection is empty. The collection's elements are unchanged
    /// afterwards. A refusal is attached as the cause of the failure.
    ///
    /// # Errors
    ///
    /// Fails with the not-null fault if the collection is null, or if it is
    /// empty and `supplier` yields `None`.
    pub fn is_mutable<F>(mut self, supplier: F) -> Result<Self>
    where
        F: FnOnce() -> Option<C::Element>,
    {
        match self.probe(supplier)? {
            Mutability::Mutable => Ok(self),
            Mutability::Immutable(unsupported) => {
                Err(self.faults().is_mutable().build_with_cause(unsupported))
            }
        }
    }

    /// Require the collection to refuse structural modification.
    ///
    /// # Errors
    ///
    /// Same usage errors as [`is_mutable`](Self::is_mutable).
    pub fn is_immutable<F>(mut self, supplier: F) -> Result<Self>
    where
        F: FnOnce() -> Option<C::Element>,
    {
        match self.probe(supplier)? {
            Mutability::Immutable(unsupported) => {
                debug!(operation = unsupported.operation, "collection refused modification");
                Ok(self)
            }
            Mutability::Mutable => Err(self.faults().is_immutable().build()),
        }
    }

    fn probe<F>(&mut self, supplier: F) -> Result<Mutability>
    where
        F: FnOnce() -> Option<C::Element>,
    {
        let collection = self.actual.as_mut().ok_or_else(|| not_null_fault().build())?;
        probe(collection, supplier)
    }
}

impl<C: Collection> Require for RequireCollection<C> {
    type Actual = C::Target;
    type Faults<'f>
        = CollectionFaultBuilder<'f, C::Target>
    where
        Self: 'f;
    type Done = Option<C>;

    fn actual(&self) -> Option<&C::Target> {
        self.actual.as_ref().map(Collection::target)
    }

    fn faults(&self) -> CollectionFaultBuilder<'_, C::Target> {
        let mut faults = CollectionFaultBuilder::new(self.actual(), C::KIND);
        faults.set_message(self.message.clone());
        faults
    }

    fn message_slot(&mut self) -> &mut Option<String> {
        &mut self.message
    }

    fn done(self) -> Option<C> {
        self.actual
    }
}
