//! Immutable collection wrapper.

use std::fmt;
use std::ops::Deref;

use super::{Collection, CollectionKind, ListLike, SetLike};
use crate::error::UnsupportedOperation;

/// An owned collection that refuses structural modification.
///
/// Reads go through `Deref`. `add_element` always fails with
/// [`UnsupportedOperation`]; `remove_last` fails whenever there is an element
/// to remove, and finds nothing on an empty collection. Renders and compares
/// exactly like the wrapped collection.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Frozen<C>(C);

impl<C> Frozen<C> {
    /// Freeze `collection`.
    pub fn new(collection: C) -> Self {
        Self(collection)
    }

    /// Give the wrapped collection back.
    pub fn into_inner(self) -> C {
        self.0
    }
}

impl<C> Deref for Frozen<C> {
    type Target = C;

    fn deref(&self) -> &C {
        &self.0
    }
}

impl<C> From<C> for Frozen<C> {
    fn from(collection: C) -> Self {
        Self(collection)
    }
}

impl<C: FromIterator<E>, E> FromIterator<E> for Frozen<C> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<C: fmt::Debug> fmt::Debug for Frozen<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl<C: Collection> Collection for Frozen<C> {
    type Element = C::Element;
    type Target = C::Target;
    const KIND: CollectionKind = C::KIND;

    fn target(&self) -> &C::Target {
        self.0.target()
    }

    fn len(&self) -> usize {
        self.0.len()
    }

    fn contains_element(&self, element: &C::Element) -> bool {
        self.0.contains_element(element)
    }

    fn remove_last(&mut self) -> Result<Option<C::Element>, UnsupportedOperation> {
        if self.0.is_empty() {
            return Ok(None);
        }
        Err(UnsupportedOperation::new("remove"))
    }

    fn add_element(&mut self, _element: C::Element) -> Result<(), UnsupportedOperation> {
        Err(UnsupportedOperation::new("add"))
    }
}

impl<C: ListLike> ListLike for Frozen<C> {}

impl<C: SetLike> SetLike for Frozen<C> {}
