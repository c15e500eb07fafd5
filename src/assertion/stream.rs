//! Assertions over iterators.
//!
//! The iterator is drained once when the wrapper is created; every check
//! runs against the collected elements, and [`done`](Require::done) hands
//! out a fresh iterator over them.

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use super::{Require, RequireCollection};
use crate::collection::{Collection, Frozen, SetLike};
use crate::error::Result;
use crate::fault::{FaultBuilder, StreamFaultBuilder};

/// Assertion wrapper for a nullable stream of elements.
#[derive(Debug, Clone)]
pub struct RequireStream<E> {
    actual: Option<Vec<E>>,
    message: Option<String>,
}

impl<E: PartialEq + Debug> RequireStream<E> {
    /// Drain `actual` into a new wrapper.
    pub fn new<I>(actual: Option<I>) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        Self {
            actual: actual.map(|elements| elements.into_iter().collect()),
            message: None,
        }
    }

    /// Require no elements. A null stream fails.
    pub fn is_empty(self) -> Result<Self> {
        if self.actual.as_ref().is_some_and(Vec::is_empty) {
            return Ok(self);
        }
        Err(self.faults().is_empty().build())
    }

    /// Require the distinct elements to be exactly `expected`, which may be
    /// any supported set (`HashSet`, `BTreeSet`, or a frozen one).
    ///
    /// Order and repetition are ignored. Null equals only null.
    pub fn is_equal_to_set<'e, S>(self, expected: impl Into<Option<&'e S>>) -> Result<Self>
    where
        S: SetLike<Element = E> + 'e,
        E: Eq + Hash,
    {
        let expected = expected.into();
        let equal = match (&self.actual, expected) {
            (None, None) => true,
            (Some(elements), Some(expected)) => {
                let distinct: HashSet<&E> = elements.iter().collect();
                distinct.len() == expected.len()
                    && distinct.iter().all(|e| expected.contains_element(*e))
            }
            _ => false,
        };
        if equal {
            return Ok(self);
        }
        Err(self
            .faults()
            .is_equal_to_set(expected.map(<S as Collection>::target))
            .build())
    }

    /// Continue with a list assertion over the elements.
    pub fn to_require_list(self) -> RequireCollection<Frozen<Vec<E>>> {
        RequireCollection::new(self.actual.map(Frozen::new)).with_message_slot(self.message)
    }

    /// Continue with a set assertion over the distinct elements.
    pub fn to_require_set(self) -> RequireCollection<Frozen<HashSet<E>>>
    where
        E: Eq + Hash,
    {
        let set = self
            .actual
            .map(|elements| elements.into_iter().collect::<Frozen<HashSet<E>>>());
        RequireCollection::new(set).with_message_slot(self.message)
    }
}

impl<E: PartialEq + Debug> Require for RequireStream<E> {
    type Actual = [E];
    type Faults<'f>
        = StreamFaultBuilder<'f, E>
    where
        Self: 'f;
    type Done = Option<std::vec::IntoIter<E>>;

    const REPORTS_DIFF: bool = false;

    fn actual(&self) -> Option<&[E]> {
        self.actual.as_deref()
    }

    fn faults(&self) -> StreamFaultBuilder<'_, E> {
        let mut faults = StreamFaultBuilder::new(self.actual.as_deref());
        faults.set_message(self.message.clone());
        faults
    }

    fn message_slot(&mut self) -> &mut Option<String> {
        &mut self.message
    }

    fn done(self) -> Option<std::vec::IntoIter<E>> {
        self.actual.map(Vec::into_iter)
    }
}
