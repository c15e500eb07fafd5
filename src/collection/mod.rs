//! Collections that collection assertions run against.
//!
//! [`Collection`] is the small capability the assertions need: membership,
//! size, and the two structural modifications the mutability probe uses.
//! Standard collections implement it as mutable; [`Frozen`] wraps any of
//! them and refuses every modification.
//!
//! - [`Collection`], [`ListLike`], [`SetLike`] - The capability traits
//! - [`Frozen`] - Immutable view over an owned collection
//! - [`probe`] - The mutability probe
//!
//! # Example
//!
//! ```
//! use require::collection::{probe, Collection, Frozen, Mutability};
//!
//! let mut list = vec!["a", "b"];
//! let outcome = probe::probe(&mut list, || Some("x")).unwrap();
//! assert!(matches!(outcome, Mutability::Mutable));
//! assert_eq!(list, ["a", "b"]);
//!
//! let mut frozen: Frozen<Vec<&str>> = ["a", "b"].into_iter().collect();
//! let outcome = probe::probe(&mut frozen, || Some("x")).unwrap();
//! assert!(matches!(outcome, Mutability::Immutable(_)));
//! assert_eq!(frozen.len(), 2);
//! ```

mod frozen;
pub mod probe;

use std::collections::{BTreeSet, HashSet, VecDeque};
use std::fmt::{self, Debug};
use std::hash::{BuildHasher, Hash};

use crate::error::UnsupportedOperation;

pub use frozen::Frozen;
pub use probe::Mutability;

/// Whether a collection behaves as a list or a set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionKind {
    List,
    Set,
}

impl CollectionKind {
    /// Label used in failure messages.
    pub fn label(self) -> &'static str {
        match self {
            CollectionKind::List => "List",
            CollectionKind::Set => "Set",
        }
    }
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A collection the assertions can inspect and probe.
///
/// An implementation that rejects `add_element` must never remove an
/// element in `remove_last`, otherwise the probe cannot put it back.
pub trait Collection {
    /// Element type.
    type Element: PartialEq + Debug;

    /// The value compared and rendered by assertions.
    type Target: ?Sized + PartialEq + Debug;

    /// List or set.
    const KIND: CollectionKind;

    /// View used for equality, identity, and rendering.
    fn target(&self) -> &Self::Target;

    /// Number of elements.
    fn len(&self) -> usize;

    /// Whether there are no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Membership by the collection's own equality.
    fn contains_element(&self, element: &Self::Element) -> bool;

    /// Remove and return the element reached last by iteration.
    fn remove_last(&mut self) -> Result<Option<Self::Element>, UnsupportedOperation>;

    /// Add an element.
    fn add_element(&mut self, element: Self::Element) -> Result<(), UnsupportedOperation>;
}

/// Marker for collections with list semantics.
pub trait ListLike: Collection {}

/// Marker for collections with set semantics.
pub trait SetLike: Collection {}

impl<E: PartialEq + Debug> Collection for Vec<E> {
    type Element = E;
    type Target = Vec<E>;
    const KIND: CollectionKind = CollectionKind::List;

    fn target(&self) -> &Vec<E> {
        self
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn contains_element(&self, element: &E) -> bool {
        self.contains(element)
    }

    fn remove_last(&mut self) -> Result<Option<E>, UnsupportedOperation> {
        Ok(self.pop())
    }

    fn add_element(&mut self, element: E) -> Result<(), UnsupportedOperation> {
        self.push(element);
        Ok(())
    }
}

impl<E: PartialEq + Debug> ListLike for Vec<E> {}

impl<E: PartialEq + Debug> Collection for VecDeque<E> {
    type Element = E;
    type Target = VecDeque<E>;
    const KIND: CollectionKind = CollectionKind::List;

    fn target(&self) -> &VecDeque<E> {
        self
    }

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn contains_element(&self, element: &E) -> bool {
        self.contains(element)
    }

    fn remove_last(&mut self) -> Result<Option<E>, UnsupportedOperation> {
        Ok(self.pop_back())
    }

    fn add_element(&mut self, element: E) -> Result<(), UnsupportedOperation> {
        self.push_back(element);
        Ok(())
    }
}

impl<E: PartialEq + Debug> ListLike for VecDeque<E> {}

impl<E, S> Collection for HashSet<E, S>
where
    E: Eq + Hash + Debug,
    S: BuildHasher,
{
    type Element = E;
    type Target = HashSet<E, S>;
    const KIND: CollectionKind = CollectionKind::Set;

    fn target(&self) -> &HashSet<E, S> {
        self
    }

    fn len(&self) -> usize {
        HashSet::len(self)
    }

    fn contains_element(&self, element: &E) -> bool {
        self.contains(element)
    }

    fn remove_last(&mut self) -> Result<Option<E>, UnsupportedOperation> {
        // Iteration order is arbitrary; take whatever comes last and keep the rest.
        let mut drained: Vec<E> = self.drain().collect();
        let last = drained.pop();
        self.extend(drained);
        Ok(last)
    }

    fn add_element(&mut self, element: E) -> Result<(), UnsupportedOperation> {
        self.insert(element);
        Ok(())
    }
}

impl<E, S> SetLike for HashSet<E, S>
where
    E: Eq + Hash + Debug,
    S: BuildHasher,
{
}

impl<E: Ord + Debug> Collection for BTreeSet<E> {
    type Element = E;
    type Target = BTreeSet<E>;
    const KIND: CollectionKind = CollectionKind::Set;

    fn target(&self) -> &BTreeSet<E> {
        self
    }

    fn len(&self) -> usize {
        BTreeSet::len(self)
    }

    fn contains_element(&self, element: &E) -> bool {
        self.contains(element)
    }

    fn remove_last(&mut self) -> Result<Option<E>, UnsupportedOperation> {
        Ok(self.pop_last())
    }

    fn add_element(&mut self, element: E) -> Result<(), UnsupportedOperation> {
        self.insert(element);
        Ok(())
    }
}

impl<E: Ord + Debug> SetLike for BTreeSet<E> {}

impl<C: Collection + ?Sized> Collection for &mut C {
    type Element = C::Element;
    type Target = C::Target;
    const KIND: CollectionKind = C::KIND;

    fn target(&self) -> &C::Target {
        (**self).target()
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn contains_element(&self, element: &C::Element) -> bool {
        (**self).contains_element(element)
    }

    fn remove_last(&mut self) -> Result<Option<C::Element>, UnsupportedOperation> {
        (**self).remove_last()
    }

    fn add_element(&mut self, element: C::Element) -> Result<(), UnsupportedOperation> {
        (**self).add_element(element)
    }
}

impl<C: ListLike + ?Sized> ListLike for &mut C {}

impl<C: SetLike + ?Sized> SetLike for &mut C {}
