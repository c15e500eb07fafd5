//! The mutability probe.
//!
//! A collection is probed by making one structural change and undoing it:
//!
//! 1. Remove the element reached last by iteration.
//! 2. If one was removed, add it back. The add is the probe.
//! 3. If the collection was empty, add an element from the supplier and
//!    remove it again. The add is the probe.
//!
//! An [`UnsupportedOperation`] at any step means the collection is
//! immutable. It comes back as [`Mutability::Immutable`], not as an error.
//! On every path the collection ends with the elements it started with.

use tracing::{trace, warn};

use super::Collection;
use crate::error::{Result, UnsupportedOperation};
use crate::util::not_null;

/// Outcome of a mutability probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutability {
    /// The probe modified and restored the collection.
    Mutable,
    /// The collection refused a modification.
    Immutable(UnsupportedOperation),
}

impl Mutability {
    /// Whether the probe found the collection mutable.
    pub fn is_mutable(&self) -> bool {
        matches!(self, Mutability::Mutable)
    }
}

/// Probe `collection` for mutability.
///
/// `supplier` is only called when the collection is empty.
///
/// # Errors
///
/// Returns the not-null fault if the collection is empty and `supplier`
/// yields `None`.
pub fn probe<C, F>(collection: &mut C, supplier: F) -> Result<Mutability>
where
    C: Collection + ?Sized,
    F: FnOnce() -> Option<C::Element>,
{
    trace!(kind = %C::KIND, len = collection.len(), "probing collection mutability");

    let last = match collection.remove_last() {
        Ok(last) => last,
        Err(unsupported) => return Ok(Mutability::Immutable(unsupported)),
    };

    match last {
        Some(element) => match collection.add_element(element) {
            Ok(()) => Ok(Mutability::Mutable),
            Err(unsupported) => {
                warn!(
                    kind = %C::KIND,
                    "collection allowed removal but refused re-insertion; an element was lost"
                );
                Ok(Mutability::Immutable(unsupported))
            }
        },
        None => {
            let element = not_null(supplier())?;
            if let Err(unsupported) = collection.add_element(element) {
                return Ok(Mutability::Immutable(unsupported));
            }
            match collection.remove_last() {
                Ok(_) => Ok(Mutability::Mutable),
                Err(unsupported) => Ok(Mutability::Immutable(unsupported)),
            }
        }
    }
}
