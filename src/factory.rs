//! Entry points: one constructor per assertion wrapper and per fault builder.
//!
//! Assertion factories take anything convertible into an `Option`, so both
//! present values and `None` can be passed directly:
//!
//! ```
//! use require::Require;
//!
//! assert!(require::that("abc").is_not_null().is_ok());
//! assert!(require::that(None::<&str>).is_null().is_ok());
//! assert!(require::that_bool(true).is_true().is_ok());
//! assert!(require::that_list(vec![1, 2]).contains(&2).is_ok());
//! assert!(require::that_stream(1..3).is_equal_to(&[1, 2][..]).is_ok());
//! ```
//!
//! Fault factories build the failure a matching assertion would raise, so
//! tests can state it up front:
//!
//! ```
//! let list = vec![1];
//! let expected = require::fault_list(&list).contains(&2);
//! let outcome = require::that_list(list).contains(&2);
//! assert!(expected.validate_result(outcome).is_ok());
//! ```

use std::fmt::Debug;

use crate::assertion::{
    RequireBoolean, RequireCollection, RequireList, RequireOptional, RequirePointer, RequireSet,
    RequireStream,
};
use crate::collection::{Collection, CollectionKind, ListLike, SetLike};
use crate::fault::{
    BooleanFaultBuilder, CollectionFaultBuilder, OptionalFaultBuilder, RequireFaultBuilder,
    StreamFaultBuilder,
};

/// Assert on a referenced value.
pub fn that<'a, T: ?Sized>(actual: impl Into<Option<&'a T>>) -> RequirePointer<'a, T> {
    RequirePointer::new(actual.into())
}

/// Assert on a boolean.
pub fn that_bool(actual: impl Into<Option<bool>>) -> RequireBoolean {
    RequireBoolean::new(actual.into())
}

/// Assert on an `Option`.
pub fn that_option<'a, T: PartialEq + Debug>(
    actual: impl Into<Option<&'a Option<T>>>,
) -> RequireOptional<'a, T> {
    RequireOptional::new(actual.into())
}

/// Assert on a list. Pass `&mut list` to keep ownership.
pub fn that_list<C: ListLike>(actual: impl Into<Option<C>>) -> RequireList<C> {
    RequireCollection::new(actual.into())
}

/// Assert on a set. Pass `&mut set` to keep ownership.
pub fn that_set<C: SetLike>(actual: impl Into<Option<C>>) -> RequireSet<C> {
    RequireCollection::new(actual.into())
}

/// Assert on any supported collection.
pub fn that_collection<C: Collection>(actual: impl Into<Option<C>>) -> RequireCollection<C> {
    RequireCollection::new(actual.into())
}

/// Assert on the elements of an iterator, drained immediately.
pub fn that_stream<I>(actual: impl Into<Option<I>>) -> RequireStream<I::Item>
where
    I: IntoIterator,
    I::Item: PartialEq + Debug,
{
    RequireStream::new(actual.into())
}

/// Faults for a referenced value.
pub fn fault<'a, T: ?Sized>(actual: impl Into<Option<&'a T>>) -> RequireFaultBuilder<'a, T> {
    RequireFaultBuilder::new(actual.into())
}

/// Faults for a boolean.
pub fn fault_bool(actual: impl Into<Option<bool>>) -> BooleanFaultBuilder {
    BooleanFaultBuilder::new(actual.into())
}

/// Faults for an `Option`.
pub fn fault_option<'a, T: Debug>(
    actual: impl Into<Option<&'a Option<T>>>,
) -> OptionalFaultBuilder<'a, T> {
    OptionalFaultBuilder::new(actual.into())
}

/// Faults for a list, rendered as `actual`.
pub fn fault_list<'a, T: ?Sized + Debug>(
    actual: impl Into<Option<&'a T>>,
) -> CollectionFaultBuilder<'a, T> {
    CollectionFaultBuilder::new(actual.into(), CollectionKind::List)
}

/// Faults for a set, rendered as `actual`.
pub fn fault_set<'a, T: ?Sized + Debug>(
    actual: impl Into<Option<&'a T>>,
) -> CollectionFaultBuilder<'a, T> {
    CollectionFaultBuilder::new(actual.into(), CollectionKind::Set)
}

/// Faults for a supported collection, labelled by its kind.
pub fn fault_collection<'a, C: Collection + 'a>(
    actual: impl Into<Option<&'a C>>,
) -> CollectionFaultBuilder<'a, C::Target> {
    CollectionFaultBuilder::new(actual.into().map(<C as Collection>::target), C::KIND)
}

/// Faults for stream content.
pub fn fault_stream<'a, E: Debug>(actual: impl Into<Option<&'a [E]>>) -> StreamFaultBuilder<'a, E> {
    StreamFaultBuilder::new(actual.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assertion::Require;
    use crate::collection::Frozen;
    use crate::fault::FaultBuilder;
    use std::collections::BTreeSet;

    #[test]
    fn that_accepts_values_and_none() {
        let value = 5;
        assert_eq!(that(&value).done(), Some(&5));
        assert!(that(None::<&i32>).done().is_none());
        assert_eq!(that("abc").done(), Some("abc"));
    }

    #[test]
    fn that_bool_accepts_plain_and_optional() {
        assert_eq!(that_bool(true).done(), Some(true));
        assert_eq!(that_bool(None).done(), None);
    }

    #[test]
    fn that_option_wraps_reference() {
        let value = Some(1);
        assert!(that_option(&value).is_present().is_ok());
        assert!(that_option::<i32>(None).is_null().is_ok());
    }

    #[test]
    fn collection_factories_keep_kind() {
        let err = that_set(BTreeSet::from([1])).is_empty().unwrap_err();
        assert!(err.message().unwrap().starts_with("Required Set"));
        let err = that_list(vec![1]).is_empty().unwrap_err();
        assert!(err.message().unwrap().starts_with("Required List"));
        let err = that_collection(Frozen::new(BTreeSet::from([1])))
            .is_empty()
            .unwrap_err();
        assert!(err.message().unwrap().starts_with("Required Set"));
        assert!(that_list::<Vec<i32>>(None).is_null().is_ok());
    }

    #[test]
    fn fault_factories_match_assertions() {
        let set = BTreeSet::from([1, 2]);
        let expected = fault_set(&set).contains(&3);
        assert!(expected
            .validate_result(that_set(set.clone()).contains(&3))
            .is_ok());
        assert_eq!(fault_collection(Some(&set)).contains(&3), expected);
        assert_eq!(fault_collection(&set).contains(&3), expected);
    }

    #[test]
    fn fault_collection_accepts_null() {
        let fault = fault_collection::<Vec<i32>>(None).contains(&1);
        assert_eq!(fault, crate::util::not_null_fault());
        let frozen = Frozen::new(vec![1]);
        assert_eq!(
            fault_collection(&frozen).is_mutable().message(),
            Some("Required List to be mutable, but is immutable")
        );
    }

    #[test]
    fn fault_stream_matches_stream_assertion() {
        let expected = fault_stream(&[1, 2][..]).is_empty();
        assert!(expected.validate_result(that_stream(vec![1, 2]).is_empty()).is_ok());
        assert_eq!(
            fault_stream::<i32>(None).is_empty().message(),
            Some("Required Stream to be empty, however it is null")
        );
    }

    #[test]
    fn fault_bool_and_option() {
        assert_eq!(
            fault_bool(None).is_true().message(),
            Some("Required True, but found null")
        );
        let empty: Option<i32> = None;
        assert_eq!(
            fault_option(&empty).is_present(),
            that_option(&empty).faults().is_present()
        );
        assert_eq!(
            fault(Some(&1)).with_message("x").is_null().message(),
            Some("x ( Required null, but found 1 )")
        );
    }
}
