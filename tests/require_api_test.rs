//! Integration tests for the assertion API.

use std::collections::{BTreeSet, HashSet, VecDeque};
use std::error::Error as _;

use predicates::prelude::*;
use require::collection::Frozen;
use require::error::UnsupportedOperation;
use require::output::capture_error_output;
use require::render::identity;
use require::{FaultBuilder, Require};

#[test]
fn equal_but_distinct_strings_are_equal() -> anyhow::Result<()> {
    let first = String::from("abc");
    let second = String::from("abc");
    require::that(&first).is_equal_to(&second)?;
    Ok(())
}

#[test]
fn equal_but_distinct_strings_are_not_the_same() {
    let first = String::from("abc");
    let second = String::from("abc");
    let err = require::that(&first).is_the_same_as(&second).unwrap_err();
    let message = err.message().unwrap();

    let names_first = predicate::str::contains(identity(Some(&first)));
    let names_second = predicate::str::contains(identity(Some(&second)));
    assert!(names_first.and(names_second).eval(message));
}

#[test]
fn is_empty_on_immutable_and_populated_lists() -> anyhow::Result<()> {
    let empty: Frozen<Vec<String>> = Frozen::default();
    require::that_list(empty).is_empty()?;

    let populated = vec!["a", "b"];
    let expected = require::fault_list(&populated).is_empty();
    let outcome = require::that_list(populated).is_empty();
    expected.validate_result(outcome)?;

    let message = expected.message().unwrap_or_default();
    assert!(predicate::str::contains("List").eval(message));
    assert!(predicate::str::contains(r#"["a", "b"]"#).eval(message));
    Ok(())
}

#[test]
fn immutable_list_is_not_mutable() {
    let list: Frozen<Vec<&str>> = Frozen::new(vec!["a", "b"]);
    let err = require::that_list(list)
        .is_mutable(|| Some("x"))
        .unwrap_err();

    assert_eq!(err.message(), Some("Required List to be mutable, but is immutable"));
    let cause = err.source().expect("unsupported operation is the cause");
    assert!(cause.downcast_ref::<UnsupportedOperation>().is_some());
}

#[test]
fn empty_mutable_list_is_mutable_and_stays_empty() -> anyhow::Result<()> {
    let mut list: Vec<&str> = Vec::new();
    require::that_list(&mut list).is_mutable(|| Some("x"))?;
    assert!(list.is_empty());
    Ok(())
}

#[test]
fn empty_supplier_is_usage_error_for_empty_immutable_collections() {
    let usage_error = require::not_null_fault();

    let frozen = || require::that_list(Frozen::<Vec<&str>>::default());
    usage_error.validate_result(frozen().is_mutable(|| None)).unwrap();
    usage_error.validate_result(frozen().is_immutable(|| None)).unwrap();

    let streamed = || require::that_stream(Vec::<&str>::new());
    usage_error
        .validate_result(streamed().to_require_list().is_mutable(|| None))
        .unwrap();
    usage_error
        .validate_result(streamed().to_require_list().is_immutable(|| None))
        .unwrap();
    usage_error
        .validate_result(streamed().to_require_set().is_immutable(|| None))
        .unwrap();
}

#[test]
fn empty_immutable_collection_refuses_supplied_element() -> anyhow::Result<()> {
    require::that_stream(Vec::<&str>::new())
        .to_require_set()
        .is_immutable(|| Some("x"))?;
    let err = require::that_list(Frozen::<Vec<&str>>::default())
        .is_mutable(|| Some("x"))
        .unwrap_err();
    let cause = err.source().expect("unsupported operation is the cause");
    assert_eq!(
        cause.downcast_ref::<UnsupportedOperation>(),
        Some(&UnsupportedOperation::new("add"))
    );
    Ok(())
}

#[test]
fn probing_any_collection_keeps_contents() -> anyhow::Result<()> {
    let mut list = vec![1, 1, 2];
    let mut deque: VecDeque<i32> = [3, 4].into_iter().collect();
    let mut hash: HashSet<i32> = [5, 6, 7].into_iter().collect();
    let mut tree: BTreeSet<i32> = [8, 9].into_iter().collect();

    for _ in 0..2 {
        require::that_list(&mut list).is_mutable(|| None)?;
        require::that_list(&mut deque).is_mutable(|| None)?;
        require::that_set(&mut hash).is_mutable(|| None)?;
        require::that_set(&mut tree).is_mutable(|| None)?;
    }

    assert_eq!(list, [1, 1, 2]);
    assert_eq!(deque, [3, 4]);
    assert_eq!(hash, HashSet::from([5, 6, 7]));
    assert_eq!(tree, BTreeSet::from([8, 9]));
    Ok(())
}

#[test]
fn immutable_set_passes_is_immutable() -> anyhow::Result<()> {
    let set: Frozen<HashSet<u8>> = [1, 2].into_iter().collect();
    require::that_set(set).is_immutable(|| Some(0))?;
    Ok(())
}

#[test]
fn chained_checks_stop_at_first_failure() {
    let value = 10;
    let (outcome, written) = capture_error_output(|| {
        require::that(&value)
            .with_message("total")
            .is_not_null()?
            .is_equal_to(&11)?
            .is_null()
    });
    let err = outcome.unwrap_err();
    assert_eq!(err.message(), Some("total ( Expected 10 to be equal to 11 )"));
    assert!(!written.is_empty());
}

#[test]
fn optional_value_round_trip() -> anyhow::Result<()> {
    let populated = Some(String::from("abc"));
    let inner = require::that_option(&populated).is_present()?.value()?.done();
    assert_eq!(inner, populated.as_ref());

    let empty: Option<String> = None;
    let inner = require::that_option(&empty).is_empty()?.value()?.done();
    assert_eq!(inner, empty.as_ref());
    Ok(())
}

#[test]
fn optional_null_is_distinct_from_empty() {
    let expected = require::fault_option::<i32>(None).is_present();
    let outcome = require::that_option::<i32>(None).is_present();
    assert!(expected.validate_result(outcome).is_ok());
    assert!(predicate::str::contains("as opposed to empty").eval(expected.message().unwrap()));
}

#[test]
fn stream_continues_as_collections() -> anyhow::Result<()> {
    let words = ["b", "a", "b"];
    require::that_stream(words)
        .is_not_null()?
        .to_require_list()
        .contains(&"a")?
        .is_immutable(|| None)?;

    require::that_stream(words)
        .is_equal_to_set(&HashSet::from(["a", "b"]))?
        .to_require_set()
        .does_not_contain(&"c")?;

    require::that_stream(words).is_equal_to_set(&BTreeSet::from(["a", "b"]))?;
    Ok(())
}

#[test]
fn boolean_checks() -> anyhow::Result<()> {
    require::that_bool(true).is_true()?.is_the_same_as(&true)?;
    let expected = require::fault_bool(None).with_message("flag").is_false();
    expected.validate_result(require::that_bool(None).with_message("flag").is_false())?;
    Ok(())
}

#[test]
fn fail_and_not_null_helpers() {
    assert!(require::fail::<()>().unwrap_err().message().is_none());
    assert_eq!(require::not_null(Some(3)).unwrap(), 3);
    let err = require::not_null::<u8>(None).unwrap_err();
    assert!(require::not_null_fault().validate(&err).is_ok());
}
