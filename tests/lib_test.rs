//! Library integration tests.

use require::{AssertionError, Fault, FaultKind};

#[test]
fn error_types_are_public() {
    let err: AssertionError = Fault::assertion("boom").build();
    assert_eq!(err.kind(), FaultKind::Assertion);
    assert_eq!(err.to_string(), "boom");
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> require::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn errors_convert_into_anyhow() {
    fn test_fn() -> anyhow::Result<()> {
        require::fail_with::<()>("stop")?;
        Ok(())
    }
    let err = test_fn().unwrap_err();
    assert_eq!(err.to_string(), "stop");
    assert!(err.downcast_ref::<AssertionError>().is_some());
}

#[test]
fn modules_are_public() {
    use require::collection::{Frozen, Mutability};
    use require::config::RequireConfig;
    use require::diff::NoopDiffGenerator;
    use require::render::NULL;

    let _frozen: Frozen<Vec<i32>> = Frozen::default();
    let _config = RequireConfig::default();
    let _generator = NoopDiffGenerator::default();
    assert!(Mutability::Mutable.is_mutable());
    assert_eq!(NULL, "null");
}

#[test]
fn todo_respects_config() {
    use require::config::RequireConfig;

    let preliminary = RequireConfig::from_env_with(|_| Ok("true".to_string()));
    assert!(require::todo_in(&preliminary, Some("pending".into())).is_ok());

    let strict = RequireConfig::from_env_with(|_| Err(std::env::VarError::NotPresent));
    let err = require::todo_in(&strict, Some("pending".into())).unwrap_err();
    assert_eq!(err.message(), Some("pending"));
}

#[test]
fn todo_follows_process_environment() {
    use require::config::RequireConfig;

    let preliminary = RequireConfig::from_env().preliminary_test;
    assert_eq!(require::todo().is_ok(), preliminary);
    assert_eq!(require::todo_with("pending").is_ok(), preliminary);
}
