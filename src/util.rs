//! Free-standing helpers: inline null checks and unconditional failures.

use tracing::warn;

use crate::config::RequireConfig;
use crate::error::Result;
use crate::fault::{Fault, FaultBuilder, RequireFaultBuilder};

/// Unwrap a value that must be present.
///
/// # Errors
///
/// Returns the [`not_null_fault`] if `value` is `None`.
///
/// # Example
///
/// ```
/// let port = require::not_null(Some(8080)).unwrap();
/// assert_eq!(port, 8080);
/// assert!(require::not_null::<u16>(None).is_err());
/// ```
pub fn not_null<T>(value: Option<T>) -> Result<T> {
    value.ok_or_else(|| not_null_fault().build())
}

/// The fault raised when a required value is missing.
pub fn not_null_fault() -> Fault {
    RequireFaultBuilder::<()>::new(None).is_not_null()
}

/// Fail without a message.
pub fn fail<T>() -> Result<T> {
    Err(Fault::bare().build())
}

/// Fail with `message`.
pub fn fail_with<T>(message: impl Into<String>) -> Result<T> {
    Err(Fault::assertion(message).build())
}

/// Mark an unfinished test.
///
/// Fails unless the preliminary-test flag is set in the environment; see
/// [`RequireConfig`].
pub fn todo() -> Result<()> {
    todo_in(&RequireConfig::from_env(), None)
}

/// Mark an unfinished test, failing with `message`.
pub fn todo_with(message: impl Into<String>) -> Result<()> {
    todo_in(&RequireConfig::from_env(), Some(message.into()))
}

/// Mark an unfinished test against an explicit configuration.
pub fn todo_in(config: &RequireConfig, message: Option<String>) -> Result<()> {
    if config.preliminary_test {
        warn!(reason = message.as_deref(), "unfinished test allowed to pass");
        return Ok(());
    }
    match message {
        Some(message) => fail_with(message),
        None => fail(),
    }
}
