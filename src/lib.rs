//! Require - fluent, type-specific assertions with descriptive failures.
//!
//! Wrap a value with one of the `that*` factories, chain checks with `?`,
//! and get an [`AssertionError`] carrying a readable message when one fails.
//! Every failure message comes from a [`Fault`], which tests can also build
//! up front to state exactly which failure they expect.
//!
//! # Modules
//!
//! - [`assertion`] - The [`Require`] trait and the typed wrappers
//! - [`collection`] - Collection capability, frozen wrapper, mutability probe
//! - [`config`] - Runtime configuration (preliminary-test flag)
//! - [`diff`] - Pluggable diff output for failed equality checks
//! - [`error`] - Error types and result aliases
//! - [`fault`] - Faults and the builders that render their messages
//! - [`logging`] - Test log subscriber
//! - [`output`] - Error output sink and capture
//! - [`render`] - Rendering of nullable values and identity tokens
//!
//! # Example
//!
//! ```
//! use require::Require;
//!
//! # fn main() -> require::Result<()> {
//! let mut cart = vec!["apple", "pear"];
//! require::that_list(&mut cart)
//!     .contains(&"pear")?
//!     .does_not_contain(&"plum")?
//!     .is_mutable(|| Some("probe"))?;
//! assert_eq!(cart, ["apple", "pear"]);
//!
//! let err = require::that_bool(false).with_message("checkout").is_true().unwrap_err();
//! assert_eq!(err.to_string(), "checkout ( Required True, but found false )");
//! # Ok(())
//! # }
//! ```

pub mod assertion;
pub mod collection;
pub mod config;
pub mod diff;
pub mod error;
pub mod fault;
mod factory;
pub mod logging;
pub mod output;
pub mod render;
mod util;

pub use assertion::{
    Require, RequireBoolean, RequireCollection, RequireList, RequireOptional, RequirePointer,
    RequireSet, RequireStream,
};
pub use error::{AssertionError, Result};
pub use factory::{
    fault, fault_bool, fault_collection, fault_list, fault_option, fault_set, fault_stream, that,
    that_bool, that_collection, that_list, that_option, that_set, that_stream,
};
pub use fault::{Fault, FaultBuilder, FaultKind};
pub use util::{fail, fail_with, not_null, not_null_fault, todo, todo_in, todo_with};
