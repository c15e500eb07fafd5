//! Diff generation for failed equality checks.
//!
//! When `is_equal_to` fails, the active [`DiffGenerator`] renders the two
//! values and the text is written to the error output before the error is
//! returned. The default generator does nothing useful; it returns
//! [`NO_DIFF_MESSAGE`] as a reminder to install one.
//!
//! The active generator is per thread, so tests running in parallel can each
//! install their own. [`set_diff_generator`] replaces it until reset;
//! [`scoped`] replaces it until the returned guard is dropped.
//!
//! # Example
//!
//! ```
//! use require::diff::{self, TextDiffGenerator};
//! use require::output::capture_error_output;
//! use require::Require;
//!
//! let _guard = diff::scoped(Box::new(TextDiffGenerator));
//! let (outcome, written) = capture_error_output(|| require::that(&1).is_equal_to(&2));
//! assert!(outcome.is_err());
//! assert!(written.contains("-2"));
//! assert!(written.contains("+1"));
//! ```

mod text;

use std::cell::RefCell;
use std::fmt::Debug;
use std::rc::Rc;

use tracing::debug;

use crate::output;
use crate::render::Rendered;

pub use text::TextDiffGenerator;

/// Text produced when no generator has been installed.
pub const NO_DIFF_MESSAGE: &str = "No diff generated, please set DiffGenerator";

/// Renders the difference between two values.
///
/// Absent values arrive rendered as `null`, so implementations only need to
/// format what they are given.
pub trait DiffGenerator {
    /// Describe how `actual` differs from `expected`.
    fn diff(&self, actual: &dyn Debug, expected: &dyn Debug) -> String;
}

impl<F> DiffGenerator for F
where
    F: Fn(&dyn Debug, &dyn Debug) -> String,
{
    fn diff(&self, actual: &dyn Debug, expected: &dyn Debug) -> String {
        self(actual, expected)
    }
}

/// Generator that ignores its input and returns a fixed message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoopDiffGenerator {
    message: String,
}

impl NoopDiffGenerator {
    /// Create a generator that always returns `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for NoopDiffGenerator {
    fn default() -> Self {
        Self::new(NO_DIFF_MESSAGE)
    }
}

impl DiffGenerator for NoopDiffGenerator {
    fn diff(&self, _actual: &dyn Debug, _expected: &dyn Debug) -> String {
        self.message.clone()
    }
}

thread_local! {
    static ACTIVE: RefCell<Option<Rc<dyn DiffGenerator>>> = const { RefCell::new(None) };
}

/// Install `generator` on the current thread; `None` restores the default.
pub fn set_diff_generator(generator: Option<Box<dyn DiffGenerator>>) {
    let generator = generator.map(Rc::from);
    ACTIVE.with(|active| active.replace(generator));
}

/// Install `generator` on the current thread until the guard is dropped.
pub fn scoped(generator: Box<dyn DiffGenerator>) -> DiffGeneratorGuard {
    let previous = ACTIVE.with(|active| active.replace(Some(Rc::from(generator))));
    DiffGeneratorGuard {
        previous: Some(previous),
    }
}

/// Restores the previously active generator when dropped.
#[must_use = "the generator is uninstalled as soon as the guard is dropped"]
pub struct DiffGeneratorGuard {
    previous: Option<Option<Rc<dyn DiffGenerator>>>,
}

impl Drop for DiffGeneratorGuard {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            ACTIVE.with(|active| active.replace(previous));
        }
    }
}

/// Run the active generator.
pub fn generate(actual: &dyn Debug, expected: &dyn Debug) -> String {
    // Clone out of the slot so a generator may itself swap generators.
    let active = ACTIVE.with(|active| active.borrow().clone());
    match active {
        Some(generator) => generator.diff(actual, expected),
        None => NO_DIFF_MESSAGE.to_string(),
    }
}

/// Write the diff of two nullable values to the error output.
pub(crate) fn report<T: ?Sized + Debug>(actual: Option<&T>, expected: Option<&T>) {
    debug!("equality check failed, writing diff to error output");
    let text = generate(&Rendered(actual), &Rendered(expected));
    output::write_error_line(&text);
}
