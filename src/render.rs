//! Rendering of nullable values for failure messages and diffs.

use std::fmt;

/// Text used for an absent value.
pub const NULL: &str = "null";

/// A nullable value rendered with its `Debug` form, or `null` when absent.
///
/// Formatter flags are forwarded, so `{:#?}` pretty-prints the inner value.
///
/// # Example
///
/// ```
/// use require::render::Rendered;
///
/// assert_eq!(Rendered(Some("abc")).to_string(), "\"abc\"");
/// assert_eq!(Rendered::<str>(None).to_string(), "null");
/// ```
pub struct Rendered<'v, T: ?Sized>(pub Option<&'v T>);

impl<T: ?Sized + fmt::Debug> fmt::Debug for Rendered<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => fmt::Debug::fmt(value, f),
            None => f.write_str(NULL),
        }
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Display for Rendered<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Identity token for a value: the lowercase hex address, `0` for null.
///
/// Only meaningful for display; two tokens are equal exactly when the values
/// share an address.
pub fn identity<T: ?Sized>(value: Option<&T>) -> String {
    let address = value.map_or(0, |v| v as *const T as *const () as usize);
    format!("{address:x}")
}
