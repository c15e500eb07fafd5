//! The shared fault-builder contract and the plain value builder.
//!
//! Every typed builder implements [`FaultBuilder`], which supplies the null,
//! identity, and equality templates. Typed builders add their own templates
//! on top and may override a shared one (streams do, for equality).

use std::fmt::Debug;

use super::Fault;
use crate::render::{identity, Rendered};

/// Message used when a required value is null.
pub const NOT_NULL_MESSAGE: &str = "Required pointer, but found null";

/// Wrap a default message with a custom one: `<custom> ( <default> )`.
pub fn compose_message(custom: Option<&str>, default_message: String) -> String {
    match custom {
        Some(custom) => format!("{custom} ( {default_message} )"),
        None => default_message,
    }
}

/// Renders [`Fault`]s for one actual value.
///
/// Implementors provide access to the actual value and the custom message;
/// the templates are provided.
pub trait FaultBuilder: Sized {
    /// The type of value faults are rendered for.
    type Actual: ?Sized + Debug;

    /// The actual value, `None` when null.
    fn actual(&self) -> Option<&Self::Actual>;

    /// The custom message, if one is set.
    fn message(&self) -> Option<&str>;

    /// Replace the custom message; `None` restores default formatting.
    fn set_message(&mut self, message: Option<String>);

    /// Set the custom message prepended to every fault.
    fn with_message(mut self, message: impl Into<String>) -> Self {
        self.set_message(Some(message.into()));
        self
    }

    /// Clear the custom message.
    fn with_default_message(mut self) -> Self {
        self.set_message(None);
        self
    }

    /// Wrap a default message into a fault, applying the custom message.
    fn compose(&self, default_message: String) -> Fault {
        Fault::assertion(compose_message(self.message(), default_message))
    }

    /// Fault for a failed `is_null`.
    fn is_null(&self) -> Fault {
        self.compose(format!(
            "Required null, but found {}",
            Rendered(self.actual())
        ))
    }

    /// Fault for a failed `is_not_null`.
    fn is_not_null(&self) -> Fault {
        self.compose(NOT_NULL_MESSAGE.to_string())
    }

    /// Fault for a failed `is_the_same_as`.
    fn is_the_same_as(&self, expected: Option<&Self::Actual>) -> Fault {
        self.compose(format!(
            "Expected {} to be the same pointer as {}",
            identity(self.actual()),
            identity(expected)
        ))
    }

    /// Fault for a failed `is_not_the_same_as`.
    fn is_not_the_same_as(&self) -> Fault {
        self.compose(format!(
            "Expected {} to be a different pointer",
            identity(self.actual())
        ))
    }

    /// Fault for a failed `is_equal_to`.
    fn is_equal_to(&self, expected: Option<&Self::Actual>) -> Fault {
        self.compose(format!(
            "Expected {} to be equal to {}",
            Rendered(self.actual()),
            Rendered(expected)
        ))
    }

    /// Fault for a failed `is_not_equal_to`.
    fn is_not_equal_to(&self, expected: Option<&Self::Actual>) -> Fault {
        self.compose(format!(
            "Expected {} to not equal {}",
            Rendered(self.actual()),
            Rendered(expected)
        ))
    }
}

/// Fault builder for plain values.
#[derive(Debug, Clone)]
pub struct RequireFaultBuilder<'a, T: ?Sized> {
    actual: Option<&'a T>,
    message: Option<String>,
}

impl<'a, T: ?Sized> RequireFaultBuilder<'a, T> {
    /// Create a builder for `actual`.
    pub fn new(actual: Option<&'a T>) -> Self {
        Self {
            actual,
            message: None,
        }
    }
}

impl<T: ?Sized + Debug> FaultBuilder for RequireFaultBuilder<'_, T> {
    type Actual = T;

    fn actual(&self) -> Option<&T> {
        self.actual
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    fn set_message(&mut self, message: Option<String>) {
        self.message = message;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actual_is_kept() {
        let value = String::from("abc");
        let builder = RequireFaultBuilder::new(Some(&value));
        assert!(std::ptr::eq(builder.actual().unwrap(), &value));
        assert!(RequireFaultBuilder::<String>::new(None).actual().is_none());
    }

    #[test]
    fn message_unset_by_default() {
        assert!(RequireFaultBuilder::new(Some("abc")).message().is_none());
    }

    #[test]
    fn message_set_and_cleared() {
        let builder = RequireFaultBuilder::new(Some("abc")).with_message("custom");
        assert_eq!(builder.message(), Some("custom"));
        let builder = builder.with_default_message();
        assert!(builder.message().is_none());
    }

    #[test]
    fn is_null_renders_actual() {
        let fault = RequireFaultBuilder::new(Some("abc")).is_null();
        insta::assert_snapshot!(fault.message().unwrap(), @r#"Required null, but found "abc""#);
    }

    #[test]
    fn is_not_null_is_fixed() {
        let fault = RequireFaultBuilder::<str>::new(None).is_not_null();
        assert_eq!(fault.message(), Some(NOT_NULL_MESSAGE));
    }

    #[test]
    fn is_equal_to_renders_both() {
        let fault = RequireFaultBuilder::new(Some(&1)).is_equal_to(Some(&2));
        insta::assert_snapshot!(fault.message().unwrap(), @"Expected 1 to be equal to 2");
    }

    #[test]
    fn is_equal_to_renders_null_actual() {
        let fault = RequireFaultBuilder::<i32>::new(None).is_equal_to(Some(&2));
        assert_eq!(fault.message(), Some("Expected null to be equal to 2"));
    }

    #[test]
    fn is_not_equal_to_renders_null_expected() {
        let fault = RequireFaultBuilder::new(Some(&1)).is_not_equal_to(None);
        assert_eq!(fault.message(), Some("Expected 1 to not equal null"));
    }

    #[test]
    fn is_the_same_as_uses_identity_tokens() {
        let first = String::from("abc");
        let second = String::from("abc");
        let fault = RequireFaultBuilder::new(Some(&first)).is_the_same_as(Some(&second));
        let expected = format!(
            "Expected {} to be the same pointer as {}",
            identity(Some(&first)),
            identity(Some(&second))
        );
        assert_eq!(fault.message(), Some(expected.as_str()));
    }

    #[test]
    fn is_the_same_as_null_expected_is_zero() {
        let value = 7;
        let fault = RequireFaultBuilder::new(Some(&value)).is_the_same_as(None);
        assert!(fault.message().unwrap().ends_with("the same pointer as 0"));
    }

    #[test]
    fn is_not_the_same_as_uses_identity_token() {
        let value = 7;
        let fault = RequireFaultBuilder::new(Some(&value)).is_not_the_same_as();
        let expected = format!("Expected {} to be a different pointer", identity(Some(&value)));
        assert_eq!(fault.message(), Some(expected.as_str()));
    }

    #[test]
    fn custom_message_wraps_default() {
        let fault = RequireFaultBuilder::new(Some(&1))
            .with_message("totals differ")
            .is_equal_to(Some(&2));
        insta::assert_snapshot!(
            fault.message().unwrap(),
            @"totals differ ( Expected 1 to be equal to 2 )"
        );
    }

    #[test]
    fn compose_without_custom_is_default() {
        assert_eq!(compose_message(None, "plain".into()), "plain");
    }
}
