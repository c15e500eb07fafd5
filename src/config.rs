//! Runtime configuration.
//!
//! The only setting is the preliminary-test flag, which lets unfinished
//! tests marked with [`todo`](crate::todo) pass while they are being
//! written. It is read from the `preliminaryTest` variable:
//!
//! ```text
//! preliminaryTest=true cargo test
//! ```
//!
//! Any other value, or no value, leaves the flag off.

use tracing::debug;

/// Name of the variable holding the preliminary-test flag.
pub const PRELIMINARY_TEST_VARIABLE: &str = "preliminaryTest";

/// Value that turns the preliminary-test flag on.
pub const PRELIMINARY_TEST_VALUE: &str = "true";

/// Settings that change how the utilities behave.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequireConfig {
    /// Suppress failures from [`todo`](crate::todo).
    pub preliminary_test: bool,
}

impl RequireConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_env_with(|key: &str| std::env::var(key))
    }

    /// Read the configuration with a custom variable lookup.
    ///
    /// This allows testing without modifying actual environment variables.
    pub fn from_env_with<F>(env_fn: F) -> Self
    where
        F: Fn(&str) -> Result<String, std::env::VarError>,
    {
        let preliminary_test = env_fn(PRELIMINARY_TEST_VARIABLE)
            .map(|value| value == PRELIMINARY_TEST_VALUE)
            .unwrap_or(false);
        if preliminary_test {
            debug!("{PRELIMINARY_TEST_VARIABLE} is set, unfinished tests will pass");
        }
        Self { preliminary_test }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::VarError;

    #[test]
    fn flag_on_for_true() {
        let config = RequireConfig::from_env_with(|key| {
            assert_eq!(key, PRELIMINARY_TEST_VARIABLE);
            Ok("true".to_string())
        });
        assert!(config.preliminary_test);
    }

    #[test]
    fn flag_off_for_other_values() {
        let config = RequireConfig::from_env_with(|_| Ok("yes".to_string()));
        assert!(!config.preliminary_test);
        let config = RequireConfig::from_env_with(|_| Ok("TRUE".to_string()));
        assert!(!config.preliminary_test);
    }

    #[test]
    fn flag_off_when_unset() {
        let config = RequireConfig::from_env_with(|_| Err(VarError::NotPresent));
        assert_eq!(config, RequireConfig::default());
    }
}
