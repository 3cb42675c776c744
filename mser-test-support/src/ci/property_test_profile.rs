//! Property-test run profile parsing for CI and local overrides.
//!
//! Every property suite in the workspace reads its case count and fork mode
//! through [`ProptestRunProfile`], so CI can scale all suites with two
//! environment variables.

use std::env;

use thiserror::Error;

/// Environment variable controlling proptest case counts.
pub const PROPTEST_CASES_ENV_KEY: &str = "PROPTEST_CASES";
/// Environment variable controlling proptest process forking.
pub const MSER_PBT_FORK_ENV_KEY: &str = "MSER_PBT_FORK";

/// Reason an override was ignored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OverrideError {
    /// The case count was not an unsigned integer.
    #[error("case count is not an unsigned integer: {0}")]
    InvalidCases(String),
    /// The case count was zero.
    #[error("case count must be positive")]
    ZeroCases,
    /// The fork flag was not a recognised boolean spelling.
    #[error("expected one of true/false/1/0/yes/no/on/off, got {0:?}")]
    InvalidFlag(String),
}

/// Runtime profile for property-test execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Loads a profile from the environment, falling back to the given
    /// defaults for unset or malformed overrides.
    ///
    /// # Examples
    ///
    /// ```
    /// use mser_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self {
            cases: read_env_or_default(PROPTEST_CASES_ENV_KEY, default_cases, parse_cases),
            fork: read_env_or_default(MSER_PBT_FORK_ENV_KEY, default_fork, parse_flag),
        }
    }

    /// Number of cases to run per property.
    #[must_use]
    pub fn cases(&self) -> u32 {
        self.cases
    }

    /// Whether to run proptest cases in forked subprocesses.
    #[must_use]
    pub fn fork(&self) -> bool {
        self.fork
    }
}

fn read_env_or_default<T>(
    key: &'static str,
    default: T,
    parser: fn(&str) -> Result<T, OverrideError>,
) -> T {
    let Ok(raw) = env::var(key) else {
        return default;
    };
    parser(&raw).unwrap_or_else(|error| {
        tracing::warn!(
            env = key,
            raw = %raw,
            %error,
            "invalid property-test profile override; using default",
        );
        default
    })
}

/// Parses a positive case count.
///
/// # Errors
/// Returns [`OverrideError`] for zero or non-numeric input.
pub fn parse_cases(raw: &str) -> Result<u32, OverrideError> {
    match raw.trim().parse::<u32>() {
        Ok(0) => Err(OverrideError::ZeroCases),
        Ok(cases) => Ok(cases),
        Err(error) => Err(OverrideError::InvalidCases(error.to_string())),
    }
}

/// Parses a boolean flag in any of the usual spellings.
///
/// # Errors
/// Returns [`OverrideError::InvalidFlag`] for unrecognised input.
pub fn parse_flag(raw: &str) -> Result<bool, OverrideError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(OverrideError::InvalidFlag(raw.to_owned())),
    }
}
