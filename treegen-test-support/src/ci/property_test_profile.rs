//! Property-test run profile read from the environment.
//!
//! Suites call [`ProptestRunProfile::load`] with their own defaults; CI can
//! raise case counts or enable forking for every suite at once.

use std::env;

use thiserror::Error;

/// Environment variable overriding the number of cases per property.
pub const PROGTEST_CASES_ENV_KEY: &str = "PROGTEST_CASES";
/// Environment variable enabling forked proptest execution.
pub const TREEGEN_PBT_FORK_ENV_KEY: &str = "TREEGEN_PBT_FORK";

/// Reason an environment override was ignored.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum OverrideError {
    /// The value was not a base-10 unsigned integer.
    #[error("not an unsigned integer: {0}")]
    NotANumber(String),
    /// The case count was zero.
    #[error("case count must be positive")]
    ZeroCases,
    /// The value was not a recognised boolean spelling.
    #[error("expected one of true/false/1/0/yes/no/on/off")]
    NotABool,
}

/// Case count and fork mode for property suites.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Reads `PROGTEST_CASES` and `TREEGEN_PBT_FORK`, falling back to the
    /// given defaults when a variable is unset or malformed. Malformed values
    /// are reported through a `tracing` warning.
    ///
    /// # Examples
    /// ```
    /// use treegen_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(32, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self {
            cases: env_override(PROGTEST_CASES_ENV_KEY, parse_cases).unwrap_or(default_cases),
            fork: env_override(TREEGEN_PBT_FORK_ENV_KEY, parse_bool).unwrap_or(default_fork),
        }
    }

    /// Returns the number of cases to run per property.
    #[must_use]
    #[rustfmt::skip]
    pub fn cases(&self) -> u32 { self.cases }

    /// Returns whether cases run in forked subprocesses.
    #[must_use]
    #[rustfmt::skip]
    pub fn fork(&self) -> bool { self.fork }
}

fn env_override<T>(key: &'static str, parse: fn(&str) -> Result<T, OverrideError>) -> Option<T> {
    let raw = env::var(key).ok()?;
    parse(&raw)
        .inspect_err(|error| {
            tracing::warn!(
                env = key,
                raw = %raw,
                %error,
                "ignoring malformed property-test override",
            );
        })
        .ok()
}

fn parse_cases(raw: &str) -> Result<u32, OverrideError> {
    match raw.trim().parse::<u32>() {
        Ok(0) => Err(OverrideError::ZeroCases),
        Ok(cases) => Ok(cases),
        Err(error) => Err(OverrideError::NotANumber(error.to_string())),
    }
}

fn parse_bool(raw: &str) -> Result<bool, OverrideError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(OverrideError::NotABool),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use rstest::rstest;

    use super::*;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Sets or clears both variables for the guard's lifetime, restoring the
    /// previous values on drop.
    struct ScopedEnv {
        saved: Vec<(&'static str, Option<String>)>,
    }

    impl ScopedEnv {
        fn new(cases: Option<&str>, fork: Option<&str>) -> Self {
            let mut saved = Vec::new();
            let overrides = [(PROGTEST_CASES_ENV_KEY, cases), (TREEGEN_PBT_FORK_ENV_KEY, fork)];
            for (key, value) in overrides {
                saved.push((key, env::var(key).ok()));
                // SAFETY: tests serialize environment access with ENV_LOCK.
                unsafe {
                    match value {
                        Some(value) => env::set_var(key, value),
                        None => env::remove_var(key),
                    }
                }
            }
            Self { saved }
        }
    }

    impl Drop for ScopedEnv {
        fn drop(&mut self) {
            for (key, value) in self.saved.drain(..) {
                // SAFETY: tests serialize environment access with ENV_LOCK.
                unsafe {
                    match value {
                        Some(value) => env::set_var(key, value),
                        None => env::remove_var(key),
                    }
                }
            }
        }
    }

    #[test]
    fn defaults_apply_without_overrides() {
        let _lock = ENV_LOCK.lock().expect("env lock");
        let _env = ScopedEnv::new(None, None);
        assert_eq!(
            ProptestRunProfile::load(48, false),
            ProptestRunProfile {
                cases: 48,
                fork: false
            }
        );
    }

    #[rstest]
    #[case("1", 1)]
    #[case(" 300 ", 300)]
    #[case("10000", 10_000)]
    fn case_overrides_are_honoured(#[case] raw: &str, #[case] expected: u32) {
        let _lock = ENV_LOCK.lock().expect("env lock");
        let _env = ScopedEnv::new(Some(raw), None);
        assert_eq!(ProptestRunProfile::load(48, false).cases(), expected);
    }

    #[rstest]
    #[case("0")]
    #[case("-3")]
    #[case("many")]
    fn malformed_case_overrides_fall_back(#[case] raw: &str) {
        let _lock = ENV_LOCK.lock().expect("env lock");
        let _env = ScopedEnv::new(Some(raw), None);
        assert_eq!(ProptestRunProfile::load(48, false).cases(), 48);
    }

    #[rstest]
    #[case("true", true)]
    #[case("On", true)]
    #[case("1", true)]
    #[case("no", false)]
    #[case("OFF", false)]
    #[case("0", false)]
    fn fork_overrides_are_honoured(#[case] raw: &str, #[case] expected: bool) {
        let _lock = ENV_LOCK.lock().expect("env lock");
        let _env = ScopedEnv::new(None, Some(raw));
        assert_eq!(ProptestRunProfile::load(48, !expected).fork(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("2")]
    #[case("sometimes")]
    fn malformed_fork_overrides_fall_back(#[case] raw: &str) {
        let _lock = ENV_LOCK.lock().expect("env lock");
        let _env = ScopedEnv::new(None, Some(raw));
        assert!(ProptestRunProfile::load(48, true).fork());
    }

    #[rstest]
    #[case("0", OverrideError::ZeroCases)]
    #[case("x", OverrideError::NotANumber("invalid digit found in string".to_owned()))]
    fn case_parse_errors_are_typed(#[case] raw: &str, #[case] expected: OverrideError) {
        assert_eq!(parse_cases(raw), Err(expected));
    }
}
