// ── Outcome ──
//
// The value every repository operation resolves to. Failures are data, not
// panics: a repository never lets an error escape, it folds it into
// `Outcome::Failure` with a message ready for display.

use std::fmt;

/// Result of a repository operation: a value or a human-readable failure.
///
/// Exactly one variant is ever populated. There is no `Default` and no
/// `Deref` to the inner value; callers branch explicitly, with `match` or
/// [`when`](Self::when).
#[derive(Debug, Clone, PartialEq)]
#[must_use = "an Outcome may be a Failure that should be shown to the user"]
pub enum Outcome<T> {
    Success(T),
    Failure(String),
}

impl<T> Outcome<T> {
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure(message.into())
    }

    /// Run exactly one handler and return its value.
    pub fn when<R>(self, on_success: impl FnOnce(T) -> R, on_failure: impl FnOnce(String) -> R) -> R {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(message) => on_failure(message),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Failure(message) => Outcome::Failure(message),
        }
    }

    pub fn as_ref(&self) -> Outcome<&T> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(message) => Outcome::Failure(message.clone()),
        }
    }

    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// The success value, discarding any failure message.
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// The failure message, if this is a failure.
    pub fn failure_message(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Failure(message) => Some(message),
        }
    }

    pub fn into_result(self) -> Result<T, String> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(message) => Err(message),
        }
    }
}

impl<T> From<Outcome<T>> for Result<T, String> {
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_result()
    }
}

impl<T: fmt::Display> fmt::Display for Outcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(f, "{value}"),
            Self::Failure(message) => f.write_str(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn any_outcome() -> impl Strategy<Value = Outcome<i64>> {
        prop_oneof![
            any::<i64>().prop_map(Outcome::Success),
            ".{0,40}".prop_map(Outcome::Failure),
        ]
    }

    proptest! {
        #[test]
        fn when_runs_exactly_one_handler(outcome in any_outcome()) {
            let mut calls = 0;
            let was_success = outcome.is_success();
            let via_success = outcome.when(|_| { calls += 1; true }, |_| false);
            prop_assert_eq!(calls, usize::from(via_success));
            prop_assert_eq!(via_success, was_success);
        }

        #[test]
        fn map_composes(outcome in any_outcome()) {
            let f = |v: i64| v.wrapping_mul(3);
            let g = |v: i64| v.wrapping_sub(7);
            prop_assert_eq!(outcome.clone().map(f).map(g), outcome.map(|v| g(f(v))));
        }
    }

    #[test]
    fn when_calls_only_the_success_handler() {
        let mut failures = 0;
        let doubled = Outcome::success(21).when(|v| v * 2, |_| {
            failures += 1;
            0
        });
        assert_eq!(doubled, 42);
        assert_eq!(failures, 0);
    }

    #[test]
    fn when_calls_only_the_failure_handler() {
        let mut successes = 0;
        let message = Outcome::<i32>::failure("Tidak ada koneksi internet").when(
            |_| {
                successes += 1;
                String::new()
            },
            |m| m,
        );
        assert_eq!(message, "Tidak ada koneksi internet");
        assert_eq!(successes, 0);
    }

    #[test]
    fn map_preserves_failures() {
        let failed: Outcome<Vec<u8>> = Outcome::failure("boom");
        assert_eq!(failed.map(|v| v.len()), Outcome::Failure("boom".into()));
        assert_eq!(Outcome::success(vec![1, 2]).map(|v| v.len()), Outcome::Success(2));
    }

    #[test]
    fn explicit_unwrapping() {
        let ok = Outcome::success("x");
        assert!(ok.is_success());
        assert_eq!(ok.failure_message(), None);
        assert_eq!(ok.clone().ok(), Some("x"));
        assert_eq!(ok.into_result(), Ok("x"));

        let failed = Outcome::<&str>::failure("nope");
        assert!(failed.is_failure());
        assert_eq!(failed.failure_message(), Some("nope"));
        assert_eq!(Result::from(failed), Err::<&str, _>("nope".to_owned()));
    }
}
