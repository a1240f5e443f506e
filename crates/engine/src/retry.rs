//! Bounded retry with fixed backoff.
//!
//! Timestamp writes are privileged on some platforms and can fail with a
//! transient permission error; the transfer path retries them a fixed number
//! of times instead of aborting on the first failure.

use std::fmt;
use std::thread;
use std::time::Duration;
use tracing::warn;

/// Total attempts made for a retried timestamp write.
pub const TIMESTAMP_ATTEMPTS: u32 = 3;

/// Fixed pause between retried timestamp writes.
pub const TIMESTAMP_BACKOFF: Duration = Duration::from_millis(100);

/// Runs `operation` up to `attempts` times, sleeping `backoff` between tries.
///
/// Only errors classified transient by `is_transient` are retried; any other
/// error, or exhaustion of the attempt budget, is returned to the caller.
/// Every recovered error is logged before the next attempt.
pub fn with_retries<T, E, F, P>(
    attempts: u32,
    backoff: Duration,
    is_transient: P,
    mut operation: F,
) -> Result<T, E>
where
    F: FnMut() -> Result<T, E>,
    P: Fn(&E) -> bool,
    E: fmt::Display,
{
    let mut attempt = 1;
    loop {
        match operation() {
            Ok(value) => return Ok(value),
            Err(error) if attempt < attempts && is_transient(&error) => {
                warn!(
                    "attempt {attempt} of {attempts} failed, retrying in {}ms: {error}",
                    backoff.as_millis()
                );
                thread::sleep(backoff);
                attempt += 1;
            }
            Err(error) => return Err(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Debug)]
    struct Failure(bool);

    impl fmt::Display for Failure {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "failure(transient={})", self.0)
        }
    }

    #[test]
    fn returns_first_success() {
        let calls = Cell::new(0);
        let result: Result<u32, Failure> =
            with_retries(3, Duration::ZERO, |error: &Failure| error.0, || {
                calls.set(calls.get() + 1);
                Ok(7)
            });
        assert_eq!(result.unwrap(), 7);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn retries_transient_failures_until_success() {
        let calls = Cell::new(0);
        let result: Result<u32, Failure> =
            with_retries(3, Duration::ZERO, |error: &Failure| error.0, || {
                calls.set(calls.get() + 1);
                if calls.get() < 3 {
                    Err(Failure(true))
                } else {
                    Ok(9)
                }
            });
        assert_eq!(result.unwrap(), 9);
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn surfaces_error_after_exhausting_attempts() {
        let calls = Cell::new(0);
        let result: Result<u32, Failure> =
            with_retries(3, Duration::ZERO, |error: &Failure| error.0, || {
                calls.set(calls.get() + 1);
                Err(Failure(true))
            });
        assert!(result.is_err());
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn does_not_retry_non_transient_failures() {
        let calls = Cell::new(0);
        let result: Result<u32, Failure> =
            with_retries(3, Duration::ZERO, |error: &Failure| error.0, || {
                calls.set(calls.get() + 1);
                Err(Failure(false))
            });
        assert!(result.is_err());
        assert_eq!(calls.get(), 1);
    }
}
