use crate::config::BackoffConfig;
use crate::error::Error;
use crate::random::{ThreadRngSource, UniformSource};
use std::fmt;
use std::time::Duration;
use tracing::debug;

/// Retry policy tracking consecutive failures and deriving the next delay.
///
/// Failure count 1 maps to the base delay; each further failure doubles it
/// until `max_failures` is reached. The caller reports outcomes through
/// [`Backoff::update`] and is responsible for actually sleeping.
pub struct Backoff {
    base_seconds: f64,
    max_failures: u32,
    failures: u32,
    random: Box<dyn UniformSource + Send>,
}

impl Backoff {
    /// `base_seconds` must be positive; not re-validated here.
    pub fn new(base_seconds: f64, max_failures: u32) -> Self {
        Self::with_source(base_seconds, max_failures, ThreadRngSource)
    }

    pub fn with_source(
        base_seconds: f64,
        max_failures: u32,
        random: impl UniformSource + Send + 'static,
    ) -> Self {
        Self {
            base_seconds,
            max_failures,
            failures: 0,
            random: Box::new(random),
        }
    }

    pub fn from_config(cfg: &BackoffConfig) -> Self {
        Self::new(cfg.base_seconds, cfg.max_failures)
    }

    pub fn base_seconds(&self) -> f64 {
        self.base_seconds
    }

    pub fn max_failures(&self) -> u32 {
        self.max_failures
    }

    pub fn failures(&self) -> u32 {
        self.failures
    }

    /// Sets the failure count. The value is stored unclamped; the cap at
    /// `max_failures` only applies inside the delay math.
    pub fn set_failures(&mut self, value: i64) -> Result<(), Error> {
        self.failures = u32::try_from(value)
            .map_err(|_| Error::InvalidArgument(format!("{value:?}")))?;
        Ok(())
    }

    /// Ceiling delay reached once growth saturates.
    pub fn max_seconds(&self) -> f64 {
        self.base_seconds * 2f64.powi(self.max_failures as i32 - 1)
    }

    /// Deterministic delay in seconds for the current failure count.
    pub fn raw_seconds(&self) -> f64 {
        if self.failures == 0 {
            return 0.0;
        }
        let exp = self.failures.min(self.max_failures) as i32 - 1;
        self.base_seconds * 2f64.powi(exp)
    }

    /// Full-jitter delay: uniform in `[0, raw_seconds()]`.
    ///
    /// The sampler is consulted exactly once per call, including when the
    /// window is empty.
    pub fn seconds_with_jitter(&mut self) -> f64 {
        let raw = self.raw_seconds();
        self.random.uniform(0.0, raw)
    }

    pub fn raw_delay(&self) -> Duration {
        Duration::from_secs_f64(self.raw_seconds())
    }

    pub fn delay_with_jitter(&mut self) -> Duration {
        Duration::from_secs_f64(self.seconds_with_jitter())
    }

    /// Feeds back the outcome of an attempt: a success steps the count down,
    /// a failure steps it up, capped at `max_failures`.
    pub fn update(&mut self, success: bool) {
        self.failures = if success {
            self.failures.saturating_sub(1)
        } else {
            self.failures.saturating_add(1).min(self.max_failures)
        };
        debug!("backoff failures now {}", self.failures);
    }
}

impl fmt::Debug for Backoff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Backoff")
            .field("base_seconds", &self.base_seconds)
            .field("max_failures", &self.max_failures)
            .field("failures", &self.failures)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_seconds_progression() {
        let mut backoff = Backoff::new(0.5, 5);
        assert_eq!(backoff.raw_seconds(), 0.0);
        backoff.set_failures(1).unwrap();
        assert_eq!(backoff.raw_seconds(), 0.5);
        backoff.set_failures(2).unwrap();
        assert_eq!(backoff.raw_seconds(), 1.0);
        backoff.set_failures(5).unwrap();
        assert_eq!(backoff.raw_seconds(), 8.0);
    }

    #[test]
    fn test_raw_seconds_saturates_at_max() {
        let mut backoff = Backoff::new(0.5, 5);
        backoff.set_failures(10).unwrap();
        assert_eq!(backoff.raw_seconds(), backoff.max_seconds());
    }

    #[test]
    fn test_update_sequence() {
        let mut backoff = Backoff::new(0.5, 5);
        assert_eq!(backoff.failures(), 0);
        backoff.update(true);
        assert_eq!(backoff.failures(), 0);
        backoff.update(true);
        assert_eq!(backoff.failures(), 0);
        backoff.update(false);
        assert_eq!(backoff.failures(), 1);
        backoff.update(false);
        assert_eq!(backoff.failures(), 2);
        backoff.update(true);
        assert_eq!(backoff.failures(), 1);
        backoff.update(true);
        assert_eq!(backoff.failures(), 0);
        backoff.update(true);
        assert_eq!(backoff.failures(), 0);
    }

    #[test]
    fn test_update_stays_in_range() {
        let mut backoff = Backoff::new(0.5, 5);
        for _ in 0..20 {
            backoff.update(false);
            assert!(backoff.failures() <= 5);
        }
        assert_eq!(backoff.failures(), 5);
        for _ in 0..30 {
            backoff.update(true);
        }
        assert_eq!(backoff.failures(), 0);
    }

    #[test]
    fn update_steps_down_from_above_the_cap() {
        let mut backoff = Backoff::new(0.5, 5);
        backoff.set_failures(10).unwrap();
        backoff.update(true);
        assert_eq!(backoff.failures(), 9);
        backoff.update(false);
        assert_eq!(backoff.failures(), 5);
    }

    #[test]
    fn test_from_config_defaults() {
        let backoff = Backoff::from_config(&BackoffConfig::default());
        assert_eq!(backoff.base_seconds(), 0.5);
        assert_eq!(backoff.max_failures(), 5);
        assert_eq!(backoff.max_seconds(), 8.0);
    }
}
