//! Exponential backoff with full jitter.
//!
//! [`Backoff`] is the policy half of a retry loop: the caller runs the
//! operation, reports the outcome through [`Backoff::update`], asks for the
//! next delay and sleeps itself. Successes step the failure count back down
//! one at a time, so a flaky link recovers gradually instead of oscillating.
//!
//! ```
//! use expbackoff::Backoff;
//!
//! let mut backoff = Backoff::new(0.5, 5);
//! backoff.update(false);
//! assert_eq!(backoff.raw_seconds(), 0.5);
//! let wait = backoff.delay_with_jitter();
//! assert!(wait <= std::time::Duration::from_secs_f64(0.5));
//! ```

pub mod backoff;
pub mod config;
pub mod error;
pub mod random;

pub use backoff::Backoff;
pub use config::BackoffConfig;
pub use error::Error;
pub use random::{SeededSource, ThreadRngSource, UniformSource};
