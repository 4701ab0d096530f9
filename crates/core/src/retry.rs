//! Bounded retry policy.
//!
//! The policy itself is plain data; [`RetryPolicy::run_blocking`] and
//! [`RetryPolicy::run`] are the two adapters that interpret it for blocking
//! and suspending operations. After the final attempt the original error
//! propagates unchanged, so callers can still distinguish its kind.

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use tracing::{debug, warn};

/// Attempt count and inter-attempt delay applied to any fallible operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
	max_attempts: u32,
	delay: Duration,
}

impl RetryPolicy {
	/// Creates a policy; `max_attempts` is clamped to at least one.
	pub fn new(max_attempts: u32, delay: Duration) -> Self {
		Self {
			max_attempts: max_attempts.max(1),
			delay,
		}
	}

	pub fn max_attempts(&self) -> u32 {
		self.max_attempts
	}

	pub fn delay(&self) -> Duration {
		self.delay
	}

	/// Invokes a blocking operation up to `max_attempts` times, sleeping
	/// `delay` between failures.
	pub fn run_blocking<T, E, F>(&self, mut op: F) -> std::result::Result<T, E>
	where
		E: Display,
		F: FnMut() -> std::result::Result<T, E>,
	{
		let mut attempt = 0u32;
		loop {
			attempt += 1;
			debug!(target = "taf.retry", attempt, max_attempts = self.max_attempts, "attempt");
			match op() {
				Ok(value) => return Ok(value),
				Err(err) if attempt >= self.max_attempts => {
					warn!(target = "taf.retry", attempt, error = %err, "all attempts exhausted");
					return Err(err);
				}
				Err(err) => {
					warn!(
						target = "taf.retry",
						attempt,
						delay_ms = self.delay.as_millis() as u64,
						error = %err,
						"attempt failed, retrying"
					);
					std::thread::sleep(self.delay);
				}
			}
		}
	}

	/// Suspending twin of [`run_blocking`]: the delay yields the task
	/// instead of blocking a thread. Attempt/give-up semantics are
	/// identical.
	///
	/// [`run_blocking`]: RetryPolicy::run_blocking
	pub async fn run<T, E, F, Fut>(&self, mut op: F) -> std::result::Result<T, E>
	where
		E: Display,
		F: FnMut() -> Fut,
		Fut: Future<Output = std::result::Result<T, E>>,
	{
		let mut attempt = 0u32;
		loop {
			attempt += 1;
			debug!(target = "taf.retry", attempt, max_attempts = self.max_attempts, "attempt");
			match op().await {
				Ok(value) => return Ok(value),
				Err(err) if attempt >= self.max_attempts => {
					warn!(target = "taf.retry", attempt, error = %err, "all attempts exhausted");
					return Err(err);
				}
				Err(err) => {
					warn!(
						target = "taf.retry",
						attempt,
						delay_ms = self.delay.as_millis() as u64,
						error = %err,
						"attempt failed, retrying"
					);
					tokio::time::sleep(self.delay).await;
				}
			}
		}
	}
}
