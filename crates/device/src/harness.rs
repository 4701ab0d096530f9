//! Scoped test execution with screenshot-on-failure.

use std::panic::{self, AssertUnwindSafe};

use tracing::{info, warn};

use taf_core::Result;
use taf_core::artifacts::ScreenshotSink;

use crate::backend::{DeviceBackend, DeviceSession};
use crate::manager::DriverManager;

/// Runs one test body inside an acquire/release scope.
///
/// The session is released on every exit path of the body, a panic
/// included: the panic is caught, the session released, and the unwind
/// resumed so the caller still observes the original failure. When the
/// body fails and `screenshot_on_failure` is set, a screenshot named after
/// the test is captured best-effort before release; the body's own error
/// is what the caller sees either way.
pub fn run_test<B, T, F>(
	manager: &mut DriverManager<B>,
	sink: &ScreenshotSink,
	screenshot_on_failure: bool,
	name: &str,
	body: F,
) -> Result<T>
where
	B: DeviceBackend,
	F: FnOnce(&B::Session) -> Result<T>,
{
	info!(target = "taf.harness", test = name, "starting test");
	let session = manager.acquire()?;

	match panic::catch_unwind(AssertUnwindSafe(|| body(&session))) {
		Ok(outcome) => {
			if let Err(err) = &outcome {
				warn!(target = "taf.harness", test = name, error = %err, "test body failed");
				if screenshot_on_failure {
					capture_failure_screenshot(&*session, sink, name);
				}
			}
			manager.release();
			info!(target = "taf.harness", test = name, passed = outcome.is_ok(), "finished test");
			outcome
		}
		Err(payload) => {
			warn!(target = "taf.harness", test = name, "test body panicked");
			if screenshot_on_failure {
				capture_failure_screenshot(&*session, sink, name);
			}
			manager.release();
			panic::resume_unwind(payload);
		}
	}
}

fn capture_failure_screenshot<S: DeviceSession>(session: &S, sink: &ScreenshotSink, name: &str) {
	match session.screenshot_png().and_then(|png| sink.save(name, &png)) {
		Ok(path) => info!(target = "taf.harness", path = %path.display(), "failure screenshot captured"),
		Err(err) => warn!(target = "taf.harness", error = %err, "failed to capture failure screenshot"),
	}
}
