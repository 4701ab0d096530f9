//! Scoped test execution with screenshot-on-failure.

use std::future::Future;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use futures_util::FutureExt;
use tracing::{info, warn};

use taf_core::Result;
use taf_core::artifacts::ScreenshotSink;

use crate::backend::{BrowserBackend, BrowserPage};
use crate::manager::BrowserManager;

/// Runs one test body inside an acquire/release scope.
///
/// The session is released on every exit path of the body, a panic
/// included: the panic is caught, the session released, and the unwind
/// resumed so the caller still observes the original failure. When the
/// body fails and `screenshot_on_failure` is set, a screenshot named after
/// the test is captured best-effort before release; the body's own error
/// is what the caller sees either way.
pub async fn run_test<B, T, F, Fut>(
	manager: &mut BrowserManager<B>,
	sink: &ScreenshotSink,
	screenshot_on_failure: bool,
	name: &str,
	body: F,
) -> Result<T>
where
	B: BrowserBackend,
	F: FnOnce(Arc<B::Page>) -> Fut,
	Fut: Future<Output = Result<T>>,
{
	info!(target = "taf.harness", test = name, "starting test");
	let page = manager.acquire().await?;

	match AssertUnwindSafe(body(Arc::clone(&page))).catch_unwind().await {
		Ok(outcome) => {
			if let Err(err) = &outcome {
				warn!(target = "taf.harness", test = name, error = %err, "test body failed");
				if screenshot_on_failure {
					capture_failure_screenshot(&*page, sink, name).await;
				}
			}
			manager.release().await;
			info!(target = "taf.harness", test = name, passed = outcome.is_ok(), "finished test");
			outcome
		}
		Err(payload) => {
			warn!(target = "taf.harness", test = name, "test body panicked");
			if screenshot_on_failure {
				capture_failure_screenshot(&*page, sink, name).await;
			}
			manager.release().await;
			panic::resume_unwind(payload);
		}
	}
}

async fn capture_failure_screenshot<P: BrowserPage>(page: &P, sink: &ScreenshotSink, name: &str) {
	let saved = match page.screenshot_png().await {
		Ok(png) => sink.save(name, &png),
		Err(err) => Err(err),
	};
	match saved {
		Ok(path) => info!(target = "taf.harness", path = %path.display(), "failure screenshot captured"),
		Err(err) => warn!(target = "taf.harness", error = %err, "failed to capture failure screenshot"),
	}
}
