//! Screenshot artifact sink.
//!
//! Screenshots are a diagnosis side effect, not part of any functional
//! contract: files land under `<report_dir>/screenshots/` named
//! `<name>_<timestamp>.png`.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::info;

use crate::error::{Error, Result};

/// Writes PNG screenshots under a report directory.
#[derive(Debug, Clone)]
pub struct ScreenshotSink {
	dir: PathBuf,
}

impl ScreenshotSink {
	/// Creates the sink and its directory tree.
	pub fn new(report_dir: &Path) -> Result<Self> {
		let dir = report_dir.join("screenshots");
		fs::create_dir_all(&dir)?;
		Ok(Self { dir })
	}

	/// Saves PNG bytes as `<name>_<YYYYmmdd_HHMMSS>.png`, returning the
	/// written path.
	pub fn save(&self, name: &str, png: &[u8]) -> Result<PathBuf> {
		let timestamp = Local::now().format("%Y%m%d_%H%M%S");
		let path = self.dir.join(format!("{name}_{timestamp}.png"));
		fs::write(&path, png).map_err(|source| Error::Screenshot {
			path: path.clone(),
			source,
		})?;
		info!(target = "taf.artifacts", path = %path.display(), "screenshot saved");
		Ok(path)
	}

	pub fn dir(&self) -> &Path {
		&self.dir
	}
}
