//! Device-variant settings and capability construction.

use std::time::Duration;

use taf_core::env;

use crate::backend::Capabilities;

/// Connection and target-app settings for the device variant, read from
/// the environment once at startup.
#[derive(Debug, Clone)]
pub struct DeviceSettings {
	/// Automation server host (`DEVICE_HOST`, default `localhost`).
	pub host: String,
	/// Automation server port (`DEVICE_PORT`, default 4723).
	pub port: u16,
	/// Session command timeout (`DEVICE_TIMEOUT_SECS`, default 30s).
	pub timeout: Duration,
	pub platform_version: String,
	pub device_name: String,
	pub app_package: String,
	pub app_activity: String,
	pub auto_grant_permissions: bool,
}

impl DeviceSettings {
	pub fn from_env() -> Self {
		Self {
			host: env::string("DEVICE_HOST", "localhost"),
			port: env::parsed("DEVICE_PORT", 4723),
			timeout: Duration::from_secs(env::parsed("DEVICE_TIMEOUT_SECS", 30)),
			platform_version: env::string("DEVICE_PLATFORM_VERSION", "12"),
			device_name: env::string("DEVICE_NAME", "emulator-5554"),
			app_package: env::string("DEVICE_APP_PACKAGE", "org.wikipedia"),
			app_activity: env::string("DEVICE_APP_ACTIVITY", "org.wikipedia.main.MainActivity"),
			auto_grant_permissions: env::flag("DEVICE_AUTO_GRANT_PERMISSIONS", true),
		}
	}

	/// Automation server URL.
	pub fn server_url(&self) -> String {
		format!("http://{}:{}", self.host, self.port)
	}

	/// Capability set handed to the backend at connect time.
	pub fn capabilities(&self) -> Capabilities {
		Capabilities {
			platform_name: "Android".into(),
			automation_name: "UiAutomator2".into(),
			platform_version: self.platform_version.clone(),
			device_name: self.device_name.clone(),
			app_package: self.app_package.clone(),
			app_activity: self.app_activity.clone(),
			auto_grant_permissions: self.auto_grant_permissions,
			no_reset: false,
			full_reset: false,
			new_command_timeout: self.timeout,
		}
	}
}
