//! Run-parameter sourcing and validated grid configuration.

use crate::error::{GridError, Result};

/// Mandatory parameter names read from the run environment.
pub const LT_USERNAME: &str = "LT_USERNAME";
pub const LT_ACCESS_KEY: &str = "LT_ACCESS_KEY";
pub const CDP_URL_BASE: &str = "CDP_URL_BASE";

/// Optional parameter names.
pub const PLATFORM: &str = "PLATFORM";
pub const BROWSER_NAME: &str = "BROWSER_NAME";
pub const BROWSER_VERSION: &str = "BROWSER_VERSION";

/// External parameter lookup (environment, run settings, fixtures).
pub trait ConfigSource {
	fn get(&self, name: &str) -> Option<String>;
}

/// [`ConfigSource`] backed by process environment variables.
pub struct EnvSource;

impl ConfigSource for EnvSource {
	fn get(&self, name: &str) -> Option<String> {
		std::env::var(name).ok()
	}
}

/// Validated grid connection parameters.
///
/// `username`, `access_key`, and `url_base` are mandatory; everything else
/// defaults to absent and is carried through to the capability document as-is.
#[derive(Debug, Clone, Default)]
pub struct GridConfig {
	pub username: String,
	pub access_key: String,
	pub url_base: String,
	pub platform: Option<String>,
	pub browser_name: Option<String>,
	pub browser_version: Option<String>,
	pub session_name: Option<String>,
	pub build_name: Option<String>,
}

impl GridConfig {
	/// Creates a config from the three mandatory parameters.
	pub fn new(username: impl Into<String>, access_key: impl Into<String>, url_base: impl Into<String>) -> Self {
		Self {
			username: username.into(),
			access_key: access_key.into(),
			url_base: url_base.into(),
			..Default::default()
		}
	}

	/// Reads parameters from a [`ConfigSource`], failing fast when a
	/// mandatory key is missing or blank.
	pub fn from_source(source: &dyn ConfigSource) -> Result<Self> {
		Ok(Self {
			username: require(source, LT_USERNAME)?,
			access_key: require(source, LT_ACCESS_KEY)?,
			url_base: require(source, CDP_URL_BASE)?,
			platform: optional(source, PLATFORM),
			browser_name: optional(source, BROWSER_NAME),
			browser_version: optional(source, BROWSER_VERSION),
			session_name: None,
			build_name: None,
		})
	}

	/// Sets the target platform (e.g. "Windows 10").
	pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
		self.platform = Some(platform.into());
		self
	}

	/// Sets the browser name resolved at capability-build time.
	pub fn with_browser_name(mut self, name: impl Into<String>) -> Self {
		self.browser_name = Some(name.into());
		self
	}

	/// Sets the requested browser version.
	pub fn with_browser_version(mut self, version: impl Into<String>) -> Self {
		self.browser_version = Some(version.into());
		self
	}

	/// Sets the human-readable session name shown by the grid.
	pub fn with_session_name(mut self, name: impl Into<String>) -> Self {
		self.session_name = Some(name.into());
		self
	}

	/// Sets the human-readable build name shown by the grid.
	pub fn with_build_name(mut self, name: impl Into<String>) -> Self {
		self.build_name = Some(name.into());
		self
	}
}

fn require(source: &dyn ConfigSource, name: &str) -> Result<String> {
	source
		.get(name)
		.filter(|value| !value.trim().is_empty())
		.ok_or_else(|| GridError::Config(format!("required parameter missing: {name}")))
}

fn optional(source: &dyn ConfigSource, name: &str) -> Option<String> {
	source.get(name).filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
	use std::collections::HashMap;

	use super::*;

	struct MapSource(HashMap<&'static str, &'static str>);

	impl ConfigSource for MapSource {
		fn get(&self, name: &str) -> Option<String> {
			self.0.get(name).map(|v| v.to_string())
		}
	}

	fn full_source() -> MapSource {
		MapSource(HashMap::from([
			(LT_USERNAME, "u"),
			(LT_ACCESS_KEY, "k"),
			(CDP_URL_BASE, "wss://grid.example/cdp"),
			(PLATFORM, "Windows 10"),
			(BROWSER_NAME, "chromium"),
			(BROWSER_VERSION, "120"),
		]))
	}

	#[test]
	fn from_source_reads_all_recognized_parameters() {
		let config = GridConfig::from_source(&full_source()).unwrap();
		assert_eq!(config.username, "u");
		assert_eq!(config.access_key, "k");
		assert_eq!(config.url_base, "wss://grid.example/cdp");
		assert_eq!(config.platform.as_deref(), Some("Windows 10"));
		assert_eq!(config.browser_name.as_deref(), Some("chromium"));
		assert_eq!(config.browser_version.as_deref(), Some("120"));
	}

	#[test]
	fn from_source_fails_for_each_missing_mandatory_key() {
		for missing in [LT_USERNAME, LT_ACCESS_KEY, CDP_URL_BASE] {
			let mut source = full_source();
			source.0.remove(missing);
			let err = GridConfig::from_source(&source).unwrap_err();
			assert!(matches!(err, GridError::Config(_)));
			assert!(err.to_string().contains(missing), "error should name {missing}");
		}
	}

	#[test]
	fn blank_values_count_as_absent() {
		let mut source = full_source();
		source.0.insert(LT_USERNAME, "   ");
		assert!(GridConfig::from_source(&source).is_err());

		let mut source = full_source();
		source.0.insert(PLATFORM, "");
		let config = GridConfig::from_source(&source).unwrap();
		assert!(config.platform.is_none());
	}

	#[test]
	fn builder_setters_populate_optionals() {
		let config = GridConfig::new("u", "k", "wss://grid.example/cdp")
			.with_platform("Windows 10")
			.with_browser_name("firefox")
			.with_browser_version("121")
			.with_session_name("Smoke test")
			.with_build_name("Nightly");
		assert_eq!(config.browser_name.as_deref(), Some("firefox"));
		assert_eq!(config.session_name.as_deref(), Some("Smoke test"));
		assert_eq!(config.build_name.as_deref(), Some("Nightly"));
	}
}
