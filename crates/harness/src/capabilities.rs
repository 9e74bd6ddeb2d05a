//! Capability-document construction and connection-URL templating.
//!
//! Builds the remote-session descriptor consumed by the grid: a JSON
//! capability document appended percent-encoded as the single `capabilities`
//! query parameter on the configured URL base. Construction is pure; the
//! same config always yields a byte-identical URL.

use serde::Serialize;

use crate::config::GridConfig;
use crate::error::{GridError, Result};
use crate::types::BrowserKind;

/// Session name used when the config does not provide one.
pub const DEFAULT_SESSION_NAME: &str = "Playwright Test";
/// Build name used when the config does not provide one.
pub const DEFAULT_BUILD_NAME: &str = "Playwright Rust tests";

/// Top-level capability document.
///
/// Field order is part of the wire contract with existing grid tooling;
/// absent optionals serialize as `null` rather than being omitted.
#[derive(Debug, Clone, Serialize)]
pub struct CapabilityDocument {
	#[serde(rename = "browserName")]
	pub browser_name: Option<String>,
	#[serde(rename = "browserVersion")]
	pub browser_version: Option<String>,
	#[serde(rename = "LT:Options")]
	pub options: GridOptions,
}

/// Nested `LT:Options` block of the capability document.
#[derive(Debug, Clone, Serialize)]
pub struct GridOptions {
	pub name: String,
	pub build: String,
	pub platform: Option<String>,
	pub user: String,
	#[serde(rename = "accessKey")]
	pub access_key: String,
}

/// Built connection descriptor: resolved engine kind, capability document,
/// and the absolute connection URL. Consumed once to open a connection.
#[derive(Debug, Clone)]
pub struct ConnectionDescriptor {
	pub engine: BrowserKind,
	pub capabilities: CapabilityDocument,
	url: String,
}

impl ConnectionDescriptor {
	/// Returns the absolute connection URL.
	pub fn url(&self) -> &str {
		&self.url
	}
}

/// Validates `config` and deterministically builds a connection descriptor.
///
/// Fails with a configuration error when `username`, `access_key`, or
/// `url_base` is blank, or when `browser_name` does not resolve to a known
/// engine kind. An absent browser name resolves to the default engine while
/// still serializing as `null` in the capability document.
pub fn build(config: &GridConfig) -> Result<ConnectionDescriptor> {
	for (value, name) in [
		(&config.username, "username"),
		(&config.access_key, "access key"),
		(&config.url_base, "url base"),
	] {
		if value.trim().is_empty() {
			return Err(GridError::Config(format!("required parameter missing: {name}")));
		}
	}

	let engine = match config.browser_name.as_deref() {
		Some(name) => BrowserKind::resolve(name)?,
		None => BrowserKind::default(),
	};

	let capabilities = CapabilityDocument {
		browser_name: config.browser_name.clone(),
		browser_version: config.browser_version.clone(),
		options: GridOptions {
			name: config.session_name.clone().unwrap_or_else(|| DEFAULT_SESSION_NAME.to_string()),
			build: config.build_name.clone().unwrap_or_else(|| DEFAULT_BUILD_NAME.to_string()),
			platform: config.platform.clone(),
			user: config.username.clone(),
			access_key: config.access_key.clone(),
		},
	};

	let payload = serde_json::to_string(&capabilities)?;
	let url = format!("{}?capabilities={}", config.url_base, urlencoding::encode(&payload));

	Ok(ConnectionDescriptor {
		engine,
		capabilities,
		url,
	})
}
