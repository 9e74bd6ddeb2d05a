use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};

/// Browser engine targeted by a grid connection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrowserKind {
	/// Chromium-based browser (Chrome, Edge)
	#[default]
	Chromium,
	/// Mozilla Firefox
	Firefox,
	/// WebKit (Safari)
	Webkit,
}

impl BrowserKind {
	/// Resolves a case-insensitive browser-name string to an engine kind.
	///
	/// `chromium`/`chrome` are synonyms, as are the `pw-` prefixed aliases
	/// the grid accepts for firefox and webkit. Anything else is a
	/// configuration error naming the unsupported value.
	pub fn resolve(name: &str) -> Result<Self> {
		match name.to_ascii_lowercase().as_str() {
			"chromium" | "chrome" => Ok(Self::Chromium),
			"firefox" | "pw-firefox" => Ok(Self::Firefox),
			"webkit" | "pw-webkit" => Ok(Self::Webkit),
			other => Err(GridError::Config(format!("unsupported browser type: {other}"))),
		}
	}
}

impl std::fmt::Display for BrowserKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			BrowserKind::Chromium => write!(f, "chromium"),
			BrowserKind::Firefox => write!(f, "firefox"),
			BrowserKind::Webkit => write!(f, "webkit"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn resolve_accepts_synonyms_case_insensitively() {
		assert_eq!(BrowserKind::resolve("chromium").unwrap(), BrowserKind::Chromium);
		assert_eq!(BrowserKind::resolve("Chrome").unwrap(), BrowserKind::Chromium);
		assert_eq!(BrowserKind::resolve("FIREFOX").unwrap(), BrowserKind::Firefox);
		assert_eq!(BrowserKind::resolve("pw-firefox").unwrap(), BrowserKind::Firefox);
		assert_eq!(BrowserKind::resolve("webkit").unwrap(), BrowserKind::Webkit);
		assert_eq!(BrowserKind::resolve("pw-webkit").unwrap(), BrowserKind::Webkit);
	}

	#[test]
	fn resolve_rejects_unknown_kind_naming_it() {
		let err = BrowserKind::resolve("opera").unwrap_err();
		assert!(matches!(err, GridError::Config(_)));
		assert!(err.to_string().contains("opera"));
	}

	#[test]
	fn display_round_trips_through_resolve() {
		for kind in [BrowserKind::Chromium, BrowserKind::Firefox, BrowserKind::Webkit] {
			assert_eq!(BrowserKind::resolve(&kind.to_string()).unwrap(), kind);
		}
	}
}
