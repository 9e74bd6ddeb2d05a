use thiserror::Error;

pub type Result<T> = std::result::Result<T, GridError>;

#[derive(Debug, Error)]
pub enum GridError {
	/// Missing/invalid mandatory parameter or unsupported browser kind.
	/// Raised during setup, before any remote call is attempted.
	#[error("configuration error: {0}")]
	Config(String),

	/// Remote connect or tab-open failure. Fatal for the test flow; no retry.
	#[error("connection failed: {0}")]
	Connection(String),

	/// A selector resolved to a name absent from the registry.
	#[error("{kind} not registered: {name:?}")]
	NotFound { kind: &'static str, name: String },

	/// A bounded wait did not complete. Terminal for that call.
	#[error("timeout after {ms}ms waiting for: {condition}")]
	Timeout { ms: u64, condition: String },

	#[error(transparent)]
	Json(#[from] serde_json::Error),

	#[error(transparent)]
	Engine(#[from] anyhow::Error),
}
