//! Named registry of browser contexts and tabs with a current selector.
//!
//! Pure in-memory bookkeeping: the registry owns context/tab handles keyed
//! by name and resolves the "current" pair on demand. It performs no
//! networking of its own; the only awaited calls are the engine's tab-open
//! during [`SessionRegistry::register`] and the per-context closes during
//! [`SessionRegistry::close_all`]. One registry per test flow; instances are
//! not designed for concurrent mutation.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::engine::{Context, Tab};
use crate::error::{GridError, Result};

/// Key populated by the standard single-session flow.
pub const DEFAULT_KEY: &str = "default";

/// Named browser contexts/tabs plus the current selector pair.
pub struct SessionRegistry {
	contexts: HashMap<String, Box<dyn Context>>,
	tabs: HashMap<String, Box<dyn Tab>>,
	tabs_map: HashMap<String, Vec<String>>,
	current_context: String,
	current_tab: String,
}

impl Default for SessionRegistry {
	fn default() -> Self {
		Self::new()
	}
}

impl SessionRegistry {
	/// Creates an empty registry with the selector pointed at [`DEFAULT_KEY`].
	pub fn new() -> Self {
		Self {
			contexts: HashMap::new(),
			tabs: HashMap::new(),
			tabs_map: HashMap::new(),
			current_context: DEFAULT_KEY.to_string(),
			current_tab: DEFAULT_KEY.to_string(),
		}
	}

	/// Registers a context under `name`, opening its initial tab.
	///
	/// The tab is stored under the same name by convention, the context's
	/// tab list becomes `[name]`, and the current selector moves to
	/// `(name, name)`. On tab-open failure nothing is recorded: either both
	/// context and tab land in the registry or neither does.
	///
	/// Registering an existing name overwrites without closing the previous
	/// handles (last write wins); not leaking the old handles is a caller
	/// obligation.
	pub async fn register(&mut self, name: &str, context: Box<dyn Context>) -> Result<()> {
		let tab = context
			.new_page()
			.await
			.map_err(|e| GridError::Connection(format!("failed to open tab for context {name:?}: {e}")))?;

		self.contexts.insert(name.to_string(), context);
		self.tabs.insert(name.to_string(), tab);
		self.tabs_map.insert(name.to_string(), vec![name.to_string()]);
		self.current_context = name.to_string();
		self.current_tab = name.to_string();

		debug!(target = "grid.session", context = name, "registered context with initial tab");
		Ok(())
	}

	/// Resolves the current tab via the selector.
	pub fn current_tab(&self) -> Result<&dyn Tab> {
		self.tabs.get(&self.current_tab).map(|tab| tab.as_ref()).ok_or_else(|| GridError::NotFound {
			kind: "tab",
			name: self.current_tab.clone(),
		})
	}

	/// Resolves the current context via the selector.
	pub fn current_context(&self) -> Result<&dyn Context> {
		self.contexts
			.get(&self.current_context)
			.map(|context| context.as_ref())
			.ok_or_else(|| GridError::NotFound {
				kind: "context",
				name: self.current_context.clone(),
			})
	}

	/// Returns the ordered tab names owned by `context_name`.
	pub fn tab_names(&self, context_name: &str) -> Option<&[String]> {
		self.tabs_map.get(context_name).map(Vec::as_slice)
	}

	/// True when no context is registered.
	pub fn is_empty(&self) -> bool {
		self.contexts.is_empty()
	}

	/// Closes every registered context and clears all mappings.
	///
	/// Best effort: a failing close is logged and does not prevent closing
	/// the rest. Calling on an empty registry is a no-op.
	pub async fn close_all(&mut self) {
		for (name, context) in self.contexts.drain() {
			if let Err(err) = context.close().await {
				warn!(target = "grid.session", context = %name, error = %err, "failed to close context");
			}
		}
		self.tabs.clear();
		self.tabs_map.clear();
	}
}
