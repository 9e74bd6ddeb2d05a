//! Grid session orchestration: setup ordering and safe teardown.

use tracing::{debug, warn};

use crate::capabilities::ConnectionDescriptor;
use crate::engine::{Connection, ContextOptions, RemoteConnector, Tab};
use crate::error::Result;
use crate::registry::{DEFAULT_KEY, SessionRegistry};

/// One grid connection plus its session registry.
///
/// `open` performs the full setup sequence; any failure aborts the flow
/// before a registry entry exists. The connection handle is exclusively
/// owned here: sharing one `GridSession` across parallel test flows is
/// unsupported, since their contexts would collide in one registry. Create
/// one session per flow instead.
pub struct GridSession {
	connection: Box<dyn Connection>,
	registry: SessionRegistry,
}

impl std::fmt::Debug for GridSession {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("GridSession").finish_non_exhaustive()
	}
}

impl GridSession {
	/// Connects using a built descriptor, creates the default context
	/// (1280x720, HTTPS errors ignored), and registers it with its
	/// initial tab.
	pub async fn open(connector: &dyn RemoteConnector, descriptor: &ConnectionDescriptor) -> Result<Self> {
		debug!(target = "grid.session", engine = %descriptor.engine, "connecting to grid");
		let connection = connector.connect(descriptor.engine, descriptor.url()).await?;
		let context = connection.new_context(ContextOptions::standard()).await?;

		let mut registry = SessionRegistry::new();
		registry.register(DEFAULT_KEY, context).await?;

		Ok(Self { connection, registry })
	}

	pub fn registry(&self) -> &SessionRegistry {
		&self.registry
	}

	pub fn registry_mut(&mut self) -> &mut SessionRegistry {
		&mut self.registry
	}

	/// Resolves the current tab via the registry selector.
	pub fn current_tab(&self) -> Result<&dyn Tab> {
		self.registry.current_tab()
	}

	/// Tears the session down: contexts first, then the connection.
	///
	/// Never returns an error. Teardown may run after the real failure has
	/// already been recorded, so close failures are logged and swallowed
	/// rather than allowed to mask the primary one.
	pub async fn close(mut self) {
		self.registry.close_all().await;
		if let Err(err) = self.connection.close().await {
			warn!(target = "grid.session", error = %err, "failed to close grid connection");
		}
	}
}
