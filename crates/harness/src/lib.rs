//! Remote-grid browser test harness.
//!
//! Connects end-to-end tests to a remote browser-automation grid over CDP
//! and drives them through a named session/tab registry. The automation
//! engine itself stays behind the [`engine`] trait seam; this crate owns
//! capability/URL construction, registry bookkeeping, the search scenario
//! flow, and the grid's pass/fail side channel.
//!
//! Standard flow: [`GridConfig`] → [`capabilities::build`] →
//! [`GridSession::open`] → [`SearchScenario::run`] →
//! [`ScenarioOutcome::report`] → [`GridSession::close`].

pub mod capabilities;
pub mod config;
pub mod engine;
pub mod error;
pub mod harness;
pub mod logging;
pub mod registry;
pub mod scenario;
pub mod status;
pub mod types;

pub use capabilities::{CapabilityDocument, ConnectionDescriptor, GridOptions};
pub use config::{ConfigSource, EnvSource, GridConfig};
pub use error::{GridError, Result};
pub use harness::GridSession;
pub use registry::{DEFAULT_KEY, SessionRegistry};
pub use scenario::{ScenarioOutcome, SearchScenario};
pub use status::TestStatus;
pub use types::BrowserKind;
