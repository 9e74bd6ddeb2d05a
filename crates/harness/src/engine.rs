//! Trait seam for the external browser-automation engine.
//!
//! The harness never talks to a browser directly; it drives these
//! object-safe traits. A production connector adapts a Playwright-style
//! client, tests substitute scripted fakes.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::Result;
use crate::types::BrowserKind;

/// Navigation wait strategy for [`Tab::goto`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WaitUntil {
	#[default]
	Load,
	DomContentLoaded,
	NetworkIdle,
}

/// Viewport dimensions for a new context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
	pub width: u32,
	pub height: u32,
}

/// Options for creating an isolated browsing context.
#[derive(Clone, Debug, Default)]
pub struct ContextOptions {
	pub viewport: Option<Viewport>,
	pub ignore_https_errors: bool,
}

impl ContextOptions {
	/// Context options used by the standard test flow.
	pub fn standard() -> Self {
		Self {
			viewport: Some(Viewport { width: 1280, height: 720 }),
			ignore_https_errors: true,
		}
	}
}

/// Options for [`Tab::goto`].
#[derive(Clone, Copy, Debug, Default)]
pub struct GotoOptions {
	pub wait_until: WaitUntil,
	pub timeout: Option<Duration>,
}

/// URL condition checked by [`Tab::wait_for_url`].
pub type UrlPredicate<'a> = &'a (dyn Fn(&str) -> bool + Send + Sync);

/// Opens remote connections against a grid endpoint.
#[async_trait]
pub trait RemoteConnector: Send + Sync {
	async fn connect(&self, kind: BrowserKind, url: &str) -> Result<Box<dyn Connection>>;
}

/// One external browser connection.
#[async_trait]
pub trait Connection: Send + Sync {
	async fn new_context(&self, options: ContextOptions) -> Result<Box<dyn Context>>;
	async fn close(&self) -> Result<()>;
}

/// An isolated browsing environment owned by a connection.
#[async_trait]
pub trait Context: Send + Sync {
	async fn new_page(&self) -> Result<Box<dyn Tab>>;
	async fn close(&self) -> Result<()>;
}

impl std::fmt::Debug for dyn Context + '_ {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str("dyn Context")
	}
}

/// A page/document handle within exactly one context.
#[async_trait]
pub trait Tab: Send + Sync {
	async fn goto(&self, url: &str, options: GotoOptions) -> Result<()>;
	async fn fill(&self, selector: &str, text: &str) -> Result<()>;
	async fn press_key(&self, key: &str) -> Result<()>;
	async fn wait_for_url(&self, predicate: UrlPredicate<'_>, timeout: Duration) -> Result<()>;
	async fn title(&self) -> Result<String>;
	async fn evaluate(&self, script: &str, arg: &str) -> Result<()>;
}

impl std::fmt::Debug for dyn Tab + '_ {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str("dyn Tab")
	}
}
