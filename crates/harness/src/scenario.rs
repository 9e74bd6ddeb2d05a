//! Search scenario flow and its typed outcome.
//!
//! The interactive portion of a test never bubbles errors directly: it
//! produces a [`ScenarioOutcome`] carrying the status to report plus the
//! error detail, and [`ScenarioOutcome::report`] is the explicit final step
//! that both sends the status and propagates the failure to the caller.

use std::time::Duration;

use tracing::debug;

use crate::engine::{GotoOptions, Tab, WaitUntil};
use crate::error::{GridError, Result};
use crate::status::{self, TestStatus};

/// One search-engine interaction: navigate, type a query, submit, and
/// check the result page title.
#[derive(Debug, Clone)]
pub struct SearchScenario {
	/// Search-engine entry page.
	pub url: String,
	/// Query typed into the search box.
	pub query: String,
	/// Selector for the search input.
	pub input_selector: String,
	/// Term expected in the result-page title.
	pub expected_title_term: String,
	/// Bound on the post-submit URL wait. No retry on expiry.
	pub wait_timeout: Duration,
}

impl Default for SearchScenario {
	fn default() -> Self {
		Self {
			url: "https://duckduckgo.com".into(),
			query: "LambdaTest".into(),
			input_selector: "[name='q']".into(),
			expected_title_term: "LambdaTest".into(),
			wait_timeout: Duration::from_secs(10),
		}
	}
}

/// Result of running a scenario: the status to report, a human-readable
/// remark, and the underlying error when the run did not complete cleanly.
#[derive(Debug)]
pub struct ScenarioOutcome {
	pub status: TestStatus,
	pub remark: String,
	pub error: Option<GridError>,
}

impl ScenarioOutcome {
	/// Clean pass.
	pub fn passed(remark: impl Into<String>) -> Self {
		Self {
			status: TestStatus::Passed,
			remark: remark.into(),
			error: None,
		}
	}

	/// Failure, optionally carrying the error that caused it.
	pub fn failed(remark: impl Into<String>, error: Option<GridError>) -> Self {
		Self {
			status: TestStatus::Failed,
			remark: remark.into(),
			error,
		}
	}

	pub fn is_passed(&self) -> bool {
		self.status == TestStatus::Passed
	}

	/// Reports the status via the side channel, then propagates the stored
	/// error so the outer harness also records the failure.
	pub async fn report(self, tab: &dyn Tab) -> Result<()> {
		status::report(tab, self.status, &self.remark).await?;
		match self.error {
			Some(err) => Err(err),
			None => Ok(()),
		}
	}
}

impl SearchScenario {
	/// Drives the scenario on `tab`, converting interactive errors into a
	/// failed outcome instead of bubbling them past the tab handle.
	pub async fn run(&self, tab: &dyn Tab) -> ScenarioOutcome {
		match self.drive(tab).await {
			Ok(outcome) => outcome,
			Err(err) => {
				let remark = format!("scenario error: {err}");
				ScenarioOutcome::failed(remark, Some(err))
			}
		}
	}

	async fn drive(&self, tab: &dyn Tab) -> Result<ScenarioOutcome> {
		debug!(target = "grid.scenario", url = %self.url, query = %self.query, "running search scenario");

		tab.goto(
			&self.url,
			GotoOptions {
				wait_until: WaitUntil::Load,
				..Default::default()
			},
		)
		.await?;
		tab.fill(&self.input_selector, &self.query).await?;
		tab.press_key("Enter").await?;

		let needle = format!("q={}", self.query);
		tab.wait_for_url(&|url: &str| url.contains(&needle), self.wait_timeout).await?;

		let title = tab.title().await?;
		if title.contains(&self.expected_title_term) {
			Ok(ScenarioOutcome::passed("Title matched"))
		} else {
			Ok(ScenarioOutcome::failed("Title did not match", None))
		}
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Mutex;

	use async_trait::async_trait;

	use super::*;
	use crate::engine::UrlPredicate;

	/// Scripted tab: `press_key("Enter")` lands on `result_url`, title and
	/// wait behavior are configurable, evaluate calls are recorded.
	struct ScriptedTab {
		title: String,
		result_url: String,
		time_out_wait: bool,
		url: Mutex<String>,
		evaluations: Mutex<Vec<String>>,
	}

	impl ScriptedTab {
		fn new(title: &str, result_url: &str) -> Self {
			Self {
				title: title.into(),
				result_url: result_url.into(),
				time_out_wait: false,
				url: Mutex::new(String::new()),
				evaluations: Mutex::new(Vec::new()),
			}
		}

		fn evaluations(&self) -> Vec<String> {
			self.evaluations.lock().unwrap().clone()
		}
	}

	#[async_trait]
	impl Tab for ScriptedTab {
		async fn goto(&self, url: &str, _options: GotoOptions) -> Result<()> {
			*self.url.lock().unwrap() = url.to_string();
			Ok(())
		}

		async fn fill(&self, _selector: &str, _text: &str) -> Result<()> {
			Ok(())
		}

		async fn press_key(&self, key: &str) -> Result<()> {
			if key == "Enter" {
				*self.url.lock().unwrap() = self.result_url.clone();
			}
			Ok(())
		}

		async fn wait_for_url(&self, predicate: UrlPredicate<'_>, timeout: Duration) -> Result<()> {
			if self.time_out_wait || !predicate(&self.url.lock().unwrap()) {
				return Err(GridError::Timeout {
					ms: timeout.as_millis() as u64,
					condition: "url predicate".into(),
				});
			}
			Ok(())
		}

		async fn title(&self) -> Result<String> {
			Ok(self.title.clone())
		}

		async fn evaluate(&self, _script: &str, arg: &str) -> Result<()> {
			self.evaluations.lock().unwrap().push(arg.to_string());
			Ok(())
		}
	}

	#[tokio::test]
	async fn matching_title_passes() {
		let tab = ScriptedTab::new("LambdaTest at DuckDuckGo", "https://duckduckgo.com/?q=LambdaTest");
		let outcome = SearchScenario::default().run(&tab).await;
		assert!(outcome.is_passed());
		assert_eq!(outcome.remark, "Title matched");
		assert!(outcome.error.is_none());
	}

	#[tokio::test]
	async fn mismatched_title_fails_without_error_detail() {
		let tab = ScriptedTab::new("something else", "https://duckduckgo.com/?q=LambdaTest");
		let outcome = SearchScenario::default().run(&tab).await;
		assert_eq!(outcome.status, TestStatus::Failed);
		assert_eq!(outcome.remark, "Title did not match");
		assert!(outcome.error.is_none());
	}

	#[tokio::test]
	async fn wait_timeout_becomes_failed_outcome_with_error() {
		let mut tab = ScriptedTab::new("LambdaTest", "https://duckduckgo.com/?q=LambdaTest");
		tab.time_out_wait = true;
		let outcome = SearchScenario::default().run(&tab).await;
		assert_eq!(outcome.status, TestStatus::Failed);
		assert!(matches!(outcome.error, Some(GridError::Timeout { .. })));
	}

	#[tokio::test]
	async fn report_sends_status_then_propagates_stored_error() {
		let tab = ScriptedTab::new("LambdaTest", "https://duckduckgo.com/?q=LambdaTest");
		let outcome = ScenarioOutcome::failed(
			"Title did not match",
			Some(GridError::Timeout {
				ms: 10_000,
				condition: "url predicate".into(),
			}),
		);

		let err = outcome.report(&tab).await.unwrap_err();
		assert!(matches!(err, GridError::Timeout { .. }));

		let evaluations = tab.evaluations();
		assert_eq!(evaluations.len(), 1);
		assert!(evaluations[0].contains("\"status\":\"failed\""));
	}

	#[tokio::test]
	async fn report_of_clean_pass_returns_ok() {
		let tab = ScriptedTab::new("LambdaTest", "https://duckduckgo.com/?q=LambdaTest");
		let outcome = SearchScenario::default().run(&tab).await;
		outcome.report(&tab).await.unwrap();
		assert_eq!(tab.evaluations().len(), 1);
	}
}
