//! Side-channel status reporting to the grid provider.
//!
//! The grid intercepts a page-level evaluation whose argument carries a
//! `lambdatest_action:` payload. The payload shape is a wire contract other
//! tooling parses; `status` is exactly `"passed"` or `"failed"`. The remark
//! goes through JSON serialization, so quotes and backslashes in failure
//! messages cannot corrupt the document.

use serde::Serialize;

use crate::engine::Tab;
use crate::error::Result;

/// No-op script the payload rides on; the grid reads the argument.
const STATUS_SCRIPT: &str = "_ => {}";

/// Terminal status reported for one test flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TestStatus {
	Passed,
	Failed,
}

impl std::fmt::Display for TestStatus {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			TestStatus::Passed => write!(f, "passed"),
			TestStatus::Failed => write!(f, "failed"),
		}
	}
}

#[derive(Serialize)]
struct StatusAction<'a> {
	action: &'static str,
	arguments: StatusArguments<'a>,
}

#[derive(Serialize)]
struct StatusArguments<'a> {
	status: TestStatus,
	remark: &'a str,
}

/// Renders the side-channel payload string for `status`/`remark`.
pub fn payload(status: TestStatus, remark: &str) -> Result<String> {
	let action = StatusAction {
		action: "setTestStatus",
		arguments: StatusArguments { status, remark },
	};
	Ok(format!("lambdatest_action: {}", serde_json::to_string(&action)?))
}

/// Issues exactly one evaluate call carrying the status payload.
pub async fn report(tab: &dyn Tab, status: TestStatus, remark: &str) -> Result<()> {
	let payload = payload(status, remark)?;
	tab.evaluate(STATUS_SCRIPT, &payload).await
}
