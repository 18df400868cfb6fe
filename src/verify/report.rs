use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::verify::case::ExampleCase;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// An expected value did not match the actual one.
    AssertionFailure,
    /// Any other error or panic escaping the case body.
    UnexpectedError,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AssertionFailure => f.write_str("assertion failure"),
            Self::UnexpectedError => f.write_str("unexpected error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Pass,
    Fail { kind: FailureKind, reason: String },
}

impl Outcome {
    pub fn is_pass(&self) -> bool {
        matches!(self, Outcome::Pass)
    }

    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            Outcome::Pass => None,
            Outcome::Fail { kind, .. } => Some(*kind),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExampleResult {
    pub name: String,
    pub group: String,
    #[serde(flatten)]
    pub outcome: Outcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observed: Option<Value>,
}

impl ExampleResult {
    pub fn pass(case: &ExampleCase, observed: Value) -> Self {
        Self {
            name: case.name.to_string(),
            group: case.group.to_string(),
            outcome: Outcome::Pass,
            observed: Some(observed),
        }
    }

    #[cold]
    pub fn fail(case: &ExampleCase, kind: FailureKind, reason: impl Into<String>) -> Self {
        Self {
            name: case.name.to_string(),
            group: case.group.to_string(),
            outcome: Outcome::Fail {
                kind,
                reason: reason.into(),
            },
            observed: None,
        }
    }
}

impl fmt::Display for ExampleResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            Outcome::Pass => write!(f, "PASS {}", self.name),
            Outcome::Fail { kind, reason } => write!(f, "FAIL {}: {kind}: {reason}", self.name),
        }
    }
}

/// Results of one verifier run, in the order the cases were given.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VerificationReport {
    pub passed: usize,
    pub failed: usize,
    pub results: Vec<ExampleResult>,
}

impl VerificationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, result: ExampleResult) {
        if result.outcome.is_pass() {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
        self.results.push(result);
    }

    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    pub fn failures(&self) -> impl Iterator<Item = &ExampleResult> {
        self.results.iter().filter(|result| !result.outcome.is_pass())
    }

    /// 0 when every case passed, 1 on any failure, 2 when nothing ran.
    pub fn exit_code(&self) -> i32 {
        if self.total() == 0 {
            2
        } else if self.all_passed() {
            0
        } else {
            1
        }
    }

    pub fn summary_line(&self) -> String {
        if self.total() == 0 {
            return "no examples matched".to_string();
        }
        format!("{} passed, {} failed", self.passed, self.failed)
    }
}

impl FromIterator<ExampleResult> for VerificationReport {
    fn from_iter<I: IntoIterator<Item = ExampleResult>>(iter: I) -> Self {
        let mut report = Self::new();
        for result in iter {
            report.push(result);
        }
        report
    }
}
