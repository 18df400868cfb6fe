use std::{
    any::Any,
    panic::{self, PanicHookInfo},
    sync::{Mutex, MutexGuard, PoisonError},
};

use tracing::{debug, info, warn};

use crate::verify::{
    case::ExampleCase,
    report::{ExampleResult, FailureKind, VerificationReport},
};

type PanicHook = Box<dyn Fn(&PanicHookInfo<'_>) + Sync + Send + 'static>;

/// Held for the whole of a quiet run so concurrent runs swap the hook one at a time.
static PANIC_HOOK_LOCK: Mutex<()> = Mutex::new(());

/// Runs example cases one after another, turning every error or panic into a
/// failed result for that case alone.
#[derive(Debug, Default)]
pub struct Verifier {
    quiet_panics: bool,
}

impl Verifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route panic messages from case bodies to `tracing` instead of stderr
    /// while a run is in progress. The panic hook is process-global, so quiet
    /// runs on different threads wait for each other.
    pub fn with_quiet_panics(mut self, quiet: bool) -> Self {
        self.quiet_panics = quiet;
        self
    }

    pub fn run(&self, cases: &[ExampleCase]) -> VerificationReport {
        let _hook = self.quiet_panics.then(QuietPanicHook::install);

        let report: VerificationReport = cases.iter().map(|case| self.run_case(case)).collect();

        info!(
            total = report.total(),
            passed = report.passed,
            failed = report.failed,
            "verification finished"
        );
        report
    }

    pub fn run_case(&self, case: &ExampleCase) -> ExampleResult {
        debug!(case = case.name, group = case.group, "running example");

        let result = match panic::catch_unwind(case.run) {
            Ok(Ok(observed)) => ExampleResult::pass(case, observed),
            Ok(Err(error)) => ExampleResult::fail(case, error.kind(), error.to_string()),
            Err(payload) => ExampleResult::fail(
                case,
                FailureKind::UnexpectedError,
                format!("panicked: {}", panic_message(payload.as_ref())),
            ),
        };

        match result.outcome.failure_kind() {
            None => debug!(case = case.name, "example passed"),
            Some(kind) => warn!(case = case.name, %kind, "example failed"),
        }
        result
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

/// Swaps the process panic hook for one that logs, restoring the previous hook on drop.
struct QuietPanicHook {
    previous: Option<PanicHook>,
    _lock: MutexGuard<'static, ()>,
}

impl QuietPanicHook {
    fn install() -> Self {
        let lock = PANIC_HOOK_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        let previous = panic::take_hook();
        panic::set_hook(Box::new(|info| {
            debug!(panic = %info, "example panicked");
        }));
        Self {
            previous: Some(previous),
            _lock: lock,
        }
    }
}

impl Drop for QuietPanicHook {
    fn drop(&mut self) {
        // runs before `_lock` is released
        if let Some(previous) = self.previous.take() {
            panic::set_hook(previous);
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;
    use crate::{
        check_eq,
        verify::{case::CaseResult, report::Outcome},
        ExampleError,
    };

    fn passes() -> CaseResult {
        Ok(json!(8))
    }

    fn mismatches() -> CaseResult {
        check_eq!(2 * 4, 9);
        Ok(Value::Null)
    }

    fn errors() -> CaseResult {
        let parsed: i32 = "eight".parse()?;
        Ok(json!(parsed))
    }

    fn panics() -> CaseResult {
        let empty: Vec<i32> = Vec::new();
        Ok(json!(empty[0]))
    }

    fn raises() -> CaseResult {
        Err(ExampleError::unexpected("gave up"))
    }

    fn cases() -> Vec<ExampleCase> {
        vec![
            ExampleCase::new("passes", "tests", "", passes),
            ExampleCase::new("mismatches", "tests", "", mismatches),
            ExampleCase::new("errors", "tests", "", errors),
            ExampleCase::new("panics", "tests", "", panics),
            ExampleCase::new("raises", "tests", "", raises),
        ]
    }

    #[test]
    fn failures_do_not_stop_later_cases() {
        let report = Verifier::new().run(&cases());

        let kinds: Vec<_> = report
            .results
            .iter()
            .map(|result| (result.name.as_str(), result.outcome.failure_kind()))
            .collect();
        assert_eq!(
            kinds,
            vec![
                ("passes", None),
                ("mismatches", Some(FailureKind::AssertionFailure)),
                ("errors", Some(FailureKind::UnexpectedError)),
                ("panics", Some(FailureKind::UnexpectedError)),
                ("raises", Some(FailureKind::UnexpectedError)),
            ]
        );
        assert_eq!(report.passed, 1);
        assert_eq!(report.failed, 4);
    }

    #[test]
    fn pass_keeps_observed_value() {
        let result = Verifier::new().run_case(&ExampleCase::new("passes", "tests", "", passes));

        assert_eq!(result.outcome, Outcome::Pass);
        assert_eq!(result.observed, Some(json!(8)));
    }

    #[test]
    fn panic_message_is_captured() {
        let result = Verifier::new().run_case(&ExampleCase::new("panics", "tests", "", panics));

        match result.outcome {
            Outcome::Fail { kind, reason } => {
                assert_eq!(kind, FailureKind::UnexpectedError);
                assert!(reason.starts_with("panicked: index out of bounds"), "{reason}");
            }
            Outcome::Pass => panic!("expected the panic to be recorded as a failure"),
        }
    }
}
