use std::{
    cell::RefCell,
    path::{Path, PathBuf},
};

use pretty_assertions::assert_eq;
use regex::Regex;
use serde_json::{json, Value};
use syntaxtour::{
    cases, check, check_eq, example_case, CaseResult, ExampleCase, ExampleResult, FailureKind,
    Outcome, Verifier,
};
use tempfile::NamedTempFile;

fn result_named<'a>(results: &'a [ExampleResult], name: &str) -> &'a ExampleResult {
    results
        .iter()
        .find(|result| result.name == name)
        .unwrap_or_else(|| panic!("no result named {name}"))
}

#[test]
fn every_catalogued_example_passes() {
    let report = Verifier::new().run(&cases::all());

    let failures: Vec<String> = report.failures().map(ToString::to_string).collect();
    assert_eq!(failures, Vec::<String>::new());
    assert_eq!(report.exit_code(), 0);
}

#[test]
fn one_result_per_case_in_declaration_order() {
    let cases = cases::all();
    let report = Verifier::new().run(&cases);

    let declared: Vec<&str> = cases.iter().map(|case| case.name).collect();
    let reported: Vec<&str> = report.results.iter().map(|result| result.name.as_str()).collect();
    assert_eq!(reported, declared);
}

#[test]
fn repeated_runs_are_identical() {
    let cases = cases::all();
    let verifier = Verifier::new();

    let first = verifier.run(&cases);
    let second = verifier.run(&cases);

    assert_eq!(first, second);
}

#[test]
fn rectangle_area_via_positional_unpacking_is_eight() {
    let report = Verifier::new().run(&cases::all());
    let result = result_named(&report.results, "rectangle area via positional unpacking");

    assert_eq!(result.outcome, Outcome::Pass);
    assert_eq!(result.observed, Some(json!(8)));
}

#[test]
fn set_difference_leaves_a_c_e() {
    let report = Verifier::new().run(&cases::all());
    let result = result_named(&report.results, "set difference");

    assert_eq!(result.outcome, Outcome::Pass);
    assert_eq!(result.observed, Some(json!(["a", "c", "e"])));
}

#[test]
fn scoped_temporary_file_is_created_then_removed() {
    let selected = cases::matching(&Regex::new("^scoped temporary file$").unwrap());
    let report = Verifier::new().run(&selected);

    assert_eq!(report.total(), 1);
    let result = &report.results[0];
    assert_eq!(result.outcome, Outcome::Pass);
    assert_eq!(
        result.observed,
        Some(json!({ "existed_in_scope": true, "exists_after_scope": false }))
    );
}

/// Adds one and one, expecting three.
#[example_case(group = "broken")]
fn bad_arithmetic() -> CaseResult {
    check_eq!(1 + 1, 3);
    Ok(Value::Null)
}

fn unchecked_parse() -> CaseResult {
    let number: i32 = "not a number".parse().unwrap();
    Ok(json!(number))
}

#[test]
fn attribute_derives_name_group_and_description() {
    let case = bad_arithmetic_case();

    assert_eq!(case.name, "bad arithmetic");
    assert_eq!(case.group, "broken");
    assert_eq!(case.description, "Adds one and one, expecting three.");
}

#[test]
fn uncaught_errors_are_recorded_not_propagated() {
    let mut selected = vec![
        bad_arithmetic_case(),
        ExampleCase::new("unchecked parse", "broken", "", unchecked_parse),
    ];
    selected.extend(cases::matching(&Regex::new("^set ").unwrap()));

    let report = Verifier::new().run(&selected);

    assert_eq!(report.total(), 6);
    assert_eq!(report.passed, 4);
    assert_eq!(report.failed, 2);
    assert_eq!(report.exit_code(), 1);
    assert_eq!(
        report.results[0].outcome.failure_kind(),
        Some(FailureKind::AssertionFailure)
    );
    match &report.results[1].outcome {
        Outcome::Fail { kind, reason } => {
            assert_eq!(*kind, FailureKind::UnexpectedError);
            assert!(reason.starts_with("panicked:"), "{reason}");
        }
        Outcome::Pass => panic!("a panicking case must not pass"),
    }
}

#[test]
fn filter_selects_matching_cases_in_order() {
    let selected = cases::matching(&Regex::new("^set ").unwrap());
    let names: Vec<&str> = selected.iter().map(|case| case.name).collect();

    assert_eq!(
        names,
        vec![
            "set difference",
            "set union",
            "set intersection",
            "set symmetric difference"
        ]
    );
}

#[test]
fn empty_selection_is_not_success() {
    let selected = cases::matching(&Regex::new("^no such example$").unwrap());
    let report = Verifier::new().run(&selected);

    assert_eq!(report.total(), 0);
    assert_eq!(report.exit_code(), 2);
}

thread_local! {
    static HELD_PATH: RefCell<Option<PathBuf>> = const { RefCell::new(None) };
}

fn hold(path: &Path) {
    HELD_PATH.with(|slot| *slot.borrow_mut() = Some(path.to_path_buf()));
}

fn take_held() -> PathBuf {
    HELD_PATH
        .with(|slot| slot.borrow_mut().take())
        .expect("case should record its temporary path")
}

fn temp_file_then_failed_check() -> CaseResult {
    let file = NamedTempFile::new()?;
    hold(file.path());
    check!(!file.path().exists(), "the file is still held");
    Ok(Value::Null)
}

fn temp_file_then_panic() -> CaseResult {
    let file = NamedTempFile::new()?;
    hold(file.path());
    panic!("gave up while holding {}", file.path().display());
}

#[test]
fn temporary_files_are_removed_when_a_case_fails() {
    let failing = [
        (
            ExampleCase::new("failed check", "resources", "", temp_file_then_failed_check),
            FailureKind::AssertionFailure,
        ),
        (
            ExampleCase::new("panic", "resources", "", temp_file_then_panic),
            FailureKind::UnexpectedError,
        ),
    ];

    for (case, expected_kind) in failing {
        let result = Verifier::new().run_case(&case);
        let path = take_held();

        assert_eq!(result.outcome.failure_kind(), Some(expected_kind), "{}", case.name);
        assert!(!path.exists(), "{} left {} behind", case.name, path.display());
    }
}

#[test]
fn rust_idioms_group_runs_and_passes() {
    let report = Verifier::new().run(&cases::all());
    let idioms: Vec<&ExampleResult> = report
        .results
        .iter()
        .filter(|result| result.group == "rust idioms")
        .collect();

    assert_eq!(idioms.len(), 17);
    assert!(idioms.iter().all(|result| result.outcome.is_pass()));
    assert_eq!(
        result_named(&report.results, "at bindings in patterns").observed,
        Some(json!("5 is between 1 and 5"))
    );
    assert_eq!(
        result_named(&report.results, "impl trait in return position").observed,
        Some(json!([0, 2, 4, 6, 8]))
    );
}
