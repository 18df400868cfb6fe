//! Set algebra over the characters of `" abcde "` and `"  b d f"`.

use std::collections::BTreeSet;

use serde_json::json;

use crate::{check_eq, example_case, CaseResult};

fn letters(text: &str) -> BTreeSet<char> {
    text.chars().collect()
}

fn sets() -> (BTreeSet<char>, BTreeSet<char>) {
    (letters(" abcde "), letters("  b d f"))
}

/// Members of the first set that are missing from the second.
#[example_case(group = "sets")]
pub fn set_difference() -> CaseResult {
    let (one, two) = sets();

    let difference = &one - &two;
    check_eq!(difference, one.difference(&two).copied().collect::<BTreeSet<_>>());
    check_eq!(difference, letters("ace"));

    Ok(json!(difference))
}

/// Every member of either set.
#[example_case(group = "sets")]
pub fn set_union() -> CaseResult {
    let (one, two) = sets();

    let union = &one | &two;
    check_eq!(union, one.union(&two).copied().collect::<BTreeSet<_>>());
    check_eq!(union, letters(" abcdef"));

    Ok(json!(union))
}

/// Members common to both sets.
#[example_case(group = "sets")]
pub fn set_intersection() -> CaseResult {
    let (one, two) = sets();

    let intersection = &one & &two;
    check_eq!(intersection, one.intersection(&two).copied().collect::<BTreeSet<_>>());
    check_eq!(intersection, letters(" bd"));

    Ok(json!(intersection))
}

/// Members of exactly one of the two sets.
#[example_case(group = "sets")]
pub fn set_symmetric_difference() -> CaseResult {
    let (one, two) = sets();

    let symmetric_difference = &one ^ &two;
    check_eq!(
        symmetric_difference,
        one.symmetric_difference(&two).copied().collect::<BTreeSet<_>>()
    );
    check_eq!(symmetric_difference, letters("acef"));

    Ok(json!(symmetric_difference))
}
