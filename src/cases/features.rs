//! Everyday conveniences: destructuring, block values, templating and closures.

use std::{cell::RefCell, ops::RangeFull};

use handlebars::Handlebars;
use serde_json::{json, Value};

use crate::{check, check_eq, example_case, CaseResult};

/// Binds several names at once from tuples and arrays, swaps them, and unpacks a returned pair.
#[example_case(group = "features")]
pub fn multiple_assignment() -> CaseResult {
    let (x, y) = (1, 2);
    check_eq!(x, 1);
    check_eq!(y, 2);

    let [x, y, rest @ ..] = [1, 2, 3, 4];
    check_eq!((x, y), (1, 2));
    check_eq!(rest, [3, 4], "all other values");

    let (y, x) = (x, y);
    check_eq!((x, y), (2, 1));

    fn returns_multiple_values() -> (i32, i32) {
        (1, 2)
    }

    let (x, y) = returns_multiple_values();
    check_eq!((x, y), (1, 2));

    Ok(json!({ "x": x, "y": y, "rest": rest }))
}

/// A labeled block yields a value on early exit; falling off the end plays the loop's `else`.
#[example_case(name = "loop else via labeled break", group = "features")]
pub fn loop_else() -> CaseResult {
    let exited_early = 'search: {
        for i in 0..5 {
            if i > 5 {
                break 'search true;
            }
        }
        false
    };
    check!(!exited_early, "the loop should run to completion");

    let found = (0..5).find(|i| *i > 5);
    check!(found.is_none());

    Ok(json!(exited_early))
}

/// Comparisons chain through `&&` or collapse into a range check.
#[example_case(group = "features")]
pub fn chained_comparisons() -> CaseResult {
    let (low, mid, high) = (1, 2, 3);

    check!(low < mid && mid < high);
    check!(low < high && high > mid);
    check!((low..=high).contains(&mid));

    Ok(json!([low, mid, high]))
}

/// Fills named placeholders in a template.
#[example_case(group = "features")]
pub fn string_templating() -> CaseResult {
    let mut registry = Handlebars::new();
    registry.set_strict_mode(true);
    registry.register_template_string("xml", "<{{tag}}>{{content}}</{{tag}}>")?;

    let actual = registry.render("xml", &json!({ "tag": "h1", "content": "Hello, world!" }))?;
    check_eq!(actual, "<h1>Hello, world!</h1>");

    Ok(json!(actual))
}

fn paragraph_me(func: impl Fn(&str) -> String) -> impl Fn(&str) -> String {
    move |value: &str| format!("<p>{}</p>", func(value))
}

/// Wraps one function in another to extend its behaviour.
#[example_case(group = "features")]
pub fn decorators() -> CaseResult {
    let to_paragraph = paragraph_me(|value| value.to_string());

    let actual = to_paragraph("Hello, world!");
    check_eq!(actual, "<p>Hello, world!</p>");

    Ok(json!(actual))
}

/// Defaults are built fresh on every call; state that outlives a call must be held explicitly.
#[example_case(group = "features")]
pub fn shared_default_arguments() -> CaseResult {
    let shared = RefCell::new(Vec::new());
    let appends_to_shared = || {
        shared.borrow_mut().push(1);
        shared.borrow().clone()
    };
    check_eq!(appends_to_shared(), vec![1]);
    check_eq!(appends_to_shared(), vec![1, 1]);

    fn appends_to_fresh(arg: Option<Vec<i32>>) -> Vec<i32> {
        let mut arg = arg.unwrap_or_default();
        arg.push(1);
        arg
    }

    check_eq!(appends_to_fresh(None), vec![1]);
    check_eq!(appends_to_fresh(None), vec![1]);
    check_eq!(appends_to_fresh(Some(vec![0])), vec![0, 1]);

    Ok(json!(shared.into_inner()))
}

/// Repetition and concatenation work on strings and sequences alike.
#[example_case(group = "features")]
pub fn sequence_operators() -> CaseResult {
    check_eq!("to".repeat(2), "toto");
    check_eq!([1, 2].repeat(2), vec![1, 2, 1, 2]);
    check_eq!("Keep me!".repeat(usize::from(true)), "Keep me!");
    check_eq!("Keep me!".repeat(usize::from(false)), "");
    check_eq!(String::from("to") + "to", "toto");
    check_eq!([vec![1, 2], vec![3, 4]].concat(), vec![1, 2, 3, 4]);

    Ok(json!("toto"))
}

/// Tests whether a value is contained in a string or a collection.
#[example_case(group = "features")]
pub fn membership() -> CaseResult {
    check!("abc".contains('b'));
    check!(!"efg".contains('b'));
    check!([1, 2, 3].contains(&2));
    check!(![4, 5, 6].contains(&2));

    Ok(json!(true))
}

/// Iterates sequences in lockstep, and transposes pairs back into sequences.
#[example_case(group = "features")]
pub fn zip_and_transpose() -> CaseResult {
    for zipped in ["one"].into_iter().zip([2]) {
        check_eq!(zipped, ("one", 2));
    }

    let transpose_me = [(1, 2), (3, 4), (5, 6)];
    let (firsts, seconds): (Vec<i32>, Vec<i32>) = transpose_me.into_iter().unzip();
    check_eq!(firsts, vec![1, 3, 5]);
    check_eq!(seconds, vec![2, 4, 6]);

    Ok(json!([firsts, seconds]))
}

struct Catalogue;

trait Select<I> {
    fn select(&self, index: I) -> String;
}

impl Select<usize> for Catalogue {
    fn select(&self, count: usize) -> String {
        format!("return {count} items")
    }
}

impl Select<RangeFull> for Catalogue {
    fn select(&self, _: RangeFull) -> String {
        "Returning all items".to_string()
    }
}

/// The bare `..` range selects everything, as an ellipsis would.
#[example_case(group = "features")]
pub fn full_range_selection() -> CaseResult {
    let catalogue = Catalogue;

    check_eq!(catalogue.select(2usize), "return 2 items");
    check_eq!(catalogue.select(..), "Returning all items");

    let values = [1, 2, 3];
    check_eq!(values[..], [1, 2, 3]);

    Ok(json!(catalogue.select(..)))
}

/// Binds some arguments now and supplies the rest later.
#[example_case(group = "features")]
pub fn partial_application() -> CaseResult {
    let (start, end) = (0_i32, 4_i32);
    let bound = move |step: Option<usize>| {
        (start..end)
            .step_by(step.unwrap_or(1))
            .collect::<Vec<_>>()
    };

    check_eq!(bound(None), vec![0, 1, 2, 3]);
    check_eq!(bound(Some(2)), vec![0, 2]);

    Ok(json!(bound(Some(2))))
}

/// Functions and closures are values that can be passed around and called later.
#[example_case(group = "features")]
pub fn functions_as_values() -> CaseResult {
    fn use_callback(mut func: impl FnMut()) {
        func();
    }

    let mut called_back = false;
    use_callback(|| called_back = true);
    check!(called_back);

    let operations: [(&str, fn(i32, i32) -> i32); 2] =
        [("add", |a, b| a + b), ("mul", |a, b| a * b)];
    let results: Vec<i32> = operations.iter().map(|(_, op)| op(3, 4)).collect();
    check_eq!(results, vec![7, 12]);

    Ok(Value::Bool(called_back))
}
