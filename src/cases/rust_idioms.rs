//! Syntax that Rust has and the other tours lack: patterns, expressions and ownership moves.

use std::mem;

use serde_json::json;

use crate::{check, check_eq, example_case, CaseResult};

/// Names a generic parameter at the call site when inference has nothing to go on.
#[example_case(group = "rust idioms")]
pub fn turbofish() -> CaseResult {
    let parsed = "42".parse::<i32>()?;
    check_eq!(parsed, 42);

    let collected = [1, 2, 3].iter().copied().collect::<Vec<_>>();
    check_eq!(collected, vec![1, 2, 3]);

    Ok(json!(parsed))
}

/// A plain block can be labelled and left early with a value.
#[example_case(group = "rust idioms")]
pub fn labelled_block_values() -> CaseResult {
    let threshold = 10;
    let result = 'block: {
        if threshold > 5 {
            break 'block 42;
        }
        0
    };
    check_eq!(result, 42);

    Ok(json!(result))
}

fn describe(value: i32) -> String {
    match value {
        n @ 1..=5 => format!("{n} is between 1 and 5"),
        n @ 6..=10 => format!("{n} is between 6 and 10"),
        n => format!("{n} is out of range"),
    }
}

/// `@` binds the matched value while testing it against a range.
#[example_case(name = "at bindings in patterns", group = "rust idioms")]
pub fn at_bindings() -> CaseResult {
    check_eq!(describe(5), "5 is between 1 and 5");
    check_eq!(describe(8), "8 is between 6 and 10");
    check_eq!(describe(11), "11 is out of range");

    Ok(json!(describe(5)))
}

/// A later binding may reuse a name with a different type.
#[example_case(name = "shadowing changes type", group = "rust idioms")]
pub fn shadowing() -> CaseResult {
    let value = "42";
    check_eq!(value, "42");

    let value: i32 = value.parse()?;
    check_eq!(value, 42);

    let value = value > 0;
    check!(value);

    Ok(json!(value))
}

fn classify(n: i32) -> &'static str {
    match n {
        0 => "zero",
        1 | 2 | 3 => "small",
        4..=9 => "medium",
        _ => "large",
    }
}

/// One match arm can cover several alternatives.
#[example_case(name = "or patterns in match", group = "rust idioms")]
pub fn or_patterns() -> CaseResult {
    let classes: Vec<&str> = [0, 2, 7, 100].into_iter().map(classify).collect();
    check_eq!(classes, vec!["zero", "small", "medium", "large"]);

    Ok(json!(classes))
}

/// `[value; count]` fills an array, nested arrays included.
#[example_case(group = "rust idioms")]
pub fn array_repetition() -> CaseResult {
    let zeroes = [0u8; 5];
    check_eq!(zeroes, [0, 0, 0, 0, 0]);

    let grid = [[1; 3]; 2];
    check_eq!(grid, [[1, 1, 1], [1, 1, 1]]);

    Ok(json!(grid))
}

/// `..=` keeps the upper bound that `..` leaves out.
#[example_case(group = "rust idioms")]
pub fn inclusive_ranges() -> CaseResult {
    let exclusive: Vec<i32> = (1..5).collect();
    let inclusive: Vec<i32> = (1..=5).collect();

    check_eq!(exclusive, vec![1, 2, 3, 4]);
    check_eq!(inclusive, vec![1, 2, 3, 4, 5]);

    Ok(json!({ "exclusive": exclusive, "inclusive": inclusive }))
}

/// `ref` in a pattern borrows the matched value instead of moving it.
#[example_case(name = "ref patterns", group = "rust idioms")]
pub fn ref_patterns() -> CaseResult {
    let greeting = Some(String::from("hello"));

    let length = match greeting {
        Some(ref inner) => inner.len(),
        None => 0,
    };
    check_eq!(length, 5);
    // still owned here
    check_eq!(greeting.as_deref(), Some("hello"));

    Ok(json!(length))
}

/// `r#` turns a keyword into an ordinary identifier.
#[example_case(group = "rust idioms")]
pub fn raw_identifiers() -> CaseResult {
    fn r#match(value: i32) -> &'static str {
        if value > 0 {
            "positive"
        } else {
            "non-positive"
        }
    }

    fn r#type() -> &'static str {
        "a function named after a keyword"
    }

    check_eq!(r#match(5), "positive");
    check_eq!(r#match(-5), "non-positive");
    check!(r#type().contains("keyword"));

    Ok(json!(r#match(5)))
}

/// References to owning types pass where borrowed views are expected.
#[example_case(group = "rust idioms")]
pub fn deref_coercion() -> CaseResult {
    fn takes_str(s: &str) -> usize {
        s.len()
    }

    fn takes_slice(s: &[i32]) -> usize {
        s.len()
    }

    let owned = String::from("hello");
    let numbers = vec![1, 2, 3];
    let boxed = Box::new(String::from("boxed"));

    check_eq!(takes_str(&owned), 5);
    check_eq!(takes_slice(&numbers), 3);
    check_eq!(takes_str(&boxed), 5);

    Ok(json!([takes_str(&owned), takes_slice(&numbers)]))
}

/// Moves a value out from behind a mutable reference by leaving another in its place.
#[example_case(name = "mem replace and swap", group = "rust idioms")]
pub fn mem_replace_and_swap() -> CaseResult {
    let mut value = String::from("old");
    let previous = mem::replace(&mut value, String::from("new"));
    check_eq!(previous, "old");
    check_eq!(value, "new");

    let taken = mem::take(&mut value);
    check_eq!(taken, "new");
    check!(value.is_empty());

    let (mut a, mut b) = (1, 2);
    mem::swap(&mut a, &mut b);
    check_eq!((a, b), (2, 1));

    Ok(json!([previous, taken]))
}

/// Closures borrow what they use unless `move` hands them ownership.
#[example_case(group = "rust idioms")]
pub fn closure_capture() -> CaseResult {
    let mut count = 0;
    let mut increment = || count += 1;
    increment();
    increment();
    check_eq!(count, 2);

    let name = String::from("world");
    let greeting = move || format!("hello, {name}");
    check_eq!(greeting(), "hello, world");

    Ok(json!(greeting()))
}

fn make_adder(x: i32) -> impl Fn(i32) -> i32 {
    move |y| x + y
}

fn even_numbers(limit: i32) -> impl Iterator<Item = i32> {
    (0..limit).filter(|n| n % 2 == 0)
}

/// Returns closures and iterator chains without naming their types.
#[example_case(name = "impl trait in return position", group = "rust idioms")]
pub fn impl_trait_returns() -> CaseResult {
    let add_five = make_adder(5);
    check_eq!(add_five(3), 8);

    let evens: Vec<i32> = even_numbers(10).collect();
    check_eq!(evens, vec![0, 2, 4, 6, 8]);

    Ok(json!(evens))
}

fn sign(x: i32) -> &'static str {
    if x < 0 {
        "negative"
    } else if x == 0 {
        "zero"
    } else {
        "positive"
    }
}

/// `if` produces a value, so no ternary operator is needed.
#[example_case(group = "rust idioms")]
pub fn if_as_expression() -> CaseResult {
    let x = 5;
    let description = if x > 0 { "positive" } else { "non-positive" };
    check_eq!(description, "positive");

    check_eq!([sign(-1), sign(0), sign(x)], ["negative", "zero", "positive"]);

    Ok(json!(description))
}

/// Arrays and slices destructure by position, with `..` for whatever is between.
#[example_case(group = "rust idioms")]
pub fn slice_patterns() -> CaseResult {
    let values = [1, 2, 3, 4, 5];

    let [first, .., last] = values;
    check_eq!((first, last), (1, 5));

    let [_, second, rest @ ..] = values;
    check_eq!(second, 2);
    check_eq!(rest, [3, 4, 5]);

    let described = match &values[..] {
        [] => "empty",
        [_] => "one",
        [head, ..] if *head > 0 => "starts positive",
        _ => "other",
    };
    check_eq!(described, "starts positive");

    Ok(json!(rest))
}

fn relate(pair: (i32, i32)) -> &'static str {
    match pair {
        (x, y) if x == y => "equal",
        (x, y) if x + y == 0 => "opposites",
        _ => "other",
    }
}

/// Guards add conditions that a pattern alone cannot express.
#[example_case(group = "rust idioms")]
pub fn match_guards() -> CaseResult {
    check_eq!(relate((2, -2)), "opposites");
    check_eq!(relate((3, 3)), "equal");
    check_eq!(relate((1, 2)), "other");

    Ok(json!(relate((2, -2))))
}

struct Point {
    x: i32,
    y: i32,
}

/// Structs and tuples unpack in `let`, with renaming, and in loop heads.
#[example_case(group = "rust idioms")]
pub fn destructuring() -> CaseResult {
    let Point { x, y } = Point { x: 3, y: 7 };
    check_eq!((x, y), (3, 7));

    let Point {
        x: horizontal,
        y: vertical,
    } = Point { x: 1, y: 2 };
    check_eq!((horizontal, vertical), (1, 2));

    let pairs = [(1, "one"), (2, "two")];
    let mut names = Vec::new();
    for &(number, name) in &pairs {
        names.push(format!("{number}={name}"));
    }
    check_eq!(names, vec!["1=one", "2=two"]);

    Ok(json!(names))
}
