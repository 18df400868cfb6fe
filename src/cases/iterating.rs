use std::cell::Cell;

use serde_json::json;

use crate::{check_eq, example_case, CaseResult};

struct Custom {
    id: u32,
}

/// Sorts records by one of their fields without writing a comparator.
#[example_case(name = "sorting by key", group = "iterating")]
pub fn sorting_by_key() -> CaseResult {
    let mut customs = vec![Custom { id: 5 }, Custom { id: 3 }];
    customs.sort_by_key(|custom| custom.id);

    check_eq!(customs[0].id, 3);

    Ok(json!(customs.iter().map(|custom| custom.id).collect::<Vec<_>>()))
}

/// Iterators produce values only as they are pulled.
#[example_case(group = "iterating")]
pub fn lazy_generators() -> CaseResult {
    let produced = Cell::new(0);
    let mut generator = (0..3).inspect(|_| produced.set(produced.get() + 1));
    check_eq!(produced.get(), 0);

    let first = generator.next();
    check_eq!(first, Some(0));
    check_eq!(produced.get(), 1, "only the first value has been produced");

    Ok(json!(first))
}

/// Yields its current value forever until a new one is sent in.
struct ValueGenerator {
    value: i32,
}

impl ValueGenerator {
    fn new(value: i32) -> Self {
        Self { value }
    }

    fn send(&mut self, value: i32) -> i32 {
        self.value = value;
        self.value
    }
}

impl Iterator for ValueGenerator {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.value)
    }
}

/// A stateful iterator that accepts values between pulls.
#[example_case(name = "sending values to generators", group = "iterating")]
pub fn sending_values_to_generators() -> CaseResult {
    let mut generator = ValueGenerator::new(5);

    check_eq!(generator.next(), Some(5));
    check_eq!(generator.next(), Some(5));
    check_eq!(generator.send(7), 7);
    check_eq!(generator.next(), Some(7));

    Ok(json!(generator.value))
}

/// Takes sub-ranges, strides and reversals of a slice.
#[example_case(group = "iterating")]
pub fn slicing() -> CaseResult {
    let values = [1, 2, 3, 4, 5];

    check_eq!(values[2..], [3, 4, 5], "from an index onwards");
    check_eq!(values.last(), Some(&5), "the final element");
    check_eq!(values[..2], [1, 2], "up to an index");
    check_eq!(values[2..4], [3, 4], "between indices");

    let stepped: Vec<i32> = values.iter().step_by(2).copied().collect();
    check_eq!(stepped, vec![1, 3, 5], "using a custom interval");

    let reversed: Vec<i32> = values.iter().rev().copied().collect();
    check_eq!(reversed, vec![5, 4, 3, 2, 1], "reversing");

    Ok(json!({ "stepped": stepped, "reversed": reversed }))
}
