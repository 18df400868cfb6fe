use serde_json::json;

use crate::{check_eq, example_case, CaseResult};

/// Maps every item of one list into another.
#[example_case(group = "comprehension")]
pub fn projection() -> CaseResult {
    let actual: Vec<i32> = [1, 2, 3].iter().map(|n| n * 2).collect();
    check_eq!(actual, vec![2, 4, 6]);

    Ok(json!(actual))
}

/// Nested projections transpose a square matrix.
#[example_case(name = "nested transpose", group = "comprehension")]
pub fn nested() -> CaseResult {
    let matrix = [[1, 2, 3], [4, 5, 6], [7, 8, 9]];

    let actual: Vec<Vec<i32>> = (0..matrix.len())
        .map(|i| matrix.iter().map(|row| row[i]).collect())
        .collect();
    check_eq!(actual, vec![vec![1, 4, 7], vec![2, 5, 8], vec![3, 6, 9]]);

    Ok(json!(actual))
}

/// Keeps only the odd numbers.
#[example_case(group = "comprehension")]
pub fn restriction() -> CaseResult {
    let actual: Vec<i32> = [1, 2, 3].into_iter().filter(|n| n % 2 == 1).collect();
    check_eq!(actual, vec![1, 3]);

    Ok(json!(actual))
}
