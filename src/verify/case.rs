use serde_json::Value;

use crate::error::ExampleError;

/// What a case body hands back: the value it observed, or why it failed.
pub type CaseResult = Result<Value, ExampleError>;

/// A single named, self-contained demonstration.
#[derive(Debug, Clone, Copy)]
pub struct ExampleCase {
    pub name: &'static str,
    pub group: &'static str,
    pub description: &'static str,
    pub run: fn() -> CaseResult,
}

impl ExampleCase {
    pub const fn new(
        name: &'static str,
        group: &'static str,
        description: &'static str,
        run: fn() -> CaseResult,
    ) -> Self {
        Self {
            name,
            group,
            description,
            run,
        }
    }
}

/// Returns an assertion failure from the enclosing case when the condition is false.
#[macro_export]
macro_rules! check {
    ($cond:expr $(,)?) => {
        if !$cond {
            return Err($crate::ExampleError::assertion(
                "true",
                "false",
                concat!("check failed: ", stringify!($cond)),
            ));
        }
    };
    ($cond:expr, $($message:tt)+) => {
        if !$cond {
            return Err($crate::ExampleError::assertion(
                "true",
                "false",
                format!($($message)+),
            ));
        }
    };
}

/// Returns an assertion failure from the enclosing case when the two values differ.
#[macro_export]
macro_rules! check_eq {
    ($actual:expr, $expected:expr $(,)?) => {
        $crate::check_eq!(
            $actual,
            $expected,
            "{}",
            concat!(stringify!($actual), " == ", stringify!($expected))
        )
    };
    ($actual:expr, $expected:expr, $($message:tt)+) => {
        match (&$actual, &$expected) {
            (actual, expected) => {
                if *actual != *expected {
                    return Err($crate::ExampleError::assertion(
                        format!("{:?}", expected),
                        format!("{:?}", actual),
                        format!($($message)+),
                    ));
                }
            }
        }
    };
}
