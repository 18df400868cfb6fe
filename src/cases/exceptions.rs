//! Error flow: recovering, always-run cleanup, and propagating with context.

use std::{cell::Cell, error::Error as _};

use serde_json::json;
use thiserror::Error;

use crate::{check, check_eq, example_case, CaseResult, ExampleError};

#[derive(Debug, Error, PartialEq)]
enum ArithmeticError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("quotient overflowed")]
    Overflow,
}

#[derive(Debug, Error)]
#[error("could not compute the ratio")]
struct RatioError(#[source] ArithmeticError);

fn divide(numerator: i32, denominator: i32) -> Result<i32, ArithmeticError> {
    if denominator == 0 {
        return Err(ArithmeticError::DivisionByZero);
    }
    numerator
        .checked_div(denominator)
        .ok_or(ArithmeticError::Overflow)
}

fn passes_through(denominator: i32) -> Result<i32, ArithmeticError> {
    let quotient = divide(1, denominator)?;
    Ok(quotient)
}

fn adds_context(denominator: i32) -> Result<i32, RatioError> {
    divide(1, denominator).map_err(RatioError)
}

struct Finally<'a>(&'a Cell<bool>);

impl Drop for Finally<'_> {
    fn drop(&mut self) {
        self.0.set(true);
    }
}

/// Handles a failed division, skips the success branch, and still runs cleanup.
#[example_case(name = "try except else finally", group = "exceptions")]
pub fn try_except_else_finally() -> CaseResult {
    let finally_ran = Cell::new(false);

    let branch = {
        let _finally = Finally(&finally_ran);
        match divide(1, 0) {
            Err(ArithmeticError::DivisionByZero) => "except",
            Err(ArithmeticError::Overflow) => "overflow",
            Ok(_) => "else",
        }
    };

    check_eq!(branch, "except");
    check!(finally_ran.get(), "cleanup runs when the scope ends");
    check_eq!(divide(i32::MIN, -1), Err(ArithmeticError::Overflow));

    Ok(json!(branch))
}

/// Propagates an error untouched with `?`, or wraps it while keeping the original as its source.
#[example_case(name = "re-raise keeps the source", group = "exceptions")]
pub fn reraise_keeps_source() -> CaseResult {
    let Err(original) = passes_through(0) else {
        return Err(ExampleError::unexpected("dividing by zero should fail"));
    };
    check_eq!(original, ArithmeticError::DivisionByZero);

    let Err(wrapped) = adds_context(0) else {
        return Err(ExampleError::unexpected("dividing by zero should fail"));
    };
    check_eq!(wrapped.to_string(), "could not compute the ratio");

    let source = wrapped.source().map(ToString::to_string);
    check_eq!(source.as_deref(), Some("division by zero"));

    Ok(json!(source))
}
