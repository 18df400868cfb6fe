extern crate self as syntaxtour;

pub mod error;
pub mod verify;
pub mod cases;

pub use error::ExampleError;
pub use verify::{
    CaseResult, ExampleCase, ExampleResult, FailureKind, Outcome, VerificationReport, Verifier,
};
pub use syntaxtour_macros::example_case;
