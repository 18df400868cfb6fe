pub mod case;
pub mod report;
pub mod runner;

pub use case::{CaseResult, ExampleCase};
pub use report::{ExampleResult, FailureKind, Outcome, VerificationReport};
pub use runner::Verifier;
