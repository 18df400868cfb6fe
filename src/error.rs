use thiserror::Error;

use crate::verify::report::FailureKind;

/// Error raised by an example case body.
#[derive(Debug, Error)]
pub enum ExampleError {
    #[error("{message} (expected {expected}, got {actual})")]
    Assertion {
        expected: String,
        actual: String,
        message: String,
    },

    #[error("{0}")]
    Unexpected(String),
}

impl ExampleError {
    pub fn assertion(
        expected: impl Into<String>,
        actual: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Assertion {
            expected: expected.into(),
            actual: actual.into(),
            message: message.into(),
        }
    }

    pub fn unexpected(message: impl std::fmt::Display) -> Self {
        Self::Unexpected(message.to_string())
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Assertion { .. } => FailureKind::AssertionFailure,
            Self::Unexpected(_) => FailureKind::UnexpectedError,
        }
    }
}

macro_rules! unexpected_from {
    ($($source:ty),+ $(,)?) => {
        $(
            impl From<$source> for ExampleError {
                fn from(error: $source) -> Self {
                    Self::unexpected(error)
                }
            }
        )+
    };
}

unexpected_from!(
    std::io::Error,
    std::num::ParseIntError,
    serde_json::Error,
    handlebars::RenderError,
    handlebars::TemplateError,
);
