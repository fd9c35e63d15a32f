//! Error types for the placeholder endpoints.
//!
//! # Design
//! Every failure is surfaced to the calling test as an `ApiError`; nothing is
//! retried. `StatusMismatch` and `Deserialization` keep the raw response body
//! so a failing test prints what the server actually said.

use http::StatusCode;
use thiserror::Error;

/// Errors returned by `WebEndpoint` and the resource endpoints.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response, or its body could not be read.
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),

    /// The server answered with a status other than the expected one.
    #[error("expected status {} but was {}: {body}", .expected.as_u16(), .actual.as_u16())]
    StatusMismatch {
        expected: StatusCode,
        actual: StatusCode,
        body: String,
    },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {message}; body: {body}")]
    Deserialization { message: String, body: String },

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    #[error(transparent)]
    Template(#[from] TemplateError),
}

impl From<ureq::Error> for ApiError {
    fn from(err: ureq::Error) -> Self {
        ApiError::Transport(Box::new(err))
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        ApiError::Transport(Box::new(err))
    }
}

/// Misuse of a path template, caught before any I/O happens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("path template is empty")]
    Empty,

    /// A `{placeholder}` had no positional parameter left to fill it.
    #[error("no parameter supplied for placeholder `{{{placeholder}}}` in `{template}`")]
    MissingParam {
        template: String,
        placeholder: String,
    },

    #[error("{unused} unused parameter(s) for `{template}`")]
    UnusedParams { template: String, unused: usize },

    #[error("unterminated placeholder in `{template}`")]
    Unterminated { template: String },
}
