//! Blocking API client endpoints for the placeholder REST service.
//!
//! # Overview
//! Test suites construct a resource endpoint (`CommentEndpoint`,
//! `UserEndpoint`) from a `RequestSpecification` and call typed CRUD
//! operations. Each call builds one HTTP request, sends it synchronously,
//! asserts the expected status code, and optionally deserializes the body.
//!
//! # Design
//! - `WebEndpoint` holds the shared verb helpers (`get`, `post`, `put`,
//!   `delete`); resource endpoints hold one by composition.
//! - Requests and responses are plain data (`HttpRequest`, `HttpResponse`),
//!   executed through the `Transport` trait. `UreqTransport` is the default;
//!   closures stand in for the network in unit tests.
//! - Every failure is an `ApiError`; nothing is retried.
//!
//! ```no_run
//! use placeholder_core::{CommentDto, CommentEndpoint, RequestSpecification};
//!
//! let comments = CommentEndpoint::new(RequestSpecification::new("http://localhost:3000"));
//! let created = comments.create(&CommentDto::new(1, "Ada", "ada@example.com", "nice"))?;
//! comments.get_by_id(created.id.unwrap_or_default())?;
//! # Ok::<(), placeholder_core::ApiError>(())
//! ```

pub mod endpoint;
pub mod error;
pub mod http;
pub mod response;
pub mod specification;
pub mod template;
pub mod transport;
pub mod types;
pub mod web_endpoint;

pub use ::http::StatusCode;
pub use endpoint::{CommentEndpoint, Resource, ResourceEndpoint, UserEndpoint};
pub use error::{ApiError, TemplateError};
pub use self::http::{HttpMethod, HttpRequest, HttpResponse};
pub use response::{ExtractableResponse, ValidatableResponse};
pub use specification::RequestSpecification;
pub use template::PathTemplate;
pub use transport::{Transport, UreqTransport};
pub use types::{CommentDto, UserDto};
pub use web_endpoint::WebEndpoint;
