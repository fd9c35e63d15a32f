//! Verb helpers shared by every resource endpoint.
//!
//! # Design
//! `WebEndpoint` turns (verb, path template, parameters, payload) into an
//! `HttpRequest`, runs it through its `Transport`, and wraps the result in a
//! `ValidatableResponse`. It holds no per-request state; the transport sits
//! behind an `Arc` so clones share one agent.

use std::fmt::{self, Display};
use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest};
use crate::response::ValidatableResponse;
use crate::specification::RequestSpecification;
use crate::template::PathTemplate;
use crate::transport::{Transport, UreqTransport};

#[derive(Clone)]
pub struct WebEndpoint {
    transport: Arc<dyn Transport>,
}

impl WebEndpoint {
    /// A helper that sends requests over a fresh `ureq` agent.
    pub fn new() -> Self {
        Self::with_transport(UreqTransport::new())
    }

    pub fn with_transport(transport: impl Transport + 'static) -> Self {
        Self {
            transport: Arc::new(transport),
        }
    }

    pub fn get(
        &self,
        spec: &RequestSpecification,
        template: &str,
        params: &[&dyn Display],
    ) -> Result<ValidatableResponse, ApiError> {
        let request = build_request(spec, HttpMethod::Get, template, params, None)?;
        self.send(request)
    }

    pub fn post<B: Serialize + ?Sized>(
        &self,
        spec: &RequestSpecification,
        template: &str,
        body: &B,
        params: &[&dyn Display],
    ) -> Result<ValidatableResponse, ApiError> {
        let body = to_json(body)?;
        let request = build_request(spec, HttpMethod::Post, template, params, Some(body))?;
        self.send(request)
    }

    pub fn put<B: Serialize + ?Sized>(
        &self,
        spec: &RequestSpecification,
        template: &str,
        body: &B,
        params: &[&dyn Display],
    ) -> Result<ValidatableResponse, ApiError> {
        let body = to_json(body)?;
        let request = build_request(spec, HttpMethod::Put, template, params, Some(body))?;
        self.send(request)
    }

    pub fn delete(
        &self,
        spec: &RequestSpecification,
        template: &str,
        params: &[&dyn Display],
    ) -> Result<ValidatableResponse, ApiError> {
        let request = build_request(spec, HttpMethod::Delete, template, params, None)?;
        self.send(request)
    }

    fn send(&self, request: HttpRequest) -> Result<ValidatableResponse, ApiError> {
        debug!(method = %request.method, url = %request.url, "sending request");
        let response = self.transport.execute(request)?;
        debug!(status = response.status.as_u16(), "received response");
        Ok(ValidatableResponse::new(response))
    }
}

impl Default for WebEndpoint {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for WebEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebEndpoint").finish_non_exhaustive()
    }
}

/// Resolve `template` against `spec` and assemble the outgoing request.
///
/// A JSON body also gets a `content-type: application/json` header unless
/// the specification already sets one.
pub fn build_request(
    spec: &RequestSpecification,
    method: HttpMethod,
    template: &str,
    params: &[&dyn Display],
    body: Option<String>,
) -> Result<HttpRequest, ApiError> {
    let path = PathTemplate::new(template).resolve(params)?;
    let mut headers = spec.headers().to_vec();
    if body.is_some()
        && !headers
            .iter()
            .any(|(name, _)| name.eq_ignore_ascii_case("content-type"))
    {
        headers.push(("content-type".to_string(), "application/json".to_string()));
    }
    Ok(HttpRequest {
        method,
        url: spec.url_for(&path),
        headers,
        body,
    })
}

fn to_json<B: Serialize + ?Sized>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Serialization(e.to_string()))
}
