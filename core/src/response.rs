//! Status assertion and body extraction on top of a raw `HttpResponse`.

use http::StatusCode;
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::HttpResponse;

/// A response waiting for, or already past, a status-code assertion.
///
/// Returned by every `WebEndpoint` verb. Resource endpoints hand it back
/// after `status_code` has succeeded, so holding one means the expected
/// status was seen.
#[derive(Debug, Clone)]
pub struct ValidatableResponse {
    response: HttpResponse,
}

impl ValidatableResponse {
    pub fn new(response: HttpResponse) -> Self {
        Self { response }
    }

    pub fn status(&self) -> StatusCode {
        self.response.status
    }

    /// Fail with `StatusMismatch` unless the response carries `expected`.
    pub fn status_code(self, expected: StatusCode) -> Result<Self, ApiError> {
        if self.response.status == expected {
            return Ok(self);
        }
        Err(ApiError::StatusMismatch {
            expected,
            actual: self.response.status,
            body: self.response.body,
        })
    }

    pub fn extract(self) -> ExtractableResponse {
        ExtractableResponse {
            response: self.response,
        }
    }
}

/// Read access to a validated response.
#[derive(Debug, Clone)]
pub struct ExtractableResponse {
    response: HttpResponse,
}

impl ExtractableResponse {
    pub fn status(&self) -> StatusCode {
        self.response.status
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.response.header(name)
    }

    pub fn body(&self) -> &str {
        &self.response.body
    }

    /// Deserialize the JSON body into `T`.
    pub fn as_json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_str(&self.response.body).map_err(|e| ApiError::Deserialization {
            message: e.to_string(),
            body: self.response.body.clone(),
        })
    }

    pub fn into_response(self) -> HttpResponse {
        self.response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: StatusCode, body: &str) -> ValidatableResponse {
        ValidatableResponse::new(HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        })
    }

    #[test]
    fn matching_status_passes() {
        let validated = response(StatusCode::CREATED, "{}")
            .status_code(StatusCode::CREATED)
            .unwrap();
        assert_eq!(validated.status(), StatusCode::CREATED);
    }

    #[test]
    fn mismatched_status_reports_expected_and_actual() {
        let err = response(StatusCode::NOT_FOUND, "{}")
            .status_code(StatusCode::OK)
            .unwrap_err();
        match err {
            ApiError::StatusMismatch {
                expected,
                actual,
                body,
            } => {
                assert_eq!(expected, StatusCode::OK);
                assert_eq!(actual, StatusCode::NOT_FOUND);
                assert_eq!(body, "{}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn extract_deserializes_body() {
        let value: serde_json::Value = response(StatusCode::OK, r#"{"id":1}"#)
            .extract()
            .as_json()
            .unwrap();
        assert_eq!(value["id"], 1);
    }

    #[test]
    fn bad_json_keeps_body_for_diagnosis() {
        let err = response(StatusCode::OK, "not json")
            .extract()
            .as_json::<serde_json::Value>()
            .unwrap_err();
        assert!(matches!(err, ApiError::Deserialization { ref body, .. } if body == "not json"));
    }
}
