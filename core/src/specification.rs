//! Shared connection settings for outgoing requests.

/// Base URI, base path and default headers applied to every request.
///
/// Built once by the caller and never mutated by the endpoints; clone it to
/// derive a variant with extra headers.
///
/// ```
/// use placeholder_core::RequestSpecification;
///
/// let spec = RequestSpecification::new("https://jsonplaceholder.typicode.com")
///     .with_header("accept", "application/json");
/// assert_eq!(spec.url_for("/comments"), "https://jsonplaceholder.typicode.com/comments");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSpecification {
    base_uri: String,
    base_path: String,
    headers: Vec<(String, String)>,
}

impl RequestSpecification {
    pub fn new(base_uri: &str) -> Self {
        Self {
            base_uri: base_uri.trim_end_matches('/').to_string(),
            base_path: String::new(),
            headers: Vec::new(),
        }
    }

    /// Prefix inserted between the base URI and every resolved path.
    pub fn with_base_path(mut self, base_path: &str) -> Self {
        let trimmed = base_path.trim_matches('/');
        self.base_path = if trimmed.is_empty() {
            String::new()
        } else {
            format!("/{trimmed}")
        };
        self
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Join an already resolved path onto the base URI and base path.
    pub fn url_for(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}{}/{path}", self.base_uri, self.base_path)
    }
}
