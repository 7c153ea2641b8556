use std::collections::HashMap;

/// A request relative to the configured base URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    /// HTTP method (GET, POST, etc.)
    pub method: String,
    /// Path joined onto the base URL, or an absolute http(s) URL
    pub path: String,
    /// Request-specific headers; these override configured headers
    pub headers: HashMap<String, String>,
    /// Query parameters, in order
    pub query: Vec<(String, String)>,
    /// Request body for POST/PUT requests
    pub body: Option<String>,
}

impl ApiRequest {
    pub fn new<M: Into<String>, P: Into<String>>(method: M, path: P) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            headers: HashMap::new(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get<P: Into<String>>(path: P) -> Self {
        Self::new("GET", path)
    }

    pub fn post<P: Into<String>, B: Into<String>>(path: P, body: B) -> Self {
        Self::new("POST", path).with_body(body)
    }

    pub fn with_header<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    pub fn with_query<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub fn with_body<B: Into<String>>(mut self, body: B) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Resolve the request path against `base_url`
    pub fn resolve_url(&self, base_url: &str) -> Result<url::Url, url::ParseError> {
        if self.path.starts_with("http://") || self.path.starts_with("https://") {
            return url::Url::parse(&self.path);
        }
        let joined = format!(
            "{}/{}",
            base_url.trim_end_matches('/'),
            self.path.trim_start_matches('/')
        );
        url::Url::parse(&joined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_url_joins_paths() {
        let request = ApiRequest::get("/api/users/7");
        assert_eq!(
            request.resolve_url("https://api.example.com/v1/").unwrap().as_str(),
            "https://api.example.com/v1/api/users/7"
        );
        assert_eq!(
            ApiRequest::get("health")
                .resolve_url("https://api.example.com")
                .unwrap()
                .as_str(),
            "https://api.example.com/health"
        );
    }

    #[test]
    fn test_resolve_absolute_url() {
        let request = ApiRequest::get("https://other.example.com/x");
        assert_eq!(
            request.resolve_url("https://api.example.com").unwrap().host_str(),
            Some("other.example.com")
        );
    }

    #[test]
    fn test_builder_methods() {
        let request = ApiRequest::post("/items", "{}")
            .with_header("X-Trace", "1")
            .with_query("page", "2");
        assert_eq!(request.method, "POST");
        assert_eq!(request.body.as_deref(), Some("{}"));
        assert_eq!(request.headers["X-Trace"], "1");
        assert_eq!(request.query, vec![("page".to_string(), "2".to_string())]);
    }
}
