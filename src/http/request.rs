use std::collections::HashMap;

/// HTTP request methods.
///
/// Routing only distinguishes GET from POST (on `/files/`); every other
/// method, including tokens outside the standard set, is handled the same
/// way as GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    /// POST - Create or submit data
    POST,
    /// PUT - Replace a resource
    PUT,
    /// DELETE - Delete a resource
    DELETE,
    /// HEAD - Like GET but without the response body
    HEAD,
    /// OPTIONS - Describe communication options
    OPTIONS,
    /// PATCH - Partial modification of a resource
    PATCH,
    /// Any other token, kept verbatim
    Other(String),
}

/// Represents a parsed HTTP request from a client.
///
/// Header names are folded to lowercase when inserted, so lookups through
/// [`Request::header`] are case-insensitive. The body is only populated for
/// POST requests that carried a `Content-Length` header.
#[derive(Debug, Clone)]
pub struct Request {
    /// The HTTP method (GET, POST, etc.)
    pub method: Method,
    /// The raw request target, never percent-decoded or split on `?`
    pub path: String,
    /// HTTP version as sent by the client, not validated
    pub version: String,
    /// Request headers keyed by lowercase name
    pub headers: HashMap<String, String>,
    /// Request body for POST requests
    pub body: Vec<u8>,
}

/// Builder for constructing Request objects.
pub struct RequestBuilder {
    method: Option<Method>,
    path: Option<String>,
    version: Option<String>,
    headers: HashMap<String, String>,
    body: Vec<u8>,
}

impl Method {
    /// Parses one of the standard HTTP methods.
    ///
    /// Matching is case-sensitive; only uppercase tokens are recognized.
    ///
    /// ```
    /// # use wirehttp::http::request::Method;
    /// assert_eq!(Method::from_str("POST"), Some(Method::POST));
    /// assert_eq!(Method::from_str("post"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "GET" => Some(Method::GET),
            "POST" => Some(Method::POST),
            "PUT" => Some(Method::PUT),
            "DELETE" => Some(Method::DELETE),
            "HEAD" => Some(Method::HEAD),
            "OPTIONS" => Some(Method::OPTIONS),
            "PATCH" => Some(Method::PATCH),
            _ => None,
        }
    }

    /// Parses a request-line method token; unrecognized tokens become
    /// [`Method::Other`].
    ///
    /// ```
    /// # use wirehttp::http::request::Method;
    /// assert_eq!(Method::from_token("GET"), Method::GET);
    /// assert_eq!(Method::from_token("get"), Method::Other("get".to_string()));
    /// ```
    pub fn from_token(s: &str) -> Self {
        Self::from_str(s).unwrap_or_else(|| Method::Other(s.to_string()))
    }

    /// Whether the parser should read a `Content-Length` body for this method.
    pub fn carries_body(&self) -> bool {
        matches!(self, Method::POST)
    }
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self {
            method: None,
            path: None,
            version: None,
            headers: HashMap::new(),
            body: Vec::new(),
        }
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        insert_header(&mut self.headers, key.into(), value.into());
        self
    }

    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    pub fn build(self) -> Result<Request, &'static str> {
        Ok(Request {
            method: self.method.ok_or("method missing")?,
            path: self.path.ok_or("path missing")?,
            version: self.version.unwrap_or_else(|| "HTTP/1.1".to_string()),
            headers: self.headers,
            body: self.body,
        })
    }
}

/// Inserts a header under its lowercase name, replacing any earlier value.
pub fn insert_header(headers: &mut HashMap<String, String>, name: String, value: String) {
    headers.insert(name.to_ascii_lowercase(), value);
}

impl Request {
    /// Retrieves a header value by name, ignoring ASCII case.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .get(&key.to_ascii_lowercase())
            .map(|v| v.as_str())
    }

    /// The declared `Content-Length`, if present.
    ///
    /// `Some(Err(_))` means the header was present but not a valid length.
    pub fn content_length(&self) -> Option<Result<usize, std::num::ParseIntError>> {
        self.header("Content-Length").map(|v| v.parse::<usize>())
    }

    /// The `User-Agent` header value, if the client sent one.
    pub fn user_agent(&self) -> Option<&str> {
        self.header("User-Agent")
    }

    /// The raw `Accept-Encoding` header value, if the client sent one.
    pub fn accept_encoding(&self) -> Option<&str> {
        self.header("Accept-Encoding")
    }
}
