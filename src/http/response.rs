use crate::http::encoding::ContentEncoding;

/// HTTP status codes the server emits.
///
/// - `Ok` (200): Request successful
/// - `Created` (201): File written
/// - `NotFound` (404): No route or no such file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 201 Created
    Created,
    /// 404 Not Found
    NotFound,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// ```
    /// # use wirehttp::http::response::StatusCode;
    /// assert_eq!(StatusCode::Created.as_u16(), 201);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::Created => 201,
            StatusCode::NotFound => 404,
        }
    }

    /// Returns the reason phrase used on the status line.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::Created => "Created",
            StatusCode::NotFound => "Not Found",
        }
    }
}

/// A complete HTTP response ready to be serialized.
///
/// Headers keep their insertion order, which is also their order on the
/// wire.
#[derive(Debug)]
pub struct Response {
    pub status: StatusCode,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

/// Builder for constructing HTTP responses in a fluent style.
///
/// ```ignore
/// let response = ResponseBuilder::new(StatusCode::Ok)
///     .header("Content-Type", "text/plain")
///     .body(b"hello".to_vec())
///     .build();
/// ```
pub struct ResponseBuilder {
    status: StatusCode,
    headers: Vec<(String, String)>,
    body: Option<Vec<u8>>,
}

impl ResponseBuilder {
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: None,
        }
    }

    /// Appends a header, replacing an earlier one with the same name in place.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();
        match self
            .headers
            .iter_mut()
            .find(|(k, _)| k.eq_ignore_ascii_case(&key))
        {
            Some(existing) => existing.1 = value,
            None => self.headers.push((key, value)),
        }
        self
    }

    /// Sets the response body. An empty body still counts as a body.
    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    /// Builds the final Response.
    ///
    /// When a body was set, `Content-Length` is appended as the last header
    /// unless one was given explicitly. A response without a body carries no
    /// content headers at all.
    pub fn build(mut self) -> Response {
        let body = match self.body.take() {
            Some(body) => {
                let has_length = self
                    .headers
                    .iter()
                    .any(|(k, _)| k.eq_ignore_ascii_case("Content-Length"));
                if !has_length {
                    self.headers
                        .push(("Content-Length".to_string(), body.len().to_string()));
                }
                body
            }
            None => Vec::new(),
        };

        Response {
            status: self.status,
            headers: self.headers,
            body,
        }
    }
}

impl Response {
    /// Status line only, no headers, no body.
    pub fn empty(status: StatusCode) -> Self {
        ResponseBuilder::new(status).build()
    }

    pub fn ok() -> Self {
        Self::empty(StatusCode::Ok)
    }

    pub fn created() -> Self {
        Self::empty(StatusCode::Created)
    }

    pub fn not_found() -> Self {
        Self::empty(StatusCode::NotFound)
    }

    /// A `200 OK` `text/plain` response, body encoded with `encoding`.
    ///
    /// `Content-Length` is the length of the bytes actually sent, i.e. the
    /// UTF-8 length of `text` or the compressed length under gzip.
    pub fn text(text: &str, encoding: ContentEncoding) -> std::io::Result<Self> {
        let mut builder = ResponseBuilder::new(StatusCode::Ok).header("Content-Type", "text/plain");
        if let Some(value) = encoding.header_value() {
            builder = builder.header("Content-Encoding", value);
        }
        let body = encoding.encode(text.as_bytes())?;
        Ok(builder.body(body).build())
    }

    /// A `200 OK` `application/octet-stream` response carrying `bytes` verbatim.
    pub fn octet_stream(bytes: Vec<u8>) -> Self {
        ResponseBuilder::new(StatusCode::Ok)
            .header("Content-Type", "application/octet-stream")
            .body(bytes)
            .build()
    }

    /// Looks up a header by name, ignoring ASCII case.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }
}
