use std::collections::HashMap;
use std::fmt;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt};

use crate::http::request::{insert_header, Method, Request};

#[derive(Debug)]
pub enum ParseError {
    /// The start line did not split into exactly three tokens.
    InvalidRequestLine(String),
    InvalidContentLength(String),
    Io(std::io::Error),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidRequestLine(line) => write!(f, "invalid request line: {:?}", line),
            ParseError::InvalidContentLength(value) => {
                write!(f, "invalid Content-Length: {:?}", value)
            }
            ParseError::Io(e) => write!(f, "i/o error while reading request: {}", e),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ParseError {
    fn from(e: std::io::Error) -> Self {
        ParseError::Io(e)
    }
}

/// Reads one request from `reader`.
///
/// Returns `Ok(None)` when the stream ends before any byte of a request
/// line arrives. The header block ends at the first empty line (or at end
/// of stream). A body is read only for POST requests that declare a
/// `Content-Length`; if the stream ends early the body holds whatever
/// bytes did arrive.
pub async fn read_request<R>(reader: &mut R) -> Result<Option<Request>, ParseError>
where
    R: AsyncBufRead + Unpin,
{
    let request_line = match read_line(reader).await? {
        Some(line) => line,
        None => return Ok(None),
    };

    let (method, path, version) = parse_request_line(&request_line)?;

    let mut headers = HashMap::new();
    while let Some(line) = read_line(reader).await? {
        if line.is_empty() {
            break;
        }

        match parse_header_line(&line) {
            Some((name, value)) => {
                insert_header(&mut headers, name.to_string(), value.to_string());
            }
            None => {
                tracing::trace!(line = %line, "Dropping malformed header line");
            }
        }
    }

    let mut request = Request {
        method,
        path: path.to_string(),
        version: version.to_string(),
        headers,
        body: Vec::new(),
    };

    if request.method.carries_body() {
        if let Some(length) = request.content_length() {
            let length = length.map_err(|_| {
                ParseError::InvalidContentLength(
                    request.header("Content-Length").unwrap_or_default().to_string(),
                )
            })?;
            request.body = read_body(reader, length).await?;
        }
    }

    Ok(Some(request))
}

/// Splits a start line on single spaces into method, path and version.
pub fn parse_request_line(line: &str) -> Result<(Method, &str, &str), ParseError> {
    let parts: Vec<&str> = line.split(' ').collect();
    let &[method_str, path, version] = parts.as_slice() else {
        return Err(ParseError::InvalidRequestLine(line.to_string()));
    };

    Ok((Method::from_token(method_str), path, version))
}

/// Parses a `name: value` header line.
///
/// The line must contain exactly one colon; anything else is rejected so
/// the caller can drop it. The value is trimmed, the name is not.
pub fn parse_header_line(line: &str) -> Option<(&str, &str)> {
    let (name, value) = line.split_once(':')?;
    if value.contains(':') {
        return None;
    }
    Some((name, value.trim()))
}

/// Reads one line, stripping the trailing `\n` and an optional `\r`.
async fn read_line<R>(reader: &mut R) -> Result<Option<String>, ParseError>
where
    R: AsyncBufRead + Unpin,
{
    let mut buf = Vec::new();
    let n = reader.read_until(b'\n', &mut buf).await?;
    if n == 0 {
        return Ok(None);
    }

    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }

    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}

async fn read_body<R>(reader: &mut R, length: usize) -> Result<Vec<u8>, ParseError>
where
    R: AsyncBufRead + Unpin,
{
    let mut body = Vec::new();
    (&mut *reader).take(length as u64).read_to_end(&mut body).await?;

    if body.len() < length {
        tracing::debug!(
            expected = length,
            received = body.len(),
            "Stream ended before full body, continuing with partial body"
        );
    }

    Ok(body)
}
