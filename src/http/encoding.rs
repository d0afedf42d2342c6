//! Response body content negotiation.
//!
//! The client's `Accept-Encoding` header is read as a comma-separated list
//! of tokens. Only the literal token `gzip` is recognized; quality values
//! and wildcards are not interpreted.

use std::io::Write;

use flate2::write::GzEncoder;
use flate2::Compression;

/// Encoding applied to a response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentEncoding {
    Identity,
    Gzip,
}

impl ContentEncoding {
    /// Picks an encoding from the raw `Accept-Encoding` header value.
    ///
    /// ```
    /// # use wirehttp::http::encoding::ContentEncoding;
    /// assert_eq!(ContentEncoding::negotiate(Some("br, gzip")), ContentEncoding::Gzip);
    /// assert_eq!(ContentEncoding::negotiate(Some("gzip;q=1")), ContentEncoding::Identity);
    /// assert_eq!(ContentEncoding::negotiate(None), ContentEncoding::Identity);
    /// ```
    pub fn negotiate(accept_encoding: Option<&str>) -> Self {
        let accepts_gzip = accept_encoding
            .map(|value| value.split(',').any(|token| token.trim() == "gzip"))
            .unwrap_or(false);

        if accepts_gzip {
            ContentEncoding::Gzip
        } else {
            ContentEncoding::Identity
        }
    }

    /// Value for the `Content-Encoding` header, `None` for identity.
    pub fn header_value(&self) -> Option<&'static str> {
        match self {
            ContentEncoding::Identity => None,
            ContentEncoding::Gzip => Some("gzip"),
        }
    }

    /// Encodes `body`, returning the bytes to put on the wire.
    pub fn encode(&self, body: &[u8]) -> std::io::Result<Vec<u8>> {
        match self {
            ContentEncoding::Identity => Ok(body.to_vec()),
            ContentEncoding::Gzip => {
                let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
                encoder.write_all(body)?;
                encoder.finish()
            }
        }
    }
}
