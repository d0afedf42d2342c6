use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::http::encoding::ContentEncoding;
use crate::http::request::Request;
use crate::http::response::Response;

pub fn root() -> Response {
    Response::ok()
}

pub fn not_found() -> Response {
    Response::not_found()
}

/// Echoes `text` back as `text/plain`, gzip-encoded if the client accepts it.
pub fn echo(req: &Request, text: &str) -> anyhow::Result<Response> {
    let encoding = ContentEncoding::negotiate(req.accept_encoding());
    Ok(Response::text(text, encoding)?)
}

/// Reflects the `User-Agent` header.
///
/// A request without the header gets an empty body.
pub fn user_agent(req: &Request) -> anyhow::Result<Response> {
    let agent = match req.user_agent() {
        Some(agent) => agent,
        None => {
            tracing::warn!(path = %req.path, "User-Agent header missing, replying with empty body");
            ""
        }
    };

    let encoding = ContentEncoding::negotiate(req.accept_encoding());
    Ok(Response::text(agent, encoding)?)
}

/// Resolves a file name against the base directory.
///
/// Leading slashes are stripped so the name always lands under `base`.
/// `..` components are left as they are.
pub fn file_path(base: &Path, name: &str) -> PathBuf {
    base.join(name.trim_start_matches('/'))
}

/// Serves a file's bytes, or 404 if it does not exist.
pub async fn get_file(base: &Path, name: &str) -> anyhow::Result<Response> {
    let path = file_path(base, name);

    match tokio::fs::read(&path).await {
        Ok(bytes) => {
            tracing::debug!(file = %path.display(), bytes = bytes.len(), "Serving file");
            Ok(Response::octet_stream(bytes))
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(file = %path.display(), "File not found");
            Ok(Response::not_found())
        }
        Err(e) => Err(e).with_context(|| format!("failed to read {}", path.display())),
    }
}

/// Writes `body` to the named file, creating directories as needed.
///
/// Existing content is replaced entirely.
pub async fn post_file(base: &Path, name: &str, body: &[u8]) -> anyhow::Result<Response> {
    let path = file_path(base, name);

    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }

    tokio::fs::write(&path, body)
        .await
        .with_context(|| format!("failed to write {}", path.display()))?;

    tracing::debug!(file = %path.display(), bytes = body.len(), "File written");
    Ok(Response::created())
}
