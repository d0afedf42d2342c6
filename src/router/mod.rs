//! Request routing.
//!
//! Routes are checked in a fixed order and the first match wins:
//!
//! | Rule                       | Handler                   |
//! |----------------------------|---------------------------|
//! | path is exactly `/`        | [`handlers::root`]        |
//! | path starts `/echo/`       | [`handlers::echo`]        |
//! | path starts `/user-agent`  | [`handlers::user_agent`]  |
//! | path starts `/files/`      | [`handlers::get_file`] / [`handlers::post_file`] |
//! | anything else              | [`handlers::not_found`]   |
//!
//! Only the file route looks at the method; every other route treats all
//! methods alike.

pub mod handlers;

use std::sync::Arc;

use crate::config::Config;
use crate::http::request::{Method, Request};
use crate::http::response::Response;

const ECHO_PREFIX: &str = "/echo/";
const USER_AGENT_PREFIX: &str = "/user-agent";
const FILES_PREFIX: &str = "/files/";

/// The handler a path resolves to, with its path parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route<'a> {
    Root,
    /// Text after `/echo/`, verbatim.
    Echo(&'a str),
    UserAgent,
    /// File name after `/files/`.
    Files(&'a str),
    NotFound,
}

impl<'a> Route<'a> {
    pub fn resolve(path: &'a str) -> Self {
        if path == "/" {
            Route::Root
        } else if let Some(text) = path.strip_prefix(ECHO_PREFIX) {
            Route::Echo(text)
        } else if path.starts_with(USER_AGENT_PREFIX) {
            Route::UserAgent
        } else if let Some(name) = path.strip_prefix(FILES_PREFIX) {
            Route::Files(name)
        } else {
            Route::NotFound
        }
    }
}

/// Dispatches parsed requests to handlers.
///
/// Holds the read-only server configuration; one router is shared by all
/// connections.
#[derive(Debug, Clone)]
pub struct Router {
    config: Arc<Config>,
}

impl Router {
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }

    pub async fn dispatch(&self, req: &Request) -> anyhow::Result<Response> {
        let route = Route::resolve(&req.path);

        let response = match route {
            Route::Root => handlers::root(),
            Route::Echo(text) => handlers::echo(req, text)?,
            Route::UserAgent => handlers::user_agent(req)?,
            Route::Files(name) => {
                let dir = &self.config.files.directory;
                match req.method {
                    Method::POST => handlers::post_file(dir, name, &req.body).await?,
                    _ => handlers::get_file(dir, name).await?,
                }
            }
            Route::NotFound => handlers::not_found(),
        };

        tracing::debug!(
            method = ?req.method,
            path = %req.path,
            route = ?route,
            status = response.status.as_u16(),
            "Request dispatched"
        );

        Ok(response)
    }
}
