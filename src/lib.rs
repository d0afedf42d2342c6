//! wirehttp - minimal HTTP/1.1 server over raw TCP
//!
//! Requests are parsed by hand from the socket, routed to a fixed set of
//! handlers (echo, user-agent reflection, file read/write) and answered
//! with hand-assembled responses, optionally gzip-compressed.

pub mod cli;
pub mod config;
pub mod http;
pub mod router;
pub mod server;
