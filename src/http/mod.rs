//! HTTP protocol implementation.
//!
//! This module implements the HTTP/1.1 wire handling for one request per
//! connection.
//!
//! # Architecture
//!
//! - **`connection`**: Owns an accepted stream and drives the request-response state machine
//! - **`parser`**: Reads a request line, headers and an optional fixed-length body from a buffered stream
//! - **`request`**: HTTP request representation
//! - **`response`**: HTTP response representation with builder pattern
//! - **`encoding`**: `Accept-Encoding` negotiation and gzip compression
//! - **`writer`**: Serializes and writes HTTP responses to the client
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Parse request (EOF before request → Closed)
//!        └──────┬──────┘
//!               │ Request received
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Route and run handler
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response to client
//!        └──────┬───────────┘
//!               │ Response sent
//!               ▼
//!        ┌──────────────────┐
//!        │     Closed       │ ← Stream shut down
//!        └──────────────────┘
//! ```
//!
//! Any parse, handler or I/O error ends the connection without a response.

pub mod request;
pub mod response;
pub mod parser;
pub mod connection;
pub mod writer;
pub mod encoding;
