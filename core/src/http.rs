//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe HTTP traffic as plain data. The core builds
//! `HttpRequest` values and parses `HttpResponse` values without ever
//! touching the network; whoever owns the `Transport` implementation is
//! responsible for executing the actual I/O. This separation keeps the core
//! deterministic and easy to test.
//!
//! The list endpoint only ever issues GET requests, so no method or body
//! field is carried.

use crate::error::ApiError;

/// An HTTP GET request described as plain data.
///
/// Built by `CharacterClient::build_list_characters`. A `Transport`
/// implementation executes it against the network and returns the
/// corresponding `HttpResponse`.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
}

/// An HTTP response described as plain data.
///
/// Constructed by the transport after executing an `HttpRequest`, then passed
/// to `CharacterClient::parse_list_characters` for interpretation.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Executes `HttpRequest` values against a real or fake network.
///
/// Implementations report I/O problems as `ApiError::Transport` and return
/// every completed exchange as an `HttpResponse`, including 4xx/5xx —
/// status interpretation stays in the core.
pub trait Transport {
    fn execute(&mut self, request: &HttpRequest) -> Result<HttpResponse, ApiError>;
}
