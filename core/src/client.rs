//! Stateless HTTP request builder and response parser for the character API.
//!
//! # Design
//! `CharacterClient` holds only a `base_url` and carries no mutable state
//! between calls. The list operation is split into `build_list_characters`,
//! which produces an `HttpRequest`, and `parse_list_characters`, which
//! consumes an `HttpResponse`. The caller executes the actual HTTP
//! round-trip in between, keeping the core deterministic and free of I/O
//! dependencies.

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{Character, CharacterPage, ListQuery};

/// Synchronous, stateless client for the character-list API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. The caller is responsible for executing the HTTP
/// round-trip between `build_list_characters` and `parse_list_characters`.
#[derive(Debug, Clone)]
pub struct CharacterClient {
    base_url: String,
}

impl CharacterClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build the list request. Ordering is always by id; direction, page and
    /// size come from `query`.
    pub fn build_list_characters(&self, query: &ListQuery) -> HttpRequest {
        HttpRequest {
            url: format!(
                "{}/api/characters?orderBy=id&orderByDirection={}&page={}&size={}",
                self.base_url,
                query.direction.as_query_value(),
                query.page,
                query.size,
            ),
            headers: Vec::new(),
        }
    }

    /// Interpret the list response.
    ///
    /// Any 2xx status counts as success. A well-formed object body without an
    /// `items` field yields an empty list; a body that is not a JSON object
    /// of the expected shape is a `Deserialization` error.
    pub fn parse_list_characters(&self, response: HttpResponse) -> Result<Vec<Character>, ApiError> {
        check_status(&response)?;
        let page: CharacterPage = serde_json::from_str(&response.body)
            .map_err(|e| ApiError::Deserialization(e.to_string()))?;
        Ok(page.items)
    }
}

/// Any 2xx status is success; everything else is a protocol failure.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if (200..300).contains(&response.status) {
        return Ok(());
    }
    Err(ApiError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}
