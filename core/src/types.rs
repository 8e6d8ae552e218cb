//! Domain DTOs for the character-list API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently,
//! so the client surface stays decoupled from Axum internals. Integration
//! tests catch any schema drift between the two crates.

use serde::{Deserialize, Serialize};

/// A single character returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Character {
    pub id: u64,
    pub name: String,
    pub gender: String,
    /// Vital status.
    pub status: String,
    /// Fetched but not rendered; retained for completeness.
    pub species: String,
    /// URI of the avatar asset.
    pub image: String,
}

/// Response body of the list endpoint: `{"items": [...]}`.
///
/// `items` defaults to empty when the field is absent: an object body without
/// `items` is a successful empty page, while a non-object body fails
/// deserialization and counts as a load failure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CharacterPage {
    #[serde(default)]
    pub items: Vec<Character>,
}

/// Sort direction for the list endpoint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OrderDirection {
    Asc,
    Desc,
}

impl OrderDirection {
    /// The value sent in the `orderByDirection` query parameter.
    pub fn as_query_value(self) -> &'static str {
        match self {
            OrderDirection::Asc => "asc",
            OrderDirection::Desc => "desc",
        }
    }
}

/// Paging and ordering parameters for a list fetch. The order field is fixed
/// to `id`; only the direction varies.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ListQuery {
    pub direction: OrderDirection,
    /// 1-based page index.
    pub page: u32,
    /// Items per page.
    pub size: u32,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            direction: OrderDirection::Asc,
            page: 1,
            size: 50,
        }
    }
}
