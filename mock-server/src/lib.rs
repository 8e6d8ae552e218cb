use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Character {
    pub id: u64,
    pub name: String,
    pub gender: String,
    pub status: String,
    pub species: String,
    pub image: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CharacterPage {
    pub items: Vec<Character>,
}

#[derive(Debug, Deserialize)]
pub struct ListParams {
    #[serde(rename = "orderBy", default = "default_order_by")]
    pub order_by: String,
    #[serde(rename = "orderByDirection", default = "default_direction")]
    pub order_by_direction: String,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_size")]
    pub size: u32,
}

fn default_order_by() -> String {
    "id".to_string()
}

fn default_direction() -> String {
    "asc".to_string()
}

fn default_page() -> u32 {
    1
}

fn default_size() -> u32 {
    50
}

pub type Roster = Arc<Vec<Character>>;

/// Router over the default roster.
pub fn app() -> Router {
    app_with(default_roster())
}

/// Router over a caller-supplied roster, for tests that need a specific set.
pub fn app_with(characters: Vec<Character>) -> Router {
    let roster: Roster = Arc::new(characters);
    Router::new()
        .route("/api/characters", get(list_characters))
        .with_state(roster)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn character(id: u64, name: &str, gender: &str, status: &str, species: &str) -> Character {
    Character {
        id,
        name: name.to_string(),
        gender: gender.to_string(),
        status: status.to_string(),
        species: species.to_string(),
        image: format!("http://localhost/img/{id}.png"),
    }
}

pub fn default_roster() -> Vec<Character> {
    vec![
        character(1, "Philip J. Fry", "Male", "Alive", "Human"),
        character(2, "Turanga Leela", "Female", "Alive", "Mutant"),
        character(3, "Bender Bending Rodriguez", "Male", "Alive", "Robot"),
        character(4, "Hubert J. Farnsworth", "Male", "Alive", "Human"),
        character(5, "Amy Wong", "Female", "Alive", "Human"),
        character(6, "Hermes Conrad", "Male", "Alive", "Human"),
        character(7, "John A. Zoidberg", "Male", "Alive", "Decapodian"),
        character(8, "Zapp Brannigan", "Male", "Alive", "Human"),
    ]
}

async fn list_characters(
    State(roster): State<Roster>,
    Query(params): Query<ListParams>,
) -> Result<Json<CharacterPage>, StatusCode> {
    // Only ordering by id is supported, mirroring the upstream API surface
    // this server stands in for.
    if params.order_by != "id" {
        return Err(StatusCode::BAD_REQUEST);
    }
    let descending = match params.order_by_direction.as_str() {
        "asc" => false,
        "desc" => true,
        _ => return Err(StatusCode::BAD_REQUEST),
    };
    if params.page == 0 || params.size == 0 {
        return Err(StatusCode::BAD_REQUEST);
    }

    let mut items: Vec<Character> = roster.as_ref().clone();
    items.sort_by_key(|c| c.id);
    if descending {
        items.reverse();
    }

    // A window past the end of the roster is an empty page, not an error.
    let start = (params.page as usize - 1).saturating_mul(params.size as usize);
    let items = items
        .into_iter()
        .skip(start)
        .take(params.size as usize)
        .collect();
    Ok(Json(CharacterPage { items }))
}
