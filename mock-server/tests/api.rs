use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, app_with, default_roster, Character, CharacterPage};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn get(app: axum::Router, uri: &str) -> axum::response::Response {
    app.oneshot(Request::builder().uri(uri).body(String::new()).unwrap())
        .await
        .unwrap()
}

// --- response shape ---

#[tokio::test]
async fn list_returns_items_object() {
    let resp = get(app(), "/api/characters").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert!(value.is_object());
    assert!(value["items"].is_array());
}

// --- ordering ---

#[tokio::test]
async fn list_defaults_to_ascending_by_id() {
    let resp = get(app(), "/api/characters").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let page: CharacterPage = body_json(resp).await;
    assert_eq!(page.items.len(), default_roster().len());
    for pair in page.items.windows(2) {
        assert!(pair[0].id < pair[1].id);
    }
}

#[tokio::test]
async fn list_descending_reverses_order() {
    let resp = get(app(), "/api/characters?orderByDirection=desc").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let page: CharacterPage = body_json(resp).await;
    for pair in page.items.windows(2) {
        assert!(pair[0].id > pair[1].id);
    }
}

#[tokio::test]
async fn list_seeded_roster_is_sorted_before_paging() {
    let unsorted = vec![
        Character {
            id: 9,
            name: "Nibbler".to_string(),
            gender: "Male".to_string(),
            status: "Alive".to_string(),
            species: "Nibblonian".to_string(),
            image: "http://localhost/img/9.png".to_string(),
        },
        Character {
            id: 2,
            name: "Turanga Leela".to_string(),
            gender: "Female".to_string(),
            status: "Alive".to_string(),
            species: "Mutant".to_string(),
            image: "http://localhost/img/2.png".to_string(),
        },
    ];
    let resp = get(app_with(unsorted), "/api/characters").await;
    let page: CharacterPage = body_json(resp).await;
    assert_eq!(page.items[0].id, 2);
    assert_eq!(page.items[1].id, 9);
}

// --- paging ---

#[tokio::test]
async fn list_pages_slice_the_roster() {
    let resp = get(app(), "/api/characters?size=3&page=2").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let page: CharacterPage = body_json(resp).await;
    let ids: Vec<u64> = page.items.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![4, 5, 6]);
}

#[tokio::test]
async fn list_window_past_end_is_empty() {
    let resp = get(app(), "/api/characters?page=99").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let page: CharacterPage = body_json(resp).await;
    assert!(page.items.is_empty());
}

#[tokio::test]
async fn list_size_larger_than_roster_returns_everything() {
    let resp = get(app(), "/api/characters?size=500").await;
    let page: CharacterPage = body_json(resp).await;
    assert_eq!(page.items.len(), default_roster().len());
}

// --- parameter validation ---

#[tokio::test]
async fn list_rejects_unknown_order_field() {
    let resp = get(app(), "/api/characters?orderBy=name").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn list_rejects_unknown_direction() {
    let resp = get(app(), "/api/characters?orderByDirection=sideways").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn list_rejects_page_zero() {
    let resp = get(app(), "/api/characters?page=0").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn list_rejects_size_zero() {
    let resp = get(app(), "/api/characters?size=0").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- routing ---

#[tokio::test]
async fn unknown_path_is_not_found() {
    let resp = get(app(), "/api/nope").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
