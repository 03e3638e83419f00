//! End-to-end tests for the server and film endpoints
//!
//! Tests the home route, general info, the paged film grid and single films.

mod common;

use common::{TestClient, TestServer, FILM_1_TITLE, FILM_COUNT, NEWEST_FILM_ID};
use reqwest::StatusCode;

// =============================================================================
// Home Tests
// =============================================================================

#[tokio::test]
async fn test_home_reports_server_stats() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let response = client.get_home().await;
    assert_eq!(response.status(), StatusCode::OK);

    let stats: serde_json::Value = response.json().await.unwrap();
    assert_eq!(stats["films"], FILM_COUNT);
    assert!(stats["hash"].is_string());
    assert!(stats["uptime"].as_str().unwrap().starts_with("0d "));
}

#[tokio::test]
async fn test_unknown_route_returns_404() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let response = client.get_stats("nothing-here").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// =============================================================================
// Info Tests
// =============================================================================

#[tokio::test]
async fn test_get_info_returns_general_info() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let response = client.get_info().await;
    assert_eq!(response.status(), StatusCode::OK);

    let info: serde_json::Value = response.json().await.unwrap();
    assert_eq!(info["Total_Movies"], FILM_COUNT);
    assert_eq!(info["Compatibility"], 91.25);
}

// =============================================================================
// Film Grid Tests
// =============================================================================

#[tokio::test]
async fn test_films_are_listed_newest_first() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let response = client.get_films(None, None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let page: serde_json::Value = response.json().await.unwrap();
    assert_eq!(page["total"], FILM_COUNT);
    assert_eq!(page["offset"], 0);
    let films = page["films"].as_array().unwrap();
    assert_eq!(films.len(), FILM_COUNT);
    assert_eq!(films[0]["id"], NEWEST_FILM_ID);
    assert_eq!(films[FILM_COUNT - 1]["Film_title"], FILM_1_TITLE);
}

#[tokio::test]
async fn test_films_pagination() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let page: serde_json::Value = client
        .get_films(Some(2), Some(3))
        .await
        .json()
        .await
        .unwrap();
    let ids: Vec<u64> = page["films"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![6, 5, 4]);

    let page: serde_json::Value = client
        .get_films(Some(FILM_COUNT), None)
        .await
        .json()
        .await
        .unwrap();
    assert!(page["films"].as_array().unwrap().is_empty());
    assert_eq!(page["total"], FILM_COUNT);
}

#[tokio::test]
async fn test_films_pagination_rejects_bad_query() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let response = client
        .client
        .get(format!("{}/v1/films?offset=-1", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// =============================================================================
// Single Film Tests
// =============================================================================

#[tokio::test]
async fn test_get_film_returns_dataset_record() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let response = client.get_film("1").await;
    assert_eq!(response.status(), StatusCode::OK);

    let film: serde_json::Value = response.json().await.unwrap();
    assert_eq!(film["Film_title"], FILM_1_TITLE);
    assert_eq!(film["Release_year"], 1994);
    assert_eq!(film["Rating_Igor"], 4.0);
    assert_eq!(film["Rating_Valeria"], 3.5);
}

#[tokio::test]
async fn test_get_nonexistent_film_returns_404() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let response = client.get_film("999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_film_with_bad_id_returns_400() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let response = client.get_film("parasite").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
