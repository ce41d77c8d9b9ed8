//! API integration tests
//!
//! Each test starts the router on an ephemeral port over a fresh in-memory
//! database and talks to it over HTTP.

use std::sync::Arc;

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

use library_catalog::{
    api,
    client::{Controller, FormMode, LibraryClient, Notice},
    config::AppConfig,
    repository::Repository,
    services::Services,
    AppState,
};

/// Start a server and return its base URL
async fn spawn_app() -> String {
    let repository = Repository::in_memory()
        .await
        .expect("Failed to open in-memory database");
    repository
        .init_schema()
        .await
        .expect("Failed to create schema");

    let state = AppState {
        config: Arc::new(AppConfig::default()),
        services: Arc::new(Services::new(repository)),
    };
    let app = api::create_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("No local address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    format!("http://{}", addr)
}

fn dune(rating: i64) -> Value {
    json!({
        "bookTitle": "Dune",
        "bookGenre": "Sci-Fi",
        "publishedYear": 1965,
        "rating": rating
    })
}

async fn create(client: &Client, base: &str, body: &Value) -> reqwest::Response {
    client
        .post(format!("{}/library", base))
        .json(body)
        .send()
        .await
        .expect("Failed to send request")
}

async fn list(client: &Client, base: &str) -> Vec<Value> {
    client
        .get(format!("{}/library", base))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response")
}

#[tokio::test]
async fn test_end_to_end_lifecycle() {
    let base = spawn_app().await;
    let client = Client::new();

    let response = create(&client, &base, &dune(5)).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Book added successfully");
    let id = body["id"].as_i64().expect("No book ID");

    let response = client
        .get(format!("{}/library/{}", base, id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let book: Value = response.json().await.unwrap();
    assert_eq!(
        book,
        json!({
            "id": id,
            "bookTitle": "Dune",
            "bookGenre": "Sci-Fi",
            "publishedYear": 1965,
            "rating": 5
        })
    );

    let response = client
        .put(format!("{}/library/{}", base, id))
        .json(&dune(4))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "message": "Book updated successfully" }));

    let book: Value = client
        .get(format!("{}/library/{}", base, id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(book["rating"], 4);

    let response = client
        .delete(format!("{}/library/{}", base, id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "message": "Book deleted successfully" }));

    let response = client
        .get(format!("{}/library/{}", base, id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_assigns_fresh_increasing_ids() {
    let base = spawn_app().await;
    let client = Client::new();

    let mut ids = Vec::new();
    for rating in 1..=3 {
        let body: Value = create(&client, &base, &dune(rating))
            .await
            .json()
            .await
            .unwrap();
        ids.push(body["id"].as_i64().unwrap());
    }
    assert!(ids.windows(2).all(|w| w[0] < w[1]));

    let books = list(&client, &base).await;
    assert_eq!(books.len(), 3);
    for (book, id) in books.iter().zip(&ids) {
        assert_eq!(book["id"].as_i64(), Some(*id));
    }
}

#[tokio::test]
async fn test_create_with_missing_fields_is_rejected() {
    let base = spawn_app().await;
    let client = Client::new();
    create(&client, &base, &dune(5)).await;

    let invalid = [
        json!({ "bookGenre": "Sci-Fi", "publishedYear": 1965, "rating": 5 }),
        json!({ "bookTitle": "", "bookGenre": "Sci-Fi", "publishedYear": 1965, "rating": 5 }),
        json!({ "bookTitle": "Dune", "bookGenre": "Sci-Fi", "publishedYear": 0, "rating": 5 }),
        json!({ "bookTitle": "Dune", "bookGenre": "Sci-Fi", "publishedYear": 1965, "rating": 0 }),
        json!({ "bookTitle": "Dune", "bookGenre": null, "publishedYear": 1965, "rating": 5 }),
        json!({}),
    ];
    for body in &invalid {
        let response = create(&client, &base, body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {}", body);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body, json!({ "message": "All fields are required" }));
    }

    assert_eq!(list(&client, &base).await.len(), 1);
}

#[tokio::test]
async fn test_rating_out_of_range_is_rejected() {
    let base = spawn_app().await;
    let client = Client::new();

    let response = create(&client, &base, &dune(6)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Rating must be between 1 and 5");
    assert!(list(&client, &base).await.is_empty());
}

#[tokio::test]
async fn test_malformed_body_gets_json_error() {
    let base = spawn_app().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/library", base))
        .header("Content-Type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert!(body["message"].is_string());

    let response = create(
        &client,
        &base,
        &json!({ "bookTitle": "Dune", "bookGenre": "Sci-Fi", "publishedYear": "soon", "rating": 5 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(list(&client, &base).await.is_empty());
}

#[tokio::test]
async fn test_get_missing_book_is_404() {
    let base = spawn_app().await;
    let client = Client::new();

    for id in ["42", "abc"] {
        let response = client
            .get(format!("{}/library/{}", base, id))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body, json!({ "message": "Book not found" }));
    }
}

#[tokio::test]
async fn test_update_missing_book_inserts_nothing() {
    let base = spawn_app().await;
    let client = Client::new();

    let response = client
        .put(format!("{}/library/7", base))
        .json(&dune(3))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Book not found");
    assert!(list(&client, &base).await.is_empty());
}

#[tokio::test]
async fn test_update_with_missing_field_is_400() {
    let base = spawn_app().await;
    let client = Client::new();
    let body: Value = create(&client, &base, &dune(5)).await.json().await.unwrap();
    let id = body["id"].as_i64().unwrap();

    let response = client
        .put(format!("{}/library/{}", base, id))
        .json(&json!({ "bookTitle": "Dune" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let book: Value = client
        .get(format!("{}/library/{}", base, id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(book["rating"], 5);
}

#[tokio::test]
async fn test_delete_twice_is_404() {
    let base = spawn_app().await;
    let client = Client::new();
    let body: Value = create(&client, &base, &dune(5)).await.json().await.unwrap();
    let id = body["id"].as_i64().unwrap();

    let url = format!("{}/library/{}", base, id);
    assert_eq!(client.delete(&url).send().await.unwrap().status(), StatusCode::OK);

    let response = client.delete(&url).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Book not found");
}

#[tokio::test]
async fn test_cors_headers_on_every_response() {
    let base = spawn_app().await;
    let client = Client::new();

    for url in [format!("{}/library", base), format!("{}/library/999", base)] {
        let response = client
            .get(&url)
            .header("Origin", "http://example.com")
            .send()
            .await
            .unwrap();
        assert_eq!(response.headers()["access-control-allow-origin"], "*");
    }

    let response = client
        .request(reqwest::Method::OPTIONS, format!("{}/library/1", base))
        .header("Origin", "http://example.com")
        .header("Access-Control-Request-Method", "DELETE")
        .header("Access-Control-Request-Headers", "content-type")
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    let headers = response.headers();
    assert_eq!(headers["access-control-allow-origin"], "*");
    assert_eq!(headers["access-control-allow-methods"], "*");
    assert_eq!(headers["access-control-allow-headers"], "*");
}

#[tokio::test]
async fn test_health_and_readiness() {
    let base = spawn_app().await;
    let client = Client::new();

    let body: Value = client
        .get(format!("{}/health", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["status"], "healthy");
    assert!(body.get("database").is_none());

    let response = client.get(format!("{}/ready", base)).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "ready");
    assert_eq!(body["database"], AppConfig::default().database.url);
}

#[tokio::test]
async fn test_client_controller_flow() {
    let base = spawn_app().await;
    let mut controller = Controller::new(LibraryClient::new(base.clone()));

    assert!(controller.refresh().await);
    assert!(controller.books().is_empty());

    // Create
    {
        let form = controller.form_mut();
        form.title = "Dune".into();
        form.genre = "Sci-Fi".into();
        form.published_year = "1965".into();
        form.rating = "5".into();
    }
    assert!(controller.submit().await);
    assert_eq!(
        controller.notice(),
        Some(&Notice::Success("Book added successfully".to_string()))
    );
    assert_eq!(controller.state().mode(), FormMode::Create);
    assert_eq!(controller.books().len(), 1);
    assert!(controller.rendered().contains("Dune"));
    let id = controller.books()[0].id;

    // Edit
    assert!(controller.begin_update(id).await);
    assert_eq!(controller.state().updating_book_id(), Some(id));
    assert_eq!(controller.form().rating, "5");
    controller.form_mut().rating = "4".into();
    assert!(controller.submit().await);
    assert!(!controller.state().is_updating());
    assert_eq!(controller.books()[0].rating, 4);

    // Editing a missing book keeps create mode and reports a generic error
    assert!(!controller.begin_update(id + 100).await);
    assert!(!controller.state().is_updating());
    assert!(matches!(controller.notice(), Some(Notice::Error(_))));
    controller.dismiss_notice();

    // Delete asks first and leaves the form mode alone
    assert!(controller.begin_update(id).await);
    let mut prompts = Vec::new();
    let deleted = controller
        .delete(id, &mut |prompt: &str| {
            prompts.push(prompt.to_string());
            true
        })
        .await;
    assert!(deleted);
    assert_eq!(
        prompts,
        vec!["Are you sure you want to delete the book \"Dune\"?".to_string()]
    );
    assert!(controller.books().is_empty());
    assert_eq!(controller.state().mode(), FormMode::Edit(id));

    // Saving the deleted book fails without leaving edit mode
    assert!(!controller.submit().await);
    assert_eq!(controller.state().mode(), FormMode::Edit(id));
    controller.cancel_update();
    assert_eq!(controller.state().mode(), FormMode::Create);
}
