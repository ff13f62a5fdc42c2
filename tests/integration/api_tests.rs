//! API integration tests against a running server

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:5555";

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_list_books() {
    let client = Client::new();

    let response = client
        .get(format!("{}/books", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    let data = body["data"].as_array().expect("No data array");
    assert_eq!(body["count"].as_u64(), Some(data.len() as u64));
}

#[tokio::test]
#[ignore]
async fn test_create_update_and_delete_book() {
    let client = Client::new();

    // Create book
    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({
            "title": "Dune",
            "author": "Herbert",
            "publishYear": 1965
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    let book_id = body["id"].as_str().expect("No book ID").to_string();

    // Update book
    let response = client
        .put(format!("{}/books/{}", BASE_URL, book_id))
        .json(&json!({
            "title": "Dune: New Edition",
            "author": "Herbert",
            "publishYear": 1965
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Book updated successfully");

    // Delete book
    let response = client
        .delete(format!("{}/books/{}", BASE_URL, book_id))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);

    // Deleting again reports not found
    let response = client
        .delete(format!("{}/books/{}", BASE_URL, book_id))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_create_book_missing_field() {
    let client = Client::new();

    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({ "title": "Dune" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(
        body["message"],
        "Send all required fields: title, author, publishYear"
    );
}

#[tokio::test]
#[ignore]
async fn test_client_against_server() {
    let client = bookstore_server::client::BooksClient::new(BASE_URL);

    let created = client
        .create(&bookstore_server::models::BookPayload::new("Emma", "Austen", 1815))
        .await
        .expect("Failed to create book");

    let fetched = client
        .get(&created.id.to_string())
        .await
        .expect("Failed to fetch book");
    assert_eq!(fetched, created);

    client
        .delete(&created.id.to_string())
        .await
        .expect("Failed to delete book");

    match client.get(&created.id.to_string()).await {
        Err(bookstore_server::client::ClientError::Status { status, message }) => {
            assert_eq!(status, 404);
            assert_eq!(message, "Book not found");
        }
        other => panic!("unexpected {:?}", other.map(|b| b.id)),
    }
}
