//! Client and page tests against a server bound to a local port

use std::sync::Arc;

use tokio::net::TcpListener;

use bookstore_server::{
    api,
    client::{
        pages::{self, BookEdit, View},
        BooksClient, ClientError,
    },
    models::BookPayload,
    repository::MemoryBookStore,
    AppState,
};

async fn spawn_server() -> BooksClient {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = api::router(AppState::new(Arc::new(MemoryBookStore::new())));

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    BooksClient::new(format!("http://{}", addr))
}

fn assert_status(result: Result<impl std::fmt::Debug, ClientError>, expected: u16, text: &str) {
    match result {
        Err(ClientError::Status { status, message }) => {
            assert_eq!(status, expected);
            assert_eq!(message, text);
        }
        other => panic!("expected status {}, got {:?}", expected, other),
    }
}

#[tokio::test]
async fn test_create_then_get_returns_same_book() {
    let client = spawn_server().await;

    let created = client
        .create(&BookPayload::new("Dune", "Herbert", 1965))
        .await
        .unwrap();
    let fetched = client.get(&created.id.to_string()).await.unwrap();

    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_deleted_book_reports_not_found() {
    let client = spawn_server().await;
    let created = client
        .create(&BookPayload::new("Dune", "Herbert", 1965))
        .await
        .unwrap();
    let id = created.id.to_string();

    let confirmation = client.delete(&id).await.unwrap();
    assert_eq!(confirmation.message, "Book deleted successfully");

    assert_status(client.get(&id).await, 404, "Book not found");
    assert_status(client.delete(&id).await, 404, "Book not found");
}

#[tokio::test]
async fn test_rejected_requests_carry_server_message() {
    let client = spawn_server().await;

    let incomplete = BookPayload {
        title: Some("Dune".to_string()),
        ..Default::default()
    };
    assert_status(
        client.create(&incomplete).await,
        400,
        "Send all required fields: title, author, publishYear",
    );
    assert_status(client.get("12345").await, 400, "Invalid book id: 12345");

    assert_eq!(client.list().await.unwrap().count, 0);
}

#[tokio::test]
async fn test_unconfirmed_delete_sends_nothing() {
    let client = spawn_server().await;
    let created = client
        .create(&BookPayload::new("Dune", "Herbert", 1965))
        .await
        .unwrap();

    pages::delete(&client, &created.id.to_string(), false)
        .await
        .unwrap();

    let list = client.list().await.unwrap();
    assert_eq!(list.count, 1);
    assert_eq!(list.data[0].id, created.id);
}

#[tokio::test]
async fn test_confirmed_delete_removes_book() {
    let client = spawn_server().await;
    let created = client
        .create(&BookPayload::new("Dune", "Herbert", 1965))
        .await
        .unwrap();

    pages::delete(&client, &created.id.to_string(), true)
        .await
        .unwrap();

    assert_eq!(client.list().await.unwrap().count, 0);
}

#[tokio::test]
async fn test_pages_surface_failures() {
    let client = spawn_server().await;
    let missing = "6f1c1a52-3b8e-4c5d-9a7e-2d4f6b8c0e13";

    assert_status(pages::show(&client, missing).await, 404, "Book not found");
    assert_status(
        pages::edit(&client, missing, BookEdit::default()).await,
        404,
        "Book not found",
    );
    assert_status(pages::delete(&client, missing, true).await, 404, "Book not found");
}

#[tokio::test]
async fn test_create_and_edit_pages() {
    let client = spawn_server().await;

    pages::create(&client, BookPayload::new("Dune", "Herbert", 1965))
        .await
        .unwrap();
    let created = client.list().await.unwrap().data.remove(0);

    let edit = BookEdit {
        title: Some("Dune: New Edition".to_string()),
        ..Default::default()
    };
    pages::edit(&client, &created.id.to_string(), edit)
        .await
        .unwrap();
    pages::home(&client, View::Card).await.unwrap();

    let edited = client.get(&created.id.to_string()).await.unwrap();
    assert_eq!(edited.title, "Dune: New Edition");
    assert_eq!(edited.author, "Herbert");
    assert_eq!(edited.publish_year, 1965);
}
