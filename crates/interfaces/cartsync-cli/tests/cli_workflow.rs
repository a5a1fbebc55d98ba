use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use cartsync_app_core::SyncOptions;
use cartsync_cli::commands;
use cartsync_core::NotificationStatus;
use serde_json::Value;

async fn start_mock_server() -> (SocketAddr, tokio::task::JoinHandle<()>) {
    let doc = Arc::new(Mutex::new(Value::Null));

    let app = Router::new().route(
        "/cart.json",
        get({
            let doc = doc.clone();
            move || async move { Json(doc.lock().unwrap().clone()) }
        })
        .put({
            let doc = doc.clone();
            move |Json(body): Json<Value>| async move {
                *doc.lock().unwrap() = body;
                StatusCode::OK
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (addr, handle)
}

#[tokio::test]
async fn add_remove_and_show_round_trip_through_the_endpoint() {
    let (addr, _server) = start_mock_server().await;
    let endpoint = format!("http://{addr}/cart.json");

    let vm = commands::cmd_show(&endpoint, SyncOptions::default())
        .await
        .unwrap();
    assert!(vm.lines.is_empty());
    assert!(vm.notification.is_none());
    assert!(commands::render(&vm).contains(":: Cart is empty"));

    let vm = commands::cmd_add(
        &endpoint,
        SyncOptions::default(),
        "a1".into(),
        "Apple".into(),
        1.5,
        2,
    )
    .await
    .unwrap();
    assert_eq!(vm.total_quantity, 2);
    assert_eq!(
        vm.notification.as_ref().map(|n| n.status),
        Some(NotificationStatus::Success)
    );

    let vm = commands::cmd_remove(&endpoint, SyncOptions::default(), "a1".into())
        .await
        .unwrap();
    assert_eq!(vm.total_quantity, 1);

    // A fresh process sees what the previous ones wrote.
    let vm = commands::cmd_show(&endpoint, SyncOptions::default())
        .await
        .unwrap();
    assert_eq!(vm.lines.len(), 1);
    assert_eq!(vm.lines[0].quantity, 1);
    assert_eq!(vm.total_amount, "$1.50");
    assert!(!vm.changed);

    let text = commands::render(&vm);
    assert!(text.contains("Apple"));
    assert!(text.contains(":: 1 items, total $1.50"));
}

#[tokio::test]
async fn invalid_endpoint_is_reported_as_an_error() {
    let err = commands::cmd_show("not a url", SyncOptions::default())
        .await
        .unwrap_err();
    assert!(err.to_string().contains("not a url"));
}
