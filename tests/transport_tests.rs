//! HttpTransport exercised against a real axum server on an ephemeral port.

use std::sync::{Arc, Mutex};

use axum::{Json, Router, http::StatusCode, routing::post};
use serde_json::{Value, json};

use lifeplants_chat::error::TransportError;
use lifeplants_chat::message::ChatRequest;
use lifeplants_chat::widget::{ChatTransport, HttpTransport};

async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}/chatbot")
}

#[tokio::test]
async fn posts_json_and_parses_the_reply() {
    let seen: Arc<Mutex<Option<Value>>> = Arc::new(Mutex::new(None));
    let seen_handle = seen.clone();
    let router = Router::new().route(
        "/chatbot",
        post(move |Json(body): Json<Value>| {
            let seen = seen_handle.clone();
            async move {
                *seen.lock().unwrap() = Some(body);
                Json(json!({"reply": "Hi there"}))
            }
        }),
    );
    let endpoint = spawn(router).await;

    let transport = HttpTransport::new(endpoint);
    let request = ChatRequest { message: "Hello".to_string(), city: "Managua".to_string() };
    let response = transport.send(&request).await.unwrap();

    assert_eq!(response.reply, "Hi there");
    assert_eq!(
        seen.lock().unwrap().take().unwrap(),
        json!({"message": "Hello", "city": "Managua"})
    );
}

#[tokio::test]
async fn non_success_status_is_a_transport_failure() {
    let router = Router::new().route(
        "/chatbot",
        post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let endpoint = spawn(router).await;

    let transport = HttpTransport::new(endpoint);
    let request = ChatRequest { message: "Test".to_string(), city: "Managua".to_string() };
    let err = transport.send(&request).await.unwrap_err();

    assert!(matches!(err, TransportError::Transport(_)), "got {err:?}");
}

#[tokio::test]
async fn unparseable_body_is_a_format_failure() {
    let router = Router::new().route("/chatbot", post(|| async { "this is not json" }));
    let endpoint = spawn(router).await;

    let transport = HttpTransport::new(endpoint);
    let request = ChatRequest { message: "Test".to_string(), city: "Managua".to_string() };
    let err = transport.send(&request).await.unwrap_err();

    assert!(matches!(err, TransportError::ResponseFormat(_)), "got {err:?}");
}

#[tokio::test]
async fn unreachable_endpoint_is_a_transport_failure() {
    // Bind and immediately drop to get a port nobody is listening on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let transport = HttpTransport::new(format!("http://{addr}/chatbot"));
    let request = ChatRequest { message: "Test".to_string(), city: "Managua".to_string() };
    let err = transport.send(&request).await.unwrap_err();

    assert!(matches!(err, TransportError::Transport(_)), "got {err:?}");
}
