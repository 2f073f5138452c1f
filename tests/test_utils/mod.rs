//! Test utilities for integration tests
#![allow(dead_code)]
use std::sync::Arc;

use firewall_chat::backend::HttpBackend;
use firewall_chat::chat::{ChatSession, SessionMode};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Creates a session talking to `base_url` over HTTP.
pub fn http_session(mode: SessionMode, base_url: &str) -> ChatSession {
    ChatSession::builder(mode, Arc::new(HttpBackend::new(base_url))).build()
}

/// Base URL of a port with nothing listening on it.
pub fn unreachable_url() -> String {
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .expect("Failed to bind")
        .local_addr()
        .expect("Missing local addr")
        .port();
    format!("http://127.0.0.1:{}", port)
}

/// Starts a server that accepts connections and never answers them.
pub async fn silent_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("Missing local addr");

    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });

    format!("http://{}", addr)
}

/// Starts a server that answers with headers promising a body it
/// never finishes sending.
pub async fn stalled_body_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("Missing local addr");

    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((mut socket, _)) = listener.accept().await {
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let _ = socket
                .write_all(b"HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 100\r\n\r\n{")
                .await;
            let _ = socket.flush().await;
            held.push(socket);
        }
    });

    format!("http://{}", addr)
}
