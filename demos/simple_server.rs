// ============================================================================
// Simple Server Example
// ============================================================================
//
// This is a simplified implementation for demonstration purposes.
// It serves the /test records without the request log or the counter.
//
// ============================================================================

use axum::{routing::{get, Router}, Json};
use serde_json::{Value, json};
use std::net::SocketAddr;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() {

    // build our application with routes
    let app = Router::new().route("/test", get(list_records));

    // run it
    let addr: SocketAddr = ([0, 0, 0, 0], 8000).into();
    let listener = TcpListener::bind(addr).await.unwrap();
    println!("listening on {}", listener.local_addr().unwrap());
    axum::serve(listener, app).await.unwrap();

}

async fn list_records() -> Json<Value> {

    Json(json!([
        {"id": 1, "val": "abc"},
        {"id": 2, "val": "cde"}
    ]))

}
