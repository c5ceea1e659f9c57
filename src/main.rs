mod models;
mod handlers;
mod logger;
mod metrics;

use axum::{routing::{get, Router}};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use metrics::Metrics;
use models::Record;

// share the records and the request counter with all the handlers.
// The records are seeded once at startup and never mutated, so
// concurrent reads need no locking.
#[derive(Clone)]
pub struct AppState {
    pub records: [Record; 2],
    pub metrics: Arc<Metrics>,
}

fn app(state: AppState) -> Router {

    Router::new()
        .route("/test", get(handlers::list_records))
        .with_state(state) // share the app state

}

#[tokio::main]
async fn main() {

    dotenvy::dotenv().ok();

    let records = models::seed_records();
    println!("serving records: {:?}", records);

    let state = AppState {
        records,
        metrics: Arc::new(Metrics::new()),
    };

    let app = app(state);

    let addr: SocketAddr = ([0, 0, 0, 0], 8000).into();
    let listener = TcpListener::bind(addr).await
        .expect("Failed to bind to port 8000");
    println!("listening on {}", listener.local_addr()
        .expect("Failed to get local address"));
    axum::serve(listener, app).await
        .expect("Server failed");

}
