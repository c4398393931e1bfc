//! Tiffin Mock - in-memory stand-in for the Tiffin backend
//!
//! Serves the same REST surface the production backend exposes, backed by
//! DashMaps instead of a database. Used by the client crate's integration
//! tests and runnable standalone for manual poking.

pub mod api;
pub mod state;

pub use state::{AppState, ADMIN_PASSWORD, ADMIN_USERNAME, MOCK_OTP};

use std::net::SocketAddr;
use std::sync::Arc;

/// Start a server on an ephemeral port and return its address and state.
///
/// The state handle lets tests seed data and inspect call counters.
pub async fn spawn() -> (SocketAddr, Arc<AppState>) {
    let state = Arc::new(AppState::new());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    let app = api::router(state.clone());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!("mock server exited: {}", e);
        }
    });

    (addr, state)
}
