//! Location tracking server.
//!
//! Run it with
//! ```not_rust
//! cargo run
//! ```
//! then open http://localhost:8000 for the browser client, or talk to the
//! API directly:
//! ```not_rust
//! curl -X POST localhost:8000/api/location \
//!     -d '{"userId": "alice", "lat": 37.7, "lng": -122.4}'
//! curl localhost:8000/api/location/alice
//! curl localhost:8000/api/locations
//! ```

use std::{env, net::SocketAddr, sync::Arc};

use axum::Server;
use tower_http::trace::{DefaultMakeSpan, TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use location_service::handlers;
use location_service::store::LocationStore;

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "location_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // The one store instance; handlers share it through axum state.
    let store = Arc::new(LocationStore::new());

    let app = handlers::location::router(store)
        // logging so we can see whats going on
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        );

    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "8000".to_string());
    let addr: SocketAddr = format!("{}:{}", host, port).parse().unwrap();
    info!("listening on {}", addr);

    Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}
