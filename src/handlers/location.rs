use std::collections::BTreeMap;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::services::ServeDir;
use tracing::debug;

use crate::models::location::{LocationRecord, LocationUpdate};
use crate::store::LocationStore;

/// Builds the API router around a shared store. Anything outside `/api` falls
/// through to the static frontend.
pub fn router(store: Arc<LocationStore>) -> Router {
    Router::new()
        .route("/api/location", post(update_location))
        .route("/api/location/:user_id", get(user_location))
        .route("/api/locations", get(all_locations))
        .fallback_service(ServeDir::new("static"))
        .with_state(store)
}

/// `POST /api/location` always answers success: a body that fails to parse,
/// or one without a user id, degrades to a no-op instead of a client error.
async fn update_location(State(store): State<Arc<LocationStore>>, body: Bytes) -> Json<Value> {
    match serde_json::from_slice::<LocationUpdate>(&body) {
        Ok(update) => {
            let user_id = update.user_id.unwrap_or_default();
            store.upsert(
                &user_id,
                update.lat.unwrap_or(Value::Null),
                update.lng.unwrap_or(Value::Null),
            );
        }
        Err(e) => debug!("ignoring unparseable location update: {}", e),
    }
    Json(json!({ "status": "success" }))
}

/// `GET /api/location/:user_id`, `{}` when the user was never seen.
async fn user_location(
    State(store): State<Arc<LocationStore>>,
    Path(user_id): Path<String>,
) -> Json<Value> {
    let body = store
        .get_one(&user_id)
        .and_then(|record| serde_json::to_value(record).ok())
        .unwrap_or_else(|| json!({}));
    Json(body)
}

/// `GET /api/locations`, every known user keyed by id.
async fn all_locations(
    State(store): State<Arc<LocationStore>>,
) -> Json<BTreeMap<String, LocationRecord>> {
    Json(store.get_all())
}
