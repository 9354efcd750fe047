use std::collections::BTreeMap;
use std::time::{SystemTime, UNIX_EPOCH};

use dashmap::DashMap;
use serde_json::Value;
use tracing::{debug, info};

use crate::models::location::LocationRecord;

/// Shared table of each user's latest location.
///
/// One instance is created at startup and handed to every request handler.
/// DashMap's sharded locking keeps individual records atomic under concurrent
/// access: a reader sees either the full previous record or the full new one,
/// never a partial write. Entries are never evicted; the table grows with the
/// number of distinct user ids seen over the process lifetime.
#[derive(Default)]
pub struct LocationStore {
    records: DashMap<String, LocationRecord>,
}

impl LocationStore {
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
        }
    }

    /// Replaces the stored record for `user_id` with the given coordinates
    /// and a server-assigned timestamp.
    ///
    /// An empty user id is silently skipped; the caller still reports success
    /// to stay compatible with the existing clients.
    pub fn upsert(&self, user_id: &str, lat: Value, lng: Value) {
        if user_id.is_empty() {
            debug!("skipping location update without a user id");
            return;
        }
        info!("Updated location for user {}: {}, {}", user_id, lat, lng);
        self.records.insert(
            user_id.to_owned(),
            LocationRecord {
                lat,
                lng,
                timestamp: epoch_seconds(),
            },
        );
    }

    pub fn get_one(&self, user_id: &str) -> Option<LocationRecord> {
        self.records.get(user_id).map(|record| record.value().clone())
    }

    /// Snapshot of every known user's latest record.
    ///
    /// Iterates the live map, so updates racing with the snapshot may or may
    /// not be included; each individual record is still cloned whole.
    pub fn get_all(&self) -> BTreeMap<String, LocationRecord> {
        self.records
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect()
    }
}

/// Wall-clock time as epoch seconds, the unit the HTTP API exposes.
fn epoch_seconds() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs_f64()
}
