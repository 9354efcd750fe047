use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Last known position of a single user.
///
/// Coordinates are passed through exactly as the client sent them, including
/// `null` when omitted; the service does not validate ranges or types. The
/// timestamp is assigned by the server (epoch seconds) when the record is
/// stored, never taken from the client.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LocationRecord {
    pub lat: Value,
    pub lng: Value,
    pub timestamp: f64,
}

/// Inbound body of `POST /api/location`.
///
/// Every field is optional; missing pieces degrade to a no-op or a `null`
/// coordinate instead of a client error.
#[derive(Deserialize, Debug)]
pub struct LocationUpdate {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
    pub lat: Option<Value>,
    pub lng: Option<Value>,
}
