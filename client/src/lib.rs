//! Blocking HTTP client for the tilespace remote map service.
//!
//! [`MapClient`] performs exactly one blocking round trip per call and
//! carries no retry, backoff or timeout policy of its own; callers wrap
//! it with whatever policy fits their deployment. Request construction is
//! kept separate from I/O so payloads can be tested without a server.
//!
//! # Example
//!
//! ```no_run
//! use client::MapClient;
//!
//! let api = MapClient::new("my-api-key", "my-space-id");
//! let mut map = api.get_map("office").unwrap();
//! map.set_object_collision(0, true).unwrap();
//! api.set_map(&map).unwrap();
//! ```

mod error;

pub use error::{ClientError, ClientResult};

use model::{MapModel, MapRecord};
use serde_json::{json, Value};

/// Base URL of the hosted map service.
pub const DEFAULT_BASE_URL: &str = "https://gather.town/api";

/// Client for fetching and pushing map wire records.
#[derive(Clone)]
pub struct MapClient {
    agent: ureq::Agent,
    api_key: String,
    space_id: String,
    base_url: String,
}

impl std::fmt::Debug for MapClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The API key stays out of debug output.
        f.debug_struct("MapClient")
            .field("space_id", &self.space_id)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl MapClient {
    /// Creates a client for the hosted service.
    #[must_use]
    pub fn new(api_key: impl Into<String>, space_id: impl Into<String>) -> Self {
        Self {
            agent: ureq::Agent::new(),
            api_key: api_key.into(),
            space_id: space_id.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Overrides the service base URL, for self-hosted deployments and
    /// tests.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Returns the space this client operates on.
    #[must_use]
    pub fn space_id(&self) -> &str {
        &self.space_id
    }

    /// Fetches a map's wire record and decodes it into a [`MapModel`].
    pub fn get_map(&self, map_id: &str) -> ClientResult<MapModel> {
        let response = self
            .agent
            .get(&format!("{}/getMap", self.base_url))
            .query("apiKey", &self.api_key)
            .query("spaceId", &self.space_id)
            .query("mapId", map_id)
            .call()?;
        let body = response
            .into_string()
            .map_err(|err| ClientError::Transport {
                reason: err.to_string(),
            })?;
        parse_map_body(&body)
    }

    /// Pushes a map model back to the service, re-encoding its collision
    /// mask into the wire record.
    pub fn set_map(&self, map: &MapModel) -> ClientResult<()> {
        let payload = set_map_payload(&self.api_key, &self.space_id, map)?;
        self.agent
            .post(&format!("{}/setMap", self.base_url))
            .set("Content-Type", "application/json")
            .send_string(&payload.to_string())?;
        Ok(())
    }
}

/// Parses a `getMap` response body into a map model.
///
/// A body that is not a JSON wire record is a [`ClientError::Json`];
/// a record that decodes but violates a model invariant (bad collision
/// blob, dimension mismatch) is a [`ClientError::Model`].
fn parse_map_body(body: &str) -> ClientResult<MapModel> {
    let record: MapRecord = serde_json::from_str(body)?;
    Ok(MapModel::from_record(record)?)
}

/// Builds the JSON body of a `setMap` request.
pub fn set_map_payload(api_key: &str, space_id: &str, map: &MapModel) -> ClientResult<Value> {
    let content = serde_json::to_value(map.to_record())?;
    Ok(json!({
        "apiKey": api_key,
        "spaceId": space_id,
        "mapId": map.id(),
        "mapContent": content,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::MapObject;

    #[test]
    fn client_holds_configured_space() {
        let api = MapClient::new("key", "space-123");
        assert_eq!(api.space_id(), "space-123");
        assert_eq!(api.base_url, DEFAULT_BASE_URL);

        let local = MapClient::new("key", "space-123").with_base_url("http://localhost:9000/api");
        assert_eq!(local.base_url, "http://localhost:9000/api");
    }

    #[test]
    fn non_json_body_is_a_json_error() {
        let err = parse_map_body("<html>rate limited</html>").unwrap_err();
        assert!(matches!(err, ClientError::Json { .. }));
    }

    #[test]
    fn invalid_record_is_a_model_error() {
        let body = r#"{
            "id": "broken",
            "dimensions": [2, 2],
            "collisions": "!!not-base64!!",
            "objects": []
        }"#;
        let err = parse_map_body(body).unwrap_err();
        assert!(matches!(err, ClientError::Model(_)));
    }

    #[test]
    fn valid_body_parses_into_a_model() {
        let body = format!(
            r#"{{"id": "office", "dimensions": [2, 2], "collisions": "{}", "objects": []}}"#,
            grid::blob::encode(&[0, 1, 0, 0])
        );
        let map = parse_map_body(&body).unwrap();
        assert_eq!(map.id(), "office");
        assert!(map.collision().get(1, 0).unwrap());
    }

    #[test]
    fn set_map_payload_wraps_the_wire_record() {
        let mut map = MapModel::new("office", 4, 2);
        map.add_object(MapObject::new("desk", 0, 0, 2, 1)).unwrap();
        map.set_object_collision(0, true).unwrap();

        let payload = set_map_payload("key", "space", &map).unwrap();
        assert_eq!(payload["apiKey"], "key");
        assert_eq!(payload["spaceId"], "space");
        assert_eq!(payload["mapId"], "office");

        let content = &payload["mapContent"];
        assert_eq!(content["dimensions"][0], 4);
        assert_eq!(content["objects"][0]["_name"], "desk");

        let bytes = grid::blob::decode(content["collisions"].as_str().unwrap()).unwrap();
        assert_eq!(bytes, vec![1, 1, 0, 0, 0, 0, 0, 0]);
    }
}
