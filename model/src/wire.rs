//! Wire records exchanged with the remote map service.
//!
//! These are plain serde mirrors of the service's JSON schema. Fields the
//! model never interprets are carried as opaque [`Value`]s so the client
//! round-trips schema additions it does not understand. Unknown fields on
//! input are ignored rather than rejected.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::object::SoundProperties;

/// Top-level map record.
///
/// `floors` and `walls` are omitted by some server versions and default
/// to empty mappings; `id`, `dimensions` and `collisions` are structural
/// and required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapRecord {
    pub id: String,
    /// `[width, height]`, fixed at load time.
    pub dimensions: [u32; 2],
    /// Base64-encoded collision bytes, one byte per tile.
    pub collisions: String,
    #[serde(default)]
    pub objects: Vec<ObjectRecord>,
    #[serde(default)]
    pub floors: Map<String, Value>,
    #[serde(default)]
    pub walls: Map<String, Value>,
    #[serde(default)]
    pub background_image_path: Value,
    #[serde(default)]
    pub assets: Value,
    #[serde(default)]
    pub announcer: Value,
    #[serde(rename = "useDrawnBG", default)]
    pub use_drawn_bg: Value,
    #[serde(default)]
    pub spaces: Value,
    #[serde(default)]
    pub portals: Value,
    #[serde(default)]
    pub spawns: Value,
}

/// A single placed-object record.
///
/// Position and footprint are required; everything else defaults when the
/// server leaves it out. The nameless-object fallback matches what the
/// service itself reports for unnamed objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectRecord {
    #[serde(rename = "_name", default = "unnamed")]
    pub name: String,
    #[serde(default = "unit_scale")]
    pub scale: f64,
    pub x: i64,
    pub y: i64,
    pub height: u32,
    pub width: u32,
    #[serde(default)]
    pub normal: String,
    #[serde(default)]
    pub highlighted: String,
    #[serde(rename = "type", default)]
    pub kind: i64,
    #[serde(default)]
    pub properties: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sound: Option<SoundProperties>,
}

fn unnamed() -> String {
    "no_name_included".to_string()
}

const fn unit_scale() -> f64 {
    1.0
}
