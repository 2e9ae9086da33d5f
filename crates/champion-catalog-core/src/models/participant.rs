use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::lane::Lane;

const CHAMPION_NAME_FIELD: &str = "championName";
const CHAMPION_IMAGE_URL_FIELD: &str = "championImageUrl";
const DETECTED_LANE_FIELD: &str = "detectedLane";

/// A match participant as reported by the game client.
///
/// Only `championId` is interpreted; every other field is kept in `extra`
/// exactly as received, so participants serialize back to their incoming
/// shape. Enrichment writes its fields into `extra` as well.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    #[serde(rename = "championId")]
    pub champion_id: i64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Participant {
    pub fn new(champion_id: i64) -> Self {
        Self {
            champion_id,
            extra: Map::new(),
        }
    }

    /// Write the enrichment fields, replacing any values already present
    pub fn apply_label(&mut self, label: &ChampionLabel) {
        self.extra.insert(
            CHAMPION_NAME_FIELD.to_string(),
            Value::String(label.display_name.clone()),
        );
        self.extra.insert(
            CHAMPION_IMAGE_URL_FIELD.to_string(),
            label.image_url.clone().map(Value::String).unwrap_or(Value::Null),
        );
        self.extra.insert(
            DETECTED_LANE_FIELD.to_string(),
            Value::String(label.detected_lane.to_string()),
        );
    }

    pub fn champion_name(&self) -> Option<&str> {
        self.extra.get(CHAMPION_NAME_FIELD).and_then(Value::as_str)
    }

    pub fn champion_image_url(&self) -> Option<&str> {
        self.extra.get(CHAMPION_IMAGE_URL_FIELD).and_then(Value::as_str)
    }

    pub fn detected_lane(&self) -> Option<Lane> {
        self.extra
            .get(DETECTED_LANE_FIELD)
            .and_then(|v| Lane::deserialize(v).ok())
    }
}

/// Champion fields derived for a participant during enrichment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChampionLabel {
    /// Display name, or "Champion{id}" when the id is unknown
    #[serde(rename = "championName")]
    pub display_name: String,
    /// `null` when the id is unknown
    #[serde(rename = "championImageUrl")]
    pub image_url: Option<String>,
    #[serde(rename = "detectedLane")]
    pub detected_lane: Lane,
}
