use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::api::LoadError;

/// The `champion.json` document published per Data Dragon version and locale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChampionListResponse {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub format: String,
    #[serde(default)]
    pub version: String,
    /// Records keyed by internal key (e.g. "MonkeyKing")
    pub data: HashMap<String, ChampionRecord>,
}

impl ChampionListResponse {
    pub fn from_json(body: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(body)?)
    }
}

/// Static metadata for one champion.
///
/// Data Dragon names the fields confusingly: `id` is the internal string key
/// and `key` is the numeric id rendered as a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChampionRecord {
    pub id: String,
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub blurb: String,
    #[serde(default)]
    pub info: ChampionInfo,
    #[serde(default)]
    pub image: ChampionImage,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub partype: String,
    #[serde(default)]
    pub stats: ChampionStats,
}

impl ChampionRecord {
    /// Numeric champion id parsed from the string `key` field
    pub fn numeric_id(&self) -> Result<i64, LoadError> {
        self.key
            .trim()
            .parse()
            .map_err(|_| LoadError::InvalidChampionKey {
                champion: self.id.clone(),
                key: self.key.clone(),
            })
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Difficulty and attack/defense/magic ratings on a 0-10 scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChampionInfo {
    pub attack: u8,
    pub defense: u8,
    pub magic: u8,
    pub difficulty: u8,
}

/// Location of the champion portrait, and its cell within a sprite sheet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChampionImage {
    pub full: String,
    pub sprite: String,
    pub group: String,
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChampionStats {
    pub hp: f64,
    pub hpperlevel: f64,
    pub mp: f64,
    pub mpperlevel: f64,
    pub movespeed: f64,
    pub armor: f64,
    pub armorperlevel: f64,
    pub spellblock: f64,
    pub spellblockperlevel: f64,
    pub attackrange: f64,
    pub hpregen: f64,
    pub hpregenperlevel: f64,
    pub mpregen: f64,
    pub mpregenperlevel: f64,
    pub crit: f64,
    pub critperlevel: f64,
    pub attackdamage: f64,
    pub attackdamageperlevel: f64,
    pub attackspeedperlevel: f64,
    pub attackspeed: f64,
}

impl ChampionStats {
    /// Base health plus growth, for a champion level starting at 1
    pub fn hp_at_level(&self, level: u32) -> f64 {
        self.hp + self.hpperlevel * f64::from(level.saturating_sub(1))
    }

    /// Base armor plus growth, for a champion level starting at 1
    pub fn armor_at_level(&self, level: u32) -> f64 {
        self.armor + self.armorperlevel * f64::from(level.saturating_sub(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AHRI_JSON: &str = r#"{
        "type": "champion",
        "format": "standAloneComplex",
        "version": "15.13.1",
        "data": {
            "Ahri": {
                "version": "15.13.1",
                "id": "Ahri",
                "key": "103",
                "name": "Ahri",
                "title": "the Nine-Tailed Fox",
                "blurb": "Innately connected to the magic of the spirit realm...",
                "info": {"attack": 3, "defense": 4, "magic": 8, "difficulty": 5},
                "image": {"full": "Ahri.png", "sprite": "champion0.png", "group": "champion", "x": 48, "y": 0, "w": 48, "h": 48},
                "tags": ["Mage", "Assassin"],
                "partype": "Mana",
                "stats": {"hp": 590, "hpperlevel": 104, "mp": 418, "mpperlevel": 25, "movespeed": 330, "armor": 21, "armorperlevel": 4.2, "spellblock": 30, "spellblockperlevel": 1.3, "attackrange": 550, "hpregen": 2.5, "hpregenperlevel": 0.6, "mpregen": 8, "mpregenperlevel": 0.8, "crit": 0, "critperlevel": 0, "attackdamage": 53, "attackdamageperlevel": 3, "attackspeedperlevel": 2.2, "attackspeed": 0.668}
            }
        }
    }"#;

    #[test]
    fn test_parse_full_record() {
        let response = ChampionListResponse::from_json(AHRI_JSON).expect("Failed to parse champion JSON");
        assert_eq!(response.kind, "champion");
        assert_eq!(response.version, "15.13.1");

        let ahri = &response.data["Ahri"];
        assert_eq!(ahri.numeric_id().expect("numeric key"), 103);
        assert_eq!(ahri.title, "the Nine-Tailed Fox");
        assert_eq!(ahri.info.magic, 8);
        assert_eq!(ahri.image.sprite, "champion0.png");
        assert_eq!(ahri.image.x, 48);
        assert!(ahri.has_tag("Assassin"));
        assert!(!ahri.has_tag("Tank"));
        assert_eq!(ahri.stats.attackrange, 550.0);
    }

    #[test]
    fn test_minimal_record_uses_defaults() {
        let json = r#"{"data": {"Zed": {"id": "Zed", "key": "238", "name": "Zed"}}}"#;
        let response = ChampionListResponse::from_json(json).expect("Failed to parse minimal JSON");
        let zed = &response.data["Zed"];
        assert!(zed.tags.is_empty());
        assert_eq!(zed.stats, ChampionStats::default());
        assert_eq!(zed.info.difficulty, 0);
    }

    #[test]
    fn test_missing_data_is_an_error() {
        let err = ChampionListResponse::from_json(r#"{"type": "champion"}"#).unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn test_non_numeric_key() {
        let json = r#"{"data": {"Ahri": {"id": "Ahri", "key": "abc", "name": "Ahri"}}}"#;
        let response = ChampionListResponse::from_json(json).expect("Failed to parse JSON");
        let err = response.data["Ahri"].numeric_id().unwrap_err();
        assert!(matches!(err, LoadError::InvalidChampionKey { ref key, .. } if key == "abc"));
    }

    #[test]
    fn test_stats_at_level() {
        let stats = ChampionStats {
            hp: 600.0,
            hpperlevel: 100.0,
            armor: 30.0,
            armorperlevel: 4.5,
            ..Default::default()
        };
        assert_eq!(stats.hp_at_level(1), 600.0);
        assert_eq!(stats.hp_at_level(18), 2300.0);
        assert_eq!(stats.armor_at_level(3), 39.0);
        assert_eq!(stats.hp_at_level(0), 600.0);
    }
}
