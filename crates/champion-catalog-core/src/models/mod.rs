//! Data models for Data Dragon champion data and match participants.
//!
//! - `ChampionRecord` and its sections: one entry of `champion.json`
//! - `ChampionListResponse`: the full `champion.json` document
//! - `Participant`, `ChampionLabel`: participant records and the champion
//!   fields added by enrichment

pub mod champion;
pub mod participant;

pub use champion::{ChampionImage, ChampionInfo, ChampionListResponse, ChampionRecord, ChampionStats};
pub use participant::{ChampionLabel, Participant};
