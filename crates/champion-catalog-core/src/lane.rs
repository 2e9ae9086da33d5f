//! Lane detection from champion tags and base stats.
//!
//! Each lane accumulates points from the champion's class tags and a few stat
//! thresholds; the highest score wins. Scores below `MIN_LANE_SCORE` are too
//! weak to call and map to `Lane::Unknown`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::ChampionRecord;

/// Best score required before a lane is reported
const MIN_LANE_SCORE: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Lane {
    Top,
    Jungle,
    Middle,
    Adc,
    Support,
    Unknown,
}

impl Lane {
    /// Scored lanes, in tie-break order (later entries win ties)
    const SCORED: [Lane; 5] = [Lane::Top, Lane::Jungle, Lane::Middle, Lane::Adc, Lane::Support];

    pub fn as_str(&self) -> &'static str {
        match self {
            Lane::Top => "TOP",
            Lane::Jungle => "JUNGLE",
            Lane::Middle => "MIDDLE",
            Lane::Adc => "ADC",
            Lane::Support => "SUPPORT",
            Lane::Unknown => "UNKNOWN",
        }
    }

    fn index(&self) -> Option<usize> {
        Self::SCORED.iter().position(|lane| lane == self)
    }
}

impl fmt::Display for Lane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Default)]
struct LaneScores([u32; 5]);

impl LaneScores {
    fn add(&mut self, lane: Lane, points: u32) {
        if let Some(i) = lane.index() {
            self.0[i] += points;
        }
    }

    fn best(&self) -> (Lane, u32) {
        let mut best = (Lane::Top, self.0[0]);
        for (lane, &score) in Lane::SCORED.iter().zip(self.0.iter()).skip(1) {
            if score >= best.1 {
                best = (*lane, score);
            }
        }
        best
    }
}

/// Most likely lane for a champion
pub fn detect_lane(champion: &ChampionRecord) -> Lane {
    let mut scores = LaneScores::default();

    if champion.has_tag("Marksman") {
        scores.add(Lane::Adc, 80);
        scores.add(Lane::Middle, 20);
    }
    if champion.has_tag("Support") {
        scores.add(Lane::Support, 80);
        scores.add(Lane::Adc, 10);
    }
    if champion.has_tag("Mage") {
        scores.add(Lane::Middle, 70);
        scores.add(Lane::Support, 30);
        if !champion.has_tag("Support") {
            scores.add(Lane::Adc, 10);
        }
    }
    if champion.has_tag("Fighter") {
        scores.add(Lane::Top, 70);
        scores.add(Lane::Jungle, 30);
    }
    if champion.has_tag("Tank") {
        scores.add(Lane::Top, 70);
        scores.add(Lane::Support, 30);
    }
    if champion.has_tag("Assassin") {
        scores.add(Lane::Jungle, 60);
        scores.add(Lane::Middle, 50);
        scores.add(Lane::Top, 20);
    }

    let stats = &champion.stats;
    if stats.attackrange > 500.0 {
        scores.add(Lane::Adc, 20);
    }
    if stats.attackdamage > 60.0 {
        scores.add(Lane::Adc, 15);
    }
    if stats.hp > 600.0 {
        scores.add(Lane::Top, 15);
    }
    if stats.movespeed > 340.0 {
        scores.add(Lane::Jungle, 10);
    }

    let (lane, score) = scores.best();
    if score < MIN_LANE_SCORE {
        Lane::Unknown
    } else {
        lane
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ChampionStats;

    fn champion(tags: &[&str], stats: ChampionStats) -> ChampionRecord {
        ChampionRecord {
            id: "Test".to_string(),
            key: "1".to_string(),
            name: "Test".to_string(),
            title: String::new(),
            blurb: String::new(),
            info: Default::default(),
            image: Default::default(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            partype: String::new(),
            stats,
        }
    }

    #[test]
    fn test_marksman_goes_bot() {
        let jinx = champion(
            &["Marksman"],
            ChampionStats {
                attackrange: 525.0,
                attackdamage: 59.0,
                ..Default::default()
            },
        );
        assert_eq!(detect_lane(&jinx), Lane::Adc);
    }

    #[test]
    fn test_tank_fighter_goes_top() {
        let malphite = champion(&["Tank", "Fighter"], ChampionStats::default());
        assert_eq!(detect_lane(&malphite), Lane::Top);
    }

    #[test]
    fn test_mage_assassin_goes_mid() {
        let ahri = champion(&["Mage", "Assassin"], ChampionStats::default());
        assert_eq!(detect_lane(&ahri), Lane::Middle);
    }

    #[test]
    fn test_support_mage_goes_support() {
        let lulu = champion(&["Support", "Mage"], ChampionStats::default());
        assert_eq!(detect_lane(&lulu), Lane::Support);
    }

    #[test]
    fn test_tie_prefers_later_lane() {
        // Mage + Tank: MIDDLE 70, TOP 70, SUPPORT 60
        let tied = champion(&["Tank", "Mage"], ChampionStats::default());
        assert_eq!(detect_lane(&tied), Lane::Middle);
    }

    #[test]
    fn test_weak_signal_is_unknown() {
        let fast = champion(
            &[],
            ChampionStats {
                movespeed: 345.0,
                ..Default::default()
            },
        );
        assert_eq!(detect_lane(&fast), Lane::Unknown);
        assert_eq!(detect_lane(&champion(&[], ChampionStats::default())), Lane::Unknown);
    }

    #[test]
    fn test_lane_display_and_serde() {
        assert_eq!(Lane::Adc.to_string(), "ADC");
        assert_eq!(
            serde_json::to_string(&Lane::Middle).expect("serialize lane"),
            "\"MIDDLE\""
        );
        assert_eq!(
            serde_json::from_str::<Lane>("\"UNKNOWN\"").expect("deserialize lane"),
            Lane::Unknown
        );
    }
}
