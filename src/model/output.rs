use serde::Serialize;
use serde_json::Value;

use super::{AchievementSummaries, GameEntry};

/// The document written at the end of a run.
#[derive(Debug, Serialize)]
pub struct OutputRecord {
    pub steam_id: Box<str>,
    pub profile: Value,
    pub friends_count: usize,
    pub friends_preview: Vec<Option<Box<str>>>,
    pub owned_games_count: u64,
    pub owned_games: Vec<GameEntry>,
    pub recently_played_count: u64,
    pub recently_played: Vec<Value>,
    pub steam_level: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub achievements_summary: Option<AchievementSummaries>,
    pub totals: Totals,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct Totals {
    pub playtime_minutes: u64,
    /// Rounded to one decimal place.
    pub playtime_hours: f64,
}

impl Totals {
    pub fn from_games(games: &[GameEntry]) -> Self {
        let playtime_minutes: u64 = games
            .iter()
            .map(GameEntry::playtime_forever)
            .sum();

        let playtime_hours = round_to_tenth(playtime_minutes as f64 / 60.0);

        Self {
            playtime_minutes,
            playtime_hours,
        }
    }
}

/// Rounds the exact binary value to one decimal, ties to even.
///
/// Float formatting rounds correctly so `0.05` (slightly above its decimal
/// value) becomes `0.1` while the exact tie `0.25` becomes `0.2`.
fn round_to_tenth(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn game(playtime: Value) -> GameEntry {
        GameEntry::from_value(&json!({ "appid": 1, "playtime_forever": playtime }))
    }

    #[test]
    fn totals() {
        let games = [game(json!(120)), game(json!(0)), game(json!(45))];
        let totals = Totals::from_games(&games);

        assert_eq!(
            totals,
            Totals {
                playtime_minutes: 165,
                playtime_hours: 2.8
            }
        );
    }

    #[test]
    fn missing_playtime_counts_as_zero() {
        let games = [game(Value::Null), game(json!(90)), game(json!("soon"))];
        let totals = Totals::from_games(&games);

        assert_eq!(totals.playtime_minutes, 90);
        assert_eq!(totals.playtime_hours, 1.5);
    }

    #[test]
    fn numeric_strings_count() {
        let games = [game(json!("30")), game(json!(30))];

        assert_eq!(Totals::from_games(&games).playtime_minutes, 60);
    }

    #[test]
    fn hours_round_half_to_even() {
        let hours = |minutes: u64| Totals::from_games(&[game(json!(minutes))]).playtime_hours;

        assert_eq!(hours(15), 0.2);
        assert_eq!(hours(75), 1.2);
        assert_eq!(hours(135), 2.2);
        assert_eq!(hours(45), 0.8);
        assert_eq!(hours(165), 2.8);
        assert_eq!(hours(3), 0.1);
        assert_eq!(hours(0), 0.0);
    }

    #[test]
    fn no_games() {
        let totals = Totals::from_games(&[]);

        assert_eq!(totals.playtime_minutes, 0);
        assert_eq!(totals.playtime_hours, 0.0);
    }

    #[test]
    fn field_order() {
        let record = OutputRecord {
            steam_id: "1".into(),
            profile: json!({}),
            friends_count: 0,
            friends_preview: Vec::new(),
            owned_games_count: 0,
            owned_games: Vec::new(),
            recently_played_count: 0,
            recently_played: Vec::new(),
            steam_level: None,
            achievements_summary: None,
            totals: Totals::from_games(&[]),
        };

        let serialized = serde_json::to_string(&record).unwrap();

        assert_eq!(
            serialized,
            r#"{"steam_id":"1","profile":{},"friends_count":0,"friends_preview":[],"owned_games_count":0,"owned_games":[],"recently_played_count":0,"recently_played":[],"steam_level":null,"totals":{"playtime_minutes":0,"playtime_hours":0.0}}"#
        );
    }
}
