use serde::Serialize;
use serde_json::Value;

/// Compact version of an owned game.
///
/// Values are kept as the service sent them; missing fields are `null`.
#[derive(Debug, PartialEq, Serialize)]
pub struct GameEntry {
    pub appid: Value,
    pub name: Value,
    pub playtime_forever_min: Value,
    pub playtime_2weeks_min: Value,
}

impl GameEntry {
    pub fn from_value(game: &Value) -> Self {
        let field = |name| game.get(name).cloned().unwrap_or(Value::Null);

        Self {
            appid: field("appid"),
            name: field("name"),
            playtime_forever_min: field("playtime_forever"),
            playtime_2weeks_min: field("playtime_2weeks"),
        }
    }

    /// The app id if the service provided it as a JSON integer.
    pub fn appid(&self) -> Option<u64> {
        self.appid.as_u64()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_str()
    }

    /// Total playtime in minutes, zero if missing or not numeric.
    pub fn playtime_forever(&self) -> u64 {
        lenient_u64(&self.playtime_forever_min).unwrap_or(0)
    }
}

/// Response of the owned games endpoint.
pub struct OwnedGames {
    /// Count as reported by the service.
    pub count: u64,
    pub games: Vec<GameEntry>,
}

impl OwnedGames {
    pub fn from_response(value: &Value) -> Self {
        let response = value.get("response");

        let count = response
            .and_then(|response| response.get("game_count"))
            .and_then(Value::as_u64)
            .unwrap_or(0);

        let games = response
            .and_then(|response| response.get("games"))
            .and_then(Value::as_array)
            .map(|games| games.iter().map(GameEntry::from_value).collect())
            .unwrap_or_default();

        Self { count, games }
    }
}

/// Response of the recently played games endpoint, entries are kept as-is.
pub struct RecentlyPlayed {
    pub count: u64,
    pub games: Vec<Value>,
}

impl RecentlyPlayed {
    pub fn from_response(mut value: Value) -> Self {
        let response = value.get_mut("response");

        let count = response
            .as_deref()
            .and_then(|response| response.get("total_count"))
            .and_then(Value::as_u64)
            .unwrap_or(0);

        let games = match response.and_then(|response| response.get_mut("games")) {
            Some(Value::Array(games)) => std::mem::take(games),
            _ => Vec::new(),
        };

        Self { count, games }
    }
}

/// Accepts integers, floats, and numeric strings.
fn lenient_u64(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0)
                .map(|f| f.trunc() as u64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
