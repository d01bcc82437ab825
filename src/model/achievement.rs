use serde::{ser::SerializeMap, Serialize, Serializer};
use serde_json::Value;

#[derive(Debug, PartialEq, Serialize)]
pub struct AchievementSummary {
    pub game: Option<Box<str>>,
    pub achievements_unlocked: usize,
    pub achievements_total: usize,
}

impl AchievementSummary {
    /// Summarizes the `playerstats` object of a game.
    ///
    /// Returns `None` if the stats carry no achievement list.
    pub fn from_stats(game: Option<Box<str>>, stats: &Value) -> Option<Self> {
        let achievements = stats.get("achievements")?.as_array()?;

        let achievements_unlocked = achievements
            .iter()
            .filter(|achievement| achievement.get("achieved").is_some_and(is_achieved))
            .count();

        Some(Self {
            game,
            achievements_unlocked,
            achievements_total: achievements.len(),
        })
    }
}

fn is_achieved(flag: &Value) -> bool {
    flag.as_f64() == Some(1.0) || flag.as_bool() == Some(true)
}

/// Achievement summaries keyed by app id, in insertion order.
#[derive(Debug, Default)]
pub struct AchievementSummaries {
    inner: Vec<(u64, AchievementSummary)>,
}

impl AchievementSummaries {
    pub fn push(&mut self, appid: u64, summary: AchievementSummary) {
        self.inner.push((appid, summary));
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl Serialize for AchievementSummaries {
    #[inline]
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        let mut s = s.serialize_map(Some(self.inner.len()))?;

        for (appid, summary) in self.inner.iter() {
            s.serialize_entry(&appid.to_string(), summary)?;
        }

        s.end()
    }
}
