use crate::{
    client::{ClientError, Endpoint, SteamApi},
    model::{AchievementSummaries, AchievementSummary, GameEntry, OwnedGames, RecentlyPlayed},
};

use super::Context;

/// Amount of recently played games requested from the service.
const RECENTLY_PLAYED_COUNT: u32 = 20;

impl<A: SteamApi> Context<A> {
    pub async fn request_owned_games(&self, steam_id: &str) -> Result<OwnedGames, ClientError> {
        let query = vec![
            ("steamid", steam_id.to_owned()),
            ("include_appinfo", "1".to_owned()),
            ("include_played_free_games", "1".to_owned()),
            ("format", "json".to_owned()),
        ];

        let value = self
            .call(Endpoint::OwnedGames, query)
            .await?
            .unwrap_or_default();

        Ok(OwnedGames::from_response(&value))
    }

    pub async fn request_recently_played(
        &self,
        steam_id: &str,
    ) -> Result<RecentlyPlayed, ClientError> {
        let query = vec![
            ("steamid", steam_id.to_owned()),
            ("count", RECENTLY_PLAYED_COUNT.to_string()),
        ];

        let value = self
            .call(Endpoint::RecentlyPlayedGames, query)
            .await?
            .unwrap_or_default();

        Ok(RecentlyPlayed::from_response(value))
    }

    /// Summarize achievements of owned games in their given order.
    ///
    /// Games without a valid app id are skipped without a request. Games
    /// whose request fails or whose stats carry no achievements are skipped
    /// as well and do not count towards `limit`, so more than `limit`
    /// requests may be sent.
    pub async fn gather_achievements(
        &self,
        steam_id: &str,
        games: &[GameEntry],
        limit: usize,
    ) -> Result<AchievementSummaries, ClientError> {
        let mut summaries = AchievementSummaries::default();
        let mut count = 0;

        for game in games {
            let Some(appid) = game.appid() else {
                debug!("Skipping owned game with app id {}", game.appid);

                continue;
            };

            let query = vec![
                ("steamid", steam_id.to_owned()),
                ("appid", appid.to_string()),
            ];

            let summary = self
                .call(Endpoint::PlayerAchievements, query)
                .await?
                .and_then(|value| {
                    let stats = value.get("playerstats")?;

                    AchievementSummary::from_stats(game.name().map(Box::from), stats)
                });

            match summary {
                Some(summary) => {
                    summaries.push(appid, summary);
                    count += 1;
                }
                None => debug!("No achievement data for app {appid}"),
            }

            if count >= limit {
                break;
            }
        }

        Ok(summaries)
    }
}
