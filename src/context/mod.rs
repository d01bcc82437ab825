use eyre::{Context as _, Result};
use serde_json::Value;

use crate::{
    client::{CallPolicy, Client, ClientError, Endpoint, Query, SteamApi},
    model::{OutputRecord, Totals},
};

mod games;
mod player;


/// What to request for a single run.
pub struct DumpRequest {
    pub steam_id: Box<str>,
    /// Maximum amount of achievement summaries; `None` skips achievements.
    pub achievements_limit: Option<usize>,
}

pub struct Context<A = Client> {
    api: A,
}

impl<A: SteamApi> Context<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Requests all data of a user and assembles the output record.
    ///
    /// Calls are issued one after the other. The first failure of a fatal
    /// call aborts the whole dump.
    pub async fn dump(&self, request: &DumpRequest) -> Result<OutputRecord> {
        let steam_id = &*request.steam_id;
        info!("Requesting data for steam id {steam_id}...");

        let profile = self
            .request_profile(steam_id)
            .await
            .context("failed to request profile")?;

        let friends = self
            .request_friends(steam_id)
            .await
            .context("failed to request friend list")?;

        info!("Friends: {}", friends.count);

        let owned = self
            .request_owned_games(steam_id)
            .await
            .context("failed to request owned games")?;

        info!("Owned games: {}", owned.count);

        let recent = self
            .request_recently_played(steam_id)
            .await
            .context("failed to request recently played games")?;

        let steam_level = self
            .request_level(steam_id)
            .await
            .context("failed to request steam level")?;

        let achievements_summary = match request.achievements_limit {
            Some(limit) => {
                let summaries = self
                    .gather_achievements(steam_id, &owned.games, limit)
                    .await
                    .context("failed to gather achievements")?;

                if summaries.is_empty() {
                    warn!("None of the owned games provided achievement data");
                } else {
                    info!("Summarized achievements of {} game(s)", summaries.len());
                }

                Some(summaries)
            }
            None => None,
        };

        let totals = Totals::from_games(&owned.games);

        Ok(OutputRecord {
            steam_id: request.steam_id.clone(),
            profile,
            friends_count: friends.count,
            friends_preview: friends.preview,
            owned_games_count: owned.count,
            owned_games: owned.games,
            recently_played_count: recent.count,
            recently_played: recent.games,
            steam_level,
            achievements_summary,
            totals,
        })
    }

    /// Performs a call and applies the endpoint's failure policy.
    ///
    /// Status failures of best-effort endpoints turn into `Ok(None)`.
    /// Everything else is passed on.
    async fn call(&self, endpoint: Endpoint, query: Query) -> Result<Option<Value>, ClientError> {
        match self.api.fetch(endpoint, query).await {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.is_status() && endpoint.policy() == CallPolicy::BestEffort => {
                warn!("Ignoring failed {endpoint} request: {err}");

                Ok(None)
            }
            Err(err) => Err(err),
        }
    }
}
