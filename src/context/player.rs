use serde_json::{Map, Value};

use crate::{
    client::{ClientError, Endpoint, SteamApi},
    model::FriendList,
};

use super::Context;

impl<A: SteamApi> Context<A> {
    /// Request the player summary; an empty object if the user is unknown.
    pub async fn request_profile(&self, steam_id: &str) -> Result<Value, ClientError> {
        let query = vec![("steamids", steam_id.to_owned())];

        let mut value = self
            .call(Endpoint::PlayerSummaries, query)
            .await?
            .unwrap_or_default();

        let profile = value
            .pointer_mut("/response/players/0")
            .map(Value::take)
            .unwrap_or_else(|| Value::Object(Map::new()));

        Ok(profile)
    }

    /// Request the friend list. Private profiles yield an empty list.
    pub async fn request_friends(&self, steam_id: &str) -> Result<FriendList, ClientError> {
        let query = vec![
            ("steamid", steam_id.to_owned()),
            ("relationship", "friend".to_owned()),
        ];

        let friends = self
            .call(Endpoint::FriendList, query)
            .await?
            .map(|value| FriendList::from_response(&value))
            .unwrap_or_default();

        Ok(friends)
    }

    pub async fn request_level(&self, steam_id: &str) -> Result<Option<u64>, ClientError> {
        let query = vec![("steamid", steam_id.to_owned())];

        let level = self
            .call(Endpoint::SteamLevel, query)
            .await?
            .and_then(|value| value.pointer("/response/player_level").and_then(Value::as_u64));

        Ok(level)
    }
}
