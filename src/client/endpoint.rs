use std::fmt::{Display, Formatter, Result as FmtResult};

/// How the aggregation reacts to an HTTP status failure of a call.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CallPolicy {
    /// The failure aborts the whole run.
    Fatal,
    /// The failure degrades to an empty or absent value.
    BestEffort,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    PlayerSummaries,
    FriendList,
    OwnedGames,
    RecentlyPlayedGames,
    SteamLevel,
    PlayerAchievements,
}

#[rustfmt::skip]
impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Self::PlayerSummaries =>     "ISteamUser/GetPlayerSummaries/v0002/",
            Self::FriendList =>          "ISteamUser/GetFriendList/v0001/",
            Self::OwnedGames =>          "IPlayerService/GetOwnedGames/v0001/",
            Self::RecentlyPlayedGames => "IPlayerService/GetRecentlyPlayedGames/v0001/",
            Self::SteamLevel =>          "IPlayerService/GetSteamLevel/v1/",
            Self::PlayerAchievements =>  "ISteamUserStats/GetPlayerAchievements/v1/",
        }
    }

    pub fn policy(self) -> CallPolicy {
        match self {
            Self::PlayerSummaries =>     CallPolicy::Fatal,
            Self::FriendList =>          CallPolicy::BestEffort,
            Self::OwnedGames =>          CallPolicy::Fatal,
            Self::RecentlyPlayedGames => CallPolicy::Fatal,
            Self::SteamLevel =>          CallPolicy::BestEffort,
            Self::PlayerAchievements =>  CallPolicy::BestEffort,
        }
    }
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let name = match self {
            Self::PlayerSummaries => "player summaries",
            Self::FriendList => "friend list",
            Self::OwnedGames => "owned games",
            Self::RecentlyPlayedGames => "recently played games",
            Self::SteamLevel => "steam level",
            Self::PlayerAchievements => "player achievements",
        };

        f.write_str(name)
    }
}

/// Query parameters of a single call, excluding the API key.
pub type Query = Vec<(&'static str, String)>;
