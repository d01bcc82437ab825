pub use self::{
    achievement::{AchievementSummaries, AchievementSummary},
    friends::FriendList,
    game::{GameEntry, OwnedGames, RecentlyPlayed},
    output::{OutputRecord, Totals},
};

mod achievement;
mod friends;
mod game;
mod output;
