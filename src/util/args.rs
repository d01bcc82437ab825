use std::path::PathBuf;

use clap::Parser;

use crate::context::DumpRequest;

pub const DEFAULT_ACHIEVEMENTS_LIMIT: usize = 5;

pub struct Args {
    pub key: Option<Box<str>>,
    pub out: Option<PathBuf>,
    pub quiet: bool,
    pub request: DumpRequest,
}

impl Args {
    pub fn parse() -> Self {
        Self::from(ArgsCli::parse())
    }
}

impl From<ArgsCli> for Args {
    fn from(args: ArgsCli) -> Self {
        let ArgsCli {
            key,
            steam_id,
            out,
            achievements,
            achievements_limit,
            quiet,
        } = args;

        let request = DumpRequest {
            steam_id: steam_id.into_boxed_str(),
            achievements_limit: achievements.then_some(achievements_limit),
        };

        Self {
            key: key.map(String::into_boxed_str),
            out,
            quiet,
            request,
        }
    }
}

#[derive(Parser)]
#[clap(author, about = DESCRIPTION)]
struct ArgsCli {
    #[clap(long, value_name = "KEY")]
    /// Steam Web API key (or set STEAM_API_KEY)
    key: Option<String>,
    #[clap(long, value_name = "STEAMID64")]
    /// SteamID64 to query
    steam_id: String,
    #[clap(long, value_name = "PATH")]
    /// Write the JSON output to this file instead of stdout
    out: Option<PathBuf>,
    #[clap(long, action)]
    /// Include an achievements summary (slower)
    achievements: bool,
    #[clap(long, default_value_t = DEFAULT_ACHIEVEMENTS_LIMIT, value_name = "GAMES")]
    /// How many games to summarize achievements for
    achievements_limit: usize,
    #[clap(short, long, action)]
    /// Only log errors
    quiet: bool,
}

static DESCRIPTION: &str = r#"
Dump the public data of a Steam account as a single JSON document.

Requested data:
  - profile: player summary
  - friends: friend count and the first 50 friend ids
  - games: owned games with playtime, and recently played games
  - level: steam level
  - achievements: unlocked/total counts for the first few games
      that provide stats (only with --achievements)"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        let args = ["steam-dump"].iter().chain(args);

        ArgsCli::try_parse_from(args).map(Args::from).unwrap()
    }

    #[test]
    fn defaults() {
        let args = parse(&["--steam-id", "76561197960287930"]);

        assert!(args.key.is_none());
        assert!(args.out.is_none());
        assert!(!args.quiet);
        assert_eq!(&*args.request.steam_id, "76561197960287930");
        assert_eq!(args.request.achievements_limit, None);
    }

    #[test]
    fn achievements_use_default_limit() {
        let args = parse(&["--steam-id", "1", "--achievements"]);

        assert_eq!(
            args.request.achievements_limit,
            Some(DEFAULT_ACHIEVEMENTS_LIMIT)
        );
    }

    #[test]
    fn limit_without_flag_is_ignored() {
        let args = parse(&["--steam-id", "1", "--achievements-limit", "2"]);

        assert_eq!(args.request.achievements_limit, None);
    }

    #[test]
    fn all_options() {
        let args = parse(&[
            "--key",
            "ABC",
            "--steam-id",
            "1",
            "--out",
            "dump.json",
            "--achievements",
            "--achievements-limit",
            "2",
            "-q",
        ]);

        assert_eq!(args.key.as_deref(), Some("ABC"));
        assert_eq!(args.out, Some(PathBuf::from("dump.json")));
        assert_eq!(args.request.achievements_limit, Some(2));
        assert!(args.quiet);
    }

    #[test]
    fn zero_limit_is_accepted() {
        let args = parse(&["--steam-id", "1", "--achievements", "--achievements-limit", "0"]);

        assert_eq!(args.request.achievements_limit, Some(0));
    }

    #[test]
    fn negative_limit_is_a_usage_error() {
        let err = ArgsCli::try_parse_from([
            "steam-dump",
            "--steam-id",
            "1",
            "--achievements",
            "--achievements-limit",
            "-1",
        ])
        .err()
        .unwrap();

        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn steam_id_is_required() {
        assert!(ArgsCli::try_parse_from(["steam-dump"]).is_err());
    }
}
