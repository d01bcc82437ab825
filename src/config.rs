use std::{env, path::PathBuf, time::Duration};

use eyre::Result;
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://api.steampowered.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

pub struct Config {
    pub key: Box<str>,
    pub base_url: Box<str>,
    pub timeout: Duration,
}

/// Neither the arguments nor the environment provide an API key.
#[derive(Debug, Error)]
#[error("missing API key; use `--key` or set `STEAM_API_KEY`")]
pub struct MissingKey;

impl Config {
    /// Resolves the credential and remaining settings from the process environment.
    ///
    /// An explicitly passed key takes precedence over `STEAM_API_KEY`.
    pub fn init(key: Option<&str>) -> Result<Self> {
        Self::resolve(key, |name| env::var(name).ok())
    }

    fn resolve<F>(key: Option<&str>, lookup: F) -> Result<Self>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let key = key
            .map(str::to_owned)
            .or_else(|| lookup("STEAM_API_KEY"))
            .filter(|key| !key.trim().is_empty());

        let Some(key) = key else {
            return Err(MissingKey.into());
        };

        let base_url = env_var_or(&lookup, "STEAM_API_BASE", || DEFAULT_BASE_URL.into())?;
        let timeout_secs = env_var_or(&lookup, "STEAM_API_TIMEOUT", || DEFAULT_TIMEOUT_SECS)?;

        Ok(Self {
            key: key.into_boxed_str(),
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// Directory for log files, if file logging is enabled.
pub fn log_dir() -> Option<PathBuf> {
    env::var_os("LOG_DIR")
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
}

trait EnvKind: Sized {
    const EXPECTED: &'static str;

    fn from_str(s: String) -> Result<Self, String>;
}

macro_rules! env_kind {
    ($($ty:ty: $arg:ident => $impl:block,)*) => {
        $(
            impl EnvKind for $ty {
                const EXPECTED: &'static str = stringify!($ty);

                fn from_str($arg: String) -> Result<Self, String> {
                    $impl
                }
            }
        )*
    };
}

env_kind! {
    Box<str>: s => { Ok(s.into_boxed_str()) },
    u64: s => { s.trim().parse().map_err(|_| s) },
}

fn env_var_or<T, F, D>(lookup: &F, name: &'static str, default: D) -> Result<T>
where
    T: EnvKind,
    F: Fn(&'static str) -> Option<String>,
    D: FnOnce() -> T,
{
    let Some(value) = lookup(name) else {
        return Ok(default());
    };

    T::from_str(value).map_err(|value| {
        eyre!(
            "failed to parse env variable `{name}={value}`; expected {expected}",
            expected = T::EXPECTED
        )
    })
}
