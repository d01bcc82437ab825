use std::{error::Error as StdError, time::Duration};

use bytes::Bytes;
use hyper::StatusCode;
use thiserror::Error;

/// Amount of characters of a failing response body that are surfaced.
pub const BODY_EXCERPT_LEN: usize = 300;

type BoxError = Box<dyn StdError + Send + Sync>;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("failed with status code {status} when requesting `{path}`")]
    Status {
        status: StatusCode,
        path: &'static str,
        body: Bytes,
    },
    #[error("request to `{path}` timed out after {}s", .timeout.as_secs())]
    Timeout {
        path: &'static str,
        timeout: Duration,
    },
    #[error("failed to receive response from `{path}`")]
    Transport {
        path: &'static str,
        #[source]
        source: BoxError,
    },
    #[error("failed to deserialize JSON response from `{path}`")]
    Decode {
        path: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to build request for `{path}`")]
    Request {
        path: &'static str,
        #[source]
        source: BoxError,
    },
}

impl ClientError {
    /// Whether the server answered with a non-success status code.
    ///
    /// Only this kind of failure may be suppressed by best-effort calls.
    pub fn is_status(&self) -> bool {
        matches!(self, Self::Status { .. })
    }

    /// Leading part of the response body, if the server sent one.
    pub fn body_excerpt(&self) -> Option<String> {
        let Self::Status { body, .. } = self else {
            return None;
        };

        if body.is_empty() {
            return None;
        }

        let excerpt = String::from_utf8_lossy(body)
            .chars()
            .take(BODY_EXCERPT_LEN)
            .collect();

        Some(excerpt)
    }
}
