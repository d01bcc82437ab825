use std::cell::RefCell;

use bytes::Bytes;
use hyper::StatusCode;
use serde_json::Value;

use super::{ClientError, Endpoint, Query, SteamApi};

/// In-memory stand-in for the remote service that records every call.
pub struct MockApi<F> {
    handler: F,
    calls: RefCell<Vec<(Endpoint, Query)>>,
}

impl<F> MockApi<F>
where
    F: Fn(Endpoint, &Query) -> Result<Value, ClientError>,
{
    pub fn new(handler: F) -> Self {
        Self {
            handler,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(Endpoint, Query)> {
        self.calls.borrow().clone()
    }

    /// Values of the `appid` parameter of all achievement calls, in order.
    pub fn achievement_appids(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter(|(endpoint, _)| *endpoint == Endpoint::PlayerAchievements)
            .filter_map(|(_, query)| param(query, "appid"))
            .map(str::to_owned)
            .collect()
    }
}

impl<F> SteamApi for MockApi<F>
where
    F: Fn(Endpoint, &Query) -> Result<Value, ClientError>,
{
    async fn fetch(&self, endpoint: Endpoint, query: Query) -> Result<Value, ClientError> {
        let res = (self.handler)(endpoint, &query);
        self.calls.borrow_mut().push((endpoint, query));

        res
    }
}

pub fn param<'q>(query: &'q Query, name: &str) -> Option<&'q str> {
    query
        .iter()
        .find_map(|(key, value)| (*key == name).then_some(value.as_str()))
}

pub fn status_error(endpoint: Endpoint, status: StatusCode) -> ClientError {
    ClientError::Status {
        status,
        path: endpoint.path(),
        body: Bytes::from_static(br#"<html><head><title>Forbidden</title></head></html>"#),
    }
}

pub fn transport_error(endpoint: Endpoint) -> ClientError {
    ClientError::Transport {
        path: endpoint.path(),
        source: "connection reset by peer".into(),
    }
}
