use std::{future::Future, time::Duration};

use bytes::Bytes;
use http_body_util::{BodyExt, Empty};
use hyper::{
    body::Incoming,
    header::{ACCEPT, CONTENT_TYPE, USER_AGENT},
    Method, Request, Response,
};
use hyper_rustls::{HttpsConnector, HttpsConnectorBuilder};
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client as HyperClient},
    rt::TokioExecutor,
};
use serde_json::Value;
use tokio::time::timeout;

use crate::config::Config;

pub use self::{
    endpoint::{CallPolicy, Endpoint, Query},
    error::ClientError,
};

use self::response::decode_body;

mod endpoint;
mod error;
mod response;

#[cfg(test)]
pub mod mock;

static MY_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

type InnerClient = HyperClient<HttpsConnector<HttpConnector>, Empty<Bytes>>;

/// Access to the remote endpoints the aggregation is built on.
pub trait SteamApi {
    /// Performs a single GET request and decodes its body.
    fn fetch(
        &self,
        endpoint: Endpoint,
        query: Query,
    ) -> impl Future<Output = Result<Value, ClientError>>;
}

pub struct Client {
    client: InnerClient,
    base_url: Box<str>,
    key: Box<str>,
    timeout: Duration,
}

impl Client {
    pub fn new(config: &Config) -> Self {
        let connector = HttpsConnectorBuilder::new()
            .with_webpki_roots()
            .https_or_http()
            .enable_http1()
            .build();

        let client = HyperClient::builder(TokioExecutor::new()).build(connector);

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').into(),
            key: config.key.clone(),
            timeout: config.timeout,
        }
    }

    /// Sends a GET request
    async fn send_get_request(
        &self,
        path: &'static str,
        query: &[(&str, &str)],
    ) -> Result<(Option<String>, Bytes), ClientError> {
        trace!("sending GET request to `{path}`");

        let query = serde_urlencoded::to_string(query).map_err(|source| ClientError::Request {
            path,
            source: source.into(),
        })?;

        let req = Request::builder()
            .uri(format!("{}/{path}?{query}", self.base_url))
            .method(Method::GET)
            .header(USER_AGENT, MY_USER_AGENT)
            .header(ACCEPT, "application/json")
            .body(Empty::new())
            .map_err(|source| ClientError::Request {
                path,
                source: source.into(),
            })?;

        let exchange = async {
            let response = self
                .client
                .request(req)
                .await
                .map_err(|source| ClientError::Transport {
                    path,
                    source: source.into(),
                })?;

            Self::error_for_status(response, path).await
        };

        timeout(self.timeout, exchange)
            .await
            .map_err(|_| ClientError::Timeout {
                path,
                timeout: self.timeout,
            })?
    }

    async fn error_for_status(
        response: Response<Incoming>,
        path: &'static str,
    ) -> Result<(Option<String>, Bytes), ClientError> {
        let status = response.status();

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);

        let body = response
            .into_body()
            .collect()
            .await
            .map_err(|source| ClientError::Transport {
                path,
                source: source.into(),
            })?
            .to_bytes();

        if status.is_client_error() || status.is_server_error() {
            return Err(ClientError::Status { status, path, body });
        }

        Ok((content_type, body))
    }
}

impl SteamApi for Client {
    async fn fetch(&self, endpoint: Endpoint, query: Query) -> Result<Value, ClientError> {
        let path = endpoint.path();

        let params: Vec<(&str, &str)> = [("key", &*self.key)]
            .into_iter()
            .chain(query.iter().map(|(name, value)| (*name, value.as_str())))
            .collect();

        let (content_type, bytes) = self.send_get_request(path, &params).await?;
        debug!("Received {} bytes for {endpoint}", bytes.len());

        decode_body(&bytes, content_type.as_deref(), path)
    }
}
