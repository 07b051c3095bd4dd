use std::{future::Future, time::Duration};

use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("service returned error {code}: {message}")]
    Service { code: String, message: String },
}

/// A GET request against one of the public REST services.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub url: String,

    pub query: Vec<(&'static str, String)>,

    pub headers: Vec<(&'static str, String)>,
}

impl Request {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            query: Vec::new(),
            headers: Vec::new(),
        }
    }

    pub fn query(mut self, name: &'static str, value: impl ToString) -> Self {
        self.query.push((name, value.to_string()));
        self
    }

    pub fn header(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.headers.push((name, value.into()));
        self
    }

    pub fn query_value(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// The opaque request/response function every client talks through.
///
/// Dropping the returned future abandons the request.
pub trait Transport {
    fn get(&self, request: Request) -> impl Future<Output = Result<Vec<u8>, TransportError>>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, request: Request) -> impl Future<Output = Result<Vec<u8>, TransportError>> {
        (**self).get(request)
    }
}

#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    async fn get(&self, request: Request) -> Result<Vec<u8>, TransportError> {
        tracing::debug!(url = %request.url, query = ?request.query, "sending request");

        let mut builder = self.client.get(&request.url).query(&request.query);
        for (name, value) in &request.headers {
            builder = builder.header(*name, value);
        }

        let response = builder.send().await?.error_for_status()?;
        let body = response.bytes().await?;

        tracing::debug!(url = %request.url, bytes = body.len(), "received response");

        Ok(body.to_vec())
    }
}

pub(crate) fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, TransportError> {
    Ok(serde_json::from_slice(body)?)
}
