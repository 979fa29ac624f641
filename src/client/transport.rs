//! Transport abstraction.
//!
//! Provides the injectable seam between the client and the HTTP mechanism
//! performing requests, plus the default reqwest-backed implementation.

use std::fmt;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::config::ClientConfig;
use crate::error::ClientError;

/// A fully prepared request.
///
/// The URL, including the encoded query string, is built by the client
/// layer; the transport only performs the exchange.
#[derive(Debug, Clone)]
pub struct TransportRequest {
    /// HTTP method.
    pub method: Method,

    /// Absolute request URL.
    pub url: String,

    /// JSON request body, when the call has one.
    pub body: Option<Value>,
}

/// The raw outcome of a performed request.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status: u16,

    /// Response body text, possibly empty.
    pub body: String,
}

impl TransportResponse {
    /// Returns true for 2xx statuses.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decodes the body as JSON into the requested type.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Decode`] when the body is not valid JSON or
    /// does not match the expected shape.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, ClientError> {
        serde_json::from_str(&self.body).map_err(|e| ClientError::Decode(e.to_string()))
    }
}

/// Performs a prepared request and returns the raw status and body.
///
/// The default implementation is [`HttpTransport`]; tests inject a fake to
/// observe prepared requests without touching the network.
#[async_trait]
pub trait Transport: fmt::Debug + Send + Sync {
    /// Performs the request.
    ///
    /// # Errors
    ///
    /// Returns an error when the request could not be sent or no response
    /// was received.
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, ClientError>;
}

/// Default transport backed by [`reqwest::Client`].
///
/// The configured auth header, JSON content type, user agent, and timeout
/// are installed as client defaults so every request carries them
/// uniformly. The credential header value is marked sensitive so debug
/// output never prints it.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    /// Builds the transport from the client configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidConfig`] when the auth header name or
    /// credential is not a valid header, or a transport error when the
    /// underlying client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let name = HeaderName::from_bytes(config.auth_header.as_bytes()).map_err(|_| {
            ClientError::InvalidConfig(format!(
                "auth_header is not a valid header name: {}",
                config.auth_header
            ))
        })?;
        let mut value = HeaderValue::from_str(&config.api_key).map_err(|_| {
            ClientError::InvalidConfig("api_key is not a valid header value".to_string())
        })?;
        value.set_sensitive(true);
        headers.insert(name, value);

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .user_agent(&config.user_agent)
            .build()
            .map_err(ClientError::Transport)?;

        Ok(Self { http })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, ClientError> {
        let mut builder = self.http.request(request.method, &request.url);
        if let Some(ref body) = request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(TransportResponse { status, body })
    }
}
