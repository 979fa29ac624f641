//! HTTP client implementation.
//!
//! Provides the main client for interacting with the Bitbond REST API.

use std::sync::Arc;

use reqwest::Method;
use rust_decimal::Decimal;
use serde_json::{json, Value};
use tracing::debug;

use super::config::ClientConfig;
use super::transport::{HttpTransport, Transport, TransportRequest, TransportResponse};
use crate::error::ClientError;
use crate::query::{InvestmentsQuery, ListingsQuery, LoansQuery};
use crate::types::{AccountType, Collection, Item};

/// HTTP client for the Bitbond REST API.
///
/// The client is immutable after construction and cheap to clone; callers
/// may issue calls concurrently. Each call performs exactly one request:
/// no retries, no backoff.
#[derive(Debug, Clone)]
pub struct BitbondClient {
    config: ClientConfig,
    transport: Arc<dyn Transport>,
}

impl BitbondClient {
    /// Creates a new client with the given configuration, backed by the
    /// default reqwest transport.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        config.validate()?;
        let transport = Arc::new(HttpTransport::new(&config)?);
        Ok(Self { config, transport })
    }

    /// Creates a new client with an injected transport.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn with_transport(
        config: ClientConfig,
        transport: Arc<dyn Transport>,
    ) -> Result<Self, ClientError> {
        config.validate()?;
        Ok(Self { config, transport })
    }

    /// Returns the client configuration.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Performs one request and enforces the 2xx rule.
    async fn send(
        &self,
        method: Method,
        path: &str,
        query: &str,
        body: Option<Value>,
    ) -> Result<TransportResponse, ClientError> {
        let url = if query.is_empty() {
            format!("{}{}", self.config.base_url, path)
        } else {
            format!("{}{}?{}", self.config.base_url, path, query)
        };

        debug!(%method, path, "sending request");
        let response = self
            .transport
            .send(TransportRequest { method, url, body })
            .await?;
        debug!(path, status = response.status, "received response");

        if !response.is_success() {
            return Err(ClientError::from_status(response.status, response.body));
        }

        Ok(response)
    }

    /// Gets a single resource.
    async fn get_item(&self, path: &str) -> Result<Item, ClientError> {
        self.send(Method::GET, path, "", None).await?.decode()
    }

    /// Gets a collection of resources.
    async fn get_collection(&self, path: &str, query: &str) -> Result<Collection, ClientError> {
        self.send(Method::GET, path, query, None).await?.decode()
    }

    /// Lists investment opportunities.
    ///
    /// A `page` parameter is always sent, falling back to the configured
    /// default when the query sets none.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn listings(&self, query: &ListingsQuery) -> Result<Collection, ClientError> {
        self.get_collection("/listings", &query.encode(self.config.default_page))
            .await
    }

    /// Gets a single listing.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the listing is not found.
    pub async fn listing(&self, listing_id: &str) -> Result<Item, ClientError> {
        self.get_item(&format!("/listings/{}", listing_id)).await
    }

    /// Places a bid on a listing.
    ///
    /// The call succeeds when the server acknowledges with a 2xx status;
    /// no response body is required.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the bid is rejected.
    pub async fn bid(&self, listing_id: &str, amount: Decimal) -> Result<(), ClientError> {
        let body = json!({ "bid": { "amount": amount } });
        self.send(
            Method::POST,
            &format!("/listings/{}/bids", listing_id),
            "",
            Some(body),
        )
        .await?;
        Ok(())
    }

    /// Gets the comments on a listing.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn listing_comments(&self, listing_id: &str) -> Result<Collection, ClientError> {
        self.get_collection(&format!("/listings/{}/comments", listing_id), "")
            .await
    }

    /// Lists the caller's investments.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn investments(&self, query: &InvestmentsQuery) -> Result<Collection, ClientError> {
        self.get_collection("/investments", &query.encode()).await
    }

    /// Gets a single investment.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the investment is not found.
    pub async fn investment(&self, investment_id: &str) -> Result<Item, ClientError> {
        self.get_item(&format!("/investments/{}", investment_id))
            .await
    }

    /// Gets a borrower profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the profile is not found.
    pub async fn profile(&self, profile_id: &str) -> Result<Item, ClientError> {
        self.get_item(&format!("/profiles/{}", profile_id)).await
    }

    /// Gets the loans associated with a profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn profile_loans(&self, profile_id: &str) -> Result<Collection, ClientError> {
        self.get_collection(&format!("/profiles/{}/loans", profile_id), "")
            .await
    }

    /// Gets the investments associated with a profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn profile_investments(&self, profile_id: &str) -> Result<Collection, ClientError> {
        self.get_collection(&format!("/profiles/{}/investments", profile_id), "")
            .await
    }

    /// Gets an account, [`AccountType::Primary`] by default.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn account(&self, account_type: AccountType) -> Result<Item, ClientError> {
        self.get_item(&format!("/accounts/{}", account_type.as_str()))
            .await
    }

    /// Lists the caller's loans.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn loans(&self, query: &LoansQuery) -> Result<Collection, ClientError> {
        self.get_collection("/loans", &query.encode()).await
    }

    /// Gets a single loan.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the loan is not found.
    pub async fn loan(&self, loan_id: &str) -> Result<Item, ClientError> {
        self.get_item(&format!("/loans/{}", loan_id)).await
    }

    /// Lists the registered webhook subscriptions.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn webhooks(&self) -> Result<Collection, ClientError> {
        self.get_collection("/webhooks", "").await
    }

    /// Registers a webhook subscription for the given callback URL.
    ///
    /// Returns the created webhook when the server provides a
    /// representation, `None` when it acknowledges with an empty body.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, or if a non-empty response
    /// body does not decode as a single resource.
    pub async fn create_webhook(&self, callback_url: &str) -> Result<Option<Item>, ClientError> {
        let body = json!({ "webhook": { "callback_url": callback_url } });
        let response = self.send(Method::POST, "/webhooks", "", Some(body)).await?;

        if response.body.trim().is_empty() {
            return Ok(None);
        }
        response.decode().map(Some)
    }

    /// Deletes a webhook subscription.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn delete_webhook(&self, webhook_id: &str) -> Result<(), ClientError> {
        self.send(
            Method::DELETE,
            &format!("/webhooks/{}", webhook_id),
            "",
            None,
        )
        .await?;
        Ok(())
    }
}
