//! Bitbond SDK - Rust client library for the Bitbond REST API.
//!
//! This crate provides a thin, typed client for the Bitbond peer-to-peer
//! lending platform: listings, bids, investments, profiles, accounts,
//! loans, and webhook subscriptions.
//!
//! # Core Types
//!
//! - [`BitbondClient`] — One async method per API operation
//! - [`ClientConfig`] — Base URL, credential, and transport options
//! - [`Item`], [`Collection`] — The two response shapes, passed through
//!   unchanged from the server
//! - [`Transport`] — Injectable seam over the HTTP mechanism
//!
//! Payloads are opaque: the client never interprets resource fields beyond
//! the Item/Collection shape, and a failed call never yields a partially
//! populated result.
//!
//! # Example
//!
//! ```rust,ignore
//! use bitbond_sdk::{AccountType, BitbondClient, ClientConfig, ListingsQuery};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::new("https://api.bitbond.example/v1", "my-api-key");
//!     let client = BitbondClient::new(config)?;
//!
//!     let listings = client
//!         .listings(&ListingsQuery::new().with_base_currency(["usd"]).with_rating(["A"]))
//!         .await?;
//!     for listing in &listings {
//!         println!("{}", listing);
//!     }
//!
//!     let account = client.account(AccountType::Primary).await?;
//!     println!("{}", account);
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod query;
pub mod types;

pub use client::{
    BitbondClient, ClientConfig, HttpTransport, Transport, TransportRequest, TransportResponse,
};
pub use error::ClientError;
pub use query::{InvestmentsQuery, ListingsQuery, LoansQuery, QueryString};
pub use types::{AccountType, Collection, Item};

// Re-exported for callers building bids and fake transports.
pub use reqwest::Method;
pub use rust_decimal::Decimal;
