//! HTTP client for the Bitbond REST API.
//!
//! This module provides a type-safe client for interacting with the
//! Bitbond peer-to-peer lending API.
//!
//! # Example
//!
//! ```rust,ignore
//! use bitbond_sdk::client::{BitbondClient, ClientConfig};
//! use bitbond_sdk::query::ListingsQuery;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::new("https://api.bitbond.example/v1", "my-api-key");
//!     let client = BitbondClient::new(config)?;
//!
//!     // List listings in USD
//!     let listings = client
//!         .listings(&ListingsQuery::new().with_base_currency(["usd"]))
//!         .await?;
//!     println!("Found {} listings", listings.len());
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod http;
pub mod transport;

pub use config::ClientConfig;
pub use http::BitbondClient;
pub use transport::{HttpTransport, Transport, TransportRequest, TransportResponse};
