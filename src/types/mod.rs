//! Response types for the Bitbond SDK.
//!
//! Payloads are opaque: the platform's resources decode into either a
//! single [`Item`] or a [`Collection`] of items, passed through unchanged.

pub mod account;
pub mod collection;
pub mod item;

pub use account::AccountType;
pub use collection::Collection;
pub use item::Item;
