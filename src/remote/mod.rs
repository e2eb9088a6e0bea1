//! Remote collection access: single-page fetching and pagination
//!
//! [`client`] performs one bounded GET per page and maps every failure mode
//! into a [`crate::error::FetchError`] with collection context. [`paginator`]
//! drives the client through a collection's pages, isolating failures to the
//! collection being fetched.

pub mod client;
pub mod paginator;

pub use client::RemoteClient;
pub use paginator::fetch_all_items;
