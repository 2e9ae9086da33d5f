//! HTTP access to the Data Dragon CDN.
//!
//! This module provides the `CatalogSource` seam used by the catalog to fetch
//! the champion list, the reqwest-backed `DataDragonClient` implementing it,
//! and the `LoadError` returned when a fetch fails.

pub mod client;
pub mod error;

pub use client::{CatalogSource, DataDragonClient};
pub use error::LoadError;
