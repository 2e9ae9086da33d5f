//! In-memory champion catalog.
//!
//! This module provides the `ChampionCatalog` service, which loads the
//! champion list once and answers lookups from memory, and the `LoadHandle`
//! returned for loads started in the background.
//!
//! Lookups never touch the network. The only implicit load is the cold path
//! of `name_by_id`, which starts a background load and returns immediately.

pub mod handle;
pub mod service;

pub use handle::LoadHandle;
pub use service::ChampionCatalog;
