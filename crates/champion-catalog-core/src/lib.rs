//! Champion catalog core library.
//!
//! Fetches the champion list published by the Data Dragon CDN, keeps it in
//! memory, and answers lookups by internal key, display name, or numeric id.
//! Match participants coming from the game client can be enriched with
//! champion names and image URLs.
//!
//! The catalog is an explicit object: build one with a [`CatalogConfig`] and
//! share it by cloning (clones share state).
//!
//! ```no_run
//! use champion_catalog_core::{CatalogConfig, ChampionCatalog};
//!
//! # async fn run() -> Result<(), champion_catalog_core::LoadError> {
//! let catalog = ChampionCatalog::with_config(CatalogConfig::default())?;
//! catalog.load().await?;
//! assert_eq!(catalog.name_by_id(103).as_deref(), Some("Ahri"));
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod catalog;
pub mod config;
pub mod lane;
pub mod models;
pub mod utils;

pub use api::{CatalogSource, DataDragonClient, LoadError};
pub use catalog::{ChampionCatalog, LoadHandle};
pub use config::CatalogConfig;
pub use lane::Lane;
pub use models::{ChampionLabel, ChampionListResponse, ChampionRecord, Participant};
pub use utils::normalize_champion_name;
