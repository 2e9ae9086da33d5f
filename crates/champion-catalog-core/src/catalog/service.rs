use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use crate::api::{CatalogSource, DataDragonClient, LoadError};
use crate::config::CatalogConfig;
use crate::lane::{detect_lane, Lane};
use crate::models::{ChampionLabel, ChampionListResponse, ChampionRecord, Participant};
use crate::utils::normalize_champion_name;

use super::LoadHandle;

/// Loaded champion data. Empty (and `loaded_at == None`) until a load succeeds.
#[derive(Debug, Default)]
struct CatalogState {
    /// Internal key -> record
    champions: HashMap<String, Arc<ChampionRecord>>,
    /// Numeric id -> display name
    names_by_id: HashMap<i64, String>,
    data_version: Option<String>,
    loaded_at: Option<DateTime<Utc>>,
}

impl CatalogState {
    /// Build both mappings from one response. Fails without partial results
    /// if any record carries a non-numeric key.
    fn from_response(response: ChampionListResponse) -> Result<Self, LoadError> {
        let mut names_by_id = HashMap::with_capacity(response.data.len());
        for record in response.data.values() {
            names_by_id.insert(record.numeric_id()?, record.name.clone());
        }

        let champions = response
            .data
            .into_iter()
            .map(|(key, record)| (key, Arc::new(record)))
            .collect();

        Ok(Self {
            champions,
            names_by_id,
            data_version: Some(response.version).filter(|v| !v.is_empty()),
            loaded_at: Some(Utc::now()),
        })
    }

    fn is_loaded(&self) -> bool {
        self.loaded_at.is_some()
    }
}

struct Inner<S> {
    config: CatalogConfig,
    source: S,
    state: RwLock<CatalogState>,
    /// Serializes load and reload so concurrent callers share one fetch
    load_lock: Mutex<()>,
}

/// Champion catalog service.
///
/// Clone is cheap: clones share the same loaded state and source.
pub struct ChampionCatalog<S = DataDragonClient> {
    inner: Arc<Inner<S>>,
}

impl<S> Clone for ChampionCatalog<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl ChampionCatalog<DataDragonClient> {
    /// Create a catalog that fetches from Data Dragon over HTTP
    pub fn with_config(config: CatalogConfig) -> Result<Self, LoadError> {
        let source = DataDragonClient::new(&config)?;
        Ok(Self::new(config, source))
    }

    pub fn normalize(name: &str) -> String {
        normalize_champion_name(name)
    }
}

impl<S: CatalogSource> ChampionCatalog<S> {
    pub fn new(config: CatalogConfig, source: S) -> Self {
        Self {
            inner: Arc::new(Inner {
                config,
                source,
                state: RwLock::new(CatalogState::default()),
                load_lock: Mutex::new(()),
            }),
        }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.inner.config
    }

    fn read_state(&self) -> RwLockReadGuard<'_, CatalogState> {
        self.inner.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, CatalogState> {
        self.inner.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    // ===== Loading =====

    /// Fetch the champion list unless it is already loaded.
    ///
    /// On failure the error is logged and returned, and the catalog is left
    /// as it was. Nothing retries automatically.
    pub async fn load(&self) -> Result<(), LoadError> {
        let _guard = self.inner.load_lock.lock().await;
        if self.is_loaded() {
            return Ok(());
        }
        self.fetch_and_store().await
    }

    /// Drop everything and fetch again. Readers see an empty catalog until
    /// the new data arrives, and stay empty if the fetch fails.
    pub async fn reload(&self) -> Result<(), LoadError> {
        let _guard = self.inner.load_lock.lock().await;
        *self.write_state() = CatalogState::default();
        debug!("Champion catalog cleared for reload");
        self.fetch_and_store().await
    }

    /// Start `load` on the current Tokio runtime.
    ///
    /// Returns `None` when called outside a runtime. Dropping the handle
    /// leaves the load running.
    pub fn spawn_load(&self) -> Option<LoadHandle> {
        let runtime = tokio::runtime::Handle::try_current().ok()?;
        let catalog = self.clone();
        let task = runtime.spawn(async move { catalog.load().await });
        Some(LoadHandle::new(task))
    }

    async fn fetch_and_store(&self) -> Result<(), LoadError> {
        let url = self.inner.config.champion_data_url();
        info!(url = %url, "Loading champion catalog");

        let state = match self.inner.source.fetch_champions(&url).await {
            Ok(response) => CatalogState::from_response(response),
            Err(e) => Err(e),
        };

        match state {
            Ok(state) => {
                info!(
                    champions = state.champions.len(),
                    ids = state.names_by_id.len(),
                    version = state.data_version.as_deref().unwrap_or("unknown"),
                    "Champion catalog loaded"
                );
                *self.write_state() = state;
                Ok(())
            }
            Err(e) => {
                error!(url = %url, error = %e, "Failed to load champion catalog");
                Err(e)
            }
        }
    }

    // ===== State =====

    pub fn is_loaded(&self) -> bool {
        self.read_state().is_loaded()
    }

    pub fn champion_count(&self) -> usize {
        self.read_state().champions.len()
    }

    /// When the current data was fetched
    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.read_state().loaded_at
    }

    /// Data Dragon version reported by the loaded document
    pub fn data_version(&self) -> Option<String> {
        self.read_state().data_version.clone()
    }

    // ===== Lookups =====

    /// Display name for a numeric champion id.
    ///
    /// On a cold catalog this logs a warning, starts a background load, and
    /// returns `None` without waiting. A failure of that load is only logged.
    pub fn name_by_id(&self, id: i64) -> Option<String> {
        {
            let state = self.read_state();
            if state.is_loaded() {
                return state.names_by_id.get(&id).cloned();
            }
        }

        warn!(champion_id = id, "Champion catalog not loaded, starting background load");
        if self.spawn_load().is_none() {
            warn!("No async runtime available, champion catalog stays unloaded");
        }
        None
    }

    /// Record for a display name or internal key.
    ///
    /// Unlike `name_by_id`, a cold catalog returns `None` without starting a
    /// load.
    pub fn record_by_name(&self, name: &str) -> Option<Arc<ChampionRecord>> {
        let state = self.read_state();
        if !state.is_loaded() {
            return None;
        }
        state.champions.get(&normalize_champion_name(name)).cloned()
    }

    pub fn record_by_id(&self, id: i64) -> Option<Arc<ChampionRecord>> {
        let name = self.name_by_id(id)?;
        self.record_by_name(&name)
    }

    /// Portrait URL for a champion name. Works without loading and for
    /// names the catalog does not know.
    pub fn image_url(&self, name: &str) -> String {
        self.inner.config.champion_image_url(name)
    }

    /// Most likely lane for a champion, `Lane::Unknown` if it cannot be found
    pub fn lane_for(&self, name: &str) -> Lane {
        self.record_by_name(name)
            .map(|record| detect_lane(&record))
            .unwrap_or(Lane::Unknown)
    }

    // ===== Listings =====

    /// Every loaded record, ordered by internal key. Empty on a cold catalog.
    pub fn champions(&self) -> Vec<Arc<ChampionRecord>> {
        let state = self.read_state();
        let mut champions: Vec<_> = state.champions.values().cloned().collect();
        champions.sort_by(|a, b| a.id.cmp(&b.id));
        champions
    }

    /// Loaded records grouped by detected lane, each group ordered by
    /// internal key. Champions without a confident lane land under
    /// `Lane::Unknown`. Empty on a cold catalog.
    pub fn champions_by_lane(&self) -> HashMap<Lane, Vec<Arc<ChampionRecord>>> {
        let mut by_lane: HashMap<Lane, Vec<Arc<ChampionRecord>>> = HashMap::new();
        for record in self.champions() {
            by_lane.entry(detect_lane(&record)).or_default().push(record);
        }
        by_lane
    }

    // ===== Enrichment =====

    /// Attach champion name, image URL and detected lane to each participant.
    ///
    /// Unknown ids get "Champion{id}", no image and `Lane::Unknown`. On a cold catalog the
    /// participants come back untouched.
    pub fn enrich_participants(&self, mut participants: Vec<Participant>) -> Vec<Participant> {
        let state = self.read_state();
        if !state.is_loaded() {
            warn!(
                participants = participants.len(),
                "Champion catalog not loaded, returning participants unchanged"
            );
            return participants;
        }

        for participant in &mut participants {
            let id = participant.champion_id;
            let label = match state.names_by_id.get(&id) {
                Some(name) => ChampionLabel {
                    display_name: name.clone(),
                    image_url: Some(self.image_url(name)),
                    detected_lane: state
                        .champions
                        .get(&normalize_champion_name(name))
                        .map(|record| detect_lane(record))
                        .unwrap_or(Lane::Unknown),
                },
                None => ChampionLabel {
                    display_name: format!("Champion{}", id),
                    image_url: None,
                    detected_lane: Lane::Unknown,
                },
            };
            participant.apply_label(&label);
        }

        participants
    }
}

// ============================================================================
// Tests
// ============================================================================
