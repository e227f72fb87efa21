use crate::{error::AppResult, models::Movie, services::providers::CatalogProvider};
use chrono::{DateTime, Utc};

/// Display cap for the browse grid
pub const BROWSE_VISIBLE_CAP: usize = 50;

/// Display cap for the manage list
pub const MANAGE_VISIBLE_CAP: usize = 20;

/// In-memory copy of the catalog plus the current text filter
///
/// One type serves both surfaces, parametrized only by its visible cap, so
/// browse and manage cannot drift apart in filter semantics. Filtering is
/// purely local; no network round-trip happens per keystroke.
pub struct CatalogCache {
    movies: Vec<Movie>,
    filter: String,
    visible_cap: usize,
    loaded_at: Option<DateTime<Utc>>,
}

impl CatalogCache {
    pub fn new(visible_cap: usize) -> Self {
        Self {
            movies: Vec::new(),
            filter: String::new(),
            visible_cap,
            loaded_at: None,
        }
    }

    /// Fetches the full catalog from the collaborator, at most once per cache
    /// lifetime
    ///
    /// A repeat call is an ignored no-op. On failure the cache stays empty so
    /// the grid renders its empty state rather than stale data, and the error
    /// propagates for the owning controller to surface.
    pub async fn load(&mut self, provider: &dyn CatalogProvider) -> AppResult<()> {
        if self.loaded_at.is_some() {
            tracing::debug!("Catalog already loaded, ignoring repeat load");
            return Ok(());
        }

        let movies = provider.fetch_catalog().await?;

        tracing::info!(count = movies.len(), "Catalog cache populated");

        self.movies = movies;
        self.loaded_at = Some(Utc::now());
        Ok(())
    }

    /// Stores a case-insensitive substring query over titles
    pub fn set_filter(&mut self, text: &str) {
        self.filter = text.to_lowercase();
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// The filtered slice currently eligible for rendering
    ///
    /// Catalog order is preserved and the result is truncated to the cap,
    /// which is a display limit, not a data limit.
    pub fn visible(&self) -> Vec<Movie> {
        self.movies
            .iter()
            .filter(|m| m.title.to_lowercase().contains(&self.filter))
            .take(self.visible_cap)
            .cloned()
            .collect()
    }

    /// Lookup by id against the fetched snapshot
    pub fn get(&self, id: u64) -> Option<&Movie> {
        self.movies.iter().find(|m| m.id == id)
    }

    /// Splices a backend-canonical entry in front of the local copy
    ///
    /// Used by the manage add-flow once the collaborator has assigned an id.
    pub fn prepend(&mut self, movie: Movie) {
        self.movies.insert(0, movie);
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded_at.is_some()
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}
