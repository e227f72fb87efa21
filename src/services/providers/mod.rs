/// Backend collaborator abstractions
///
/// The engine never talks HTTP directly; the two traits below are the seams
/// to the remote catalog and scoring services. Controllers receive them as
/// injected `Arc<dyn …>` references, which keeps every surface testable with
/// mocked collaborators.
use crate::{
    error::AppResult,
    models::{AddMovieRequest, Movie, RecommendResponse, SelectedMovie},
};

pub mod rest;

pub use rest::RestProvider;

/// Catalog collaborator: the source of truth for movie entries
///
/// `fetch_catalog` must return the full catalog in one response; there is no
/// pagination. The add/update calls are the manage surface's persistence
/// collaborators and are opaque to the engine beyond their success signal.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Fetch the complete catalog
    async fn fetch_catalog(&self) -> AppResult<Vec<Movie>>;

    /// Create a new catalog entry
    ///
    /// Returns the canonical entry with its backend-assigned id. A backend
    /// rejection (`success: false`) surfaces as `AppError::Rejected` carrying
    /// the backend's message verbatim.
    async fn add_movie(&self, request: &AddMovieRequest) -> AppResult<Movie>;

    /// Overwrite the display rating of an existing entry, keyed by id
    async fn update_rating(&self, id: u64, rating: f64) -> AppResult<()>;
}

/// Scoring collaborator: maps a selection snapshot to recommendations
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait ScoringProvider: Send + Sync {
    /// Score a selection snapshot
    ///
    /// Returns the two result lists (recommendations and avoids) for the
    /// given rated selection.
    async fn recommend(&self, selection: Vec<SelectedMovie>) -> AppResult<RecommendResponse>;
}
