use crate::{
    models::AddMovieRequest,
    services::{
        catalog::{CatalogCache, MANAGE_VISIBLE_CAP},
        providers::CatalogProvider,
        view::{self, ManageView},
    },
};
use std::sync::Arc;

/// Controller for the manage surface
///
/// The operator-facing sibling of the browse controller: the same catalog
/// cache (capped at 20 visible rows) without a selection set, plus the
/// add-flow and per-row in-place rating edits. Its bare-id entry point is
/// `update_rating`.
pub struct ManageController {
    provider: Arc<dyn CatalogProvider>,
    catalog: CatalogCache,
    notice: Option<String>,
}

impl ManageController {
    /// Builds the controller and loads its own catalog copy, once
    pub async fn init(provider: Arc<dyn CatalogProvider>) -> Self {
        let mut controller = Self {
            catalog: CatalogCache::new(MANAGE_VISIBLE_CAP),
            provider,
            notice: None,
        };

        if let Err(e) = controller.catalog.load(controller.provider.as_ref()).await {
            tracing::warn!(error = %e, "Manage catalog load failed");
            controller.notice = Some("Could not load the movie catalog.".to_string());
        }

        controller
    }

    /// Updates the text filter and re-renders
    pub fn set_filter(&mut self, text: &str) -> ManageView {
        self.catalog.set_filter(text);
        self.view()
    }

    /// Sends a new entry to the catalog collaborator
    ///
    /// On success the backend's canonical movie (with its assigned id) is
    /// prepended to the local copy. A rejection surfaces the backend's
    /// message verbatim; any other failure surfaces a generic notice. The
    /// local copy is untouched on every failure path.
    pub async fn add(&mut self, title: &str, genres: &str, rating: f64) -> ManageView {
        let request = AddMovieRequest {
            title: title.to_string(),
            genres: genres.to_string(),
            rating,
        };

        match self.provider.add_movie(&request).await {
            Ok(movie) => {
                tracing::info!(id = movie.id, title = %movie.title, "Catalog entry added");
                self.catalog.prepend(movie);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Add movie failed");
                self.notice = Some(match e.rejection_message() {
                    Some(msg) => msg.to_string(),
                    None => "Could not add the movie.".to_string(),
                });
            }
        }

        self.view()
    }

    /// Bare-id entry point: push a new display rating for an entry
    ///
    /// The local copy is not optimistically updated on success: the row's
    /// editable input already shows the value the operator typed. Updates for
    /// different ids are independent and unordered relative to each other.
    pub async fn update_rating(&mut self, id: u64, rating: f64) {
        if let Err(e) = self.provider.update_rating(id, rating).await {
            tracing::warn!(error = %e, id, "Rating update failed");
            self.notice = Some("Failed to update".to_string());
        }
    }

    /// Projects the current state into the manage render model
    pub fn view(&self) -> ManageView {
        view::manage_view(&self.catalog.visible())
    }

    /// Takes the pending user notice, if one was recorded
    pub fn take_notice(&mut self) -> Option<String> {
        self.notice.take()
    }
}
