use crate::services::{
    catalog::{CatalogCache, BROWSE_VISIBLE_CAP},
    providers::{CatalogProvider, ScoringProvider},
    selection::{SelectionSet, ToggleOutcome},
    submission::SubmissionController,
    view::{self, BrowseView, ResultsPane},
};
use std::sync::Arc;

/// Controller for the browse/select surface
///
/// Owns every piece of page state the surface mutates: the catalog copy, the
/// selection set, the submission cycle, the last revealed results pane, and
/// a pending user notice. The rendering layer holds a reference to this
/// controller and calls the bare-id entry points (`toggle`, `rate_by_id`,
/// `remove_by_id`) from its inline controls; no ambient globals exist.
///
/// Every mutating call returns a freshly reconciled [`BrowseView`], so there
/// is exactly one view synchronization per mutation.
pub struct BrowseController {
    catalog: CatalogCache,
    selection: SelectionSet,
    submission: SubmissionController,
    results: Option<ResultsPane>,
    notice: Option<String>,
}

impl BrowseController {
    /// Builds the controller and loads the catalog, once
    ///
    /// On a fetch failure the grid stays empty and a notice is recorded; the
    /// surface remains usable for a later page reload rather than faulting.
    pub async fn init(
        catalog_provider: &dyn CatalogProvider,
        scoring_provider: Arc<dyn ScoringProvider>,
    ) -> Self {
        let mut controller = Self {
            catalog: CatalogCache::new(BROWSE_VISIBLE_CAP),
            selection: SelectionSet::new(),
            submission: SubmissionController::new(scoring_provider),
            results: None,
            notice: None,
        };

        if let Err(e) = controller.catalog.load(catalog_provider).await {
            tracing::warn!(error = %e, "Browse catalog load failed");
            controller.notice = Some("Could not load the movie catalog.".to_string());
        }

        controller
    }

    /// Updates the text filter and re-renders
    pub fn set_filter(&mut self, text: &str) -> BrowseView {
        self.catalog.set_filter(text);
        self.view()
    }

    /// Selects or deselects a movie by id
    ///
    /// The id must come from a previously rendered grid entry; an id absent
    /// from the catalog snapshot (a stale click) is a silent no-op. Hitting
    /// the selection bound records a user-visible notice and changes nothing.
    pub fn toggle(&mut self, id: u64) -> BrowseView {
        match self.catalog.get(id) {
            Some(movie) => {
                let movie = movie.clone();
                if self.selection.toggle(&movie) == ToggleOutcome::LimitReached {
                    self.notice =
                        Some(format!("Limit reached! Max {} movies.", crate::models::MAX_SELECTION));
                }
            }
            None => {
                tracing::debug!(id, "Toggle for unknown id ignored");
            }
        }
        self.view()
    }

    /// Bare-id entry point: overwrite the rating of a selected movie
    ///
    /// Absent ids are ignored, so a rating control that outlives its entry
    /// cannot fault.
    pub fn rate_by_id(&mut self, id: u64, rating: u8) -> BrowseView {
        self.selection.set_rating(id, rating);
        self.view()
    }

    /// Bare-id entry point: drop a movie from the selection
    pub fn remove_by_id(&mut self, id: u64) -> BrowseView {
        self.selection.remove(id);
        self.view()
    }

    /// Starts a scoring submission from the current selection
    ///
    /// Reads a snapshot; never mutates the selection. Returns whether a
    /// request was dispatched (false while empty or mid-flight).
    pub fn submit(&mut self) -> bool {
        self.submission.submit(self.selection.snapshot())
    }

    /// Awaits the in-flight submission and applies its outcome
    ///
    /// Success installs a new results pane; failure records a notice and
    /// leaves the previously revealed pane untouched.
    pub async fn settle_submission(&mut self) -> BrowseView {
        match self.submission.settle().await {
            Some(Ok(response)) => {
                self.results = Some(view::results_pane(&response));
            }
            Some(Err(e)) => {
                tracing::warn!(error = %e, "Scoring submission failed");
                self.notice = Some("Could not fetch recommendations.".to_string());
            }
            None => {}
        }
        self.view()
    }

    /// Reconciles the current state into the browse render model
    pub fn view(&self) -> BrowseView {
        view::reconcile(&self.catalog.visible(), &self.selection)
    }

    /// The last successfully revealed results pane, if any
    pub fn results(&self) -> Option<&ResultsPane> {
        self.results.as_ref()
    }

    /// Takes the pending user notice, if one was recorded
    pub fn take_notice(&mut self) -> Option<String> {
        self.notice.take()
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }
}
