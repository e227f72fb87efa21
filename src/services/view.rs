use crate::{
    models::{Movie, RecommendResponse, MAX_SELECTION},
    services::selection::SelectionSet,
};
use serde::Serialize;

/// One tile of the browse grid
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridEntry {
    pub id: u64,
    pub title: String,
    pub poster_url: String,
    pub vote_average: f64,
    /// True iff this movie's id is currently in the selection set
    pub selected: bool,
}

/// One row of the selection panel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelEntry {
    pub id: u64,
    pub title: String,
    pub poster_url: String,
    pub rating: u8,
}

/// The selection panel, with an explicit empty-state marker
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "state", content = "entries")]
pub enum SelectionPanel {
    Empty,
    Entries(Vec<PanelEntry>),
}

/// Render model for the browse surface
///
/// Produced by [`reconcile`]; the rendering layer applies it however it
/// likes (full re-render or diffed patches are functionally equivalent).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrowseView {
    pub grid: Vec<GridEntry>,
    pub panel: SelectionPanel,
    /// Selection counter string, e.g. "(2/5)"
    pub counter: String,
    /// True iff the selection is non-empty
    pub submit_enabled: bool,
}

/// One row of the manage list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManageRow {
    pub id: u64,
    pub title: String,
    /// Source-of-truth display rating, edited in place by the operator
    pub vote_average: f64,
}

/// Render model for the manage surface
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManageView {
    pub rows: Vec<ManageRow>,
}

/// One card in a results list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultCard {
    pub id: u64,
    pub title: String,
    pub poster_url: String,
    /// First two genre tags joined for display, e.g. "Action, Sci-Fi"
    pub genre_line: String,
}

/// Render model for the results surface
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultsPane {
    pub recommendations: Vec<ResultCard>,
    pub avoids: Vec<ResultCard>,
}

/// Reconciles the visible catalog slice and the selection set into the
/// browse render model
///
/// Pure and stateless: identical inputs produce identical output. All DOM
/// or widget writing is the embedding renderer's concern.
pub fn reconcile(visible: &[Movie], selection: &SelectionSet) -> BrowseView {
    let grid = visible
        .iter()
        .map(|movie| GridEntry {
            id: movie.id,
            title: movie.title.clone(),
            poster_url: movie.poster_url.clone(),
            vote_average: movie.vote_average,
            selected: selection.contains(movie.id),
        })
        .collect();

    let panel = if selection.is_empty() {
        SelectionPanel::Empty
    } else {
        SelectionPanel::Entries(
            selection
                .iter()
                .map(|entry| PanelEntry {
                    id: entry.id(),
                    title: entry.movie.title.clone(),
                    poster_url: entry.movie.poster_url.clone(),
                    rating: entry.rating,
                })
                .collect(),
        )
    };

    BrowseView {
        grid,
        panel,
        counter: format!("({}/{})", selection.len(), MAX_SELECTION),
        submit_enabled: !selection.is_empty(),
    }
}

/// Projects the visible catalog slice into the manage render model
pub fn manage_view(visible: &[Movie]) -> ManageView {
    ManageView {
        rows: visible
            .iter()
            .map(|movie| ManageRow {
                id: movie.id,
                title: movie.title.clone(),
                vote_average: movie.vote_average,
            })
            .collect(),
    }
}

/// Shapes a scoring response into the results render model
pub fn results_pane(response: &RecommendResponse) -> ResultsPane {
    ResultsPane {
        recommendations: response.recommendations.iter().map(result_card).collect(),
        avoids: response.avoids.iter().map(result_card).collect(),
    }
}

fn result_card(movie: &Movie) -> ResultCard {
    let genre_line = movie
        .genre_tags()
        .take(2)
        .collect::<Vec<&str>>()
        .join(", ");

    ResultCard {
        id: movie.id,
        title: movie.title.clone(),
        poster_url: movie.poster_url.clone(),
        genre_line,
    }
}
