pub mod catalog;
pub mod providers;
pub mod selection;
pub mod submission;
pub mod view;

pub use catalog::{CatalogCache, BROWSE_VISIBLE_CAP, MANAGE_VISIBLE_CAP};
pub use selection::{SelectionSet, ToggleOutcome};
pub use submission::{SubmissionController, SubmitState};
